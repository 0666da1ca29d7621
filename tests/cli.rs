// tests/cli.rs — Testing CLI flags, outputs, and errors

mod common;
use common::{make_fixture, run_code_stats, stdout_json};

#[test]
fn test_basic_scan_exits_zero() {
    let fixture = make_fixture(&[
        ("main.rs", "fn main() {\n    println!(\"hello\");\n}\n"),
        ("lib.py", "def add(a, b):\n    return a + b\n"),
    ]);

    let out = run_code_stats(&[fixture.path().to_str().unwrap()]);
    assert!(out.status.success(), "code-stats exited non-zero: {:?}", out.status);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("main.rs"), "missing file header:\n{}", stdout);
    assert!(stdout.contains("2 files analyzed. 0 warnings total."), "{}", stdout);
}

#[test]
fn test_json_report_shape() {
    let fixture = make_fixture(&[
        ("b.go", "package b\n\nfunc B() {\n}\n"),
        ("a.ts", "export function a(x?: number) {\n  return x ?? 0;\n}\n"),
        ("notes.md", "# not code\n"),
    ]);

    let out = run_code_stats(&[fixture.path().to_str().unwrap(), "--json"]);
    assert!(out.status.success());
    let v = stdout_json(&out);
    assert_eq!(v["files_analyzed"], 2);
    assert_eq!(v["results"][0]["filename"], "a.ts");
    assert_eq!(v["results"][0]["language"], "typescript");
    assert_eq!(v["results"][0]["functions"][0]["complexity"], 2);
    assert_eq!(v["results"][1]["filename"], "b.go");
    assert_eq!(v["aggregate"]["total_functions"], 2);
    assert_eq!(v["aggregate"]["errors"], 0);
}

#[test]
fn test_threshold_flags_produce_warnings() {
    let fixture = make_fixture(&[(
        "w.py",
        "def w(a, b):\n    if a and b:\n        return 1\n    return 0\n",
    )]);

    let out = run_code_stats(&[
        fixture.path().join("w.py").to_str().unwrap(),
        "--json",
        "--max-complexity",
        "2",
        "--max-function-lines",
        "3",
        "--max-file-lines",
        "3",
    ]);
    let v = stdout_json(&out);
    let warnings: Vec<_> = v["results"][0]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        warnings,
        vec![
            "File has 5 total lines (exceeds 3 line limit)",
            "Function 'w' is 4 lines (exceeds 3 line limit)",
            "Function 'w' has complexity 3 (exceeds 2)",
        ]
    );
    assert_eq!(v["summary"], "1 file analyzed. 3 warnings total.");
}

#[test]
fn test_summary_flag_omits_results() {
    let fixture = make_fixture(&[("x.rs", "fn x() {}\n")]);
    let out = run_code_stats(&[fixture.path().to_str().unwrap(), "--json", "--summary"]);
    let v = stdout_json(&out);
    assert!(v.get("results").is_none());
    assert_eq!(v["aggregate"]["total_lines"], 2);
}

#[test]
fn test_language_override_for_extensionless_file() {
    let fixture = make_fixture(&[("script", "def run():\n    pass\n")]);
    let target = fixture.path().join("script");

    let out = run_code_stats(&[target.to_str().unwrap(), "--json", "-l", "py"]);
    let v = stdout_json(&out);
    assert_eq!(v["results"][0]["filename"], "script");
    assert_eq!(v["results"][0]["language"], "python");
    assert_eq!(v["results"][0]["metrics"]["functions"], 1);
}

#[test]
fn test_skip_dirs_and_max_files() {
    let fixture = make_fixture(&[
        ("node_modules/dep/index.js", "function dep() {}\n"),
        ("src/a.js", "function a() {}\n"),
        ("src/b.js", "function b() {}\n"),
        ("src/c.js", "function c() {}\n"),
    ]);

    let out = run_code_stats(&[fixture.path().to_str().unwrap(), "--json", "--max-files", "2"]);
    let v = stdout_json(&out);
    assert_eq!(v["files_analyzed"], 2);
    assert_eq!(v["results"][0]["filename"], "src/a.js");
    assert_eq!(v["results"][1]["filename"], "src/b.js");
}

#[test]
fn test_no_parallel_matches_parallel() {
    let fixture = make_fixture(&[
        ("a.py", "def a():\n    return 1\n"),
        ("b.rs", "fn b() {}\n"),
        ("c.go", "package c\n"),
    ]);
    let dir = fixture.path().to_str().unwrap();

    let parallel = stdout_json(&run_code_stats(&[dir, "--json"]));
    let serial = stdout_json(&run_code_stats(&[dir, "--json", "--no-parallel"]));
    assert_eq!(parallel, serial);
}

#[test]
fn test_missing_path_is_fatal() {
    let out = run_code_stats(&["/definitely/not/a/real/path"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[ERROR]"), "{}", stderr);
    assert!(stderr.contains("Path does not exist"), "{}", stderr);
}

#[test]
fn test_help_flag() {
    let out = run_code_stats(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--max-complexity"));
    assert!(stdout.contains("--stdin"));
}
