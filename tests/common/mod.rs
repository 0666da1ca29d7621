// tests/common/mod.rs — Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
pub use tempfile::TempDir;

/// Resolve the compiled binary from the workspace target directory
pub fn code_stats_bin() -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("current_exe")
        .parent()
        .expect("parent")
        .to_path_buf();

    if path.ends_with("deps") {
        path.pop();
    }
    path.join(format!("code-stats{}", std::env::consts::EXE_SUFFIX))
}

fn command() -> Command {
    let mut cmd = Command::new(code_stats_bin());
    // Keep results independent of any config on the machine running the tests.
    let empty_config = std::env::temp_dir().join("code-stats-tests-no-config");
    cmd.env("XDG_CONFIG_HOME", &empty_config)
        .env("HOME", &empty_config)
        .env("NO_COLOR", "1");
    cmd
}

/// Execute the code-stats binary with given arguments
pub fn run_code_stats(args: &[&str]) -> Output {
    command()
        .args(args)
        .output()
        .expect("Failed to execute code-stats binary")
}

/// Execute `code-stats --stdin`, feeding `input` on stdin.
pub fn run_stdin(input: &str) -> Output {
    let mut child = command()
        .arg("--stdin")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn code-stats binary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for code-stats")
}

/// Parse a command's stdout as JSON.
pub fn stdout_json(out: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&out.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{stdout}"))
}

/// Create a temporary directory with a set of named files and content.
pub fn make_fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("TempDir::new");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
    dir
}
