// Author: kelexine (https://github.com/kelexine)
// display/mod.rs — Colored terminal report for a batch

use colored::*;

use code_stats::models::{
    BatchReport, FileOutcome, FileReport, FunctionInfo, Metrics, Thresholds,
};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn fmt_num(n: usize) -> String {
    // Thousands-separator formatting
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let tail: String = s.chars().rev().take(max.saturating_sub(3)).collect();
        format!("...{}", tail.chars().rev().collect::<String>())
    }
}

fn colored_complexity(value: usize, limit: usize) -> ColoredString {
    let cell = format!("{:>12}", value);
    if value > limit {
        cell.red()
    } else if value * 2 > limit {
        cell.yellow()
    } else {
        cell.green()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

fn print_metrics(metrics: &Metrics) {
    println!(
        "  Lines: {} total, {} code, {} comment, {} blank",
        fmt_num(metrics.total_lines),
        fmt_num(metrics.code_lines),
        fmt_num(metrics.comment_lines),
        fmt_num(metrics.blank_lines),
    );
    println!(
        "  Functions: {}, Classes: {}",
        fmt_num(metrics.functions),
        fmt_num(metrics.classes)
    );
}

fn print_functions(functions: &[FunctionInfo], thresholds: &Thresholds) {
    if functions.is_empty() {
        return;
    }
    println!();
    println!(
        "    {:<42} {:>8} {:>8} {:>12}",
        "Function", "Line", "Lines", "Complexity"
    );
    println!("    {}", "-".repeat(73));
    for func in functions {
        let lines = format!("{:>8}", fmt_num(func.lines));
        let lines = if func.lines > thresholds.max_function_lines {
            lines.red().to_string()
        } else {
            lines
        };
        println!(
            "    {:<42} {:>8} {} {}",
            truncate(&func.name, 40),
            func.start_line,
            lines,
            colored_complexity(func.complexity, thresholds.max_complexity)
        );
    }
}

fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!();
    for w in warnings {
        println!("  {} {}", "[WARN]".yellow(), w);
    }
}

fn print_file(report: &FileReport, thresholds: &Thresholds) {
    println!(
        "{} {}",
        report.filename.cyan().bold(),
        format!("[{}]", report.language).bright_black()
    );
    print_metrics(&report.metrics);
    print_functions(&report.functions, thresholds);
    print_warnings(&report.warnings);
    println!();
}

// ─────────────────────────────────────────────────────────────────────────────
// Public display functions
// ─────────────────────────────────────────────────────────────────────────────

pub fn display_batch(report: &BatchReport, thresholds: &Thresholds) {
    println!();
    for outcome in report.outcomes() {
        match outcome {
            FileOutcome::Analyzed(file) => print_file(file, thresholds),
            FileOutcome::Failed(failure) => {
                println!("{} {}", failure.filename.cyan().bold(), "[error]".red());
                println!("  {} {}", "[ERROR]".red(), failure.error);
                println!();
            }
        }
    }

    let agg = &report.aggregate;
    println!("{}", "=".repeat(70));
    println!(
        "{} {}",
        "[SUCCESS]".green().bold(),
        report.summary.as_str().bold()
    );
    println!("{} Total Lines: {}", "[INFO]   ".blue(), fmt_num(agg.total_lines));
    println!(
        "{} Functions/Methods: {}",
        "[INFO]   ".blue(),
        fmt_num(agg.total_functions)
    );
    println!(
        "{} Classes/Structs:   {}",
        "[INFO]   ".blue(),
        fmt_num(agg.total_classes)
    );
    if agg.total_warnings > 0 {
        println!(
            "{} {} threshold warnings",
            "[WARN]   ".yellow(),
            fmt_num(agg.total_warnings)
        );
    }
    if agg.errors > 0 {
        println!(
            "{} {} files could not be read",
            "[ERROR]  ".red(),
            fmt_num(agg.errors)
        );
    }
    println!("{}", "=".repeat(70));
    println!();
}
