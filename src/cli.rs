// Author: kelexine (https://github.com/kelexine)
// cli.rs — CLI argument parsing via clap derive

use clap::{ArgAction, Parser};

/// code-stats — Source metrics and complexity checks
///
/// Counts lines, finds functions and classes, scores cyclomatic complexity
/// and flags anything past the configured thresholds.
///
/// Author: kelexine (https://github.com/kelexine)
#[derive(Parser, Debug)]
#[command(
    name = "code-stats",
    version,
    author = "kelexine <https://github.com/kelexine>",
    about = "Source metrics — lines, functions, classes, complexity, threshold warnings",
    after_help = "\
EXAMPLES:
  code-stats                         Analyze the current directory
  code-stats src/ lib/main.py        Analyze directories and single files
  code-stats --json src/             Emit the batch report as JSON
  code-stats --summary src/          Totals only, no per-file results
  code-stats -l python script        Force the language of extensionless files
  code-stats --max-complexity 5      Tighter complexity threshold
  code-stats -e report.csv src/      Export one row per function
  echo '{\"code\": \"def f(): pass\"}' | code-stats --stdin

SUPPORTED LANGUAGES:
  python, javascript, typescript, go, rust

CONFIG:
  <config_dir>/code-stats/config.toml may set max_file_lines,
  max_function_lines, max_complexity, max_files and parallel.
  Command-line flags take precedence."
)]
pub struct Args {
    /// Files or directories to analyze (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Force the language instead of detecting it
    #[arg(short = 'l', long = "language", value_name = "LANG")]
    pub language: Option<String>,

    /// Warn for files with more total lines than this
    #[arg(long = "max-file-lines", value_name = "N")]
    pub max_file_lines: Option<usize>,

    /// Warn for functions with more lines than this
    #[arg(long = "max-function-lines", value_name = "N")]
    pub max_function_lines: Option<usize>,

    /// Warn for functions with higher cyclomatic complexity than this
    #[arg(long = "max-complexity", value_name = "N")]
    pub max_complexity: Option<usize>,

    /// Maximum files collected per directory
    #[arg(long = "max-files", value_name = "N")]
    pub max_files: Option<usize>,

    /// Print the report as JSON instead of the colored text view
    #[arg(long = "json")]
    pub json: bool,

    /// Report totals only, without per-file results
    #[arg(long = "summary")]
    pub summary: bool,

    /// Read a JSON request from stdin and answer with JSON on stdout
    #[arg(long = "stdin", conflicts_with = "paths")]
    pub stdin: bool,

    /// Export results to file (.json, .jsonl, or .csv)
    #[arg(short = 'e', long = "export", value_name = "FILE")]
    pub export: Option<String>,

    /// Disable parallel file processing
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
