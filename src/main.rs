// code-stats — Source metrics and complexity checks
//
// Author : kelexine (https://github.com/kelexine)
// Version: Dynamic (Cargo.toml)
// License: MIT
//
// Line classification, function discovery, cyclomatic complexity and
// threshold warnings for Python, JavaScript/TypeScript, Go and Rust:
//   • Rayon data-parallelism with deterministic output order
//   • String/comment-aware lexing before any pattern matching
//   • Pre-compiled regex patterns via once_cell::Lazy
//   • JSON request/response mode over stdin for tool integration

mod cli;
mod display;

use std::io::Read;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use code_stats::aggregate::{BatchOptions, analyze_files};
use code_stats::collect::{DEFAULT_MAX_FILES, SourceFile, collect_files};
use code_stats::config::GlobalConfig;
use code_stats::models::Thresholds;
use code_stats::{export, protocol};

/// Settings after layering CLI flags over the global config.
struct RunConfig {
    thresholds: Thresholds,
    max_files: usize,
    parallel: bool,
}

impl RunConfig {
    fn resolve(args: &cli::Args, config: &GlobalConfig) -> Self {
        let base = config.thresholds();
        Self {
            thresholds: Thresholds {
                max_file_lines: args.max_file_lines.unwrap_or(base.max_file_lines),
                max_function_lines: args.max_function_lines.unwrap_or(base.max_function_lines),
                max_complexity: args.max_complexity.unwrap_or(base.max_complexity),
            },
            max_files: args.max_files.or(config.max_files).unwrap_or(DEFAULT_MAX_FILES),
            parallel: !args.no_parallel && config.parallel.unwrap_or(true),
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Expand the positional paths into the files to analyze, in argument order.
fn gather(paths: &[String], max_files: usize) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    for raw in paths {
        let path = Path::new(raw);
        if path.is_file() {
            files.push(SourceFile::from_path(path));
        } else if path.is_dir() {
            let mut found = collect_files(path, max_files)?;
            if paths.len() > 1 {
                for f in &mut found {
                    f.display_name = format!("{}/{}", raw.trim_end_matches('/'), f.display_name);
                }
            }
            if found.is_empty() {
                eprintln!(
                    "{} No supported code files found in {}",
                    "[WARN]".yellow(),
                    raw
                );
            }
            files.extend(found);
        } else {
            anyhow::bail!("Path does not exist: {}", raw);
        }
    }
    Ok(files)
}

fn run_stdin(run: &RunConfig) -> Result<()> {
    let mut input = String::new();
    let response = match std::io::stdin().read_to_string(&mut input) {
        Ok(_) => protocol::handle_request(&input, &run.thresholds, run.parallel, run.max_files),
        Err(e) => serde_json::json!({ "error": format!("Failed to read stdin: {}", e) }),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("Failed to serialize JSON")?
    );
    Ok(())
}

fn run_paths(args: &cli::Args, run: &RunConfig) -> Result<()> {
    let paths = if args.paths.is_empty() {
        vec![".".to_string()]
    } else {
        args.paths.clone()
    };

    let files = gather(&paths, run.max_files)?;
    debug!("analyzing {} files (parallel: {})", files.len(), run.parallel);

    let report = analyze_files(
        &files,
        args.language.as_deref(),
        &run.thresholds,
        BatchOptions {
            parallel: run.parallel,
            summary_only: args.summary,
        },
    );

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize JSON")?
        );
    } else {
        display::display_batch(&report, &run.thresholds);
    }

    if let Some(ref output_file) = args.export {
        export::export(&report, output_file)?;
    }
    Ok(())
}

fn main() {
    let args = cli::Args::parse();
    init_tracing(args.verbose);

    let config = GlobalConfig::load();
    let run = RunConfig::resolve(&args, &config);

    let result = if args.stdin {
        run_stdin(&run)
    } else {
        run_paths(&args, &run)
    };

    if let Err(e) = result {
        eprintln!("{} {}", "[ERROR]".red().bold(), e);
        process::exit(1);
    }
}
