// Author: kelexine (https://github.com/kelexine)
// aggregate.rs — Per-file analysis, threshold warnings and batch roll-up

use rayon::prelude::*;
use tracing::debug;

use crate::analyzers::get_analyzer;
use crate::collect::SourceFile;
use crate::error::read_source;
use crate::language::{self, ResolvedLanguage};
use crate::models::{
    Aggregate, BatchReport, CodeReport, FileFailure, FileOutcome, FileReport, FunctionInfo,
    Metrics, Thresholds,
};

/// How a batch is run and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Analyze files on the rayon pool. Output order is unaffected.
    pub parallel: bool,
    /// Drop per-file results from the report, keeping totals.
    pub summary_only: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            summary_only: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Warnings
// ─────────────────────────────────────────────────────────────────────────────

/// Threshold violations: the file warning first, then per function in
/// declaration order (length before complexity).
pub fn generate_warnings(
    metrics: &Metrics,
    functions: &[FunctionInfo],
    thresholds: &Thresholds,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if metrics.total_lines > thresholds.max_file_lines {
        warnings.push(format!(
            "File has {} total lines (exceeds {} line limit)",
            metrics.total_lines, thresholds.max_file_lines
        ));
    }

    for func in functions {
        if func.lines > thresholds.max_function_lines {
            warnings.push(format!(
                "Function '{}' is {} lines (exceeds {} line limit)",
                func.name, func.lines, thresholds.max_function_lines
            ));
        }
        if func.complexity > thresholds.max_complexity {
            warnings.push(format!(
                "Function '{}' has complexity {} (exceeds {})",
                func.name, func.complexity, thresholds.max_complexity
            ));
        }
    }

    warnings
}

// ─────────────────────────────────────────────────────────────────────────────
// Single inputs
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve the language and run its analyzer.
pub fn analyze_code(
    filename: &str,
    code: &str,
    language_override: Option<&str>,
) -> (ResolvedLanguage, Metrics, Vec<FunctionInfo>) {
    let resolved = language::resolve(filename, code, language_override);
    let (metrics, functions) = get_analyzer(resolved.language).analyze(code);
    (resolved, metrics, functions)
}

/// Analyze one file's decoded content.
pub fn analyze_source(
    filename: &str,
    content: &str,
    language_override: Option<&str>,
    thresholds: &Thresholds,
) -> FileReport {
    let (resolved, metrics, functions) = analyze_code(filename, content, language_override);
    let warnings = generate_warnings(&metrics, &functions, thresholds);
    debug!(
        "{}: {} ({} lines, {} functions, {} warnings)",
        filename,
        resolved.name,
        metrics.total_lines,
        functions.len(),
        warnings.len()
    );
    FileReport {
        filename: filename.to_string(),
        language: resolved.name,
        metrics,
        functions,
        warnings,
    }
}

/// Analyze an in-memory snippet with no file name.
pub fn analyze_snippet(
    code: &str,
    language_override: Option<&str>,
    thresholds: &Thresholds,
) -> CodeReport {
    let report = analyze_source("", code, language_override, thresholds);
    let summary = snippet_summary(&report.metrics, report.warnings.len());
    CodeReport {
        language: report.language,
        metrics: report.metrics,
        functions: report.functions,
        warnings: report.warnings,
        summary,
    }
}

/// Read one file and analyze it, or describe why it could not be read.
pub fn analyze_file(
    file: &SourceFile,
    language_override: Option<&str>,
    thresholds: &Thresholds,
) -> FileOutcome {
    match read_source(&file.path) {
        Ok(content) => FileOutcome::Analyzed(analyze_source(
            &file.display_name,
            &content,
            language_override,
            thresholds,
        )),
        Err(e) => {
            debug!("{}: {}", file.display_name, e);
            FileOutcome::Failed(FileFailure {
                filename: file.display_name.clone(),
                error: e.to_string(),
            })
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Batches
// ─────────────────────────────────────────────────────────────────────────────

/// Run `analyze` over every item, on the rayon pool when enabled.
///
/// `par_iter().map().collect()` preserves input order, so results line up
/// with the input whether or not the batch ran in parallel.
pub fn run_batch<T, F>(items: &[T], options: BatchOptions, analyze: F) -> BatchReport
where
    T: Sync,
    F: Fn(&T) -> FileOutcome + Sync + Send,
{
    let outcomes: Vec<FileOutcome> = if options.parallel {
        items.par_iter().map(&analyze).collect()
    } else {
        items.iter().map(&analyze).collect()
    };
    build_report(outcomes, options.summary_only)
}

/// Read and analyze every file. Results keep input order; an unreadable file
/// becomes a failed entry and the rest of the batch carries on.
pub fn analyze_files(
    files: &[SourceFile],
    language_override: Option<&str>,
    thresholds: &Thresholds,
    options: BatchOptions,
) -> BatchReport {
    run_batch(files, options, |f| analyze_file(f, language_override, thresholds))
}

/// Analyze already-decoded `(identifier, content)` pairs.
pub fn analyze_inputs(
    inputs: &[(String, String)],
    thresholds: &Thresholds,
    options: BatchOptions,
) -> BatchReport {
    run_batch(inputs, options, |(name, content)| {
        FileOutcome::Analyzed(analyze_source(name, content, None, thresholds))
    })
}

/// Roll per-file outcomes up into a batch report.
pub fn build_report(outcomes: Vec<FileOutcome>, summary_only: bool) -> BatchReport {
    let mut aggregate = Aggregate::default();
    for outcome in &outcomes {
        match outcome {
            FileOutcome::Analyzed(r) => {
                aggregate.total_lines += r.metrics.total_lines;
                aggregate.total_functions += r.metrics.functions;
                aggregate.total_classes += r.metrics.classes;
                aggregate.total_warnings += r.warnings.len();
            }
            FileOutcome::Failed(_) => aggregate.errors += 1,
        }
    }

    let files_analyzed = outcomes.len();
    BatchReport {
        files_analyzed,
        summary: batch_summary(files_analyzed, aggregate.total_warnings),
        results: (!summary_only).then_some(outcomes),
        aggregate,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Summary text
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

pub fn batch_summary(files: usize, warnings: usize) -> String {
    format!(
        "{} analyzed. {} total.",
        plural(files, "file", "files"),
        plural(warnings, "warning", "warnings")
    )
}

pub fn snippet_summary(metrics: &Metrics, warnings: usize) -> String {
    let mut parts = Vec::new();
    if metrics.functions > 0 {
        parts.push(plural(metrics.functions, "function", "functions"));
    }
    if metrics.classes > 0 {
        parts.push(plural(metrics.classes, "class", "classes"));
    }
    parts.push(format!("{} lines", metrics.total_lines));
    if warnings > 0 {
        parts.push(plural(warnings, "warning", "warnings"));
    }
    format!("{}.", parts.join(", "))
}
