// Author: kelexine (https://github.com/kelexine)
// models.rs — Core data structures for the metrics engine

use serde::{Deserialize, Serialize};

/// File-level line and declaration counts.
///
/// `code_lines` is always derived, never stored independently, so
/// `code_lines == total_lines - blank_lines - comment_lines` holds by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub total_lines: usize,
    pub code_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub functions: usize,
    pub classes: usize,
}

impl Metrics {
    pub fn from_counts(
        total_lines: usize,
        blank_lines: usize,
        comment_lines: usize,
        functions: usize,
        classes: usize,
    ) -> Self {
        // Blank and comment lines are disjoint, but clamp anyway so a
        // miscount can never wrap.
        let comment_lines = comment_lines.min(total_lines.saturating_sub(blank_lines));
        Self {
            total_lines,
            code_lines: total_lines - blank_lines.min(total_lines) - comment_lines,
            blank_lines: blank_lines.min(total_lines),
            comment_lines,
            functions,
            classes,
        }
    }
}

/// A single detected function or method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    /// Span in physical lines, header included. Always ≥ 1.
    pub lines: usize,
    /// 1-based line of the header.
    pub start_line: usize,
    /// Cyclomatic complexity: 1 + detected branch points.
    pub complexity: usize,
}

/// Caller-supplied limits that turn metrics into warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub max_file_lines: usize,
    pub max_function_lines: usize,
    pub max_complexity: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_file_lines: 300,
            max_function_lines: 50,
            max_complexity: 10,
        }
    }
}

/// Analysis of one readable file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub filename: String,
    pub language: String,
    pub metrics: Metrics,
    pub functions: Vec<FunctionInfo>,
    pub warnings: Vec<String>,
}

/// A file that could not be read. Represented as data so a batch keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub filename: String,
    pub error: String,
}

/// Per-file entry of a batch, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileOutcome {
    Analyzed(FileReport),
    Failed(FileFailure),
}

impl FileOutcome {
    pub fn filename(&self) -> &str {
        match self {
            FileOutcome::Analyzed(r) => &r.filename,
            FileOutcome::Failed(f) => &f.filename,
        }
    }

    pub fn report(&self) -> Option<&FileReport> {
        match self {
            FileOutcome::Analyzed(r) => Some(r),
            FileOutcome::Failed(_) => None,
        }
    }
}

/// Totals across a batch. Failed files only bump `errors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Aggregate {
    pub total_lines: usize,
    pub total_functions: usize,
    pub total_classes: usize,
    pub total_warnings: usize,
    pub errors: usize,
}

/// The multi-file result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub files_analyzed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<FileOutcome>>,
    pub summary: String,
    pub aggregate: Aggregate,
}

impl BatchReport {
    /// Per-file results; empty in summary-only mode.
    pub fn outcomes(&self) -> &[FileOutcome] {
        self.results.as_deref().unwrap_or(&[])
    }
}

/// Result for a single in-memory snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeReport {
    pub language: String,
    pub metrics: Metrics,
    pub functions: Vec<FunctionInfo>,
    pub warnings: Vec<String>,
    pub summary: String,
}
