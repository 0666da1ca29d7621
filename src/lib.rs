// Author: kelexine (https://github.com/kelexine)
// lib.rs — Source metrics engine: line classification, function discovery,
// cyclomatic complexity and threshold warnings for Python, JavaScript,
// TypeScript, Go and Rust.

pub mod aggregate;
pub mod analyzers;
pub mod collect;
pub mod complexity;
pub mod config;
pub mod error;
pub mod export;
pub mod language;
pub mod lexer;
pub mod models;
pub mod protocol;

pub use aggregate::{
    BatchOptions, analyze_code, analyze_file, analyze_files, analyze_inputs, analyze_snippet,
    analyze_source, generate_warnings,
};
pub use collect::{SourceFile, collect_files};
pub use error::SourceError;
pub use language::{Language, ResolvedLanguage};
pub use models::{
    Aggregate, BatchReport, CodeReport, FileFailure, FileOutcome, FileReport, FunctionInfo,
    Metrics, Thresholds,
};
