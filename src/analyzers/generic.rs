// Author: kelexine (https://github.com/kelexine)
// analyzers/generic.rs — Fallback for languages without a grammar

use super::{Analyzer, SourceLines};
use crate::language::Language;
use crate::models::{FunctionInfo, Metrics};

/// Total and blank lines only. Comments are unknown, so every non-blank line
/// is code; no functions, classes or complexity.
pub struct GenericAnalyzer;

impl Analyzer for GenericAnalyzer {
    fn language(&self) -> Language {
        Language::Generic
    }

    fn analyze(&self, content: &str) -> (Metrics, Vec<FunctionInfo>) {
        let source = SourceLines::new(content, Language::Generic);
        let metrics = Metrics::from_counts(source.total(), source.blank(), 0, 0, 0);
        (metrics, Vec::new())
    }
}
