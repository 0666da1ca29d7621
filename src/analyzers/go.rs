// Author: kelexine (https://github.com/kelexine)
// analyzers/go.rs — Go function and struct detection

use super::{Analyzer, SourceLines, scan_brace_functions};
use crate::language::Language;
use crate::models::{FunctionInfo, Metrics};
use once_cell::sync::Lazy;
use regex::Regex;

// func Name(            — regular function
// func (r *Recv) Name(  — method with receiver
// func Map[T any](      — generic function
static RE_GO_FN: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![Regex::new(r"^\s*func\s+(?:\([^)]*\)\s*)?([A-Za-z_]\w*)\s*[\[(]").unwrap()]
});

static RE_GO_STRUCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btype\s+\w+\s+struct\b").unwrap());

pub struct GoAnalyzer;

impl Analyzer for GoAnalyzer {
    fn language(&self) -> Language {
        Language::Go
    }

    fn analyze(&self, content: &str) -> (Metrics, Vec<FunctionInfo>) {
        let source = SourceLines::new(content, Language::Go);
        let functions = scan_brace_functions(&source, Language::Go, &RE_GO_FN, &[]);
        let classes = source.count_matches(&RE_GO_STRUCT);
        let metrics = source.metrics(functions.len(), classes);
        (metrics, functions)
    }
}
