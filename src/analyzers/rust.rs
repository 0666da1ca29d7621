// Author: kelexine (https://github.com/kelexine)
// analyzers/rust.rs — Rust fn, struct and impl detection

use super::{Analyzer, SourceLines, scan_brace_functions};
use crate::language::Language;
use crate::models::{FunctionInfo, Metrics};
use once_cell::sync::Lazy;
use regex::Regex;

// pub / pub(crate) / const / async / unsafe / extern "C" fn name( or name<
static RE_RUST_FN: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r#"^\s*(?:pub(?:\s*\([^)]*\))?\s+)?(?:(?:const|async|unsafe|extern(?:\s+"[^"]*")?)\s+)*fn\s+([A-Za-z_]\w*)\s*[<(]"#)
            .unwrap(),
    ]
});

static RE_RUST_STRUCT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:pub(?:\s*\([^)]*\))?\s+)?struct\s+\w+").unwrap()
});

static RE_RUST_IMPL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:unsafe\s+)?impl\b(?:\s*<[^>]*>)?\s+\w+").unwrap()
});

pub struct RustAnalyzer;

impl Analyzer for RustAnalyzer {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn analyze(&self, content: &str) -> (Metrics, Vec<FunctionInfo>) {
        let source = SourceLines::new(content, Language::Rust);
        let functions = scan_brace_functions(&source, Language::Rust, &RE_RUST_FN, &[]);
        let classes = source.count_matches(&RE_RUST_STRUCT) + source.count_matches(&RE_RUST_IMPL);
        let metrics = source.metrics(functions.len(), classes);
        (metrics, functions)
    }
}
