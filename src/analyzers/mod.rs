// Author: kelexine (https://github.com/kelexine)
// analyzers/mod.rs — Analyzer trait, dispatch and shared scanning helpers

pub mod generic;
pub mod go;
pub mod javascript;
pub mod python;
pub mod rust;

use regex::Regex;

use crate::complexity::complexity_of;
use crate::language::Language;
use crate::lexer::{locate_body, split_lines, strip_lines};
use crate::models::{FunctionInfo, Metrics};

/// One implementation per language; each scans a whole file once.
pub trait Analyzer: Send + Sync {
    fn language(&self) -> Language;
    fn analyze(&self, content: &str) -> (Metrics, Vec<FunctionInfo>);
}

pub fn get_analyzer(language: Language) -> &'static dyn Analyzer {
    match language {
        Language::Python => &python::PythonAnalyzer,
        Language::JavaScript => &javascript::JavascriptAnalyzer::JAVASCRIPT,
        Language::TypeScript => &javascript::JavascriptAnalyzer::TYPESCRIPT,
        Language::Go => &go::GoAnalyzer,
        Language::Rust => &rust::RustAnalyzer,
        Language::Generic => &generic::GenericAnalyzer,
    }
}

/// A file split into physical lines, alongside the stripped form of every
/// line with block-comment state carried through the whole file.
pub struct SourceLines<'a> {
    pub raw: Vec<&'a str>,
    pub clean: Vec<String>,
}

impl<'a> SourceLines<'a> {
    pub fn new(content: &'a str, language: Language) -> Self {
        let raw = split_lines(content);
        let clean = strip_lines(raw.iter().copied(), language);
        Self { raw, clean }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.raw.len()
    }

    pub fn blank(&self) -> usize {
        self.raw.iter().filter(|l| l.trim().is_empty()).count()
    }

    /// Non-blank lines with nothing left once comments are removed.
    ///
    /// A blank line inside a block comment stays blank, so the two counts are
    /// disjoint and `code_lines` can never go negative.
    pub fn comments(&self) -> usize {
        self.raw
            .iter()
            .zip(&self.clean)
            .filter(|(raw, clean)| !raw.trim().is_empty() && clean.trim().is_empty())
            .count()
    }

    /// Count `re` hits over the stripped lines.
    pub fn count_matches(&self, re: &Regex) -> usize {
        self.clean.iter().map(|l| re.find_iter(l).count()).sum()
    }

    pub fn metrics(&self, functions: usize, classes: usize) -> Metrics {
        Metrics::from_counts(self.total(), self.blank(), self.comments(), functions, classes)
    }
}

/// Shared header scan for brace-delimited languages.
///
/// Every stripped line is tried against `headers` in order; the first match
/// whose captured name is not in `skip` becomes a function whose body is
/// located by brace balance.
pub fn scan_brace_functions(
    source: &SourceLines<'_>,
    language: Language,
    headers: &[Regex],
    skip: &[&str],
) -> Vec<FunctionInfo> {
    let mut functions = Vec::new();

    for (i, line) in source.clean.iter().enumerate() {
        let name = headers.iter().find_map(|re| {
            re.captures(line)
                .and_then(|cap| cap.get(1))
                .map(|m| m.as_str())
                .filter(|name| !skip.contains(name))
        });
        let Some(name) = name else { continue };

        let lines = locate_body(&source.raw, i, language);
        let body = &source.raw[i..(i + lines).min(source.raw.len())];
        functions.push(FunctionInfo {
            name: name.to_string(),
            lines,
            start_line: i + 1,
            complexity: complexity_of(body, language),
        });
    }

    functions
}
