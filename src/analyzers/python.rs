// Author: kelexine (https://github.com/kelexine)
// analyzers/python.rs — Python metrics, def detection and indentation bodies

use super::{Analyzer, SourceLines};
use crate::complexity::complexity_of;
use crate::language::Language;
use crate::lexer::{blocks::indent_width, locate_python_body};
use crate::models::{FunctionInfo, Metrics};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_PY_DEF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:async\s+)?def\s+(?P<name>[A-Za-z_]\w*)\s*[\[(]").unwrap()
});

static RE_PY_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*class\s+\w+").unwrap());

pub struct PythonAnalyzer;

impl Analyzer for PythonAnalyzer {
    fn language(&self) -> Language {
        Language::Python
    }

    fn analyze(&self, content: &str) -> (Metrics, Vec<FunctionInfo>) {
        let source = SourceLines::new(content, Language::Python);
        let mut functions = Vec::new();
        let mut classes = 0;

        for (i, line) in source.clean.iter().enumerate() {
            if RE_PY_CLASS.is_match(line) {
                classes += 1;
            }

            let Some(cap) = RE_PY_DEF.captures(line) else {
                continue;
            };
            let name = cap.name("name").map_or("?", |n| n.as_str()).to_string();
            let indent = indent_width(source.raw[i]);
            let end = locate_python_body(&source.raw, i, indent);
            let body = &source.raw[i..=end];

            functions.push(FunctionInfo {
                name,
                lines: end - i + 1,
                start_line: i + 1,
                complexity: complexity_of(body, Language::Python),
            });
        }

        let metrics = source.metrics(functions.len(), classes);
        (metrics, functions)
    }
}
