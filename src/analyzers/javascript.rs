// Author: kelexine (https://github.com/kelexine)
// analyzers/javascript.rs — JavaScript/TypeScript function and class detection

use super::{Analyzer, SourceLines, scan_brace_functions};
use crate::language::Language;
use crate::models::{FunctionInfo, Metrics};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_JS_FN: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // function declarations (incl. generators and TS generics)
        Regex::new(r"^\s*(?:export\s+(?:default\s+)?)?(?:async\s+)?function\s*\*?\s*([A-Za-z_$][\w$]*)\s*[<(]").unwrap(),
        // const f = function / (..) => / x =>
        Regex::new(r"^\s*(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*(?::[^=]+)?=\s*(?:async\s+)?(?:function\b|\([^)]*\)\s*(?::[^=]+)?=>|[A-Za-z_$][\w$]*\s*=>)").unwrap(),
        // method shorthand, with optional TS modifiers and return type
        Regex::new(r"^\s*(?:(?:public|private|protected|static|readonly|override|abstract|async|get|set)\s+)*([A-Za-z_$][\w$]*)\s*(?:<[^>]*>)?\s*\([^)]*\)\s*(?::\s*[^{]+)?\{").unwrap(),
    ]
});

static RE_JS_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bclass\s+[A-Za-z_$]").unwrap());

/// Control-flow keywords the method-shorthand pattern would otherwise report.
const NOT_METHODS: &[&str] = &[
    "if", "else", "for", "while", "switch", "catch", "with", "do", "return", "throw", "new",
    "delete", "typeof", "void", "in", "of", "function",
];

/// Shared by JavaScript and TypeScript; only the reported language differs.
pub struct JavascriptAnalyzer {
    language: Language,
}

impl JavascriptAnalyzer {
    pub const JAVASCRIPT: Self = Self {
        language: Language::JavaScript,
    };
    pub const TYPESCRIPT: Self = Self {
        language: Language::TypeScript,
    };
}

impl Analyzer for JavascriptAnalyzer {
    fn language(&self) -> Language {
        self.language
    }

    fn analyze(&self, content: &str) -> (Metrics, Vec<FunctionInfo>) {
        let source = SourceLines::new(content, self.language);
        let functions = scan_brace_functions(&source, self.language, &RE_JS_FN, NOT_METHODS);
        let classes = source.count_matches(&RE_JS_CLASS);
        let metrics = source.metrics(functions.len(), classes);
        (metrics, functions)
    }
}
