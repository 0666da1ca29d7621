// Author: kelexine (https://github.com/kelexine)
// complexity.rs — Branch-point counting per language grammar
//
// Each keyword / operator occurrence on a stripped line is one decision point.
// The caller adds the base path (1) for the function itself.

use fancy_regex::Regex;
use once_cell::sync::Lazy;

use crate::language::Language;
use crate::lexer::{ScanState, strip};

// ─────────────────────────────────────────────────────────────────────────────
// Pre-compiled branch patterns, one per grammar
// ─────────────────────────────────────────────────────────────────────────────

static RE_PYTHON_BRANCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:if|elif|for|while|except|and|or)\b").unwrap()
});

// The bare `?` only counts as a ternary when it is not the start of `?.`
// (optional chaining), `??` (nullish, matched whole by the last alternative),
// `?:` (optional parameter / property) or `?(` (optional method signature).
static RE_JS_BRANCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:if|else\s+if|for|while|case|catch)\b|\?(?![?.:(])|&&|\|\||\?\?").unwrap()
});

static RE_GO_BRANCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:if|for|case|select)\b|&&|\|\|").unwrap()
});

static RE_RUST_BRANCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:if|else\s+if|for|while|loop|match)\b|&&|\|\|").unwrap()
});

fn branch_pattern(language: Language) -> Option<&'static Regex> {
    match language {
        Language::Python => Some(&*RE_PYTHON_BRANCH),
        Language::JavaScript | Language::TypeScript => Some(&*RE_JS_BRANCH),
        Language::Go => Some(&*RE_GO_BRANCH),
        Language::Rust => Some(&*RE_RUST_BRANCH),
        Language::Generic => None,
    }
}

/// Count decision points in a function body.
///
/// Lines are stripped with block-comment state threaded through the body, so
/// full-line comments, comment tails and string contents contribute nothing.
pub fn count_branches<S: AsRef<str>>(body_lines: &[S], language: Language) -> usize {
    let Some(pattern) = branch_pattern(language) else {
        return 0;
    };

    let mut state = ScanState::default();
    let mut branches = 0;
    for line in body_lines {
        let (clean, next) = strip(line.as_ref().trim(), language, state);
        state = next;
        if clean.trim().is_empty() {
            continue;
        }
        branches += count_matches(pattern, &clean);
    }
    branches
}

/// Complexity of a body: base path plus its branch points.
#[inline]
pub fn complexity_of<S: AsRef<str>>(body_lines: &[S], language: Language) -> usize {
    1 + count_branches(body_lines, language)
}

fn count_matches(pattern: &Regex, text: &str) -> usize {
    // A match error means the backtrack limit was hit on a pathological line;
    // whatever matched before that still counts.
    pattern.find_iter(text).map_while(Result::ok).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branches(src: &str, lang: Language) -> usize {
        let lines: Vec<&str> = src.lines().collect();
        count_branches(&lines, lang)
    }

    #[test]
    fn test_python_keywords_and_boolean_ops() {
        let src = "if a and b:\n    pass\nelif c or d:\n    for x in y:\n        while z:\n            pass\ntry:\n    pass\nexcept E:\n    pass";
        // if, and, elif, or, for, while, except
        assert_eq!(branches(src, Language::Python), 7);
    }

    #[test]
    fn test_python_keywords_in_strings_and_comments_ignored() {
        let src = "    raise ValueError('if data is empty')\n    # if this or that\n    x = \"for while\"  # elif";
        assert_eq!(branches(src, Language::Python), 0);
    }

    #[test]
    fn test_python_docstring_spanning_lines_ignored() {
        let src = "def get(key):\n    \"\"\"Return the key if set.\n\n    Used for lookups and or caching.\n    \"\"\"\n    return key";
        assert_eq!(branches(src, Language::Python), 0);
    }

    #[test]
    fn test_python_identifiers_containing_keywords() {
        assert_eq!(branches("format_order = information", Language::Python), 0);
    }

    #[test]
    fn test_js_optional_chaining_not_ternary() {
        assert_eq!(branches("return a?.b?.c;", Language::JavaScript), 0);
        assert_eq!(branches("obj?.[key]?.(arg)", Language::JavaScript), 0);
    }

    #[test]
    fn test_js_nullish_counts_once() {
        assert_eq!(branches("return a ?? b;", Language::JavaScript), 1);
        assert_eq!(branches("x ??= y", Language::JavaScript), 1);
    }

    #[test]
    fn test_ts_optional_param_not_ternary() {
        assert_eq!(branches("  name?: string;", Language::TypeScript), 0);
        assert_eq!(branches("function f(a?: number) {", Language::TypeScript), 0);
    }

    #[test]
    fn test_ts_optional_method_not_ternary() {
        assert_eq!(branches("function f(o: { cb?(): void }) {", Language::TypeScript), 0);
        assert_eq!(branches("  save?(force: boolean): void;", Language::TypeScript), 0);
        assert_eq!(branches("const v = a ? (b) : c;", Language::TypeScript), 1);
    }

    #[test]
    fn test_js_ternary_and_logical() {
        assert_eq!(branches("const v = ok ? 1 : 2;", Language::JavaScript), 1);
        assert_eq!(branches("if (a && b || c) {", Language::JavaScript), 3);
    }

    #[test]
    fn test_js_else_if_counted_once() {
        let src = "if (a) {\n} else if (b) {\n} else {\n}";
        assert_eq!(branches(src, Language::JavaScript), 2);
    }

    #[test]
    fn test_js_switch_cases_and_catch() {
        let src = "switch (x) {\n  case 1: break;\n  case 2: break;\n}\ntry {} catch (e) {}";
        assert_eq!(branches(src, Language::JavaScript), 3);
    }

    #[test]
    fn test_js_block_comment_body_ignored() {
        let src = "/*\n if (a) {\n while (b)\n*/\nfor (;;) {}";
        assert_eq!(branches(src, Language::JavaScript), 1);
    }

    #[test]
    fn test_go_grammar() {
        let src = "if err != nil && retry {\n}\nfor i := range xs {\n}\nselect {\ncase <-ch:\n}";
        // if, &&, for, select, case
        assert_eq!(branches(src, Language::Go), 5);
        // Go has no while keyword and no ternary
        assert_eq!(branches("while := x ? y", Language::Go), 0);
    }

    #[test]
    fn test_rust_grammar() {
        let src = "if a {\n} else if b || c {\n}\nloop {}\nmatch x {\n}\nwhile y {}\nfor i in 0..n {}";
        // if, else if, ||, loop, match, while, for
        assert_eq!(branches(src, Language::Rust), 7);
        // `?` is the try operator in Rust, never a branch here
        assert_eq!(branches("let v = parse(s)?;", Language::Rust), 0);
    }

    #[test]
    fn test_generic_has_no_branches() {
        assert_eq!(branches("if x then y", Language::Generic), 0);
    }

    #[test]
    fn test_complexity_base_is_one() {
        let empty: [&str; 0] = [];
        assert_eq!(complexity_of(&empty, Language::Rust), 1);
    }
}
