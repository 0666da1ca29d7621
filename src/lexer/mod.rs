// Author: kelexine (https://github.com/kelexine)
// lexer/mod.rs — Language-aware stripping of string and comment content
//
// Not a tokenizer. Each physical line is walked once, character by character,
// and everything a downstream regex must not see is removed:
//   • string / char / template literal contents (the quotes stay, empty)
//   • line comments (dropped with their marker)
//   • block comments (replaced by one space; state carried across lines)
//   • Python triple-quoted literals (state carried across lines)

pub mod blocks;

pub use blocks::{locate_body, locate_python_body};

use crate::language::Language;

/// Scan state carried from one physical line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    pub in_block_comment: bool,
    /// Quote character of an open Python triple-quoted literal.
    pub in_triple_quote: Option<char>,
}

/// Strip literal contents and comments from `line`.
///
/// Returns the cleaned line and the state to feed into the next call.
/// Unterminated literals end the scan of that line; nothing here fails.
pub fn strip(line: &str, language: Language, state: ScanState) -> (String, ScanState) {
    match language {
        Language::Python => strip_python(line, state),
        lang if lang.is_c_family() => strip_c_family(line, lang, state),
        _ => (line.to_string(), state),
    }
}

/// Split content into physical lines on `\n`, dropping a trailing `\r`.
///
/// A trailing newline yields a final empty line and `""` yields one empty
/// line, so every file has at least one line.
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Strip a whole sequence of lines with a fresh state.
pub fn strip_lines<'a, I>(lines: I, language: Language) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = ScanState::default();
    lines
        .into_iter()
        .map(|line| {
            let (clean, next) = strip(line, language, state);
            state = next;
            clean
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Python
// ─────────────────────────────────────────────────────────────────────────────

/// A line lying wholly inside a multi-line triple-quoted literal strips to
/// the bare delimiter, so it stays a code line with nothing left to match.
fn strip_python(line: &str, mut state: ScanState) -> (String, ScanState) {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    if let Some(quote) = state.in_triple_quote {
        out.extend(std::iter::repeat_n(quote, 3));
        match skip_triple_quoted(&chars, 0, quote) {
            Some(end) => {
                state.in_triple_quote = None;
                i = end;
            }
            None => return (out, state),
        }
    }

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '#' => break,
            '"' | '\'' => {
                let triple = chars.get(i + 1) == Some(&ch) && chars.get(i + 2) == Some(&ch);
                if triple {
                    out.extend(std::iter::repeat_n(ch, 6));
                    match skip_triple_quoted(&chars, i + 3, ch) {
                        Some(end) => i = end,
                        None => {
                            state.in_triple_quote = Some(ch);
                            break;
                        }
                    }
                } else {
                    out.push(ch);
                    out.push(ch);
                    match skip_quoted(&chars, i + 1, ch) {
                        Some(end) => i = end,
                        None => break,
                    }
                }
            }
            _ => {
                out.push(ch);
                i += 1;
            }
        }
    }
    (out, state)
}

fn skip_triple_quoted(chars: &[char], mut i: usize, quote: char) -> Option<usize> {
    while i < chars.len() {
        if chars[i] == '\\' {
            i += 2;
            continue;
        }
        if chars[i] == quote && chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote) {
            return Some(i + 3);
        }
        i += 1;
    }
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// C family (JS / TS / Go / Rust)
// ─────────────────────────────────────────────────────────────────────────────

fn strip_c_family(line: &str, language: Language, mut state: ScanState) -> (String, ScanState) {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        if state.in_block_comment {
            if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                state.in_block_comment = false;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }

        let ch = chars[i];
        let next = chars.get(i + 1).copied();
        match ch {
            '/' if next == Some('/') => break,
            '/' if next == Some('*') => {
                state.in_block_comment = true;
                out.push(' ');
                i += 2;
            }
            '\'' if language == Language::Rust => match rust_char_literal_end(&chars, i) {
                Some(end) => {
                    out.push_str("''");
                    i = end;
                }
                // Lifetime or loop label
                None => {
                    out.push(ch);
                    i += 1;
                }
            },
            '"' | '\'' | '`' => {
                out.push(ch);
                out.push(ch);
                match skip_quoted(&chars, i + 1, ch) {
                    Some(end) => i = end,
                    None => break,
                }
            }
            'r' if language == Language::Rust && !follows_ident(&chars, i) => {
                match rust_raw_string(&chars, i + 1) {
                    Some(RawString::Closed { hashes, end }) => {
                        push_raw_literal(&mut out, hashes);
                        i = end;
                    }
                    Some(RawString::Unterminated { hashes }) => {
                        push_raw_literal(&mut out, hashes);
                        break;
                    }
                    None => {
                        out.push(ch);
                        i += 1;
                    }
                }
            }
            _ => {
                out.push(ch);
                i += 1;
            }
        }
    }
    (out, state)
}

/// Index just past the closing quote, honouring backslash escapes.
fn skip_quoted(chars: &[char], mut i: usize, quote: char) -> Option<usize> {
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

#[inline]
fn follows_ident(chars: &[char], i: usize) -> bool {
    i > 0 && (chars[i - 1].is_alphanumeric() || chars[i - 1] == '_')
}

/// `'x'` or `'\n'`-shaped literal starting at `i`; `None` for lifetimes.
fn rust_char_literal_end(chars: &[char], i: usize) -> Option<usize> {
    match chars.get(i + 1) {
        Some('\\') => skip_quoted(chars, i + 1, '\''),
        Some(c) if *c != '\'' && chars.get(i + 2) == Some(&'\'') => Some(i + 3),
        _ => None,
    }
}

enum RawString {
    Closed { hashes: usize, end: usize },
    Unterminated { hashes: usize },
}

/// Recognise `r"…"` / `r#"…"#` with `i` pointing just after the `r`.
fn rust_raw_string(chars: &[char], mut i: usize) -> Option<RawString> {
    let mut hashes = 0;
    while chars.get(i) == Some(&'#') {
        hashes += 1;
        i += 1;
    }
    if chars.get(i) != Some(&'"') {
        return None;
    }
    i += 1;
    while i < chars.len() {
        if chars[i] == '"' && (1..=hashes).all(|k| chars.get(i + k) == Some(&'#')) {
            return Some(RawString::Closed {
                hashes,
                end: i + 1 + hashes,
            });
        }
        i += 1;
    }
    Some(RawString::Unterminated { hashes })
}

fn push_raw_literal(out: &mut String, hashes: usize) {
    out.push('r');
    out.extend(std::iter::repeat_n('#', hashes));
    out.push_str("\"\"");
    out.extend(std::iter::repeat_n('#', hashes));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(line: &str, lang: Language) -> String {
        strip(line, lang, ScanState::default()).0
    }

    #[test]
    fn test_python_strings_and_comments() {
        assert_eq!(
            clean("raise ValueError('if data is empty')  # if", Language::Python),
            "raise ValueError('')  "
        );
        assert_eq!(clean("x = \"a#b\"", Language::Python), "x = \"\"");
        assert_eq!(clean("s = 'it\\'s'", Language::Python), "s = ''");
    }

    #[test]
    fn test_python_triple_quotes() {
        assert_eq!(clean("\"\"\"if and or\"\"\"", Language::Python), "\"\"\"\"\"\"");
        // Unterminated: rest of line is gone and the literal stays open
        let (first, state) = strip("doc = '''starts here if", Language::Python, ScanState::default());
        assert_eq!(first, "doc = ''''''");
        assert_eq!(state.in_triple_quote, Some('\''));
    }

    #[test]
    fn test_python_docstring_across_lines() {
        let out = strip_lines(
            [
                "    \"\"\"Return the key if set.",
                "",
                "    Used for lookups and or caching.",
                "    \"\"\"  # done",
                "    if key:",
            ],
            Language::Python,
        );
        assert_eq!(out[0], "    \"\"\"\"\"\"");
        assert_eq!(out[1], "\"\"\"");
        assert_eq!(out[2], "\"\"\"");
        assert_eq!(out[3], "\"\"\"  ");
        assert_eq!(out[4], "    if key:");
    }

    #[test]
    fn test_c_family_line_comment_and_strings() {
        assert_eq!(
            clean("console.log(\"}\"); // if {", Language::JavaScript),
            "console.log(\"\"); "
        );
        assert_eq!(clean("let s = `a ${b} }`;", Language::TypeScript), "let s = ``;");
        assert_eq!(clean("x := \"a\\\"}\"", Language::Go), "x := \"\"");
    }

    #[test]
    fn test_block_comment_across_lines() {
        let (first, state) = strip("a = 1; /* if {", Language::JavaScript, ScanState::default());
        assert_eq!(first, "a = 1;  ");
        assert!(state.in_block_comment);

        let (second, state) = strip("   while } ", Language::JavaScript, state);
        assert_eq!(second, "");
        assert!(state.in_block_comment);

        let (third, state) = strip("end */ b = 2;", Language::JavaScript, state);
        assert_eq!(third, " b = 2;");
        assert!(!state.in_block_comment);
    }

    #[test]
    fn test_inline_block_comment_keeps_tokens_apart() {
        assert_eq!(clean("a/**/b", Language::Go), "a b");
    }

    #[test]
    fn test_rust_lifetimes_are_not_strings() {
        assert_eq!(
            clean("fn f<'a>(x: &'a str) -> &'a str {", Language::Rust),
            "fn f<'a>(x: &'a str) -> &'a str {"
        );
        assert_eq!(clean("let c = '{';", Language::Rust), "let c = '';");
        assert_eq!(clean("let c = '\\'';", Language::Rust), "let c = '';");
    }

    #[test]
    fn test_rust_raw_strings() {
        assert_eq!(clean("let s = r#\"}\"#;", Language::Rust), "let s = r#\"\"#;");
        assert_eq!(clean("let s = r\"{\";", Language::Rust), "let s = r\"\";");
        // Identifier ending in r is not a raw string prefix
        assert_eq!(clean("for\"x\"", Language::Rust), "for\"\"");
    }

    #[test]
    fn test_unterminated_string_stops_line() {
        assert_eq!(clean("let s = \"never closed {", Language::JavaScript), "let s = \"\"");
    }

    #[test]
    fn test_strip_lines_threads_state() {
        let out = strip_lines(["/*", " * if", " */", "if (x) {}"], Language::JavaScript);
        assert_eq!(out[1], "");
        assert_eq!(out[3], "if (x) {}");
    }
}
