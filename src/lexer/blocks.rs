// Author: kelexine (https://github.com/kelexine)
// lexer/blocks.rs — Function body span location (braces and indentation)

use super::{ScanState, strip};
use crate::language::Language;

/// Number of lines, starting at `start_index`, needed for `{`/`}` depth to
/// return to zero after opening at least once.
///
/// Braces are counted on stripped text, so a `}` inside a string, char
/// literal or comment never closes the body. Before the first `{`, a line
/// ending in `;` ends the span (trait method, overload signature, expression
/// arrow function). An unbalanced body runs to end of input; no brace at all
/// gives 1.
pub fn locate_body(lines: &[&str], start_index: usize, language: Language) -> usize {
    if start_index >= lines.len() {
        return 1;
    }

    let mut depth: i64 = 0;
    let mut opened = false;
    let mut state = ScanState::default();

    for (j, line) in lines.iter().enumerate().skip(start_index) {
        let (clean, next) = strip(line, language, state);
        state = next;

        for ch in clean.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => depth -= 1,
                _ => {}
            }
        }

        let seen = j - start_index + 1;
        if opened && depth <= 0 {
            return seen;
        }
        if !opened && clean.trim_end().ends_with(';') {
            return seen;
        }
    }

    if opened {
        lines.len() - start_index
    } else {
        1
    }
}

/// 0-based index of the last line belonging to the Python function whose
/// `def` sits at `def_index` with `def_indent` columns of indentation.
///
/// Blank lines never end the body but are never the last line of it either.
pub fn locate_python_body(lines: &[&str], def_index: usize, def_indent: usize) -> usize {
    let mut last = def_index;
    for (j, line) in lines.iter().enumerate().skip(def_index + 1) {
        if line.trim().is_empty() {
            continue;
        }
        if indent_width(line) > def_indent {
            last = j;
        } else {
            break;
        }
    }
    last
}

/// Leading whitespace width in characters.
#[inline]
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brace_inside_string_does_not_close() {
        let lines = vec![
            "function f(){",
            "  console.log(\"}\");",
            "  return 1;",
            "}",
        ];
        assert_eq!(locate_body(&lines, 0, Language::JavaScript), 4);
    }

    #[test]
    fn test_brace_inside_comments_does_not_close() {
        let lines = vec![
            "fn hello() {",
            "  let x = \"}\"; // false brace }",
            "  /* another }",
            "     } still comment */",
            "  if true {",
            "    println!(\"{}\", x);",
            "  }",
            "}",
            "fn next() {}",
        ];
        assert_eq!(locate_body(&lines, 0, Language::Rust), 8);
    }

    #[test]
    fn test_char_and_template_literals() {
        let lines = vec!["func f() rune {", "  return '}'", "}"];
        assert_eq!(locate_body(&lines, 0, Language::Go), 3);

        let lines = vec!["const f = () => {", "  return `}`;", "};"];
        assert_eq!(locate_body(&lines, 0, Language::TypeScript), 3);
    }

    #[test]
    fn test_no_brace_is_one_line() {
        let lines = vec!["const double = (x) => x * 2;", "const y = 1;"];
        assert_eq!(locate_body(&lines, 0, Language::JavaScript), 1);

        let lines = vec!["trait T {", "    fn run(&self);", "}", "fn other() {", "}"];
        assert_eq!(locate_body(&lines, 1, Language::Rust), 1);

        let lines = vec!["function header()"];
        assert_eq!(locate_body(&lines, 0, Language::JavaScript), 1);
    }

    #[test]
    fn test_unbalanced_runs_to_eof() {
        let lines = vec!["fn broken() {", "  if x {", "  }", ""];
        assert_eq!(locate_body(&lines, 0, Language::Rust), 4);
    }

    #[test]
    fn test_brace_on_next_line() {
        let lines = vec!["function f()", "{", "  return 1;", "}", "x();"];
        assert_eq!(locate_body(&lines, 0, Language::JavaScript), 4);
    }

    #[test]
    fn test_python_body_ignores_trailing_blanks() {
        let lines: Vec<&str> = "def f():\n    return 1\n\n\ndef g():\n    return 2"
            .lines()
            .collect();
        assert_eq!(locate_python_body(&lines, 0, 0), 1);
        assert_eq!(locate_python_body(&lines, 4, 0), 5);
    }

    #[test]
    fn test_python_body_with_inner_blank_lines() {
        let lines = vec![
            "class A:",
            "    def m(self):",
            "        x = 1",
            "",
            "        return x",
            "",
            "    def n(self):",
            "        pass",
            "",
        ];
        assert_eq!(locate_python_body(&lines, 1, 4), 4);
        assert_eq!(locate_python_body(&lines, 6, 4), 7);
    }

    #[test]
    fn test_python_one_liner() {
        let lines = vec!["def f(): return 1", "x = f()"];
        assert_eq!(locate_python_body(&lines, 0, 0), 0);
    }
}
