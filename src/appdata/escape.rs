//! Text normalization for C string literals.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Escape backslashes and double quotes for a C string literal.
///
/// Backslashes go first so the backslash added in front of a quote is not
/// doubled again.
pub fn escape_c_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Normalize a paragraph or list item text.
///
/// Trims, escapes, then collapses every whitespace run (newlines included)
/// into a single space. XML merges those runs when rendering anyway.
pub fn escape_text(text: &str) -> String {
    let escaped = escape_c_string(text.trim());
    WHITESPACE_RUN.replace_all(&escaped, " ").into_owned()
}

/// Normalize a `demo` attribute: every whitespace character is deleted.
///
/// Demo scripts may be spread over several lines in the metadata for
/// readability; the generated identifier carries none of that spacing.
pub fn strip_demo(demo: &str) -> String {
    demo.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_inner_whitespace() {
        assert_eq!(escape_text("Hello  world"), "Hello world");
        assert_eq!(escape_text("a\n\t  b\r\nc"), "a b c");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(escape_text("\n    Some text\n  "), "Some text");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(escape_text(r#"Second "para""#), r#"Second \"para\""#);
    }

    #[test]
    fn escapes_backslash_before_quote() {
        // A literal `\"` must become `\\\"`, not `\\\\"` or `\\"`.
        assert_eq!(escape_text(r#"a \" b"#), r#"a \\\" b"#);
    }

    #[test]
    fn doubles_lone_backslash() {
        assert_eq!(escape_c_string(r"C:\path"), r"C:\\path");
    }

    #[test]
    fn empty_and_blank_text_yield_empty_string() {
        assert_eq!(escape_text(""), "");
        assert_eq!(escape_text("   \n\t "), "");
    }

    #[test]
    fn demo_whitespace_is_removed_not_collapsed() {
        assert_eq!(strip_demo("foo bar "), "foobar");
        assert_eq!(
            strip_demo("toolbox:\n    paint-select,\n  layers"),
            "toolbox:paint-select,layers"
        );
    }

    #[test]
    fn demo_without_whitespace_is_unchanged() {
        assert_eq!(strip_demo("gimp-toolbox:tools-move"), "gimp-toolbox:tools-move");
    }
}
