//! Line-level helpers shared by the pipeline stages.
//!
//! Filters arrive with either `\n` or `\r\n` terminators depending on
//! where they were authored; everything downstream works on normalized
//! lines from [`split_lines`].

use std::sync::LazyLock;

use regex::Regex;

/// One double-quoted token. A `"` always terminates a token; the filter
/// grammar has no escape sequences inside names.
static QUOTED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("static regex must compile"));

/// Start of a `Show` or `Hide` block.
static BLOCK_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(show|hide)\b").expect("static regex must compile"));

/// A `BaseType` condition line, with or without the `==` operator.
static BASE_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^basetype\b").expect("static regex must compile"));

/// Splits filter content into lines, accepting both `\n` and `\r\n`.
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Returns true if the trimmed line opens a `Show`/`Hide` block.
pub fn is_block_start(trimmed: &str) -> bool {
    BLOCK_START.is_match(trimmed)
}

/// Returns true if the trimmed line is a comment.
pub fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with('#')
}

/// Returns true if the trimmed line is a `BaseType` condition.
pub fn is_base_type(trimmed: &str) -> bool {
    BASE_TYPE.is_match(trimmed)
}

/// Extracts every double-quoted name from a line, in left-to-right
/// order.
///
/// Names are trimmed and empty results dropped. `captures_iter` takes
/// the haystack fresh on every call, so repeated or concurrent calls
/// never observe a stale match position.
pub fn quoted_names(line: &str) -> Vec<String> {
    QUOTED_TOKEN
        .captures_iter(line)
        .filter_map(|caps| {
            let name = caps[1].trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_normalizes_crlf() {
        assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\r\nb\r\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\r\nb\nc\r\n"), vec!["a", "b", "c", ""]);
    }

    #[test]
    fn test_block_start_detection() {
        assert!(is_block_start("Show"));
        assert!(is_block_start("Hide"));
        assert!(is_block_start("show # $type->divination $tier->t1"));
        assert!(is_block_start("HIDE # leveling"));
        assert!(!is_block_start("Showcase"));
        assert!(!is_block_start("# Show"));
        assert!(!is_block_start("BaseType == \"Show\""));
    }

    #[test]
    fn test_base_type_detection() {
        assert!(is_base_type("BaseType == \"The Doctor\""));
        assert!(is_base_type("BaseType \"The Doctor\""));
        assert!(is_base_type("basetype== \"The Doctor\""));
        assert!(!is_base_type("SetFontSize 45"));
        assert!(!is_base_type("\"The Doctor\""));
    }

    #[test]
    fn test_quoted_names_order_and_trim() {
        assert_eq!(
            quoted_names(r#"BaseType == "The Doctor" " The Nurse ""#),
            vec!["The Doctor".to_string(), "The Nurse".to_string()]
        );
    }

    #[test]
    fn test_quoted_names_drops_empty() {
        assert_eq!(quoted_names(r#""" "  " "A""#), vec!["A".to_string()]);
        assert!(quoted_names("no quotes here").is_empty());
    }

    #[test]
    fn test_quoted_names_no_escape_support() {
        // A quote always terminates a token; there is no escaping.
        assert_eq!(
            quoted_names(r#""a\" "b""#),
            vec![r"a\".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_quoted_names_is_stateless_across_calls() {
        let line = r#""A" "B""#;
        let first = quoted_names(line);
        let second = quoted_names(line);
        assert_eq!(first, second);
        assert_eq!(first, vec!["A".to_string(), "B".to_string()]);
    }
}
