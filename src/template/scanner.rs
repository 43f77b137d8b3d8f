//! Placeholder token scanning.

use regex::Regex;
use std::sync::LazyLock;

/// An opening brace, one or more characters that are neither brace, then a
/// closing brace. The first `}` always terminates the candidate.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is a valid regex")
});

/// Scan template text for raw placeholder names, left to right.
///
/// The result may contain duplicates and names that are not valid
/// identifiers; filter it with [`build`](super::build). Unterminated braces
/// and empty enclosures are skipped. Matching runs in linear time.
///
/// # Examples
///
/// ```
/// use promptbind::template::scan;
///
/// let names = scan("{b} and {a} and {b} and {not closed");
/// assert_eq!(names, vec!["b", "a", "b"]);
/// ```
pub fn scan(body: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_plain_text() {
        assert!(scan("Just plain text").is_empty());
    }

    #[test]
    fn test_scan_empty_body() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_keeps_duplicates_in_order() {
        assert_eq!(scan("{x}-{y}-{x}"), vec!["x", "y", "x"]);
    }

    #[test]
    fn test_scan_adjacent_placeholders() {
        assert_eq!(scan("{a}{b}"), vec!["a", "b"]);
    }

    #[test]
    fn test_scan_skips_empty_enclosure() {
        assert_eq!(scan("Hello {} and {name}"), vec!["name"]);
    }

    #[test]
    fn test_scan_skips_unterminated_brace() {
        assert_eq!(scan("Hello {name"), Vec::<&str>::new());
        assert_eq!(scan("{open {closed}"), vec!["closed"]);
    }

    #[test]
    fn test_scan_does_not_recurse_into_nested_braces() {
        // Only the innermost brace pair encloses brace-free text.
        assert_eq!(scan("{outer {inner} tail}"), vec!["inner"]);
        assert_eq!(scan("{{x}}"), vec!["x"]);
    }

    #[test]
    fn test_scan_returns_invalid_candidates_unfiltered() {
        assert_eq!(scan("{human input}"), vec!["human input"]);
        assert_eq!(scan("{ name }"), vec![" name "]);
    }

    #[test]
    fn test_scan_lone_closing_brace() {
        assert_eq!(scan("a } b {c}"), vec!["c"]);
    }

    #[test]
    fn test_scan_multiline_body() {
        let body = "# {title}\n\n## History\n{chat_history}\n";
        assert_eq!(scan(body), vec!["title", "chat_history"]);
    }

    #[test]
    fn test_scan_placeholder_spanning_lines_is_a_candidate() {
        assert_eq!(scan("{a\nb}"), vec!["a\nb"]);
    }

    #[test]
    fn test_scan_unicode() {
        assert_eq!(scan("🎉 {名前} 日本語"), vec!["名前"]);
    }
}
