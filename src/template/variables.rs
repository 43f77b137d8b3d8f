//! Variable list construction from scanned placeholder names.

use super::scan;
use std::collections::HashSet;

/// Check whether a raw placeholder name is a valid variable identifier.
///
/// A valid identifier is non-empty and made only of letters, digits, and
/// underscores. Comparison elsewhere is exact, so no trimming happens here:
/// `" name "` is invalid.
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Build the canonical variable list from raw placeholder names.
///
/// Invalid names are dropped silently. The first occurrence of each name
/// fixes its position; later duplicates are ignored. Names are compared
/// case-sensitively.
///
/// # Examples
///
/// ```
/// use promptbind::template::build;
///
/// let vars = build(["b", "a", "human input", "b", "B"]);
/// assert_eq!(vars, vec!["b", "a", "B"]);
/// ```
pub fn build<'a, I>(raw_names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    raw_names
        .into_iter()
        .filter(|name| is_valid_identifier(name))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Derive the variable list of a template body: `build(scan(body))`.
pub fn derive_variables(body: &str) -> Vec<String> {
    build(scan(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("human_input"));
        assert!(is_valid_identifier("chat_history"));
        assert!(is_valid_identifier("x1"));
        assert!(is_valid_identifier("_"));
        assert!(is_valid_identifier("1st"));
        assert!(is_valid_identifier("名前"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("human input"));
        assert!(!is_valid_identifier(" name"));
        assert!(!is_valid_identifier("a-b"));
        assert!(!is_valid_identifier("a.b"));
        assert!(!is_valid_identifier("a\nb"));
    }

    #[test]
    fn test_build_preserves_first_occurrence_order() {
        assert_eq!(build(["b", "a", "b", "a", "c"]), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_build_is_case_sensitive() {
        assert_eq!(build(["name", "Name", "NAME"]), vec!["name", "Name", "NAME"]);
    }

    #[test]
    fn test_build_drops_invalid_without_moving_valid() {
        assert_eq!(build(["bad name", "a", "", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_build_empty_input() {
        assert!(build(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_derive_variables_order_example() {
        assert_eq!(derive_variables("{b} and {a} and {b}"), vec!["b", "a"]);
    }
}
