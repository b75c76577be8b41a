//! Small text helpers shared by the frontmatter tokenizer and normalizer.
//!
//! # Key Functions
//!
//! - [`trim_field_text`]: Strip the punctuation that frames keys and values
//! - [`parse_comma_list`]: Split one value into comma-separated pieces
//! - [`flatten_comma_lists`]: Split and concatenate a whole value list
//!
//! # Example
//!
//! ```rust
//! use frontmeta_content::markdown::helpers::flatten_comma_lists;
//!
//! let values = vec!["a, b".to_string(), "c".to_string()];
//! assert_eq!(flatten_comma_lists(&values), vec!["a", "b", "c"]);
//! ```

/// Trim whitespace, `-` and `:` from both ends of a key or value.
///
/// These are the characters that frame frontmatter entries (`key:`,
/// `- item`), so a captured fragment is stripped of all of them.
///
/// # Example
///
/// ```rust
/// use frontmeta_content::markdown::helpers::trim_field_text;
///
/// assert_eq!(trim_field_text(": Weekly Sync  "), "Weekly Sync");
/// assert_eq!(trim_field_text("  - item"), "item");
/// assert_eq!(trim_field_text(" :- "), "");
/// ```
pub fn trim_field_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == ':')
}

/// Parse a comma-separated list into trimmed strings.
///
/// Empty pieces (from `a,,b` or a trailing comma) are dropped.
///
/// # Example
///
/// ```rust
/// use frontmeta_content::markdown::helpers::parse_comma_list;
///
/// let items = parse_comma_list("work, meeting,  planning ,");
/// assert_eq!(items, vec!["work", "meeting", "planning"]);
/// ```
pub fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Split every value on commas and concatenate the pieces in order.
pub fn flatten_comma_lists(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| parse_comma_list(value))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
