//! Heading lookup used when frontmatter does not supply a title.
//!
//! The lookup is a plain text search for the first `# ` marker, not a full
//! Markdown parse: whatever follows the marker on its line is the title.
//!
//! # Example
//!
//! ```rust
//! use frontmeta_content::markdown::parser::find_heading_title;
//!
//! let content = "Some text\n\n# My Title\n\nBody";
//! assert_eq!(find_heading_title(content), Some("My Title"));
//! ```

/// Marker that introduces a heading title.
pub const HEADING_MARKER: &str = "# ";

/// Find the text of the first heading in `content`.
///
/// The first `# ` that is not at the very end of the text wins, wherever it
/// appears (so `## Section` yields `Section`). The rest of that line is
/// trimmed of surrounding whitespace before it is returned, and a heading
/// that is blank after trimming sets no title at all, so `#   ` never
/// produces an empty or whitespace-only title.
///
/// # Returns
///
/// * `Some(&str)` - The heading text
/// * `None` - If no marker is found or the heading line is blank
///
/// # Example
///
/// ```rust
/// use frontmeta_content::markdown::parser::find_heading_title;
///
/// assert_eq!(find_heading_title("## Introduction\nMore"), Some("Introduction"));
/// assert_eq!(find_heading_title("No heading here"), None);
/// assert_eq!(find_heading_title("ends with # "), None);
/// ```
pub fn find_heading_title(content: &str) -> Option<&str> {
    let (position, _) = content
        .match_indices(HEADING_MARKER)
        .find(|(position, _)| position + HEADING_MARKER.len() < content.len())?;

    let rest = &content[position + HEADING_MARKER.len()..];
    let line = rest.split('\n').next().unwrap_or(rest);
    let title = line.trim();

    if title.is_empty() {
        log::debug!("Heading at byte {position} is blank; no title taken");
        return None;
    }
    Some(title)
}

// ============================================================================
// Tests
// ============================================================================
