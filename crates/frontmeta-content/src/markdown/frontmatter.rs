//! Locating the frontmatter block at the start of a document.
//!
//! Frontmatter is a metadata block at the start of a document, opened by a
//! first line that is exactly `---` and closed by the next `---`:
//!
//! ```markdown
//! ---
//! title: Weekly Sync
//! tags: work, meeting
//! ---
//!
//! # Agenda
//! ```
//!
//! # Usage
//!
//! ```rust
//! use frontmeta_content::markdown::split_frontmatter;
//!
//! let content = "---\ntitle: Test\n---\nBody";
//! let span = split_frontmatter(content).unwrap();
//!
//! assert_eq!(span.block(), "title: Test\n");
//! assert_eq!(span.body(), "\nBody");
//! ```

/// Delimiter that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// A frontmatter block located inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterSpan<'a> {
    /// Text strictly between the opening line and the closing delimiter.
    block: &'a str,
    /// Everything after the closing delimiter.
    body: &'a str,
}

impl<'a> FrontmatterSpan<'a> {
    /// The raw frontmatter text, without delimiters.
    pub fn block(&self) -> &'a str {
        self.block
    }

    /// Content after the closing delimiter.
    pub fn body(&self) -> &'a str {
        self.body
    }
}

/// Find the frontmatter block of a document.
///
/// # Behavior
///
/// - First line not exactly `---` (a trailing `\r` is ignored): `None`
/// - Opening line present but no later `---`: `None`, nothing is consumed
/// - Otherwise: the text up to the next `---`, wherever it occurs
///
/// # Example
///
/// ```rust
/// use frontmeta_content::markdown::split_frontmatter;
///
/// assert!(split_frontmatter("# Just Markdown").is_none());
/// assert!(split_frontmatter("---\ntitle: Incomplete\n").is_none());
///
/// let span = split_frontmatter("---\n---\nBody").unwrap();
/// assert_eq!(span.block(), "");
/// ```
pub fn split_frontmatter(content: &str) -> Option<FrontmatterSpan<'_>> {
    let first_line_end = content.find('\n')?;
    let first_line = &content[..first_line_end];
    if first_line.strip_suffix('\r').unwrap_or(first_line) != DELIMITER {
        return None;
    }

    let rest_start = first_line_end + 1;
    let rest = &content[rest_start..];
    let Some(closing) = rest.find(DELIMITER) else {
        log::warn!("Frontmatter opening delimiter found but no closing delimiter");
        return None;
    };

    let body_offset = rest_start + closing + DELIMITER.len();
    Some(FrontmatterSpan {
        block: &rest[..closing],
        body: &content[body_offset..],
    })
}

// ============================================================================
// Tests
// ============================================================================
