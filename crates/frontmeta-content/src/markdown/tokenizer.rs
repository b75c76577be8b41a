//! Line-oriented tokenizer for frontmatter blocks.
//!
//! The block is read one line at a time. The first `:` or `-` on a line
//! decides what the line is:
//!
//! - `:` opens a new key (`title: Weekly Sync`); the rest of the line is a value
//! - `-` is a list item (`- alice`) appended to the open key
//!
//! Once a key is open, a non-blank line containing neither character ends
//! tokenization; the fields collected up to that point are returned. This is
//! a stop condition, not an error: trailing prose or malformed lines simply
//! cut the block short. Before the first key such lines are skipped.
//!
//! ```rust
//! use frontmeta_content::markdown::tokenizer::{tokenize, RawField};
//!
//! let block = "title: Weekly Sync\nattendees:\n- alice\n- bob\n";
//! let fields = tokenize(block);
//!
//! assert_eq!(fields, vec![
//!     RawField::new("title", ["Weekly Sync"]),
//!     RawField::new("attendees", ["alice", "bob"]),
//! ]);
//! ```

use super::helpers::trim_field_text;

/// A key and the values captured under it, before interpretation.
///
/// Fields produced by [`tokenize`] always carry at least one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    /// Key exactly as written (case preserved).
    pub key: String,
    /// Values in document order.
    pub values: Vec<String>,
}

impl RawField {
    /// Create a field from a key and values.
    pub fn new<K, I, V>(key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// First value, if any.
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// Split a frontmatter block into raw fields.
///
/// Keys without any value are dropped. Values and delimiter-free lines seen
/// before the first key have nothing to attach to and are skipped. Repeated keys are kept as separate
/// fields; later ones win when normalized.
pub fn tokenize(text: &str) -> Vec<RawField> {
    let mut fields = Vec::new();
    let mut current_key: Option<String> = None;
    let mut values: Vec<String> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let Some(delimiter) = line.find([':', '-']) else {
            if line.trim().is_empty() {
                continue;
            }
            if current_key.is_none() {
                log::debug!("Skipping frontmatter line {} before any key", index + 1);
                continue;
            }
            log::debug!(
                "Frontmatter line {} has no ':' or '-'; keeping {} field(s) read so far",
                index + 1,
                fields.len() + 1
            );
            break;
        };

        if line.as_bytes()[delimiter] == b':' {
            if let Some(key) = current_key.take() {
                flush(&mut fields, key, std::mem::take(&mut values));
            }
            values.clear();
            current_key = Some(trim_field_text(&line[..delimiter]).to_string());
        }

        let value = trim_field_text(&line[delimiter..]);
        if !value.is_empty() {
            values.push(value.to_string());
        }
    }

    if let Some(key) = current_key {
        flush(&mut fields, key, values);
    }

    fields
}

fn flush(fields: &mut Vec<RawField>, key: String, values: Vec<String>) {
    if values.is_empty() {
        log::debug!("Dropping frontmatter key '{key}' with no values");
        return;
    }
    fields.push(RawField { key, values });
}

/// Write fields back out as a frontmatter block.
///
/// Every field becomes a `key:` line followed by one `- value` line per
/// value, so [`tokenize`] reads the output back to the same fields.
///
/// ```rust
/// use frontmeta_content::markdown::tokenizer::{render, tokenize, RawField};
///
/// let fields = vec![RawField::new("tags", ["work", "meeting"])];
/// assert_eq!(render(&fields), "tags:\n- work\n- meeting\n");
/// assert_eq!(tokenize(&render(&fields)), fields);
/// ```
pub fn render(fields: &[RawField]) -> String {
    let mut out = String::new();
    for field in fields {
        out.push_str(&field.key);
        out.push_str(":\n");
        for value in &field.values {
            out.push_str("- ");
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
