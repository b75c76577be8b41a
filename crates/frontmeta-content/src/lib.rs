//! Frontmatter metadata extraction for document indexers.
//!
//! This crate turns the text of a document into a
//! [`MetadataRecord`](frontmeta_core::MetadataRecord): title, keywords,
//! projects, participants and dates from the leading frontmatter block, a
//! heading-derived title when frontmatter has none, and the full text.
//!
//! # Modules
//!
//! - [`markdown`]: Frontmatter location, tokenizing, heading lookup
//! - [`normalize`]: Mapping raw fields onto canonical attributes
//! - [`date`]: Swappable natural-language date detection
//! - [`scanner`]: The whole-document entry point
//! - [`decode`]: Turning document bytes into text
//!
//! # Design Philosophy
//!
//! **Best-effort extraction, never failure.** Malformed lines end the
//! frontmatter early, unknown keys are skipped and unresolvable dates are
//! left unset. A scan always returns a structurally valid record; only
//! decoding bytes into text can fail.
//!
//! # Example
//!
//! ```rust
//! use frontmeta_content::scan;
//!
//! let record = scan("---\ntitle: Hello\nattendees:\n- alice\n- bob\n---\n\nBody");
//! assert_eq!(record.title(), Some("Hello"));
//! assert_eq!(record.participants().unwrap(), ["alice", "bob"]);
//! ```

pub mod date;
pub mod decode;
pub mod markdown;
pub mod normalize;
pub mod scanner;

#[cfg(test)]
mod proptests;

// Re-export commonly used types
pub use date::{DateDetector, DateMatch, NaturalDateDetector};
pub use decode::decode_document;
pub use markdown::{FrontmatterSpan, RawField, find_heading_title, split_frontmatter, tokenize};
pub use normalize::{FieldKind, FieldNormalizer, normalize};
pub use scanner::{Scanner, scan, scan_bytes};
