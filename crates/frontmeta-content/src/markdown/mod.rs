//! Frontmatter and heading extraction utilities.
//!
//! This module provides the text-level building blocks of a scan:
//!
//! - [`frontmatter`]: Locating the `---` delimited block
//! - [`tokenizer`]: Splitting the block into raw key/value fields
//! - [`parser`]: Heading lookup for the title fallback
//! - [`helpers`]: Trimming and comma-list helpers
//!
//! # Example
//!
//! ```rust
//! use frontmeta_content::markdown::{split_frontmatter, tokenize, RawField};
//!
//! let content = "---\ntitle: Hello\ntags: a, b\n---\n\nBody text";
//! let span = split_frontmatter(content).unwrap();
//! let fields = tokenize(span.block());
//!
//! assert_eq!(fields[0], RawField::new("title", ["Hello"]));
//! assert_eq!(fields[1], RawField::new("tags", ["a, b"]));
//! ```

pub mod frontmatter;
pub mod helpers;
pub mod parser;
pub mod tokenizer;

// Re-export key types and functions
pub use frontmatter::{FrontmatterSpan, split_frontmatter};
pub use helpers::{flatten_comma_lists, parse_comma_list, trim_field_text};
pub use parser::find_heading_title;
pub use tokenizer::{RawField, render, tokenize};
