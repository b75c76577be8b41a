//! Whole-document scanning.
//!
//! [`Scanner::scan`] is the entry point hosts call with the text of one
//! document. It runs, in order:
//!
//! 1. Frontmatter: if the first line is `---` and a closing `---` follows,
//!    the block between them is tokenized and every field normalized into
//!    the record (later fields overwrite earlier ones).
//! 2. Heading fallback: if no title was set, the first `# ` heading after
//!    the frontmatter (or anywhere, without frontmatter) provides it.
//! 3. Full text: the unmodified document is always stored.
//!
//! # Example
//!
//! ```rust
//! use frontmeta_content::scan;
//!
//! let doc = "---\ntitle: Weekly Sync\ntags: work, meeting\n---\n# Ignored\nbody";
//! let record = scan(doc);
//!
//! assert_eq!(record.title(), Some("Weekly Sync"));
//! assert_eq!(record.keywords().unwrap(), ["work", "meeting"]);
//! assert_eq!(record.full_text(), Some(doc));
//! ```

use std::path::Path;

use frontmeta_core::{Attribute, Error, MetadataRecord, Result};

use crate::date::{DateDetector, NaturalDateDetector};
use crate::decode::decode_document;
use crate::markdown::{find_heading_title, split_frontmatter, tokenize};
use crate::normalize::FieldNormalizer;

/// Extracts a [`MetadataRecord`] from document text.
///
/// A scanner holds no per-document state; one instance can serve any
/// number of scans, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Scanner<D = NaturalDateDetector> {
    normalizer: FieldNormalizer<D>,
}

impl Scanner {
    /// Create a scanner with the built-in date detector.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DateDetector> Scanner<D> {
    /// Create a scanner that resolves `date` fields with `detector`.
    pub fn with_detector(detector: D) -> Self {
        Self {
            normalizer: FieldNormalizer::with_detector(detector),
        }
    }

    /// Scan one document. Never fails; at minimum the full text is set.
    pub fn scan(&self, text: &str) -> MetadataRecord {
        let mut record = MetadataRecord::new();
        let mut body = text;

        if let Some(span) = split_frontmatter(text) {
            let fields = tokenize(span.block());
            log::debug!("Frontmatter yielded {} field(s)", fields.len());
            for field in &fields {
                record.merge(self.normalizer.normalize(field));
            }
            body = span.body();
        }

        if !record.contains(Attribute::Title)
            && let Some(title) = find_heading_title(body)
        {
            log::debug!("Using heading '{title}' as title");
            record.set_title(title);
        }

        record.set(Attribute::FullText, text);
        record
    }

    /// Decode raw bytes and scan them.
    ///
    /// Returns [`Error::Decode`] without scanning if the bytes are not text.
    pub fn scan_bytes(&self, bytes: &[u8]) -> Result<MetadataRecord> {
        let text = decode_document(bytes)?;
        Ok(self.scan(&text))
    }

    /// Read, decode and scan a file.
    pub fn scan_file(&self, path: impl AsRef<Path>) -> Result<MetadataRecord> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::io_with_path(e, path))?;
        self.scan_bytes(&bytes).inspect_err(|e| {
            log::warn!("No metadata for {}: {e}", path.display());
        })
    }
}

/// Scan document text with the default scanner.
pub fn scan(text: &str) -> MetadataRecord {
    Scanner::new().scan(text)
}

/// Decode and scan document bytes with the default scanner.
pub fn scan_bytes(bytes: &[u8]) -> Result<MetadataRecord> {
    Scanner::new().scan_bytes(bytes)
}

// ============================================================================
// Tests
// ============================================================================
