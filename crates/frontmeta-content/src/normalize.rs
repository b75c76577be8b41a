//! Mapping raw frontmatter fields onto canonical attributes.
//!
//! Each recognized key has one transform:
//!
//! | Key(s)                     | Attribute(s)                  | Transform                 |
//! |----------------------------|-------------------------------|---------------------------|
//! | `title`                    | title, subject, display-name  | first value               |
//! | `keywords`, `tags`         | keywords                      | comma-split and flatten   |
//! | `project`, `projects`      | projects                      | values as-is              |
//! | `attendees`, `participants`| participants                  | values as-is              |
//! | `date`                     | due-date, creation-date       | first date in first value |
//!
//! Keys are matched case-insensitively. Unknown keys, empty value lists and
//! dates that cannot be resolved all produce an empty partial record.

use frontmeta_core::{Attribute, MetadataRecord};

use crate::date::{DateDetector, NaturalDateDetector};
use crate::markdown::helpers::flatten_comma_lists;
use crate::markdown::tokenizer::RawField;

/// The recognized frontmatter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `title`
    Title,
    /// `keywords`, `tags`
    Keywords,
    /// `project`, `projects`
    Projects,
    /// `attendees`, `participants`
    Participants,
    /// `date`
    Date,
}

impl FieldKind {
    /// Classify a frontmatter key, ignoring case.
    pub fn from_key(key: &str) -> Option<FieldKind> {
        match key.to_lowercase().as_str() {
            "title" => Some(FieldKind::Title),
            "keywords" | "tags" => Some(FieldKind::Keywords),
            "project" | "projects" => Some(FieldKind::Projects),
            "attendees" | "participants" => Some(FieldKind::Participants),
            "date" => Some(FieldKind::Date),
            _ => None,
        }
    }
}

/// Turns raw fields into partial metadata records.
#[derive(Debug, Clone, Default)]
pub struct FieldNormalizer<D = NaturalDateDetector> {
    detector: D,
}

impl FieldNormalizer {
    /// Create a normalizer with the built-in date detector.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DateDetector> FieldNormalizer<D> {
    /// Create a normalizer that resolves `date` fields with `detector`.
    pub fn with_detector(detector: D) -> Self {
        Self { detector }
    }

    /// Normalize one field into the attributes it defines.
    ///
    /// # Example
    ///
    /// ```rust
    /// use frontmeta_content::markdown::tokenizer::RawField;
    /// use frontmeta_content::normalize::FieldNormalizer;
    ///
    /// let normalizer = FieldNormalizer::new();
    /// let record = normalizer.normalize(&RawField::new("Tags", ["a, b", "c"]));
    /// assert_eq!(record.keywords().unwrap(), ["a", "b", "c"]);
    ///
    /// assert!(normalizer.normalize(&RawField::new("colour", ["red"])).is_empty());
    /// ```
    pub fn normalize(&self, field: &RawField) -> MetadataRecord {
        let mut record = MetadataRecord::new();

        let Some(kind) = FieldKind::from_key(&field.key) else {
            log::debug!("Ignoring unrecognized frontmatter key '{}'", field.key);
            return record;
        };
        if field.values.is_empty() {
            log::debug!("Frontmatter key '{}' has no values", field.key);
            return record;
        }

        match kind {
            FieldKind::Title => {
                if let Some(title) = field.first_value() {
                    record.set_title(title);
                }
            }
            FieldKind::Keywords => {
                // Pieces are trimmed and empties dropped; an all-empty list
                // such as `tags: ,` writes no keywords attribute rather than
                // an empty one.
                let keywords = flatten_comma_lists(&field.values);
                if !keywords.is_empty() {
                    record.set(Attribute::Keywords, keywords);
                }
            }
            FieldKind::Projects => record.set(Attribute::Projects, field.values.clone()),
            FieldKind::Participants => {
                record.set(Attribute::Participants, field.values.clone());
            }
            FieldKind::Date => {
                let text = field.first_value().unwrap_or_default();
                match self.detector.find_first_date(text) {
                    Some(date) => record.set_date(date),
                    None => log::debug!("No date found in '{text}'"),
                }
            }
        }

        record
    }
}

/// Normalize a field with the built-in date detector.
pub fn normalize(field: &RawField) -> MetadataRecord {
    FieldNormalizer::new().normalize(field)
}

// ============================================================================
// Tests
// ============================================================================
