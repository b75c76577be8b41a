//! Canonical attributes and the per-document metadata record.
//!
//! A scan produces a [`MetadataRecord`]: a map from a fixed set of
//! [`Attribute`] names to [`AttributeValue`]s. Records are built fresh for
//! every document and moved to the caller; nothing is shared between scans.
//!
//! ```rust
//! use frontmeta_core::{Attribute, AttributeValue, MetadataRecord};
//!
//! let mut record = MetadataRecord::new();
//! record.set_title("Weekly Sync");
//! record.set(Attribute::Keywords, vec!["work".to_string()]);
//!
//! assert_eq!(record.title(), Some("Weekly Sync"));
//! assert_eq!(record.get(Attribute::DisplayName), Some(&AttributeValue::from("Weekly Sync")));
//! assert_eq!(record.len(), 4);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Attribute
// ============================================================================

/// Canonical attribute names a scan can write.
///
/// Serialized in kebab-case (`display-name`, `due-date`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    /// Document title.
    Title,
    /// Subject line; always mirrors the title.
    Subject,
    /// Name shown by the indexer; always mirrors the title.
    DisplayName,
    /// Flattened keyword/tag list.
    Keywords,
    /// Projects the document belongs to.
    Projects,
    /// People involved (attendees, participants).
    Participants,
    /// Due date resolved from the `date` field.
    DueDate,
    /// Creation date resolved from the `date` field.
    CreationDate,
    /// The entire, unmodified document text.
    FullText,
}

impl Attribute {
    /// Every attribute, in record order.
    pub const ALL: [Attribute; 9] = [
        Attribute::Title,
        Attribute::Subject,
        Attribute::DisplayName,
        Attribute::Keywords,
        Attribute::Projects,
        Attribute::Participants,
        Attribute::DueDate,
        Attribute::CreationDate,
        Attribute::FullText,
    ];

    /// The attributes written together by a title.
    pub const TITLE_GROUP: [Attribute; 3] =
        [Attribute::Title, Attribute::Subject, Attribute::DisplayName];

    /// The attributes written together by a resolved date.
    pub const DATE_GROUP: [Attribute; 2] = [Attribute::DueDate, Attribute::CreationDate];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Title => "title",
            Attribute::Subject => "subject",
            Attribute::DisplayName => "display-name",
            Attribute::Keywords => "keywords",
            Attribute::Projects => "projects",
            Attribute::Participants => "participants",
            Attribute::DueDate => "due-date",
            Attribute::CreationDate => "creation-date",
            Attribute::FullText => "full-text",
        }
    }

    /// Key used by desktop search indexers (Spotlight `kMDItem*` names).
    pub fn external_key(self) -> &'static str {
        match self {
            Attribute::Title => "kMDItemTitle",
            Attribute::Subject => "kMDItemSubject",
            Attribute::DisplayName => "kMDItemDisplayName",
            Attribute::Keywords => "kMDItemKeywords",
            Attribute::Projects => "kMDItemProjects",
            Attribute::Participants => "kMDItemParticipants",
            Attribute::DueDate => "kMDItemDueDate",
            Attribute::CreationDate => "kMDItemContentCreationDate",
            Attribute::FullText => "kMDItemTextContent",
        }
    }

}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// AttributeValue
// ============================================================================

/// A value stored under a canonical attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Single string.
    Text(String),
    /// Ordered list of strings.
    List(Vec<String>),
    /// Resolved date-time.
    Date(DateTime<Utc>),
}

impl AttributeValue {
    /// The string, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The list, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// The date-time, if this is a date value.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            AttributeValue::Date(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::List(items) => f.write_str(&items.join(", ")),
            AttributeValue::Date(dt) => f.write_str(&dt.to_rfc3339()),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(value: Vec<String>) -> Self {
        AttributeValue::List(value)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttributeValue::Date(value)
    }
}

// ============================================================================
// MetadataRecord
// ============================================================================

/// Metadata extracted from one document.
///
/// Writing an attribute that is already present replaces its value; there is
/// no merging of lists across repeated fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    entries: BTreeMap<Attribute, AttributeValue>,
}

impl MetadataRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, attribute: Attribute, value: impl Into<AttributeValue>) {
        self.entries.insert(attribute, value.into());
    }

    /// Write title, subject and display-name with the same string.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        for attribute in Attribute::TITLE_GROUP {
            self.set(attribute, title.clone());
        }
    }

    /// Write due-date and creation-date with the same instant.
    pub fn set_date(&mut self, date: DateTime<Utc>) {
        for attribute in Attribute::DATE_GROUP {
            self.set(attribute, date);
        }
    }

    /// Get the value stored for an attribute.
    pub fn get(&self, attribute: Attribute) -> Option<&AttributeValue> {
        self.entries.get(&attribute)
    }

    /// Check whether an attribute has been written.
    pub fn contains(&self, attribute: Attribute) -> bool {
        self.entries.contains_key(&attribute)
    }

    /// Number of attributes written.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over attributes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeValue)> {
        self.entries.iter().map(|(attr, value)| (*attr, value))
    }

    /// Copy every entry of `other` into this record; `other` wins on conflicts.
    pub fn merge(&mut self, other: MetadataRecord) {
        self.entries.extend(other.entries);
    }

    /// Title, if set.
    pub fn title(&self) -> Option<&str> {
        self.get(Attribute::Title).and_then(AttributeValue::as_text)
    }

    /// Flattened keywords, if set.
    pub fn keywords(&self) -> Option<&[String]> {
        self.get(Attribute::Keywords).and_then(AttributeValue::as_list)
    }

    /// Projects, if set.
    pub fn projects(&self) -> Option<&[String]> {
        self.get(Attribute::Projects).and_then(AttributeValue::as_list)
    }

    /// Participants, if set.
    pub fn participants(&self) -> Option<&[String]> {
        self.get(Attribute::Participants)
            .and_then(AttributeValue::as_list)
    }

    /// Due date, if set.
    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.get(Attribute::DueDate).and_then(AttributeValue::as_date)
    }

    /// Creation date, if set.
    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.get(Attribute::CreationDate)
            .and_then(AttributeValue::as_date)
    }

    /// Full document text, if set.
    pub fn full_text(&self) -> Option<&str> {
        self.get(Attribute::FullText).and_then(AttributeValue::as_text)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn march_third() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 3, 3, 0, 0, 0).unwrap()
    }

    // ------------------------------------------------------------------------
    // Attribute tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_attribute_names_match_serialized_form() {
        for attr in Attribute::ALL {
            assert_eq!(serde_json::to_value(attr).unwrap(), attr.name());
        }
    }

    #[test]
    fn test_attribute_external_keys_are_distinct() {
        let mut keys: Vec<_> = Attribute::ALL.iter().map(|a| a.external_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Attribute::ALL.len());
        assert_eq!(Attribute::CreationDate.external_key(), "kMDItemContentCreationDate");
    }

    #[test]
    fn test_attribute_display() {
        assert_eq!(Attribute::DisplayName.to_string(), "display-name");
    }

    // ------------------------------------------------------------------------
    // MetadataRecord tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_set_title_writes_three_attributes() {
        let mut record = MetadataRecord::new();
        record.set_title("Foo");

        for attr in Attribute::TITLE_GROUP {
            assert_eq!(record.get(attr).and_then(AttributeValue::as_text), Some("Foo"));
        }
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_later_write_overwrites() {
        let mut record = MetadataRecord::new();
        record.set(Attribute::Keywords, vec!["a".to_string()]);
        record.set(Attribute::Keywords, vec!["b".to_string(), "c".to_string()]);

        assert_eq!(record.keywords().unwrap(), ["b", "c"]);
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut first = MetadataRecord::new();
        first.set_title("Old");
        first.set(Attribute::Projects, vec!["alpha".to_string()]);

        let mut second = MetadataRecord::new();
        second.set_title("New");

        first.merge(second);
        assert_eq!(first.title(), Some("New"));
        assert_eq!(first.projects().unwrap(), ["alpha"]);
    }

    #[test]
    fn test_date_accessors() {
        let mut record = MetadataRecord::new();
        record.set_date(march_third());

        assert_eq!(record.due_date(), Some(march_third()));
        assert_eq!(record.creation_date(), Some(march_third()));
        assert!(record.title().is_none());
    }

    #[test]
    fn test_typed_accessor_ignores_wrong_kind() {
        let mut record = MetadataRecord::new();
        record.set(Attribute::Title, vec!["not".to_string(), "text".to_string()]);
        assert!(record.title().is_none());
        assert!(record.contains(Attribute::Title));
    }

    #[test]
    fn test_empty_until_written() {
        let mut record = MetadataRecord::new();
        assert!(record.is_empty());
        record.set(Attribute::FullText, "body");
        assert!(!record.is_empty());
        assert_eq!(record.get(Attribute::FullText), Some(&AttributeValue::from("body")));
    }

    #[test]
    fn test_iter_in_canonical_order() {
        let mut record = MetadataRecord::new();
        record.set(Attribute::FullText, "body");
        record.set_title("T");

        let order: Vec<_> = record.iter().map(|(attr, _)| attr).collect();
        assert_eq!(
            order,
            vec![
                Attribute::Title,
                Attribute::Subject,
                Attribute::DisplayName,
                Attribute::FullText
            ]
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(AttributeValue::from("x").to_string(), "x");
        assert_eq!(
            AttributeValue::from(vec!["a".to_string(), "b".to_string()]).to_string(),
            "a, b"
        );
        assert_eq!(
            AttributeValue::from(march_third()).to_string(),
            "2020-03-03T00:00:00+00:00"
        );
    }

    #[test]
    fn test_serialize_record_as_named_map() {
        let mut record = MetadataRecord::new();
        record.set(Attribute::DisplayName, "Doc");
        record.set(Attribute::Keywords, vec!["a".to_string()]);
        record.set(Attribute::DueDate, march_third());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["display-name"], "Doc");
        assert_eq!(json["keywords"], serde_json::json!(["a"]));
        assert_eq!(json["due-date"], "2020-03-03T00:00:00Z");
    }
}
