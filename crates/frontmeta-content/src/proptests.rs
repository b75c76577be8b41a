//! Property-based tests for scanning.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::markdown::{flatten_comma_lists, render, tokenize};
    use crate::scan;
    use frontmeta_core::Attribute;
    use proptest::prelude::*;

    /// Lines that look like frontmatter: keys, list items, prose, blanks.
    fn frontmatter_block() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-zA-Z0-9 :,#\\-]{0,24}", 0..12).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn test_full_text_is_input(doc in "\\PC*") {
            let record = scan(&doc);
            prop_assert_eq!(record.full_text(), Some(doc.as_str()));
        }

        #[test]
        fn test_full_text_is_input_with_frontmatter(block in frontmatter_block(), body in "\\PC*") {
            let doc = format!("---\n{block}\n---\n{body}");
            let record = scan(&doc);
            prop_assert_eq!(record.full_text(), Some(doc.as_str()));
        }

        #[test]
        fn test_no_frontmatter_only_title_and_full_text(doc in "[^-]\\PC*") {
            let record = scan(&doc);
            for (attribute, _) in record.iter() {
                prop_assert!(
                    Attribute::TITLE_GROUP.contains(&attribute) || attribute == Attribute::FullText,
                    "unexpected attribute {}", attribute
                );
            }
        }

        #[test]
        fn test_tokenize_stable_on_rendered_output(block in frontmatter_block()) {
            let fields = tokenize(&block);
            prop_assert_eq!(tokenize(&render(&fields)), fields);
        }

        #[test]
        fn test_tokenized_fields_have_values(block in frontmatter_block()) {
            for field in tokenize(&block) {
                prop_assert!(!field.values.is_empty());
            }
        }

        #[test]
        fn test_flatten_pieces_trimmed_and_non_empty(
            values in prop::collection::vec("[a-z ,]{0,16}", 0..6)
        ) {
            for piece in flatten_comma_lists(&values) {
                prop_assert!(!piece.is_empty());
                prop_assert_eq!(piece.trim(), piece.as_str());
                prop_assert!(!piece.contains(','));
            }
        }

        #[test]
        fn test_frontmatter_title_beats_heading(heading in "[A-Za-z][A-Za-z ]{0,20}") {
            let doc = format!("---\ntitle: Foo\n---\n# {heading}\nbody");
            let record = scan(&doc);
            prop_assert_eq!(record.title(), Some("Foo"));
        }
    }
}
