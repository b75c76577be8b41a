//! Decoding raw document bytes into text.
//!
//! A document is scanned only after its bytes decode cleanly. Supported
//! encodings:
//!
//! - UTF-8, with or without a byte-order mark
//! - UTF-16 (little or big endian) when introduced by a byte-order mark
//!
//! Anything else is a [`Error::Decode`] and the document yields no metadata.

use std::borrow::Cow;

use frontmeta_core::{Error, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Decode document bytes, stripping any byte-order mark.
///
/// # Example
///
/// ```rust
/// use frontmeta_content::decode::decode_document;
///
/// assert_eq!(decode_document(b"\xEF\xBB\xBF# Title").unwrap(), "# Title");
/// assert!(decode_document(&[0xC3, 0x28]).is_err());
/// ```
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>> {
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes).map(Cow::Owned);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes).map(Cow::Owned);
    }

    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes)
        .map(Cow::Borrowed)
        .map_err(|e| Error::decode(format!("document is not valid UTF-8: {e}")))
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::decode("UTF-16 document has an odd number of bytes"));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units)
        .map_err(|e| Error::decode(format!("document is not valid UTF-16: {e}")))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn utf16_le(text: &str) -> Vec<u8> {
        let mut bytes = UTF16_LE_BOM.to_vec();
        bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
        bytes
    }

    fn utf16_be(text: &str) -> Vec<u8> {
        let mut bytes = UTF16_BE_BOM.to_vec();
        bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
        bytes
    }

    #[test]
    fn test_plain_utf8_borrowed() {
        let decoded = decode_document("---\ntitle: 音楽\n---".as_bytes()).unwrap();
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "---\ntitle: 音楽\n---");
    }

    #[test]
    fn test_utf8_bom_stripped() {
        assert_eq!(decode_document(b"\xEF\xBB\xBF---\n").unwrap(), "---\n");
    }

    #[test]
    fn test_utf16_le() {
        assert_eq!(decode_document(&utf16_le("# Título")).unwrap(), "# Título");
    }

    #[test]
    fn test_utf16_be() {
        assert_eq!(decode_document(&utf16_be("# Title")).unwrap(), "# Title");
    }

    #[test]
    fn test_utf16_odd_length_rejected() {
        let mut bytes = utf16_le("ab");
        bytes.push(0x00);
        assert!(matches!(decode_document(&bytes), Err(Error::Decode { .. })));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = decode_document(&[b'#', b' ', 0xFF, 0xFE, 0xFD]).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
        assert!(err.is_document_error());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_document(b"").unwrap(), "");
    }
}
