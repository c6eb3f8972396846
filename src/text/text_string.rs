//! PDF text strings (ISO 32000-1:2008, Section 7.9.2.2).
//!
//! A text string is either PDFDocEncoded (one byte per character) or UTF-16BE
//! prefixed with the byte order marker `FE FF`. The marker is the only thing
//! that selects the branch.

use super::pdfdoc::{pdfdoc_encode_char, pdfdoc_encoding_lookup};
use crate::error::{Error, Result};

/// Byte order marker that introduces a UTF-16BE text string.
pub const UTF16BE_MARKER: [u8; 2] = [0xFE, 0xFF];

/// Raw text string bytes, classified by encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawText<'a> {
    /// PDFDocEncoded bytes
    SingleByte(&'a [u8]),
    /// UTF-16BE code units, marker already stripped
    Utf16(&'a [u8]),
}

impl<'a> RawText<'a> {
    /// Classify raw string bytes by the `FE FF` marker.
    pub fn classify(bytes: &'a [u8]) -> Self {
        match bytes.strip_prefix(&UTF16BE_MARKER[..]) {
            Some(units) => RawText::Utf16(units),
            None => RawText::SingleByte(bytes),
        }
    }

    /// Decode to Unicode text.
    ///
    /// Undefined PDFDocEncoding codes decode to U+FFFD. Malformed UTF-16
    /// (odd byte count or unpaired surrogate) is an error.
    pub fn decode(&self) -> Result<String> {
        match *self {
            RawText::SingleByte(bytes) => Ok(bytes
                .iter()
                .map(|&b| pdfdoc_encoding_lookup(b).unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect()),
            RawText::Utf16(units) => {
                if units.len() % 2 != 0 {
                    return Err(Error::Encoding(format!(
                        "UTF-16BE text string has odd length {}",
                        units.len() + UTF16BE_MARKER.len()
                    )));
                }
                let code_units = units
                    .chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
                char::decode_utf16(code_units)
                    .map(|unit| {
                        unit.map_err(|e| {
                            Error::Encoding(format!(
                                "unpaired surrogate {:#06x} in UTF-16BE text string",
                                e.unpaired_surrogate()
                            ))
                        })
                    })
                    .collect()
            },
        }
    }
}

/// Decode a PDF text string to Unicode.
pub fn decode_text_string(bytes: &[u8]) -> Result<String> {
    RawText::classify(bytes).decode()
}

/// Check whether every character of `text` has a PDFDocEncoding byte.
pub fn is_pdfdoc_representable(text: &str) -> bool {
    text.chars().all(|ch| pdfdoc_encode_char(ch).is_some())
}

/// Encode Unicode text as a PDF text string.
///
/// Uses PDFDocEncoding when every character fits, otherwise `FE FF` followed
/// by UTF-16BE. Never drops a character. Text starting with "þÿ" is also
/// written as UTF-16BE, since its single-byte form would read back as the
/// marker.
///
/// # Examples
///
/// ```
/// use acroform_oxide::text::encode_text_string;
///
/// assert_eq!(encode_text_string("H\u{e4}llo"), b"H\xe4llo");
/// assert_eq!(encode_text_string("\u{3a9}"), [0xFE, 0xFF, 0x03, 0xA9]);
/// ```
pub fn encode_text_string(text: &str) -> Vec<u8> {
    let single: Option<Vec<u8>> = text.chars().map(pdfdoc_encode_char).collect();
    match single {
        Some(bytes) if !bytes.starts_with(&UTF16BE_MARKER) => bytes,
        _ => {
            let mut out = Vec::with_capacity(2 + text.len() * 2);
            out.extend_from_slice(&UTF16BE_MARKER);
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_be_bytes());
            }
            out
        },
    }
}

/// Encode text in PDFDocEncoding, substituting `?` for characters that
/// cannot be represented.
///
/// Returns the bytes and the number of substitutions. Used where a single
/// byte per glyph is required, such as content stream string operands.
pub fn encode_pdfdoc_lossy(text: &str) -> (Vec<u8>, usize) {
    let mut replaced = 0;
    let bytes = text
        .chars()
        .map(|ch| {
            pdfdoc_encode_char(ch).unwrap_or_else(|| {
                replaced += 1;
                b'?'
            })
        })
        .collect();
    (bytes, replaced)
}

/// Text supplied by a caller for storage in a text string slot.
///
/// Unicode text is encoded on store; pre-encoded bytes are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextString {
    /// Unicode text, encoded with [`encode_text_string`]
    Unicode(String),
    /// Bytes already in PDF text string form
    Encoded(Vec<u8>),
}

impl TextString {
    /// Raw bytes to store.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            TextString::Unicode(text) => encode_text_string(text),
            TextString::Encoded(bytes) => bytes.clone(),
        }
    }

    /// Consume into raw bytes to store.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            TextString::Unicode(text) => encode_text_string(&text),
            TextString::Encoded(bytes) => bytes,
        }
    }

    /// Decoded Unicode text.
    pub fn to_text(&self) -> Result<String> {
        match self {
            TextString::Unicode(text) => Ok(text.clone()),
            TextString::Encoded(bytes) => decode_text_string(bytes),
        }
    }
}

impl From<&str> for TextString {
    fn from(text: &str) -> Self {
        TextString::Unicode(text.to_string())
    }
}

impl From<String> for TextString {
    fn from(text: String) -> Self {
        TextString::Unicode(text)
    }
}

impl From<Vec<u8>> for TextString {
    fn from(bytes: Vec<u8>) -> Self {
        TextString::Encoded(bytes)
    }
}

impl From<&[u8]> for TextString {
    fn from(bytes: &[u8]) -> Self {
        TextString::Encoded(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(RawText::classify(b"abc"), RawText::SingleByte(b"abc"));
        assert_eq!(RawText::classify(b"\xfe\xff\x00A"), RawText::Utf16(b"\x00A"));
        // Marker must be the first two bytes
        assert_eq!(RawText::classify(b"A\xfe\xff"), RawText::SingleByte(b"A\xfe\xff"));
        // Reversed marker is not special
        assert_eq!(RawText::classify(b"\xff\xfe"), RawText::SingleByte(b"\xff\xfe"));
        assert_eq!(RawText::classify(b""), RawText::SingleByte(b""));
    }

    #[test]
    fn test_decode_pdfdoc() {
        assert_eq!(decode_text_string(b"H\xe4llo").unwrap(), "Hällo");
        assert_eq!(decode_text_string(b"\x80 \xa0").unwrap(), "• €");
        assert_eq!(decode_text_string(b"").unwrap(), "");
    }

    #[test]
    fn test_decode_undefined_code_is_replacement() {
        assert_eq!(decode_text_string(b"a\x7fb").unwrap(), "a\u{FFFD}b");
    }

    #[test]
    fn test_decode_utf16() {
        let bytes = b"\xfe\xff\x00\xd3\x00t\x00h\x00\xe9\x00r";
        assert_eq!(decode_text_string(bytes).unwrap(), "Óthér");
        assert_eq!(decode_text_string(b"\xfe\xff").unwrap(), "");
        // Surrogate pair
        assert_eq!(decode_text_string(b"\xfe\xff\xd8\x3d\xde\x00").unwrap(), "😀");
    }

    #[test]
    fn test_decode_utf16_malformed() {
        assert!(matches!(decode_text_string(b"\xfe\xff\x00"), Err(Error::Encoding(_))));
        assert!(matches!(decode_text_string(b"\xfe\xff\xd8\x3d"), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_encode_prefers_single_byte() {
        assert_eq!(encode_text_string("test"), b"test");
        assert_eq!(encode_text_string("Hällo"), b"H\xe4llo");
        assert_eq!(encode_text_string("€"), vec![0xA0]);
        assert_eq!(encode_text_string(""), Vec::<u8>::new());
    }

    #[test]
    fn test_encode_falls_back_to_utf16() {
        let bytes = encode_text_string("Ωmega");
        assert_eq!(&bytes[..2], &UTF16BE_MARKER);
        assert_eq!(&bytes[2..4], &[0x03, 0xA9]);
        assert_eq!(decode_text_string(&bytes).unwrap(), "Ωmega");
    }

    #[test]
    fn test_encode_marker_lookalike_uses_utf16() {
        let bytes = encode_text_string("\u{fe}\u{ff}x");
        assert_eq!(bytes, b"\xfe\xff\x00\xfe\x00\xff\x00x");
        assert_eq!(decode_text_string(&bytes).unwrap(), "\u{fe}\u{ff}x");
        // Only at the start
        assert_eq!(encode_text_string("x\u{fe}\u{ff}"), b"x\xfe\xff");
    }

    #[test]
    fn test_encode_lossy() {
        assert_eq!(encode_pdfdoc_lossy("a€b"), (b"a\xa0b".to_vec(), 0));
        assert_eq!(encode_pdfdoc_lossy("Ωx"), (b"?x".to_vec(), 1));
    }

    #[test]
    fn test_text_string_pass_through() {
        let pre_encoded = TextString::from(&b"\xfe\xff\x00A"[..]);
        assert_eq!(pre_encoded.to_bytes(), b"\xfe\xff\x00A");
        assert_eq!(pre_encoded.to_text().unwrap(), "A");

        let unicode = TextString::from("A");
        assert_eq!(unicode.into_bytes(), b"A");
    }
}
