//! Property tests for the text string codec.

use acroform_oxide::text::{
    decode_text_string, encode_pdfdoc_lossy, encode_text_string, is_pdfdoc_representable,
    pdfdoc_encoding_lookup, UTF16BE_MARKER,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_encode_then_decode_is_identity(text in "\\PC*") {
        let bytes = encode_text_string(&text);
        prop_assert_eq!(decode_text_string(&bytes).unwrap(), text);
    }

    #[test]
    fn prop_single_byte_iff_representable(text in "\\PC*") {
        let bytes = encode_text_string(&text);
        let utf16 = bytes.starts_with(&UTF16BE_MARKER);
        if is_pdfdoc_representable(&text) && !text.starts_with("\u{fe}\u{ff}") {
            prop_assert!(!utf16);
            prop_assert_eq!(bytes.len(), text.chars().count());
        } else {
            prop_assert!(utf16);
        }
    }

    #[test]
    fn prop_ascii_is_stored_verbatim(text in "[ -~]*") {
        prop_assert_eq!(encode_text_string(&text), text.as_bytes().to_vec());
    }

    #[test]
    fn prop_single_byte_decode_never_fails(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(!bytes.starts_with(&UTF16BE_MARKER));
        let text = decode_text_string(&bytes).unwrap();
        prop_assert_eq!(text.chars().count(), bytes.len());
    }

    #[test]
    fn prop_defined_bytes_survive_decode_encode(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(!bytes.starts_with(&UTF16BE_MARKER));
        prop_assume!(bytes.iter().all(|&b| pdfdoc_encoding_lookup(b).is_some()));
        let text = decode_text_string(&bytes).unwrap();
        prop_assert_eq!(encode_text_string(&text), bytes);
    }

    #[test]
    fn prop_lossy_encoding_keeps_one_byte_per_char(text in "\\PC*") {
        let (bytes, replaced) = encode_pdfdoc_lossy(&text);
        prop_assert_eq!(bytes.len(), text.chars().count());
        prop_assert_eq!(replaced == 0, is_pdfdoc_representable(&text));
    }
}

#[test]
fn test_odd_length_utf16_is_rejected() {
    assert!(decode_text_string(&[0xFE, 0xFF, 0x00, 0x41, 0x00]).is_err());
}
