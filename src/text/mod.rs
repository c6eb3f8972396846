//! Text value codec.
//!
//! Conversion between PDF text string bytes and Unicode, used by every
//! accessor that exposes a string-valued dictionary entry.

pub mod pdfdoc;
mod text_string;

pub use pdfdoc::{pdfdoc_differences, pdfdoc_encode_char, pdfdoc_encoding_lookup};
pub use text_string::{
    decode_text_string, encode_pdfdoc_lossy, encode_text_string, is_pdfdoc_representable,
    RawText, TextString, UTF16BE_MARKER,
};
