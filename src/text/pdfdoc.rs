//! PDFDocEncoding, the single-byte code page for PDF text strings.
//!
//! ISO 32000-1:2008, Annex D.2, Table D.2. The encoding agrees with ISO
//! Latin-1 for printable ASCII and most of 0xA1-0xFF, but redefines
//! 0x18-0x1F (spacing diacritics), 0x80-0x9E (typographic punctuation and a
//! few letters) and 0xA0 (euro sign). 0x7F, 0x9F and 0xAD are undefined.

use crate::object::Object;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Look up the Unicode character for a PDFDocEncoding byte.
///
/// Returns `None` for the three undefined codes.
pub fn pdfdoc_encoding_lookup(code: u8) -> Option<char> {
    match code {
        // Diacritics occupying the control range
        0x18 => Some('\u{02D8}'), // breve
        0x19 => Some('\u{02C7}'), // caron
        0x1A => Some('\u{02C6}'), // circumflex
        0x1B => Some('\u{02D9}'), // dotaccent
        0x1C => Some('\u{02DD}'), // hungarumlaut
        0x1D => Some('\u{02DB}'), // ogonek
        0x1E => Some('\u{02DA}'), // ring
        0x1F => Some('\u{02DC}'), // tilde

        0x00..=0x7E => Some(code as char),
        0x7F => None,

        0x80 => Some('\u{2022}'), // bullet
        0x81 => Some('\u{2020}'), // dagger
        0x82 => Some('\u{2021}'), // daggerdbl
        0x83 => Some('\u{2026}'), // ellipsis
        0x84 => Some('\u{2014}'), // emdash
        0x85 => Some('\u{2013}'), // endash
        0x86 => Some('\u{0192}'), // florin
        0x87 => Some('\u{2044}'), // fraction
        0x88 => Some('\u{2039}'), // guilsinglleft
        0x89 => Some('\u{203A}'), // guilsinglright
        0x8A => Some('\u{2212}'), // minus
        0x8B => Some('\u{2030}'), // perthousand
        0x8C => Some('\u{201E}'), // quotedblbase
        0x8D => Some('\u{201C}'), // quotedblleft
        0x8E => Some('\u{201D}'), // quotedblright
        0x8F => Some('\u{2018}'), // quoteleft
        0x90 => Some('\u{2019}'), // quoteright
        0x91 => Some('\u{201A}'), // quotesinglbase
        0x92 => Some('\u{2122}'), // trademark
        0x93 => Some('\u{FB01}'), // fi
        0x94 => Some('\u{FB02}'), // fl
        0x95 => Some('\u{0141}'), // Lslash
        0x96 => Some('\u{0152}'), // OE
        0x97 => Some('\u{0160}'), // Scaron
        0x98 => Some('\u{0178}'), // Ydieresis
        0x99 => Some('\u{017D}'), // Zcaron
        0x9A => Some('\u{0131}'), // dotlessi
        0x9B => Some('\u{0142}'), // lslash
        0x9C => Some('\u{0153}'), // oe
        0x9D => Some('\u{0161}'), // scaron
        0x9E => Some('\u{017E}'), // zcaron
        0x9F => None,

        0xA0 => Some('\u{20AC}'), // Euro
        0xAD => None,
        0xA1..=0xFF => Some(code as char),
    }
}

lazy_static! {
    static ref UNICODE_TO_PDFDOC: HashMap<char, u8> = (0..=255u8)
        .filter_map(|code| pdfdoc_encoding_lookup(code).map(|ch| (ch, code)))
        .collect();
}

/// Look up the PDFDocEncoding byte for a Unicode character.
///
/// Returns `None` if the character has no single-byte representation.
pub fn pdfdoc_encode_char(ch: char) -> Option<u8> {
    UNICODE_TO_PDFDOC.get(&ch).copied()
}

/// Glyph names for the codes where PDFDocEncoding departs from
/// WinAnsiEncoding, grouped in runs of consecutive codes.
const DIFFERENCES_FROM_WIN_ANSI: &[(u8, &[&str])] = &[
    (
        0x18,
        &["breve", "caron", "circumflex", "dotaccent", "hungarumlaut", "ogonek", "ring", "tilde"],
    ),
    (
        0x80,
        &[
            "bullet", "dagger", "daggerdbl", "ellipsis", "emdash", "endash", "florin", "fraction",
            "guilsinglleft", "guilsinglright", "minus", "perthousand", "quotedblbase",
            "quotedblleft", "quotedblright", "quoteleft", "quoteright", "quotesinglbase",
            "trademark", "fi", "fl", "Lslash", "OE", "Scaron", "Ydieresis", "Zcaron", "dotlessi",
            "lslash", "oe", "scaron", "zcaron",
        ],
    ),
    (0xA0, &["Euro"]),
];

/// `/Differences` array that turns `WinAnsiEncoding` into PDFDocEncoding
/// for a simple font.
pub fn pdfdoc_differences() -> Vec<Object> {
    let mut differences = Vec::new();
    for (first_code, names) in DIFFERENCES_FROM_WIN_ANSI {
        differences.push(Object::Integer(*first_code as i64));
        differences.extend(names.iter().map(|name| Object::name(*name)));
    }
    differences
}
