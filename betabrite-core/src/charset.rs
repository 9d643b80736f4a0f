//! Glyph tables
//!
//! [`Utf8Glyphs`] leaves text as its UTF-8 bytes, which is what most signs in
//! the field have been fed. [`SignCharset`] maps the accented letters and
//! symbols in the sign's extended character set to their single-byte codes
//! and passes everything else through as UTF-8.

use alloc::vec::Vec;

use crate::traits::GlyphTable;

/// Passthrough table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Glyphs;

impl GlyphTable for Utf8Glyphs {
    fn transcode_into(&self, text: &str, out: &mut Vec<u8>) {
        out.extend_from_slice(text.as_bytes());
    }
}

/// Extended sign character set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignCharset;

impl SignCharset {
    /// Single-byte code for `c`, if the sign has one
    pub fn lookup(c: char) -> Option<u8> {
        if c.is_ascii() {
            return None;
        }
        EXTENDED
            .iter()
            .find(|(glyph, _)| *glyph == c)
            .map(|(_, code)| *code)
    }
}

impl GlyphTable for SignCharset {
    fn transcode_into(&self, text: &str, out: &mut Vec<u8>) {
        let mut utf8 = [0u8; 4];
        for c in text.chars() {
            match Self::lookup(c) {
                Some(code) => out.push(code),
                None => out.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes()),
            }
        }
    }
}

static EXTENDED: &[(char, u8)] = &[
    ('Ç', 0x80),
    ('ü', 0x81),
    ('é', 0x82),
    ('â', 0x83),
    ('ä', 0x84),
    ('à', 0x85),
    ('å', 0x86),
    ('ç', 0x87),
    ('ê', 0x88),
    ('ë', 0x89),
    ('è', 0x8A),
    ('ï', 0x8B),
    ('î', 0x8C),
    ('ì', 0x8D),
    ('Ä', 0x8E),
    ('Å', 0x8F),
    ('É', 0x90),
    ('æ', 0x91),
    ('Æ', 0x92),
    ('ô', 0x93),
    ('ö', 0x94),
    ('ò', 0x95),
    ('û', 0x96),
    ('ù', 0x97),
    ('ÿ', 0x98),
    ('Ö', 0x99),
    ('Ü', 0x9A),
    ('¢', 0x9B),
    ('£', 0x9C),
    ('¥', 0x9D),
    ('ƒ', 0x9F),
    ('á', 0xA0),
    ('í', 0xA1),
    ('ó', 0xA2),
    ('ú', 0xA3),
    ('ñ', 0xA4),
    ('Ñ', 0xA5),
    ('ª', 0xA6),
    ('º', 0xA7),
    ('¿', 0xA8),
    ('°', 0xA9),
    ('¡', 0xAA),
    ('θ', 0xAC),
    ('Θ', 0xAD),
    ('ß', 0xB7),
    ('Á', 0xBA),
    ('À', 0xBB),
    ('Ê', 0xBE),
    ('Í', 0xBF),
    ('Õ', 0xC0),
    ('õ', 0xC1),
];
