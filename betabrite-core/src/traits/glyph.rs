//! Glyph table boundary
//!
//! The compiler hands every literal word to a [`GlyphTable`] and splices the
//! returned bytes into the running text. Tables are total: a character the
//! table does not know must still produce bytes (usually its UTF-8 form).

use alloc::vec::Vec;

/// Maps source text to the sign's character set
pub trait GlyphTable {
    /// Append the sign bytes for `text` to `out`
    fn transcode_into(&self, text: &str, out: &mut Vec<u8>);

    /// Transcode `text` into a fresh buffer
    fn transcode(&self, text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len());
        self.transcode_into(text, &mut out);
        out
    }
}

impl<T: GlyphTable + ?Sized> GlyphTable for &T {
    fn transcode_into(&self, text: &str, out: &mut Vec<u8>) {
        (**self).transcode_into(text, out)
    }
}
