//! Message compiler state machine
//!
//! Tokens are consumed in order against a running [`StyleState`] and a text
//! buffer. A style directive that arrives after text has been buffered cuts
//! the buffer into an [`AnimationBlock`] and starts the next block from the
//! default style. Insertions and literals only ever grow the buffer.

use alloc::vec::Vec;

use betabrite_protocol::codes::{DEGREES, UTF8_DEGREE};
use betabrite_protocol::{AnimationBlock, StyleState};

use super::directive::Directive;
use super::tokenizer::Token;
use crate::traits::GlyphTable;

/// Incremental compiler for one TEXT file
pub struct MessageCompiler<G> {
    glyphs: G,
    style: StyleState,
    buffer: Vec<u8>,
    blocks: Vec<AnimationBlock>,
}

impl<G: GlyphTable> MessageCompiler<G> {
    /// Start a message with the default style and an empty buffer
    pub fn new(glyphs: G) -> Self {
        Self {
            glyphs,
            style: StyleState::default(),
            buffer: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Style the next flushed block will carry
    pub fn style(&self) -> StyleState {
        self.style
    }

    /// Text bytes waiting to be flushed
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Blocks already cut
    pub fn blocks(&self) -> &[AnimationBlock] {
        &self.blocks
    }

    /// Consume one token
    pub fn feed(&mut self, token: Token<'_>) {
        match token {
            Token::Literal(word) => self.push_literal(word),
            Token::Tag(name) => match Directive::lookup(name) {
                Some(Directive::Insert(insertion)) => insertion.encode_into(&mut self.buffer),
                Some(directive) => {
                    if !self.buffer.is_empty() {
                        self.flush();
                        self.style.reset();
                    }
                    directive.apply(&mut self.style);
                }
                // Unknown tags are dropped
                None => {}
            },
        }
    }

    /// Flush whatever is buffered and return every block
    ///
    /// Always yields at least one block, even for an empty message.
    pub fn finish(mut self) -> Vec<AnimationBlock> {
        self.flush();
        self.blocks
    }

    fn push_literal(&mut self, word: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push(b' ');
        }
        let start = self.buffer.len();
        self.glyphs.transcode_into(word, &mut self.buffer);
        replace_degree(&mut self.buffer, start);
    }

    fn flush(&mut self) {
        let text = core::mem::take(&mut self.buffer);
        self.blocks.push(AnimationBlock::new(self.style, text));
    }
}

/// Collapse UTF-8 degree signs from `start` onward into the sign's code
fn replace_degree(buffer: &mut Vec<u8>, start: usize) {
    let mut read = start;
    let mut write = start;
    while read < buffer.len() {
        if buffer[read..].starts_with(&UTF8_DEGREE) {
            buffer[write] = DEGREES;
            read += UTF8_DEGREE.len();
        } else {
            buffer[write] = buffer[read];
            read += 1;
        }
        write += 1;
    }
    buffer.truncate(write);
}
