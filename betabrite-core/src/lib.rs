//! Message compiler for BetaBrite / Alpha LED signs
//!
//! This crate holds the logic between human-written message text and the
//! protocol types in `betabrite-protocol`:
//!
//! - Tag tokenizer (literal words vs `[tag]` directives)
//! - Directive table (positions, colors, modes, in-text insertions)
//! - Compiler state machine producing animation blocks
//! - Glyph tables mapping source text to the sign's character set
//!
//! Compilation is pure: the same words and glyph table always produce the
//! same command.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod charset;
pub mod compiler;
pub mod traits;

pub use charset::{SignCharset, Utf8Glyphs};
pub use compiler::{compile, compile_message, tokenize, tokenize_words, MessageCompiler, Token};
pub use traits::GlyphTable;
