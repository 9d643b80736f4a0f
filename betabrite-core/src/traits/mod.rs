//! Collaborator traits
//!
//! These traits define the interface between the compiler and the data it
//! consumes but does not own.

pub mod glyph;

pub use glyph::GlyphTable;
