//! Message compiler
//!
//! Turns tag-annotated message text such as `[top] [red] Hello [str1]` into
//! the animation blocks of a TEXT file write.

pub mod directive;
pub mod machine;
pub mod tokenizer;

use alloc::vec::Vec;

use betabrite_protocol::{AnimationBlock, Command, Label};

pub use directive::{Directive, Insertion};
pub use machine::MessageCompiler;
pub use tokenizer::{tokenize, tokenize_words, Token};

use crate::traits::GlyphTable;

/// Compile a token sequence into one or more animation blocks
pub fn compile<G: GlyphTable>(tokens: &[Token<'_>], glyphs: G) -> Vec<AnimationBlock> {
    let mut compiler = MessageCompiler::new(glyphs);
    for &token in tokens {
        compiler.feed(token);
    }
    compiler.finish()
}

/// Tokenize and compile message words into a TEXT file write for `label`
pub fn compile_message<S: AsRef<str>, G: GlyphTable>(
    label: Label,
    words: &[S],
    glyphs: G,
) -> Command {
    let blocks = compile(&tokenize_words(words), glyphs);
    Command::WriteText(label, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{SignCharset, Utf8Glyphs};
    use alloc::format;
    use alloc::string::String;
    use betabrite_protocol::{Color, Mode, Position, StyleState};
    use proptest::prelude::*;

    #[test]
    fn test_flush_on_style_after_text() {
        let blocks = compile(&tokenize("[red] hello [blue] world"), Utf8Glyphs);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].style.color, Color::Red);
        assert_eq!(blocks[0].text, b"hello");
        assert_eq!(blocks[1].style.color, Color::Blue);
        assert_eq!(blocks[1].text, b"world");
    }

    #[test]
    fn test_string_insertion_never_flushes() {
        let blocks = compile(&tokenize("hello [str3] world"), Utf8Glyphs);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, b"hello\x103 world");
    }

    #[test]
    fn test_zero_tokens_yield_one_default_block() {
        let blocks = compile(&[], Utf8Glyphs);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].style, StyleState::default());
        assert!(blocks[0].text.is_empty());
    }

    #[test]
    fn test_compile_message_payload() {
        let label = Label::parse("A").unwrap();
        let cmd = compile_message(label, &["[top]", "[hold] Hi"], Utf8Glyphs);
        assert_eq!(cmd.to_payload(), b"AA\x1b\"b\x1cCHi");
    }

    #[test]
    fn test_compile_message_empty_words() {
        let label = Label::parse("B").unwrap();
        let empty: [&str; 0] = [];
        let cmd = compile_message(label, &empty, Utf8Glyphs);
        assert_eq!(cmd.to_payload(), b"AB\x1b o\x1cC");
    }

    #[test]
    fn test_extended_charset_with_degree() {
        let blocks = compile(&tokenize("Café 20°"), SignCharset);
        assert_eq!(blocks[0].text, b"Caf\x82 20\xa9");
    }

    #[test]
    fn test_mixed_directives() {
        let blocks = compile(
            &tokenize("[bottom] [snow] Cold [timeday] [fill] [rainbow1] Hot"),
            Utf8Glyphs,
        );
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].style.position, Position::Bottom);
        assert_eq!(blocks[0].style.mode, Mode::Snow);
        assert_eq!(blocks[0].text, b"Cold\x0b9 \x13");
        assert_eq!(blocks[1].style.position, Position::Fill);
        assert_eq!(blocks[1].style.color, Color::Rainbow1);
        assert_eq!(blocks[1].text, b"Hot");
    }

    const STYLE_TAGS: &[&str] = &["red", "green", "amber", "top", "bottom", "hold", "flash", "snow"];

    fn style_tag() -> impl Strategy<Value = &'static str> {
        prop::sample::select(STYLE_TAGS)
    }

    proptest! {
        #[test]
        fn prop_style_after_text_cuts_block(
            first in "[a-z]{1,8}",
            tag in style_tag(),
            second in "[a-z]{1,8}",
        ) {
            let input = format!("{first} [{tag}] {second}");
            let blocks = compile(&tokenize(&input), Utf8Glyphs);
            prop_assert_eq!(blocks.len(), 2);
            prop_assert_eq!(&blocks[0].text, first.as_bytes());
            prop_assert_eq!(blocks[0].style, StyleState::default());
            prop_assert_eq!(&blocks[1].text, second.as_bytes());
        }

        #[test]
        fn prop_insertions_keep_single_block(
            words in prop::collection::vec("[a-z]{1,6}", 1..6),
            digit in 0u8..=9,
        ) {
            let mut input = String::new();
            for word in &words {
                input.push_str(word);
                input.push_str(&format!(" [str{digit}] [time] "));
            }
            let blocks = compile(&tokenize(&input), Utf8Glyphs);
            prop_assert_eq!(blocks.len(), 1);
        }
    }
}
