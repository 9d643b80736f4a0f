//! Tag tokenizer
//!
//! Splits message input into literal words and bracket tags. A word is a tag
//! only if it is exactly `[` + 2..=12 ASCII letters/digits + `]`; anything
//! else, including malformed brackets, stays literal text.

use alloc::vec::Vec;

/// Shortest tag name
pub const MIN_TAG_LEN: usize = 2;

/// Longest tag name
pub const MAX_TAG_LEN: usize = 12;

/// One input word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Token<'a> {
    /// Literal text
    Literal(&'a str),
    /// Tag name without its brackets
    Tag(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a single word; empty words produce no token
    pub fn from_word(word: &'a str) -> Option<Self> {
        if word.is_empty() {
            return None;
        }
        Some(match tag_name(word) {
            Some(name) => Token::Tag(name),
            None => Token::Literal(word),
        })
    }
}

fn tag_name(word: &str) -> Option<&str> {
    let name = word.strip_prefix('[')?.strip_suffix(']')?;
    let valid = (MIN_TAG_LEN..=MAX_TAG_LEN).contains(&name.len())
        && name.bytes().all(|b| b.is_ascii_alphanumeric());
    valid.then_some(name)
}

/// Tokenize one whitespace-separated message string
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    input.split_whitespace().filter_map(Token::from_word).collect()
}

/// Tokenize several message arguments in order, as if joined by spaces
pub fn tokenize_words<S: AsRef<str>>(words: &[S]) -> Vec<Token<'_>> {
    words
        .iter()
        .flat_map(|w| w.as_ref().split_whitespace())
        .filter_map(Token::from_word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_tags_and_literals() {
        assert_eq!(
            tokenize("[red] hello [blue] world"),
            vec![
                Token::Tag("red"),
                Token::Literal("hello"),
                Token::Tag("blue"),
                Token::Literal("world"),
            ]
        );
    }

    #[test]
    fn test_empty_words_dropped() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
        assert_eq!(tokenize("  a   b "), vec![Token::Literal("a"), Token::Literal("b")]);
    }

    #[test]
    fn test_tag_length_bounds() {
        assert_eq!(Token::from_word("[ab]"), Some(Token::Tag("ab")));
        assert_eq!(
            Token::from_word("[abcdefghijkl]"),
            Some(Token::Tag("abcdefghijkl"))
        );
        assert_eq!(Token::from_word("[a]"), Some(Token::Literal("[a]")));
        assert_eq!(
            Token::from_word("[abcdefghijklm]"),
            Some(Token::Literal("[abcdefghijklm]"))
        );
    }

    #[test]
    fn test_malformed_brackets_are_literal() {
        for word in ["[red", "red]", "[re-d]", "[red]!", "x[red]", "[]", "[r d]"] {
            assert_eq!(Token::from_word(word), Some(Token::Literal(word)), "{word:?}");
        }
    }

    #[test]
    fn test_tokenize_words_splits_each_argument() {
        let args = ["[top] hello", "there", "[str3]"];
        assert_eq!(
            tokenize_words(&args),
            vec![
                Token::Tag("top"),
                Token::Literal("hello"),
                Token::Literal("there"),
                Token::Tag("str3"),
            ]
        );
    }
}
