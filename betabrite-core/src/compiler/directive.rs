//! Directive tags
//!
//! Maps tag names to what they do. Style directives change the display
//! mode, color or position of the text that follows them; insertions splice
//! a fixed control sequence into the running text. Whether a tag may cut a
//! new animation block is a property of its [`Directive`] variant.

use alloc::vec::Vec;

use betabrite_protocol::codes::{
    CURDATE_MMDDYY_SLASH, CURDATE_WEEKDAY, CURTIME_INSERT, STRING_FILE_INSERT,
};
use betabrite_protocol::{Color, Mode, Position, StyleState};

/// In-text substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Insertion {
    /// Current time
    Time,
    /// Current date as MM/DD/YY
    UsDate,
    /// Day of week, a space, then the current time
    TimeDay,
    /// Contents of the STRING file with this label
    StringFile(u8),
}

impl Insertion {
    /// Append the control sequence for this insertion
    pub fn encode_into(self, out: &mut Vec<u8>) {
        match self {
            Insertion::Time => out.push(CURTIME_INSERT),
            Insertion::UsDate => out.extend_from_slice(&CURDATE_MMDDYY_SLASH),
            Insertion::TimeDay => {
                out.extend_from_slice(&CURDATE_WEEKDAY);
                out.push(b' ');
                out.push(CURTIME_INSERT);
            }
            Insertion::StringFile(label) => {
                out.push(STRING_FILE_INSERT);
                out.push(label);
            }
        }
    }
}

/// Meaning of a recognised tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Directive {
    Position(Position),
    Color(Color),
    Mode(Mode),
    Insert(Insertion),
}

impl Directive {
    /// Look up a tag name (without brackets)
    pub fn lookup(name: &str) -> Option<Self> {
        if let Some(label) = string_file_label(name) {
            return Some(Directive::Insert(Insertion::StringFile(label)));
        }
        DIRECTIVES
            .iter()
            .find(|(tag, _)| *tag == name)
            .map(|(_, directive)| *directive)
    }

    /// Style directives start a new block when text is pending
    pub fn is_style(&self) -> bool {
        !matches!(self, Directive::Insert(_))
    }

    /// Apply a style directive; insertions leave the style untouched
    pub fn apply(&self, style: &mut StyleState) {
        match *self {
            Directive::Position(position) => style.position = position,
            Directive::Color(color) => style.color = color,
            Directive::Mode(mode) => style.mode = mode,
            Directive::Insert(_) => {}
        }
    }
}

/// `str` followed by a single digit names a STRING file
fn string_file_label(name: &str) -> Option<u8> {
    match name.strip_prefix("str")?.as_bytes() {
        [digit] if digit.is_ascii_digit() => Some(*digit),
        _ => None,
    }
}

/// Every fixed tag name
static DIRECTIVES: &[(&str, Directive)] = &[
    // Positions
    ("middle", Directive::Position(Position::Middle)),
    ("top", Directive::Position(Position::Top)),
    ("bottom", Directive::Position(Position::Bottom)),
    ("fill", Directive::Position(Position::Fill)),
    // Colors
    ("red", Directive::Color(Color::Red)),
    ("green", Directive::Color(Color::Green)),
    ("amber", Directive::Color(Color::Amber)),
    ("dimred", Directive::Color(Color::DimRed)),
    ("dimgreen", Directive::Color(Color::DimGreen)),
    ("brown", Directive::Color(Color::Brown)),
    ("orange", Directive::Color(Color::Orange)),
    ("yellow", Directive::Color(Color::Yellow)),
    ("rainbow1", Directive::Color(Color::Rainbow1)),
    ("rainbow2", Directive::Color(Color::Rainbow2)),
    ("mix", Directive::Color(Color::Mix)),
    ("autocolor", Directive::Color(Color::Auto)),
    ("blue", Directive::Color(Color::Blue)),
    // Modes
    ("rotate", Directive::Mode(Mode::Rotate)),
    ("hold", Directive::Mode(Mode::Hold)),
    ("flash", Directive::Mode(Mode::Flash)),
    ("rollup", Directive::Mode(Mode::RollUp)),
    ("rolldown", Directive::Mode(Mode::RollDown)),
    ("rollleft", Directive::Mode(Mode::RollLeft)),
    ("rollright", Directive::Mode(Mode::RollRight)),
    ("wipeup", Directive::Mode(Mode::WipeUp)),
    ("wipedown", Directive::Mode(Mode::WipeDown)),
    ("wipeleft", Directive::Mode(Mode::WipeLeft)),
    ("wiperight", Directive::Mode(Mode::WipeRight)),
    ("scroll", Directive::Mode(Mode::Scroll)),
    ("automode", Directive::Mode(Mode::Auto)),
    ("rollin", Directive::Mode(Mode::RollIn)),
    ("rollout", Directive::Mode(Mode::RollOut)),
    ("wipein", Directive::Mode(Mode::WipeIn)),
    ("wipeout", Directive::Mode(Mode::WipeOut)),
    ("cmprsrot", Directive::Mode(Mode::CompressedRotate)),
    ("twinkle", Directive::Mode(Mode::Twinkle)),
    ("sparkle", Directive::Mode(Mode::Sparkle)),
    ("snow", Directive::Mode(Mode::Snow)),
    ("interlock", Directive::Mode(Mode::Interlock)),
    ("switch", Directive::Mode(Mode::Switch)),
    ("slide", Directive::Mode(Mode::Slide)),
    ("spray", Directive::Mode(Mode::Spray)),
    ("starburst", Directive::Mode(Mode::Starburst)),
    ("welcome", Directive::Mode(Mode::Welcome)),
    ("slotmachine", Directive::Mode(Mode::SlotMachine)),
    ("newsflash", Directive::Mode(Mode::Newsflash)),
    ("trumpet", Directive::Mode(Mode::Trumpet)),
    ("thankyou", Directive::Mode(Mode::ThankYou)),
    ("nosmoking", Directive::Mode(Mode::NoSmoking)),
    ("drinkdrive", Directive::Mode(Mode::DrinkDrive)),
    ("animal", Directive::Mode(Mode::Animal)),
    ("fish", Directive::Mode(Mode::Fish)),
    ("fireworks", Directive::Mode(Mode::Fireworks)),
    ("turbocar", Directive::Mode(Mode::TurboCar)),
    ("balloons", Directive::Mode(Mode::Balloons)),
    ("cherrybomb", Directive::Mode(Mode::CherryBomb)),
    // Insertions
    ("time", Directive::Insert(Insertion::Time)),
    ("usdate", Directive::Insert(Insertion::UsDate)),
    ("timeday", Directive::Insert(Insertion::TimeDay)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::tokenizer::{MAX_TAG_LEN, MIN_TAG_LEN};

    #[test]
    fn test_lookup_style_directives() {
        assert_eq!(Directive::lookup("red"), Some(Directive::Color(Color::Red)));
        assert_eq!(Directive::lookup("top"), Some(Directive::Position(Position::Top)));
        assert_eq!(Directive::lookup("snow"), Some(Directive::Mode(Mode::Snow)));
        assert!(Directive::lookup("red").unwrap().is_style());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Directive::lookup("Red"), None);
        assert_eq!(Directive::lookup("TIME"), None);
    }

    #[test]
    fn test_string_file_tags() {
        assert_eq!(
            Directive::lookup("str3"),
            Some(Directive::Insert(Insertion::StringFile(b'3')))
        );
        assert_eq!(Directive::lookup("strA"), None);
        assert_eq!(Directive::lookup("str12"), None);
        assert!(!Directive::lookup("str0").unwrap().is_style());
    }

    #[test]
    fn test_insertion_bytes() {
        let mut out = Vec::new();
        Insertion::Time.encode_into(&mut out);
        Insertion::UsDate.encode_into(&mut out);
        Insertion::TimeDay.encode_into(&mut out);
        Insertion::StringFile(b'7').encode_into(&mut out);
        assert_eq!(out, b"\x13\x0b0\x0b9 \x13\x107");
    }

    #[test]
    fn test_apply_only_touches_one_field() {
        let mut style = StyleState::default();
        Directive::Color(Color::Green).apply(&mut style);
        Directive::Insert(Insertion::Time).apply(&mut style);
        assert_eq!(style.color, Color::Green);
        assert_eq!(style.mode, Mode::Auto);
        assert_eq!(style.position, Position::Middle);
    }

    #[test]
    fn test_every_tag_name_is_tokenizable() {
        for (name, _) in DIRECTIVES {
            assert!((MIN_TAG_LEN..=MAX_TAG_LEN).contains(&name.len()), "{name}");
            assert!(name.bytes().all(|b| b.is_ascii_alphanumeric()), "{name}");
        }
    }
}
