//! Special function encoders: set time, set date, set day of week and set
//! run sequence
//!
//! Each takes exactly one data argument and checks it against a fixed-shape
//! pattern before encoding. The patterns check shape only: `29:59` is an
//! accepted time and `02/30/24` an accepted date.

use alloc::vec::Vec;

use crate::codes::SpecialFunction;
use crate::command::Command;
use crate::error::{EncodeError, Grammar, Misconfiguration};

/// Shortest accepted run sequence
pub const MIN_SEQUENCE_LEN: usize = 3;

/// Longest accepted run sequence
pub const MAX_SEQUENCE_LEN: usize = 130;

/// One character position of a fixed-width pattern
#[derive(Clone, Copy)]
enum Slot {
    /// Inclusive byte range
    Range(u8, u8),
    Literal(u8),
}

use Slot::{Literal, Range};

const DIGIT: Slot = Range(b'0', b'9');

/// `HH:MM` with the hour's first digit limited to 0-2
const TIME_PATTERN: [Slot; 5] = [Range(b'0', b'2'), DIGIT, Literal(b':'), Range(b'0', b'5'), DIGIT];

/// `MM/DD/YY`
const DATE_PATTERN: [Slot; 8] = [
    Range(b'0', b'1'),
    DIGIT,
    Literal(b'/'),
    Range(b'0', b'3'),
    DIGIT,
    Literal(b'/'),
    DIGIT,
    DIGIT,
];

const DAY_PATTERN: [Slot; 1] = [Range(b'1', b'7')];

fn matches(input: &str, pattern: &[Slot]) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == pattern.len()
        && bytes.iter().zip(pattern).all(|(&b, slot)| match *slot {
            Range(lo, hi) => (lo..=hi).contains(&b),
            Literal(c) => b == c,
        })
}

/// Extract the single data argument a special function takes
fn single<S: AsRef<str>>(data: &[S]) -> Result<&str, EncodeError> {
    match data {
        [one] => Ok(one.as_ref()),
        _ => Err(EncodeError::Arity {
            expected: 1,
            got: data.len(),
        }),
    }
}

/// Copy `input` without the separator character
fn strip(input: &str, separator: u8) -> Vec<u8> {
    input.bytes().filter(|&b| b != separator).collect()
}

/// Set the sign clock from `HH:MM`
pub fn set_time<S: AsRef<str>>(data: &[S]) -> Result<Command, EncodeError> {
    let time = single(data)?;
    if !matches(time, &TIME_PATTERN) {
        return Err(EncodeError::Format(Grammar::Time));
    }
    Ok(Command::WriteSpecial(
        SpecialFunction::SetTime,
        strip(time, b':'),
    ))
}

/// Set the sign date from `MM/DD/YY`
pub fn set_date<S: AsRef<str>>(data: &[S]) -> Result<Command, EncodeError> {
    let date = single(data)?;
    if !matches(date, &DATE_PATTERN) {
        return Err(EncodeError::Format(Grammar::Date));
    }
    Ok(Command::WriteSpecial(
        SpecialFunction::SetDate,
        strip(date, b'/'),
    ))
}

/// Set the day of week, `1` (Sunday) through `7`
pub fn set_day<S: AsRef<str>>(data: &[S]) -> Result<Command, EncodeError> {
    let day = single(data)?;
    if !matches(day, &DAY_PATTERN) {
        return Err(EncodeError::Format(Grammar::DayOfWeek));
    }
    Ok(Command::WriteSpecial(
        SpecialFunction::SetDay,
        day.as_bytes().to_vec(),
    ))
}

/// Set the order in which TEXT files run
pub fn set_sequence<S: AsRef<str>>(data: &[S]) -> Result<Command, EncodeError> {
    let sequence = single(data)?;
    let len_ok = (MIN_SEQUENCE_LEN..=MAX_SEQUENCE_LEN).contains(&sequence.len());
    if !len_ok || !sequence.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(EncodeError::Format(Grammar::Sequence));
    }
    Ok(Command::WriteSpecial(
        SpecialFunction::SetSequence,
        sequence.as_bytes().to_vec(),
    ))
}

/// Encode a special function selected by its command line mode name
/// (`settime`, `setdate`, `setday`, `setsequence`)
pub fn encode_special<S: AsRef<str>>(mode: &str, data: &[S]) -> Result<Command, EncodeError> {
    match mode {
        "settime" => set_time(data),
        "setdate" => set_date(data),
        "setday" => set_day(data),
        "setsequence" => set_sequence(data),
        _ => Err(EncodeError::Configuration(
            Misconfiguration::UnknownSpecialMode,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use proptest::prelude::*;

    #[test]
    fn test_set_time_encodes_digits() {
        let cmd = set_time(&["14:30"]).unwrap();
        assert_eq!(cmd.to_payload(), b"E 1430");
    }

    #[test]
    fn test_set_time_hour_bounds_follow_pattern() {
        // First hour digit 0-2, second 0-9: 25 passes, 30 does not
        assert_eq!(set_time(&["25:00"]).unwrap().to_payload(), b"E 2500");
        assert_eq!(set_time(&["30:00"]), Err(EncodeError::Format(Grammar::Time)));
    }

    #[test]
    fn test_set_time_accepts_loose_hours() {
        // Pattern checks shape only; 29 is a valid first-digit-2 hour
        assert!(set_time(&["29:59"]).is_ok());
    }

    #[test]
    fn test_set_time_rejects_bad_shapes() {
        for bad in ["1:30", "14:60", "14-30", "14:301", "", "ab:cd"] {
            assert_eq!(
                set_time(&[bad]),
                Err(EncodeError::Format(Grammar::Time)),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_set_date_encodes_digits() {
        let cmd = set_date(&["12/25/24"]).unwrap();
        assert_eq!(cmd.to_payload(), b"E;122524");
    }

    #[test]
    fn test_set_date_accepts_calendar_impossible_day() {
        assert!(set_date(&["02/30/24"]).is_ok());
    }

    #[test]
    fn test_set_date_rejects_bad_shapes() {
        for bad in ["2/3/24", "20/01/24", "01/41/24", "01-01-24", "01/01/2024"] {
            assert_eq!(
                set_date(&[bad]),
                Err(EncodeError::Format(Grammar::Date)),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_set_day() {
        assert_eq!(set_day(&["1"]).unwrap().to_payload(), b"E&1");
        assert_eq!(set_day(&["7"]).unwrap().to_payload(), b"E&7");
        assert_eq!(set_day(&["0"]), Err(EncodeError::Format(Grammar::DayOfWeek)));
        assert_eq!(set_day(&["8"]), Err(EncodeError::Format(Grammar::DayOfWeek)));
        assert_eq!(set_day(&["12"]), Err(EncodeError::Format(Grammar::DayOfWeek)));
    }

    #[test]
    fn test_set_sequence() {
        assert_eq!(set_sequence(&["ABC"]).unwrap().to_payload(), b"E.ABC");
        assert_eq!(
            set_sequence(&["AB"]),
            Err(EncodeError::Format(Grammar::Sequence))
        );
        assert_eq!(
            set_sequence(&["AB-C"]),
            Err(EncodeError::Format(Grammar::Sequence))
        );
        let longest: String = core::iter::repeat('A').take(MAX_SEQUENCE_LEN).collect();
        assert!(set_sequence(&[longest.as_str()]).is_ok());
        let too_long: String = core::iter::repeat('A').take(MAX_SEQUENCE_LEN + 1).collect();
        assert!(set_sequence(&[too_long.as_str()]).is_err());
    }

    #[test]
    fn test_arity_is_checked_first() {
        assert_eq!(
            set_time(&["14:30", "15:00"]),
            Err(EncodeError::Arity {
                expected: 1,
                got: 2
            })
        );
        let empty: [&str; 0] = [];
        assert_eq!(
            set_day(&empty),
            Err(EncodeError::Arity {
                expected: 1,
                got: 0
            })
        );
    }

    #[test]
    fn test_encode_special_dispatch() {
        assert_eq!(
            encode_special("setday", &["3"]).unwrap().to_payload(),
            b"E&3"
        );
        assert_eq!(
            encode_special("setcolor", &["3"]),
            Err(EncodeError::Configuration(
                Misconfiguration::UnknownSpecialMode
            ))
        );
    }

    proptest! {
        #[test]
        fn prop_time_shape_accepted(h1 in 0u8..=2, h2 in 0u8..=9, m1 in 0u8..=5, m2 in 0u8..=9) {
            let input = alloc::format!("{h1}{h2}:{m1}{m2}");
            let payload = set_time(&[input.as_str()]).unwrap().to_payload();
            prop_assert_eq!(&payload[..2], b"E ");
            let digits = alloc::format!("{h1}{h2}{m1}{m2}");
            prop_assert_eq!(&payload[2..], digits.as_bytes());
        }

        #[test]
        fn prop_hours_from_30_rejected(h in 30u8..=99, m in 0u8..=59) {
            let input = alloc::format!("{h}:{m:02}");
            prop_assert!(set_time(&[input.as_str()]).is_err());
        }
    }
}
