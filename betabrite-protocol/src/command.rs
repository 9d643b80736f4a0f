//! Command payloads
//!
//! A command is everything between STX and EOT in a frame:
//! - WRITE TEXT: `A` + label + animation blocks
//! - WRITE STRING: `G` + label + raw string bytes
//! - WRITE SPECIAL: `E` + subcode + function data
//! - Raw: caller-supplied bytes, passed through untouched

use alloc::vec::Vec;

use crate::codes::{
    SpecialFunction, CMD_WRITE_SPECIAL, CMD_WRITE_STRING, CMD_WRITE_TEXT, SOM,
};
use crate::error::{Bound, EncodeError, Grammar};
use crate::style::StyleState;

/// Single byte file label
///
/// Always in the printable range 0x20..=0x7E.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Label(u8);

impl Label {
    /// TEXT file that preempts the run sequence until replaced
    pub const PRIORITY: Label = Label(b'0');

    /// Validate a raw label byte
    pub fn new(byte: u8) -> Result<Self, EncodeError> {
        if (0x20..=0x7E).contains(&byte) {
            Ok(Self(byte))
        } else {
            Err(EncodeError::Range(Bound::LabelNotPrintable))
        }
    }

    /// Validate a label given as a character
    pub fn from_char(c: char) -> Result<Self, EncodeError> {
        u8::try_from(c)
            .map_err(|_| EncodeError::Range(Bound::LabelNotPrintable))
            .and_then(Self::new)
    }

    /// Parse a label from a string holding exactly one character
    pub fn parse(input: &str) -> Result<Self, EncodeError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(EncodeError::Format(Grammar::Label)),
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        self.0
    }

    /// True for the priority TEXT file label
    pub fn is_priority(self) -> bool {
        self == Self::PRIORITY
    }
}

/// One style-tagged segment of a TEXT file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationBlock {
    pub style: StyleState,
    /// Text already transcoded to the sign charset, with insertion codes
    pub text: Vec<u8>,
}

impl AnimationBlock {
    pub fn new(style: StyleState, text: Vec<u8>) -> Self {
        Self { style, text }
    }

    /// Append the wire form: SOM + position + mode + color + text
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(SOM);
        out.extend_from_slice(self.style.position.code());
        out.extend_from_slice(self.style.mode.code());
        out.extend_from_slice(self.style.color.code());
        out.extend_from_slice(&self.text);
    }
}

/// A fully validated command ready to be framed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a TEXT file with the given animation blocks
    WriteText(Label, Vec<AnimationBlock>),
    /// Replace a STRING file
    WriteString(Label, Vec<u8>),
    /// Execute a special function
    WriteSpecial(SpecialFunction, Vec<u8>),
    /// Payload bytes supplied verbatim by the caller
    Raw(Vec<u8>),
}

impl Command {
    /// Empty priority TEXT file
    ///
    /// Releases a sign stuck on the priority message so it resumes its run
    /// sequence.
    pub fn resume_sequence() -> Self {
        Command::WriteText(Label::PRIORITY, Vec::new())
    }

    /// Soft reset special function
    pub fn soft_reset() -> Self {
        Command::WriteSpecial(SpecialFunction::SoftReset, Vec::new())
    }

    /// Raw passthrough: fragments concatenated verbatim
    ///
    /// At least one fragment is required.
    pub fn raw<S: AsRef<str>>(fragments: &[S]) -> Result<Self, EncodeError> {
        if fragments.is_empty() {
            return Err(EncodeError::Arity {
                expected: 1,
                got: 0,
            });
        }
        Ok(Command::Raw(concat_fragments(fragments)))
    }

    /// Encode this command into payload bytes
    pub fn to_payload(&self) -> Vec<u8> {
        let mut payload = Vec::new();
        match self {
            Command::WriteText(label, blocks) => {
                payload.push(CMD_WRITE_TEXT);
                payload.push(label.to_byte());
                for block in blocks {
                    block.encode_into(&mut payload);
                }
            }
            Command::WriteString(label, data) => {
                payload.push(CMD_WRITE_STRING);
                payload.push(label.to_byte());
                payload.extend_from_slice(data);
            }
            Command::WriteSpecial(function, data) => {
                payload.push(CMD_WRITE_SPECIAL);
                payload.push(function.to_byte());
                payload.extend_from_slice(data);
            }
            Command::Raw(data) => payload.extend_from_slice(data),
        }
        payload
    }
}

/// Concatenate UTF-8 fragments without separators
pub(crate) fn concat_fragments<S: AsRef<str>>(fragments: &[S]) -> Vec<u8> {
    let mut out = Vec::new();
    for fragment in fragments {
        out.extend_from_slice(fragment.as_ref().as_bytes());
    }
    out
}
