//! Encoding errors
//!
//! Every encoder validates its whole input before producing bytes, so an
//! error always means nothing was encoded.

use core::fmt;

/// Literal input grammars checked by the encoders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Grammar {
    /// `HH:MM`
    Time,
    /// `MM/DD/YY`
    Date,
    /// Single digit `1`..`7`
    DayOfWeek,
    /// 3-130 ASCII letters and digits
    Sequence,
    /// `s[<label>,<size>]` or `t[<label>,<size>]`
    MemoryDescriptor,
    /// Two characters, each a hex digit or `?`
    Address,
    /// Exactly one character
    Label,
}

impl Grammar {
    /// Human readable description of the expected format
    pub fn expected(self) -> &'static str {
        match self {
            Grammar::Time => "time must be in the format HH:MM (24-hour clock)",
            Grammar::Date => "date must be in the format MM/DD/YY",
            Grammar::DayOfWeek => {
                "day of week must be a number from 1 to 7 (1=Sunday, 2=Monday, ...)"
            }
            Grammar::Sequence => "sequence must be 3-130 characters of A-Z, a-z and 0-9",
            Grammar::MemoryDescriptor => {
                "file descriptor must be type[label,size_in_bytes] such as s[A,125]; \
                 type is 's' for string or 't' for text"
            }
            Grammar::Address => "address must be two characters, each 0-9, A-F or ?",
            Grammar::Label => "label must be a single character",
        }
    }
}

/// Protocol bounds a value can violate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bound {
    /// Label outside 0x20..=0x7E
    LabelNotPrintable,
    /// Label `0` is reserved for the priority TEXT file
    PriorityLabel,
    /// STRING files cannot use label `?`
    StringLabel,
    /// File size above 65535 bytes
    FileSize,
    /// STRING file size above 125 bytes
    StringSize,
}

impl Bound {
    /// Human readable description of the bound
    pub fn describe(self) -> &'static str {
        match self {
            Bound::LabelNotPrintable => "label must be in the range 0x20 through 0x7E",
            Bound::PriorityLabel => "file 0 is the priority message and cannot be configured",
            Bound::StringLabel => "strings cannot use the labels 0 or ?",
            Bound::FileSize => "file size cannot exceed 65535 bytes",
            Bound::StringSize => "string files cannot be larger than 125 bytes",
        }
    }
}

/// Invalid combinations of command options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Misconfiguration {
    /// The named mode is not a special function
    UnknownSpecialMode,
    /// The named sign type does not exist
    UnknownSignType,
}

/// Errors raised while validating and encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Input does not match its literal grammar
    Format(Grammar),
    /// Value outside protocol-permitted bounds
    Range(Bound),
    /// Wrong number of data arguments
    Arity { expected: usize, got: usize },
    /// Invalid mode/kind combination
    Configuration(Misconfiguration),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Format(grammar) => f.write_str(grammar.expected()),
            EncodeError::Range(bound) => f.write_str(bound.describe()),
            EncodeError::Arity { expected, got } => write!(
                f,
                "expected {expected} data argument(s) for this function, got {got}"
            ),
            EncodeError::Configuration(Misconfiguration::UnknownSpecialMode) => {
                f.write_str("mode is not one of settime, setdate, setday, setsequence")
            }
            EncodeError::Configuration(Misconfiguration::UnknownSignType) => {
                f.write_str("unknown sign type")
            }
        }
    }
}

impl core::error::Error for EncodeError {}

/// A memory descriptor failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DescriptorError {
    /// Position of the offending descriptor in the input list
    pub index: usize,
    pub error: EncodeError,
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "descriptor #{}: {}", self.index + 1, self.error)
    }
}

impl core::error::Error for DescriptorError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<DescriptorError> for EncodeError {
    fn from(e: DescriptorError) -> Self {
        e.error
    }
}
