//! Memory configuration encoder
//!
//! The sign's memory is partitioned into labelled TEXT and STRING files by a
//! single special function. Descriptors are written `s[A,125]` (STRING file
//! `A`, 125 bytes) or `t[B,2048]` (TEXT file `B`, 2048 bytes).
//!
//! Parsing and encoding are separate passes: the whole descriptor list is
//! validated into [`MemoryFileSpec`]s first, and bytes are produced only if
//! every descriptor is valid. An empty list clears all files.

use alloc::vec::Vec;

use crate::codes::SpecialFunction;
use crate::command::{Command, Label};
use crate::error::{Bound, DescriptorError, EncodeError, Grammar};

/// Largest STRING file the sign accepts
pub const MAX_STRING_FILE_SIZE: u16 = 125;

/// Bytes per encoded file entry: label + attribute(2) + size(4) + hold time(4)
pub const FILE_ENTRY_LEN: usize = 11;

/// Kind of file being reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FileKind {
    /// Locked STRING file
    String,
    /// Unlocked TEXT file
    Text,
}

impl FileKind {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b's' => Some(FileKind::String),
            b't' => Some(FileKind::Text),
            _ => None,
        }
    }

    /// File type and keyboard-protection attribute
    pub fn attribute(self) -> &'static [u8; 2] {
        match self {
            FileKind::String => b"BL",
            FileKind::Text => b"AU",
        }
    }

    /// Hold time field; TEXT files run all day
    pub fn hold_time(self) -> &'static [u8; 4] {
        match self {
            FileKind::String => b"0000",
            FileKind::Text => b"00FF",
        }
    }
}

/// One validated file reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryFileSpec {
    pub kind: FileKind,
    pub label: Label,
    pub size_bytes: u16,
}

impl MemoryFileSpec {
    /// Parse and validate one descriptor
    pub fn parse(descriptor: &str) -> Result<Self, EncodeError> {
        let (kind, label, digits) =
            split_descriptor(descriptor).ok_or(EncodeError::Format(Grammar::MemoryDescriptor))?;

        let label = Label::from_char(label)?;
        if label.is_priority() {
            return Err(EncodeError::Range(Bound::PriorityLabel));
        }
        if kind == FileKind::String && label.to_byte() == b'?' {
            return Err(EncodeError::Range(Bound::StringLabel));
        }

        let size_bytes = parse_size(digits).ok_or(EncodeError::Range(Bound::FileSize))?;
        if kind == FileKind::String && size_bytes > MAX_STRING_FILE_SIZE {
            return Err(EncodeError::Range(Bound::StringSize));
        }

        Ok(Self {
            kind,
            label,
            size_bytes,
        })
    }

    /// Append the 11 byte file entry
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(self.label.to_byte());
        out.extend_from_slice(self.kind.attribute());
        push_hex4(out, self.size_bytes);
        out.extend_from_slice(self.kind.hold_time());
    }
}

/// Split `k[L,digits]` into its parts without validating their values
fn split_descriptor(descriptor: &str) -> Option<(FileKind, char, &str)> {
    let kind = FileKind::from_byte(*descriptor.as_bytes().first()?)?;
    let body = descriptor.get(1..)?.strip_prefix('[')?.strip_suffix(']')?;

    let mut chars = body.chars();
    let label = chars.next()?;
    let digits = chars.as_str().strip_prefix(',')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((kind, label, digits))
}

/// Decimal size, `None` above 65535
fn parse_size(digits: &str) -> Option<u16> {
    digits.bytes().try_fold(0u16, |acc, b| {
        acc.checked_mul(10)?.checked_add(u16::from(b - b'0'))
    })
}

fn push_hex4(out: &mut Vec<u8>, value: u16) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for shift in [12, 8, 4, 0] {
        out.push(HEX[usize::from((value >> shift) & 0xF)]);
    }
}

/// Validate every descriptor, stopping at the first bad one
pub fn parse_memory_layout<S: AsRef<str>>(
    descriptors: &[S],
) -> Result<Vec<MemoryFileSpec>, DescriptorError> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, d)| {
            MemoryFileSpec::parse(d.as_ref()).map_err(|error| DescriptorError { index, error })
        })
        .collect()
}

/// Encode an already validated layout
pub fn encode_memory_layout(files: &[MemoryFileSpec]) -> Command {
    let mut data = Vec::with_capacity(files.len() * FILE_ENTRY_LEN);
    for file in files {
        file.encode_into(&mut data);
    }
    Command::WriteSpecial(SpecialFunction::MemoryConfig, data)
}

/// Parse and encode a descriptor list in one step (all-or-nothing)
pub fn configure_memory<S: AsRef<str>>(descriptors: &[S]) -> Result<Command, DescriptorError> {
    let files = parse_memory_layout(descriptors)?;
    Ok(encode_memory_layout(&files))
}

/// Clear every TEXT and STRING file
pub fn clear_memory() -> Command {
    encode_memory_layout(&[])
}
