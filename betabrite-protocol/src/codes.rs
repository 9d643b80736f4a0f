//! Wire constants for the Alpha sign communications protocol
//!
//! Control bytes, command codes and the in-text control sequences that the
//! compiler splices into message text.

// Frame control bytes
pub const NUL: u8 = 0x00;
pub const SOH: u8 = 0x01;
pub const STX: u8 = 0x02;
pub const EOT: u8 = 0x04;

/// Number of NUL bytes sent before every frame. The sign uses them to wake up
/// and lock onto the line speed.
pub const WAKEUP_LEN: usize = 5;

/// Wake-up sequence prepended to every frame
pub const WAKEUP: [u8; WAKEUP_LEN] = [NUL; WAKEUP_LEN];

// Command codes (first payload byte)
pub const CMD_WRITE_TEXT: u8 = b'A';
pub const CMD_WRITE_SPECIAL: u8 = b'E';
pub const CMD_WRITE_STRING: u8 = b'G';

/// Start of mode: introduces an animation block inside a TEXT file
pub const SOM: u8 = 0x1B;

// In-text insertion codes
pub const STRING_FILE_INSERT: u8 = 0x10;
pub const CURTIME_INSERT: u8 = 0x13;
pub const CURDATE_PREFIX: u8 = 0x0B;
pub const CURDATE_MMDDYY_SLASH: [u8; 2] = [CURDATE_PREFIX, 0x30];
pub const CURDATE_WEEKDAY: [u8; 2] = [CURDATE_PREFIX, 0x39];

/// Sign charset code for the degree glyph
pub const DEGREES: u8 = 0xA9;

/// UTF-8 encoding of U+00B0 DEGREE SIGN
pub const UTF8_DEGREE: [u8; 2] = [0xC2, 0xB0];

/// Special function subcodes (second payload byte of a WRITE SPECIAL command)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpecialFunction {
    /// Set the time of day (`HHMM`)
    SetTime,
    /// Clear or configure the memory layout
    MemoryConfig,
    /// Set the day of week (`1`..`7`)
    SetDay,
    /// Soft reset the sign
    SoftReset,
    /// Set the run sequence of TEXT files
    SetSequence,
    /// Set the date (`MMDDYY`)
    SetDate,
}

impl SpecialFunction {
    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            SpecialFunction::SetTime => 0x20,
            SpecialFunction::MemoryConfig => 0x24,
            SpecialFunction::SetDay => 0x26,
            SpecialFunction::SoftReset => 0x2C,
            SpecialFunction::SetSequence => 0x2E,
            SpecialFunction::SetDate => 0x3B,
        }
    }

    /// Parse a subcode from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x20 => Some(SpecialFunction::SetTime),
            0x24 => Some(SpecialFunction::MemoryConfig),
            0x26 => Some(SpecialFunction::SetDay),
            0x2C => Some(SpecialFunction::SoftReset),
            0x2E => Some(SpecialFunction::SetSequence),
            0x3B => Some(SpecialFunction::SetDate),
            _ => None,
        }
    }
}
