//! Sign addressing: sign type selector and two character sign address

use crate::error::{EncodeError, Grammar, Misconfiguration};

/// Sign type byte sent after SOH
///
/// Selects which class of sign should act on a frame. Some values carry
/// extra semantics (`AllVerify` makes the sign report the transmission
/// result, `AllConfig` auto-configures memory before executing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SignType {
    /// All signs; display TRANSMISSION OK / ERROR afterwards
    AllVerify = b'!',
    SerialClock = b'"',
    AlphaVision = b'#',
    AlphaVisionFullMatrix = b'$',
    AlphaVisionCharMatrix = b'%',
    AlphaVisionLineMatrix = b'&',
    /// Sign response frames
    Response = b'0',
    OneLine = b'1',
    TwoLine = b'2',
    /// All signs except BetaBrite
    AllButBetaBrite = b'?',
    Model430i = b'C',
    Model440i = b'D',
    Model460i = b'E',
    Model790i = b'U',
    /// All signs
    #[default]
    All = b'Z',
    BetaBrite = b'^',
    Model4120C = b'a',
    Model4160C = b'b',
    Model4200C = b'c',
    Model4240C = b'd',
    Model215 = b'e',
    Model215C = b'f',
    Model4120R = b'g',
    Model4160R = b'h',
    Model4200R = b'i',
    Model4240R = b'j',
    Model300 = b'k',
    Model7000 = b'l',
    Solar96x16 = b'm',
    Solar128x16 = b'n',
    Solar160x16 = b'o',
    Solar192x16 = b'p',
    SolarPpd = b'q',
    Director = b'r',
    Model4080C = b't',
    /// 210C and 220C
    Model2x0C = b'u',
    /// All signs; configure 26 files of 150 bytes, then execute
    AllConfig = b'z',
}

/// Names accepted in configuration files and on the command line
const SIGN_TYPE_NAMES: &[(&str, SignType)] = &[
    ("verify", SignType::AllVerify),
    ("serial-clock", SignType::SerialClock),
    ("alphavision", SignType::AlphaVision),
    ("alphavision-full", SignType::AlphaVisionFullMatrix),
    ("alphavision-char", SignType::AlphaVisionCharMatrix),
    ("alphavision-line", SignType::AlphaVisionLineMatrix),
    ("response", SignType::Response),
    ("one-line", SignType::OneLine),
    ("two-line", SignType::TwoLine),
    ("all-but-betabrite", SignType::AllButBetaBrite),
    ("430i", SignType::Model430i),
    ("440i", SignType::Model440i),
    ("460i", SignType::Model460i),
    ("790i", SignType::Model790i),
    ("all", SignType::All),
    ("betabrite", SignType::BetaBrite),
    ("4120c", SignType::Model4120C),
    ("4160c", SignType::Model4160C),
    ("4200c", SignType::Model4200C),
    ("4240c", SignType::Model4240C),
    ("215", SignType::Model215),
    ("215c", SignType::Model215C),
    ("4120r", SignType::Model4120R),
    ("4160r", SignType::Model4160R),
    ("4200r", SignType::Model4200R),
    ("4240r", SignType::Model4240R),
    ("300", SignType::Model300),
    ("7000", SignType::Model7000),
    ("solar-96x16", SignType::Solar96x16),
    ("solar-128x16", SignType::Solar128x16),
    ("solar-160x16", SignType::Solar160x16),
    ("solar-192x16", SignType::Solar192x16),
    ("ppd", SignType::SolarPpd),
    ("director", SignType::Director),
    ("4080c", SignType::Model4080C),
    ("2x0c", SignType::Model2x0C),
    ("all-config", SignType::AllConfig),
];

impl SignType {
    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Short name used in configuration files and on the command line
    pub fn name(self) -> &'static str {
        SIGN_TYPE_NAMES
            .iter()
            .find(|(_, t)| *t == self)
            .map_or("all", |(name, _)| name)
    }

    /// Parse a sign type from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        SIGN_TYPE_NAMES
            .iter()
            .map(|(_, t)| *t)
            .find(|t| t.to_byte() == byte)
    }

    /// Parse a sign type from its name (case-insensitive) or its single
    /// character wire code
    pub fn parse(input: &str) -> Result<Self, EncodeError> {
        if let Some((_, t)) = SIGN_TYPE_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(input))
        {
            return Ok(*t);
        }
        match input.as_bytes() {
            [byte] => Self::from_byte(*byte),
            _ => None,
        }
        .ok_or(EncodeError::Configuration(Misconfiguration::UnknownSignType))
    }
}

/// Two character sign address
///
/// Each character is a hex digit or `?`, which wildcards that digit
/// (`0?` addresses `01`..`0F`). `00` is broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address([u8; 2]);

impl Default for Address {
    fn default() -> Self {
        Self::BROADCAST
    }
}

impl Address {
    /// Broadcast to every sign on the line
    pub const BROADCAST: Address = Address(*b"00");

    /// Build an address from raw bytes without validation
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Parse and validate an address string
    pub fn parse(input: &str) -> Result<Self, EncodeError> {
        let [hi, lo] = input.as_bytes() else {
            return Err(EncodeError::Format(Grammar::Address));
        };
        let digit = |b: u8| -> Result<u8, EncodeError> {
            if b == b'?' || b.is_ascii_hexdigit() {
                Ok(b.to_ascii_uppercase())
            } else {
                Err(EncodeError::Format(Grammar::Address))
            }
        };
        Ok(Self([digit(*hi)?, digit(*lo)?]))
    }

    /// Wire bytes of the address
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// True if either digit is a wildcard
    pub fn is_wildcard(&self) -> bool {
        self.0.contains(&b'?')
    }
}
