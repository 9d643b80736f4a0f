//! Frame encoding and decoding for the Alpha sign protocol.
//!
//! Frame format:
//! - WAKEUP (5 bytes): NUL bytes, lets the sign detect the baud rate
//! - SOH (1 byte): 0x01 start of header
//! - TYPE (1 byte): sign type selector
//! - ADDRESS (2 bytes): sign address, `00` is broadcast
//! - STX (1 byte): 0x02 start of text
//! - PAYLOAD (n bytes): command code + command data
//! - EOT (1 byte): 0x04 end of transmission

use alloc::vec::Vec;
use heapless::Vec as HVec;

use crate::codes::{EOT, NUL, SOH, STX, WAKEUP, WAKEUP_LEN};
use crate::command::Command;
use crate::sign::{Address, SignType};

/// Bytes a frame adds around its payload
pub const FRAME_OVERHEAD: usize = WAKEUP_LEN + 1 + 1 + 2 + 1 + 1;

/// Errors that can occur during frame parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Fewer NUL bytes than the wake-up sequence needs before SOH
    ShortWakeup,
    /// Unexpected byte where a marker was required
    InvalidFrame,
    /// Sign type byte is not a known sign type
    UnknownSignType,
    /// Input ended before EOT
    Incomplete,
}

/// A complete transmission unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub address: Address,
    pub sign_type: SignType,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Create a frame around an already encoded payload
    pub fn new(address: Address, sign_type: SignType, payload: Vec<u8>) -> Self {
        Self {
            address,
            sign_type,
            payload,
        }
    }

    /// Frame a command
    pub fn for_command(address: Address, sign_type: SignType, command: &Command) -> Self {
        Self::new(address, sign_type, command.to_payload())
    }

    /// Frame a command for all signs at the broadcast address
    pub fn broadcast(command: &Command) -> Self {
        Self::for_command(Address::BROADCAST, SignType::All, command)
    }

    /// Encode this frame into wire bytes
    pub fn encode(&self) -> Vec<u8> {
        encode_frame(&self.payload, self.address, self.sign_type)
    }
}

/// Wrap a payload in protocol framing
///
/// Performs no validation; the payload is expected to be well formed.
pub fn encode_frame(payload: &[u8], address: Address, sign_type: SignType) -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
    out.extend_from_slice(&WAKEUP);
    out.push(SOH);
    out.push(sign_type.to_byte());
    out.extend_from_slice(address.as_bytes());
    out.push(STX);
    out.extend_from_slice(payload);
    out.push(EOT);
    out
}

/// State machine for parsing frames byte by byte
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    wakeup_count: usize,
    sign_type: SignType,
    address: HVec<u8, 2>,
    payload: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Counting NUL bytes, waiting for SOH
    WaitingForHeader,
    /// Got SOH, waiting for TYPE
    WaitingForType,
    /// Reading the two address bytes
    ReadingAddress,
    /// Waiting for STX
    WaitingForText,
    /// Reading payload bytes until EOT
    ReadingPayload,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a new frame parser
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForHeader,
            wakeup_count: 0,
            sign_type: SignType::default(),
            address: HVec::new(),
            payload: Vec::new(),
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForHeader;
        self.wakeup_count = 0;
        self.address.clear();
        self.payload.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on parse error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::WaitingForHeader => match byte {
                NUL => {
                    self.wakeup_count += 1;
                    Ok(None)
                }
                SOH if self.wakeup_count >= WAKEUP_LEN => {
                    self.state = ParseState::WaitingForType;
                    Ok(None)
                }
                SOH => {
                    self.reset();
                    Err(FrameError::ShortWakeup)
                }
                _ => {
                    // Line noise before the wake-up run
                    self.wakeup_count = 0;
                    Ok(None)
                }
            },
            ParseState::WaitingForType => {
                let Some(sign_type) = SignType::from_byte(byte) else {
                    self.reset();
                    return Err(FrameError::UnknownSignType);
                };
                self.sign_type = sign_type;
                self.state = ParseState::ReadingAddress;
                Ok(None)
            }
            ParseState::ReadingAddress => {
                // Capacity is 2 and the state changes once it is full
                let _ = self.address.push(byte);
                if self.address.is_full() {
                    self.state = ParseState::WaitingForText;
                }
                Ok(None)
            }
            ParseState::WaitingForText => {
                if byte != STX {
                    self.reset();
                    return Err(FrameError::InvalidFrame);
                }
                self.payload.clear();
                self.state = ParseState::ReadingPayload;
                Ok(None)
            }
            ParseState::ReadingPayload => {
                if byte != EOT {
                    self.payload.push(byte);
                    return Ok(None);
                }
                let address = Address::from_bytes([self.address[0], self.address[1]]);
                let frame = Frame {
                    address,
                    sign_type: self.sign_type,
                    payload: core::mem::take(&mut self.payload),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}

/// Decode exactly one frame from a byte slice
pub fn decode_frame(bytes: &[u8]) -> Result<Frame, FrameError> {
    FrameParser::new()
        .feed_bytes(bytes)?
        .ok_or(FrameError::Incomplete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    #[test]
    fn test_frame_layout() {
        let bytes = encode_frame(b"E$", Address::BROADCAST, SignType::All);
        assert_eq!(
            bytes,
            vec![0, 0, 0, 0, 0, 0x01, b'Z', b'0', b'0', 0x02, b'E', b'$', 0x04]
        );
        assert_eq!(bytes.len(), FRAME_OVERHEAD + 2);
    }

    #[test]
    fn test_frame_encode_empty_payload() {
        let frame = Frame::new(Address::BROADCAST, SignType::BetaBrite, Vec::new());
        let bytes = frame.encode();
        assert_eq!(bytes.len(), FRAME_OVERHEAD);
        assert_eq!(bytes[6], b'^');
        assert_eq!(bytes[bytes.len() - 1], EOT);
    }

    #[test]
    fn test_broadcast_command() {
        let frame = Frame::broadcast(&Command::resume_sequence());
        assert_eq!(frame.address, Address::BROADCAST);
        assert_eq!(frame.sign_type, SignType::All);
        assert_eq!(frame.payload, b"A0");
    }

    #[test]
    fn test_frame_roundtrip() {
        let original = Frame::new(
            Address::parse("1?").unwrap(),
            SignType::AllVerify,
            b"GAhello".to_vec(),
        );
        let parsed = decode_frame(&original.encode()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parser_short_wakeup() {
        let mut bytes = encode_frame(b"A0", Address::BROADCAST, SignType::All);
        bytes.remove(0);
        assert_eq!(decode_frame(&bytes), Err(FrameError::ShortWakeup));
    }

    #[test]
    fn test_parser_missing_stx() {
        let mut bytes = encode_frame(b"A0", Address::BROADCAST, SignType::All);
        bytes[9] = b'X';
        assert_eq!(decode_frame(&bytes), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_parser_incomplete() {
        let bytes = encode_frame(b"A0", Address::BROADCAST, SignType::All);
        assert_eq!(
            decode_frame(&bytes[..bytes.len() - 1]),
            Err(FrameError::Incomplete)
        );
    }

    #[test]
    fn test_parser_resync_after_garbage() {
        let mut data = vec![0xFF, 0x12, 0x00, 0x34];
        data.extend(encode_frame(b"E,", Address::BROADCAST, SignType::All));

        let parsed = decode_frame(&data).unwrap();
        assert_eq!(parsed.payload, b"E,");
    }

    #[test]
    fn test_parser_accepts_long_wakeup() {
        let mut data = vec![0u8; 10];
        data.extend_from_slice(&encode_frame(b"A0", Address::BROADCAST, SignType::All)[WAKEUP_LEN..]);
        assert!(decode_frame(&data).is_ok());
    }

    fn address_digit() -> impl Strategy<Value = u8> {
        prop_oneof![
            (b'0'..=b'9'),
            (b'A'..=b'F'),
            Just(b'?'),
        ]
    }

    proptest! {
        #[test]
        fn prop_header_roundtrip(
            hi in address_digit(),
            lo in address_digit(),
            type_index in 0usize..5,
            payload in proptest::collection::vec(0x05u8..=0xFF, 0..64),
        ) {
            let sign_types = [
                SignType::All,
                SignType::AllVerify,
                SignType::BetaBrite,
                SignType::AllConfig,
                SignType::TwoLine,
            ];
            let address = Address::from_bytes([hi, lo]);
            let sign_type = sign_types[type_index];
            let bytes = encode_frame(&payload, address, sign_type);

            prop_assert!(bytes[..WAKEUP_LEN].iter().all(|&b| b == NUL));
            prop_assert_eq!(bytes[WAKEUP_LEN], SOH);
            prop_assert_eq!(bytes[WAKEUP_LEN + 4], STX);

            let frame = decode_frame(&bytes).unwrap();
            prop_assert_eq!(frame.address, address);
            prop_assert_eq!(frame.sign_type, sign_type);
            prop_assert_eq!(frame.payload, payload);
        }
    }
}
