//! Alpha Sign Communications Protocol
//!
//! This crate defines the wire side of talking to BetaBrite / Alpha LED
//! signs: protocol enumerations, command payload encoders and framing.
//! It is `no_std` (with `alloc`) and performs no I/O.
//!
//! # Protocol Overview
//!
//! Every transmission is one frame:
//! ```text
//! ┌────────┬─────┬──────┬─────────┬─────┬───────────────────┬─────┐
//! │ WAKEUP │ SOH │ TYPE │ ADDRESS │ STX │ PAYLOAD           │ EOT │
//! │ 5×NUL  │ 1B  │ 1B   │ 2B      │ 1B  │ CMD + LABEL + ... │ 1B  │
//! └────────┴─────┴──────┴─────────┴─────┴───────────────────┴─────┘
//! ```
//!
//! Payloads are produced by one of the encoder paths:
//! - TEXT files from compiled [`AnimationBlock`]s
//! - STRING files ([`string_file::write_string`])
//! - special functions ([`special`], [`memory`])
//! - raw passthrough ([`Command::raw`])
//!
//! All validation happens before any byte is produced.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod codes;
pub mod command;
pub mod error;
pub mod frame;
pub mod memory;
pub mod sign;
pub mod special;
pub mod string_file;
pub mod style;

pub use codes::SpecialFunction;
pub use command::{AnimationBlock, Command, Label};
pub use error::{Bound, DescriptorError, EncodeError, Grammar, Misconfiguration};
pub use frame::{decode_frame, encode_frame, Frame, FrameError, FrameParser};
pub use memory::{FileKind, MemoryFileSpec};
pub use sign::{Address, SignType};
pub use style::{Color, Mode, Position, StyleState};
