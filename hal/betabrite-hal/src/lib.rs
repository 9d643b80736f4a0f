//! BetaBrite Hardware Abstraction Layer
//!
//! This crate defines the transport boundary between encoded frames and the
//! physical link to a sign. Concrete links (USB, serial, files) live in
//! separate crates so the encoders never depend on an I/O stack.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (betabrite-cli)            │
//! └─────────────────────────────────────────┘
//!                     │ framed bytes
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  betabrite-hal (PacedTransport, traits) │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   USB bulk    │       │  io::Write    │
//! │   endpoint    │       │  (tty, file)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`link::SignLink`] - Blocking byte sink
//! - [`link::Pacer`] - Inter-write delay

#![no_std]
#![deny(unsafe_code)]

pub mod link;
pub mod transport;

// Re-export key types at crate root for convenience
pub use link::{LinkConfig, NoPacing, Pacer, SignLink, DEFAULT_INTER_BYTE_DELAY};
pub use transport::PacedTransport;
