//! Host transports for BetaBrite / Alpha LED signs
//!
//! This crate provides `std` implementations of the `betabrite-hal` traits:
//!
//! - [`usb::UsbLink`] - USB signs (libusb via `rusb`)
//! - [`writer::IoLink`] - serial TTYs, files, stdout
//! - [`pacer::BlockingPacer`] - host clock inter-byte delay
//! - [`AnyLink`] - runtime choice between the above

pub mod error;
pub mod pacer;
pub mod usb;
pub mod writer;

use std::io::Write;

use betabrite_hal::SignLink;

pub use error::TransportError;
pub use pacer::BlockingPacer;
pub use usb::{UsbLink, DEFAULT_PRODUCT_ID, DEFAULT_VENDOR_ID};
pub use writer::IoLink;

/// A link selected at runtime
pub enum AnyLink {
    Usb(UsbLink),
    Writer(IoLink<Box<dyn Write + Send>>),
}

impl SignLink for AnyLink {
    type Error = TransportError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), TransportError> {
        match self {
            AnyLink::Usb(link) => link.write_blocking(data),
            AnyLink::Writer(link) => link.write_blocking(data),
        }
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        match self {
            AnyLink::Usb(link) => link.flush(),
            AnyLink::Writer(link) => link.flush(),
        }
    }
}
