//! Transport errors

use thiserror::Error;

/// Failure to reach the sign or to deliver bytes to it
#[derive(Debug, Error)]
pub enum TransportError {
    /// No device with the configured vendor and product id is attached
    #[error("sign not found (USB {vendor_id:04x}:{product_id:04x})")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },

    /// The device exposes no OUT endpoint on its first interface
    #[error("sign has no OUT endpoint")]
    NoOutEndpoint,

    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The link accepted fewer bytes than it was given
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
}
