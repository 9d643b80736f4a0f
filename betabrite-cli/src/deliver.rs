//! Frame delivery
//!
//! Opens the configured link and pushes one frame through a paced
//! transport, or renders the frame as hex for `--dump`.

use std::fmt::Write as _;
use std::io::{self, Write};

use betabrite_hal::PacedTransport;
use betabrite_hal_usb::{AnyLink, BlockingPacer, IoLink, TransportError, UsbLink};
use tracing::debug;

use crate::config::{LinkTarget, Settings};

/// Open the link the settings point at
pub fn open_link(target: &LinkTarget) -> Result<AnyLink, TransportError> {
    Ok(match target {
        LinkTarget::Usb {
            vendor_id,
            product_id,
        } => AnyLink::Usb(UsbLink::open(*vendor_id, *product_id)?),
        LinkTarget::Serial(path) => {
            let file: Box<dyn Write + Send> = Box::new(IoLink::open_path(path)?.into_inner());
            AnyLink::Writer(IoLink::new(file))
        }
        LinkTarget::Stdout => {
            let stdout: Box<dyn Write + Send> = Box::new(io::stdout());
            AnyLink::Writer(IoLink::new(stdout))
        }
    })
}

/// Send one encoded frame to the sign
pub fn deliver(frame: &[u8], settings: &Settings) -> Result<(), TransportError> {
    let link = open_link(&settings.target)?;
    let mut transport = PacedTransport::new(link, BlockingPacer, settings.pacing);
    debug!(
        "sending {} byte frame (at least {} us)",
        frame.len(),
        settings.pacing.min_duration(frame.len()).as_micros()
    );
    transport.send(frame)?;
    debug!("frame delivered");
    Ok(())
}

/// Space-separated uppercase hex
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing to a String cannot fail
        let _ = write!(out, "{byte:02X}");
    }
    out
}
