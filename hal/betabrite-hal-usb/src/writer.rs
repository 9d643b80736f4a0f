//! `std::io::Write` link
//!
//! Serial TTYs, capture files and stdout all accept frames through the same
//! adapter.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use betabrite_hal::SignLink;
use tracing::{info, trace};

use crate::error::TransportError;

/// Link over any byte writer
pub struct IoLink<W> {
    writer: W,
}

impl<W: Write> IoLink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl IoLink<std::fs::File> {
    /// Open a character device or file for writing
    ///
    /// The port's line settings (9600 8N1 for serial signs) are left as
    /// configured by the OS.
    pub fn open_path(path: &Path) -> Result<Self, TransportError> {
        let file = OpenOptions::new().write(true).open(path)?;
        info!("opened sign link {}", path.display());
        Ok(Self::new(file))
    }
}

impl<W: Write> SignLink for IoLink<W> {
    type Error = TransportError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.writer.write_all(data)?;
        trace!("wrote {} bytes", data.len());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use betabrite_hal::{LinkConfig, NoPacing, PacedTransport};

    #[test]
    fn test_io_link_collects_frame() {
        let mut transport = PacedTransport::new(
            IoLink::new(Vec::new()),
            NoPacing,
            LinkConfig::default(),
        );
        transport.send(b"\x00\x00\x00\x00\x00\x01Z00\x02A0\x04").unwrap();
        let (link, _) = transport.release();
        assert_eq!(link.into_inner(), b"\x00\x00\x00\x00\x00\x01Z00\x02A0\x04");
    }

    #[test]
    fn test_open_missing_path() {
        let result = IoLink::open_path(Path::new("/nonexistent/betabrite-tty"));
        assert!(matches!(result, Err(TransportError::Io(_))));
    }
}
