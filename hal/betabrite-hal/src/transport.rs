//! Paced frame delivery
//!
//! The sign cannot absorb a full-speed burst, so frames go out in small
//! writes separated by the configured gap. Only one frame is in flight at a
//! time: [`PacedTransport::send`] takes `&mut self` and returns once the
//! whole frame has been written and flushed.

use crate::link::{LinkConfig, Pacer, SignLink};

/// Delivers encoded frames over a link with inter-byte pacing
pub struct PacedTransport<L, P> {
    link: L,
    pacer: P,
    config: LinkConfig,
}

impl<L: SignLink, P: Pacer> PacedTransport<L, P> {
    /// Create a transport over `link`
    pub fn new(link: L, pacer: P, config: LinkConfig) -> Self {
        Self {
            link,
            pacer,
            config,
        }
    }

    /// Current pacing configuration
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Send one encoded frame
    ///
    /// On error the rest of the frame is abandoned; the sign discards a
    /// frame that never reaches EOT.
    pub fn send(&mut self, frame: &[u8]) -> Result<(), L::Error> {
        let chunk_size = self.config.chunk_size.max(1);
        for (i, chunk) in frame.chunks(chunk_size).enumerate() {
            if i > 0 {
                self.pacer.pause(self.config.inter_byte_delay);
            }
            self.link.write_blocking(chunk)?;
        }
        self.link.flush()
    }

    /// Borrow the underlying link
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Give back the link and pacer
    pub fn release(self) -> (L, P) {
        (self.link, self.pacer)
    }
}
