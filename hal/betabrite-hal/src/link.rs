//! Sign link abstractions
//!
//! A link is the byte sink the sign hangs off: a USB bulk endpoint, a serial
//! port, or anything else that accepts raw bytes.

use embassy_time::Duration;

/// Gap the sign needs between bytes to keep its receive buffer from
/// overrunning
pub const DEFAULT_INTER_BYTE_DELAY: Duration = Duration::from_millis(1);

/// Byte sink towards the sign
pub trait SignLink {
    /// Error type for write operations
    type Error;

    /// Write data to the link
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<T: SignLink + ?Sized> SignLink for &mut T {
    type Error = T::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_blocking(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// Waits out the gap between paced writes
pub trait Pacer {
    /// Block for at least `interval`
    fn pause(&mut self, interval: Duration);
}

/// Pacer that never waits, for links with their own flow control
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self, _interval: Duration) {}
}

/// Link pacing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Minimum gap between consecutive writes
    pub inter_byte_delay: Duration,
    /// Bytes per write (1 = strictly byte-at-a-time)
    pub chunk_size: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            inter_byte_delay: DEFAULT_INTER_BYTE_DELAY,
            chunk_size: 1,
        }
    }
}

impl LinkConfig {
    /// Byte-at-a-time pacing with the given gap in microseconds
    pub fn with_delay_us(micros: u64) -> Self {
        Self {
            inter_byte_delay: Duration::from_micros(micros),
            ..Self::default()
        }
    }

    /// Shortest possible time to deliver `len` bytes
    ///
    /// Saturates at [`Duration::MAX`].
    pub fn min_duration(&self, len: usize) -> Duration {
        let chunks = len.div_ceil(self.chunk_size.max(1));
        u32::try_from(chunks.saturating_sub(1))
            .ok()
            .and_then(|gaps| self.inter_byte_delay.checked_mul(gaps))
            .unwrap_or(Duration::MAX)
    }
}
