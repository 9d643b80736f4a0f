//! Blocking pacer on the host clock

use betabrite_hal::Pacer;
use embassy_time::{block_for, Duration};

/// Busy-waits out each gap
///
/// Gaps are around a millisecond, well under the resolution thread sleeps
/// reliably hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingPacer;

impl Pacer for BlockingPacer {
    fn pause(&mut self, interval: Duration) {
        if interval.as_ticks() > 0 {
            block_for(interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_time::Instant;

    #[test]
    fn test_pause_waits_at_least_interval() {
        let start = Instant::now();
        BlockingPacer.pause(Duration::from_micros(500));
        assert!(start.elapsed() >= Duration::from_micros(500));
    }
}
