//! Frame rate measurement.

use std::time::Duration;

/// Instantaneous frames per second for one frame, truncated.
///
/// Measured at microsecond resolution; a zero duration counts as 1µs so the
/// division is always defined.
pub fn instantaneous_fps(elapsed: Duration) -> u32 {
    let micros = elapsed.as_micros().max(1);
    (1_000_000 / micros).min(u32::MAX as u128) as u32
}

/// Running per-frame FPS accumulator.
#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    frames: u64,
    total_fps: u64,
    last: Option<u32>,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame's elapsed time and return its instantaneous FPS.
    pub fn record(&mut self, elapsed: Duration) -> u32 {
        let fps = instantaneous_fps(elapsed);
        self.frames += 1;
        self.total_fps = self.total_fps.saturating_add(fps as u64);
        self.last = Some(fps);
        fps
    }

    /// Number of frames recorded.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// FPS of the most recent frame.
    pub fn last(&self) -> Option<u32> {
        self.last
    }

    /// Mean of the recorded instantaneous FPS values, truncated.
    ///
    /// `None` until at least one frame has been recorded.
    pub fn average(&self) -> Option<u32> {
        if self.frames == 0 {
            return None;
        }
        Some((self.total_fps / self.frames) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantaneous_fps() {
        assert_eq!(instantaneous_fps(Duration::from_millis(10)), 100);
        assert_eq!(instantaneous_fps(Duration::from_millis(16)), 62);
        assert_eq!(instantaneous_fps(Duration::from_secs(2)), 0);
    }

    #[test]
    fn test_zero_elapsed_is_defined() {
        assert_eq!(instantaneous_fps(Duration::ZERO), 1_000_000);
    }

    #[test]
    fn test_average_is_truncated_mean() {
        let mut meter = FpsMeter::new();
        assert_eq!(meter.record(Duration::from_millis(10)), 100);
        assert_eq!(meter.record(Duration::from_millis(16)), 62);
        assert_eq!(meter.record(Duration::from_millis(33)), 30);
        // (100 + 62 + 30) / 3 = 64
        assert_eq!(meter.average(), Some(64));
        assert_eq!(meter.frames(), 3);
        assert_eq!(meter.last(), Some(30));
    }

    #[test]
    fn test_average_without_frames() {
        let meter = FpsMeter::new();
        assert_eq!(meter.average(), None);
        assert_eq!(meter.last(), None);
    }
}
