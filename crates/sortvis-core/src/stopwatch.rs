#![forbid(unsafe_code)]

//! Pause-aware elapsed time.
//!
//! [`Stopwatch`] accumulates the deltas it is ticked with, but only while
//! running. Time that passes while stopped is simply never added, which is
//! how paused intervals drop out of a lane's elapsed time.
//!
//! # Example
//!
//! ```rust
//! use sortvis_core::stopwatch::Stopwatch;
//! use std::time::Duration;
//!
//! let mut sw = Stopwatch::new();
//! sw.tick(Duration::from_secs(1));
//! assert_eq!(sw.elapsed(), Duration::ZERO);
//!
//! sw.start();
//! sw.tick(Duration::from_secs(1));
//! assert_eq!(sw.elapsed(), Duration::from_secs(1));
//! ```

use std::time::Duration;

/// Elapsed-time accumulator with start/stop/reset semantics.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    elapsed: Duration,
    running: bool,
}

impl Stopwatch {
    /// Creates a stopped stopwatch at zero elapsed time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the elapsed time.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns whether the stopwatch is currently running.
    #[must_use]
    pub fn running(&self) -> bool {
        self.running
    }

    /// Starts (or resumes) the stopwatch.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops (pauses) the stopwatch.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resets elapsed time to zero and stops.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    /// Advances the stopwatch by `delta` if running.
    /// Returns `true` if the tick was applied.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.running {
            self.elapsed = self.elapsed.saturating_add(delta);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_ignores_ticks() {
        let mut sw = Stopwatch::new();
        assert!(!sw.tick(Duration::from_millis(10)));
        assert_eq!(sw.elapsed(), Duration::ZERO);
    }

    #[test]
    fn pause_excludes_time() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.tick(Duration::from_millis(300));
        sw.stop();
        sw.tick(Duration::from_secs(5));
        sw.start();
        sw.tick(Duration::from_millis(200));
        assert_eq!(sw.elapsed(), Duration::from_millis(500));
    }

    #[test]
    fn reset_zeroes_and_stops() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.tick(Duration::from_secs(1));
        sw.reset();
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert!(!sw.running());
    }
}
