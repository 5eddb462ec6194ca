#![forbid(unsafe_code)]

//! Step pacing.
//!
//! A [`Pacer`] turns a speed setting into a per-step delay and decides, per
//! tick, whether enough time has passed since the last consumed step to pull
//! the next one.
//!
//! # Invariants
//!
//! 1. `delay = max(1 ms, 500 ms / speed)`, with speed clamped to `1..=100`.
//! 2. At most one step is released per [`Pacer::tick`].
//! 3. After a step is released the accumulator restarts at zero, so a long
//!    frame never releases a burst of catch-up steps.

use std::time::Duration;

/// Slowest speed setting.
pub const MIN_SPEED: u32 = 1;
/// Fastest speed setting.
pub const MAX_SPEED: u32 = 100;

/// Numerator of the delay formula, in nanoseconds (500 ms).
const DELAY_SCALE_NANOS: u64 = 500_000_000;
const MIN_DELAY: Duration = Duration::from_millis(1);

/// Delay between steps for a speed setting.
#[must_use]
pub fn delay_for_speed(speed: u32) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    Duration::from_nanos(DELAY_SCALE_NANOS / u64::from(speed)).max(MIN_DELAY)
}

/// Releases one step whenever the configured delay has elapsed.
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
    since_last: Duration,
}

impl Pacer {
    /// Create a pacer for `speed`.
    #[must_use]
    pub fn new(speed: u32) -> Self {
        Self {
            delay: delay_for_speed(speed),
            since_last: Duration::ZERO,
        }
    }

    /// Current delay between steps.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the speed. Time already accumulated is kept.
    pub fn set_speed(&mut self, speed: u32) {
        self.delay = delay_for_speed(speed);
    }

    /// Forget accumulated time.
    pub fn reset(&mut self) {
        self.since_last = Duration::ZERO;
    }

    /// Advance by `dt`. Returns `true` when the next step should be pulled.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.since_last = self.since_last.saturating_add(dt);
        if self.since_last >= self.delay {
            self.since_last = Duration::ZERO;
            true
        } else {
            false
        }
    }
}
