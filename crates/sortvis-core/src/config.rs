#![forbid(unsafe_code)]

//! Session configuration.
//!
//! [`VisualizerConfig`] is the whole input surface of a comparison: the two
//! algorithms, element count, distribution, speed, and whether sound is on.
//! Size and speed are range-checked here so the generator and engine can
//! assume valid input.

use std::fmt;
use std::ops::RangeInclusive;

use crate::algorithm::AlgorithmId;
use crate::distribution::Distribution;
use crate::pacing::{MAX_SPEED, MIN_SPEED};

/// Accepted element counts.
pub const SIZE_RANGE: RangeInclusive<usize> = 10..=200;
/// Accepted speed settings.
pub const SPEED_RANGE: RangeInclusive<u32> = MIN_SPEED..=MAX_SPEED;

/// Input configuration for a [`Comparison`](crate::Comparison).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct VisualizerConfig {
    /// Algorithm in the first lane.
    pub algorithm_a: AlgorithmId,
    /// Algorithm in the second lane.
    pub algorithm_b: AlgorithmId,
    /// Number of elements, in [`SIZE_RANGE`].
    pub size: usize,
    /// Initial ordering.
    pub distribution: Distribution,
    /// Speed setting, in [`SPEED_RANGE`].
    pub speed: u32,
    /// Whether the first lane emits tones.
    pub sound_enabled: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            algorithm_a: AlgorithmId::Bubble,
            algorithm_b: AlgorithmId::Quick,
            size: 30,
            distribution: Distribution::Random,
            speed: 50,
            sound_enabled: true,
        }
    }
}

impl VisualizerConfig {
    /// Check that size and speed are within their ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SIZE_RANGE.contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange(self.size));
        }
        if !SPEED_RANGE.contains(&self.speed) {
            return Err(ConfigError::SpeedOutOfRange(self.speed));
        }
        Ok(())
    }

    /// Clamp size and speed into range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.size = self.size.clamp(*SIZE_RANGE.start(), *SIZE_RANGE.end());
        self.speed = self.speed.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end());
        self
    }
}

/// A configuration value outside its accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `size` is outside [`SIZE_RANGE`].
    SizeOutOfRange(usize),
    /// `speed` is outside [`SPEED_RANGE`].
    SpeedOutOfRange(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOutOfRange(size) => write!(
                f,
                "size {size} is outside {}..={}",
                SIZE_RANGE.start(),
                SIZE_RANGE.end()
            ),
            Self::SpeedOutOfRange(speed) => write!(
                f,
                "speed {speed} is outside {}..={}",
                SPEED_RANGE.start(),
                SPEED_RANGE.end()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
