#![forbid(unsafe_code)]

//! Array generator: initial sequences per distribution.
//!
//! Every generated sequence is a permutation of `1..=size` with all elements
//! in [`ElementState::Default`](crate::ElementState::Default).
//!
//! # Halves
//!
//! The two "halves" distributions split at `mid = size / 2` and partition
//! the full value range between the halves:
//!
//! - [`Distribution::AscendingHalves`]: `[size-mid+1..=size, 1..=size-mid]`.
//!   The first run holds the top `mid` values, the second restarts at 1.
//! - [`Distribution::DescendingHalves`]: `[mid..=1, size..=mid+1]`. Each half
//!   of the identity reversed in place.
//!
//! # Failure Modes
//!
//! None. Size bounds are enforced by [`VisualizerConfig`](crate::VisualizerConfig)
//! before generation; a size of 0 yields an empty sequence.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::element::Element;

/// Initial ordering pattern applied before sorting begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Distribution {
    /// Uniform shuffle.
    #[default]
    Random,
    /// Already sorted.
    Ascending,
    /// Fully reversed.
    Descending,
    /// Two ascending runs, the upper half first.
    AscendingHalves,
    /// Two descending runs, the lower half first.
    DescendingHalves,
}

impl Distribution {
    /// All distributions in menu order.
    pub const ALL: [Distribution; 5] = [
        Self::Random,
        Self::Ascending,
        Self::Descending,
        Self::AscendingHalves,
        Self::DescendingHalves,
    ];

    /// Stable identifier, as accepted by [`FromStr`].
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::AscendingHalves => "ascendingHalves",
            Self::DescendingHalves => "descendingHalves",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
            Self::AscendingHalves => "Ascending Halves",
            Self::DescendingHalves => "Descending Halves",
        }
    }

    /// The next distribution in menu order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a distribution name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDistributionError {
    name: String,
}

impl ParseDistributionError {
    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseDistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown distribution: {:?}", self.name)
    }
}

impl std::error::Error for ParseDistributionError {}

impl FromStr for Distribution {
    type Err = ParseDistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "random" => Ok(Self::Random),
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            "ascendingHalves" | "ascending-halves" | "ascending_halves" => {
                Ok(Self::AscendingHalves)
            }
            "descendingHalves" | "descending-halves" | "descending_halves" => {
                Ok(Self::DescendingHalves)
            }
            other => Err(ParseDistributionError {
                name: other.to_string(),
            }),
        }
    }
}

/// Generate a sequence of `size` elements using the thread-local RNG.
#[must_use]
pub fn generate(size: usize, distribution: Distribution) -> Vec<Element> {
    generate_with(size, distribution, &mut rand::thread_rng())
}

/// Generate a sequence of `size` elements, drawing randomness from `rng`.
///
/// Only [`Distribution::Random`] consumes randomness; every other
/// distribution is fully determined by `size`.
pub fn generate_with<R: Rng + ?Sized>(
    size: usize,
    distribution: Distribution,
    rng: &mut R,
) -> Vec<Element> {
    let mut values: Vec<u32> = (1..=size as u32).collect();
    let mid = size / 2;

    match distribution {
        Distribution::Random => values.shuffle(rng),
        Distribution::Ascending => {}
        Distribution::Descending => values.reverse(),
        Distribution::AscendingHalves => values.rotate_right(mid),
        Distribution::DescendingHalves => {
            let (low, high) = values.split_at_mut(mid);
            low.reverse();
            high.reverse();
        }
    }

    values.into_iter().map(Element::new).collect()
}
