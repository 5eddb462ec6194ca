#![forbid(unsafe_code)]

//! SortVis core: array generation, step sequences, and pacing.
//!
//! # Key Components
//!
//! - [`distribution::generate`] - Builds the initial sequence for a run
//! - [`engine::run`] - Lazily steps a sorting algorithm, one snapshot per yield
//! - [`AlgorithmId`] - Declared algorithm identifiers and their alias table
//! - [`session::Comparison`] - Two lanes paced side by side with start/pause/reset
//! - [`tone`] - Optional, best-effort tone side channel
//!
//! # How it fits together
//! The generator produces one initial snapshot. Each lane of a
//! [`session::Comparison`] asks the engine for its own [`engine::SortRun`]
//! over a private copy of that snapshot, and the session's pacers decide
//! when the next [`Step`] is pulled. A front end only reads steps and
//! [`Metrics`]; nothing flows back into the engine.

pub mod algorithm;
pub mod config;
pub mod distribution;
pub mod element;
pub mod engine;
pub mod logging;
pub mod pacing;
pub mod session;
pub mod stopwatch;
pub mod tone;

pub use algorithm::{AlgorithmId, Canonical, ParseAlgorithmError};
pub use config::{ConfigError, VisualizerConfig};
pub use distribution::{Distribution, ParseDistributionError, generate, generate_with};
pub use element::{Element, ElementState, Metrics, Step};
pub use engine::{SortRun, run, run_named};
pub use session::{Comparison, LaneId, Status};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
