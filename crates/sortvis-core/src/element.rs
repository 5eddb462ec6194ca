#![forbid(unsafe_code)]

//! Array elements, step snapshots, and derived metrics.
//!
//! A [`Step`] is what the engine hands out at every yield point: a full copy
//! of the working sequence plus the running comparison count. Steps own
//! their elements, so holding on to one never observes later mutation.

use std::time::Duration;

/// Visualization state of a single element.
///
/// The state is annotation only. Ordering logic never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ElementState {
    /// Not involved in the current step.
    #[default]
    Default,
    /// Participating in a value comparison.
    Comparing,
    /// About to move, or just moved.
    Swapping,
    /// In its final position.
    Sorted,
}

impl ElementState {
    /// Whether the element is actively compared or moved in this step.
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Comparing | Self::Swapping)
    }
}

/// One labeled value in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// Value in `1..=N`, unique within a generated sequence.
    pub value: u32,
    /// Transient visualization state.
    pub state: ElementState,
}

impl Element {
    /// Create an element in the [`ElementState::Default`] state.
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            state: ElementState::Default,
        }
    }
}

/// Immutable snapshot produced once per yield point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    elements: Vec<Element>,
    comparisons: u64,
}

impl Step {
    pub(crate) fn new(elements: Vec<Element>, comparisons: u64) -> Self {
        Self {
            elements,
            comparisons,
        }
    }

    /// Build a step that shows `elements` before any work has been done.
    #[must_use]
    pub fn initial(elements: &[Element]) -> Self {
        Self::new(elements.to_vec(), 0)
    }

    /// The array state at this step.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Comparisons performed up to and including this step.
    #[inline]
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Number of elements in the snapshot.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the snapshot is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Values in array order.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    /// Whether every element is marked [`ElementState::Sorted`].
    #[must_use]
    pub fn is_all_sorted(&self) -> bool {
        self.elements
            .iter()
            .all(|e| e.state == ElementState::Sorted)
    }

    /// Indices and elements currently comparing or swapping.
    pub fn active_elements(&self) -> impl Iterator<Item = (usize, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.state.is_active())
    }
}

/// Per-lane metrics derived by the driver from the step stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metrics {
    /// Comparison count of the latest consumed step.
    pub comparisons: u64,
    /// Running time, excluding paused intervals.
    pub time_elapsed: Duration,
    /// Whether the lane's run has handed out its final step.
    pub is_complete: bool,
}

impl Metrics {
    /// Elapsed time in fractional seconds.
    #[inline]
    #[must_use]
    pub fn time_elapsed_seconds(&self) -> f64 {
        self.time_elapsed.as_secs_f64()
    }
}
