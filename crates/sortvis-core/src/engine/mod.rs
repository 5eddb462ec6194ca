#![forbid(unsafe_code)]

//! Step-sequence engine.
//!
//! [`run`] returns a [`SortRun`]: a lazy, finite iterator of [`Step`]s for one
//! algorithm over a private copy of the initial sequence. Each algorithm is
//! an explicit state machine ([`Stepper`]) that advances by one bounded unit
//! of work (one comparison and its consequences) and queues the handful of
//! steps that unit produces. Nothing runs between pulls.
//!
//! # Invariants
//!
//! 1. The caller's initial slice is never touched.
//! 2. The multiset of values is identical in every yielded step.
//! 3. `comparisons` is non-decreasing and increases exactly on the steps
//!    that highlight a value comparison.
//! 4. The last step marks every element sorted; after it the iterator
//!    returns `None` forever.
//! 5. A run cannot be restarted. Sorting again means calling [`run`] again.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
mod tape;

use std::iter::FusedIterator;

use crate::algorithm::{AlgorithmId, Canonical};
use crate::element::{Element, Step};

use tape::Tape;

/// One algorithm's incremental state.
pub(crate) trait Stepper {
    /// Do the next unit of work, queuing its steps on `tape`.
    ///
    /// Returns `false` once there is no work left. A call that returns
    /// `true` may queue nothing; the caller simply advances again.
    fn advance(&mut self, tape: &mut Tape) -> bool;
}

/// A lazy step sequence for a single run.
pub struct SortRun {
    algorithm: AlgorithmId,
    tape: Tape,
    stepper: Box<dyn Stepper>,
    /// The stepper has no work left and the final step is queued.
    exhausted: bool,
}

impl SortRun {
    fn new(algorithm: AlgorithmId, initial: &[Element]) -> Self {
        let n = initial.len();
        let stepper: Box<dyn Stepper> = match algorithm.canonical() {
            Canonical::Bubble => Box::new(bubble::Bubble::new()),
            Canonical::Selection => Box::new(selection::Selection::new()),
            Canonical::Insertion => Box::new(insertion::Insertion::new()),
            Canonical::Merge => Box::new(merge::Merge::new(n)),
            Canonical::Quick => Box::new(quick::Quick::new(n)),
            Canonical::Heap => Box::new(heap::Heap::new(n)),
        };
        crate::debug!(
            algorithm = algorithm.id(),
            canonical = algorithm.canonical().algorithm().id(),
            len = n,
            "sort run created"
        );
        Self {
            algorithm,
            tape: Tape::new(initial),
            stepper,
            exhausted: false,
        }
    }

    /// The identifier this run was started with.
    #[must_use]
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// The implementation generating this run's steps.
    #[must_use]
    pub fn canonical(&self) -> Canonical {
        self.algorithm.canonical()
    }

    /// Number of elements being sorted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tape.len()
    }

    /// Whether the run sorts an empty sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tape.len() == 0
    }

    /// Comparisons performed so far, including queued but unconsumed steps.
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.tape.comparisons()
    }

    /// Whether the final step has been handed out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.exhausted && !self.tape.has_pending()
    }
}

impl Iterator for SortRun {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(step) = self.tape.pop() {
                return Some(step);
            }
            if self.exhausted {
                return None;
            }
            if !self.stepper.advance(&mut self.tape) {
                self.tape.finish();
                self.exhausted = true;
                crate::debug!(
                    algorithm = self.algorithm.id(),
                    comparisons = self.tape.comparisons(),
                    "sort run exhausted"
                );
            }
        }
    }
}

impl FusedIterator for SortRun {}

impl std::fmt::Debug for SortRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortRun")
            .field("algorithm", &self.algorithm)
            .field("len", &self.tape.len())
            .field("comparisons", &self.tape.comparisons())
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// Start a run of `algorithm` over a private copy of `initial`.
#[must_use]
pub fn run(algorithm: AlgorithmId, initial: &[Element]) -> SortRun {
    SortRun::new(algorithm, initial)
}

/// Start a run by name. Unknown names fall back to bubble sort.
#[must_use]
pub fn run_named(name: &str, initial: &[Element]) -> SortRun {
    run(AlgorithmId::resolve(name), initial)
}
