#![forbid(unsafe_code)]

//! Working copy plus the queue of steps waiting to be handed out.
//!
//! Algorithms never build [`Step`]s themselves. They mark indices and call
//! one of the composite helpers below, each of which snapshots the working
//! copy at the right moments so the yield discipline is the same for every
//! algorithm.

use std::collections::VecDeque;
use std::ops::Range;

use crate::element::{Element, ElementState, Step};

pub(crate) struct Tape {
    elements: Vec<Element>,
    comparisons: u64,
    pending: VecDeque<Step>,
}

impl Tape {
    pub(crate) fn new(initial: &[Element]) -> Self {
        Self {
            elements: initial.to_vec(),
            comparisons: 0,
            pending: VecDeque::with_capacity(4),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub(crate) fn value(&self, index: usize) -> u32 {
        self.elements[index].value
    }

    #[inline]
    pub(crate) fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub(crate) fn pop(&mut self) -> Option<Step> {
        self.pending.pop_front()
    }

    pub(crate) fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    // -----------------------------------------------------------------------
    // Primitives
    // -----------------------------------------------------------------------

    /// Reset every element to [`ElementState::Default`].
    pub(crate) fn clear(&mut self) {
        for e in &mut self.elements {
            e.state = ElementState::Default;
        }
    }

    /// Mark `indices`, silently skipping any that are out of bounds.
    pub(crate) fn mark(&mut self, indices: &[usize], state: ElementState) {
        for &i in indices {
            if let Some(e) = self.elements.get_mut(i) {
                e.state = state;
            }
        }
    }

    pub(crate) fn mark_range(&mut self, range: Range<usize>, state: ElementState) {
        let end = range.end.min(self.elements.len());
        let start = range.start.min(end);
        for e in &mut self.elements[start..end] {
            e.state = state;
        }
    }

    /// Queue a snapshot of the working copy.
    pub(crate) fn emit(&mut self) {
        self.pending
            .push_back(Step::new(self.elements.clone(), self.comparisons));
    }

    // -----------------------------------------------------------------------
    // Composite steps
    // -----------------------------------------------------------------------

    /// Highlight the indices about to be compared, count the comparison, and
    /// yield. `sorted` stays marked underneath the highlight.
    pub(crate) fn compare(&mut self, sorted: Range<usize>, indices: &[usize]) {
        self.clear();
        self.mark_range(sorted, ElementState::Sorted);
        self.mark(indices, ElementState::Comparing);
        self.comparisons += 1;
        self.emit();
    }

    /// Highlight a whole subrange without counting a comparison.
    pub(crate) fn highlight(&mut self, range: Range<usize>) {
        self.clear();
        self.mark_range(range, ElementState::Comparing);
        self.emit();
    }

    /// Mark `i` and `j` swapping, yield, exchange their values, yield again.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.mark(&[i, j], ElementState::Swapping);
        self.emit();
        let tmp = self.elements[i].value;
        self.elements[i].value = self.elements[j].value;
        self.elements[j].value = tmp;
        self.emit();
    }

    /// Move the value at `src` into `dst` (`dst < src`), shifting the values
    /// in between one slot to the right.
    ///
    /// This is the merge write: the right run's head lands in the left run's
    /// head slot and no value is ever duplicated or lost.
    pub(crate) fn shift_into(&mut self, dst: usize, src: usize) {
        debug_assert!(dst < src);
        self.mark(&[dst, src], ElementState::Swapping);
        self.emit();
        let moved = self.elements[src].value;
        for k in (dst..src).rev() {
            self.elements[k + 1].value = self.elements[k].value;
        }
        self.elements[dst].value = moved;
        self.emit();
    }

    /// Clear transient marks, mark `range` sorted, and yield.
    pub(crate) fn settle(&mut self, range: Range<usize>) {
        self.clear();
        self.mark_range(range, ElementState::Sorted);
        self.emit();
    }

    /// Mark everything sorted and yield the final step.
    pub(crate) fn finish(&mut self) {
        let n = self.elements.len();
        self.settle(0..n);
    }
}
