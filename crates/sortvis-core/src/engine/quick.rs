#![forbid(unsafe_code)]

//! Quick sort with a Lomuto partition around the last element.
//!
//! Elements `<=` the pivot are swapped to the left of the boundary, then the
//! pivot is swapped to the boundary and marked sorted. The left partition is
//! sorted before the right one. Pivot choice is deterministic, so sorted
//! input is the `n(n-1)/2` worst case.

use super::Stepper;
use super::tape::Tape;
use crate::element::ElementState;

#[derive(Clone, Copy)]
struct Partition {
    start: usize,
    /// Pivot index.
    end: usize,
    /// Next slot for an element `<=` the pivot.
    store: usize,
    scan: usize,
}

pub(crate) struct Quick {
    /// Inclusive ranges still to sort; the top is processed next.
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

impl Quick {
    pub(crate) fn new(n: usize) -> Self {
        let ranges = if n > 1 { vec![(0, n - 1)] } else { Vec::new() };
        Self {
            ranges,
            partition: None,
        }
    }
}

impl Stepper for Quick {
    fn advance(&mut self, tape: &mut Tape) -> bool {
        if let Some(mut p) = self.partition {
            if p.scan < p.end {
                tape.compare(0..0, &[p.scan, p.end]);
                if tape.value(p.scan) <= tape.value(p.end) {
                    tape.swap(p.store, p.scan);
                    p.store += 1;
                }
                p.scan += 1;
                self.partition = Some(p);
            } else {
                let pivot = p.store;
                tape.swap(pivot, p.end);
                tape.clear();
                tape.mark(&[pivot], ElementState::Sorted);
                tape.emit();
                self.partition = None;
                if pivot + 1 < p.end {
                    self.ranges.push((pivot + 1, p.end));
                }
                if pivot > p.start + 1 {
                    self.ranges.push((p.start, pivot - 1));
                }
            }
            return true;
        }

        match self.ranges.pop() {
            None => false,
            Some((start, end)) => {
                tape.highlight(start..end + 1);
                self.partition = Some(Partition {
                    start,
                    end,
                    store: start,
                    scan: start,
                });
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithm::AlgorithmId;
    use crate::element::{Element, ElementState};
    use crate::engine::run;

    fn elements(values: &[u32]) -> Vec<Element> {
        values.iter().copied().map(Element::new).collect()
    }

    #[test]
    fn reversed_input_is_also_quadratic() {
        let initial = elements(&[6, 5, 4, 3, 2, 1]);
        let last = run(AlgorithmId::Quick, &initial).last().unwrap();
        assert_eq!(last.comparisons(), 15);
        assert_eq!(last.values(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn pivot_lands_at_boundary_and_is_marked() {
        let initial = elements(&[3, 1, 2]);
        let pivot_step = run(AlgorithmId::Quick, &initial)
            .find(|s| {
                s.elements()
                    .iter()
                    .filter(|e| e.state == ElementState::Sorted)
                    .count()
                    == 1
            })
            .unwrap();
        // Pivot 2: 1 goes left, 3 stays right, pivot ends at index 1.
        assert_eq!(pivot_step.values(), vec![1, 2, 3]);
        assert_eq!(pivot_step.elements()[1].state, ElementState::Sorted);
        assert_eq!(pivot_step.comparisons(), 2);
    }

    #[test]
    fn balanced_input_beats_worst_case() {
        let initial = elements(&[1, 3, 2, 5, 7, 6, 4]);
        let last = run(AlgorithmId::Quick, &initial).last().unwrap();
        assert!(last.comparisons() < 21);
        assert_eq!(last.values(), (1..=7).collect::<Vec<_>>());
    }
}
