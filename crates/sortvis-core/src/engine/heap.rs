#![forbid(unsafe_code)]

//! Heap sort: build a max-heap bottom-up, then repeatedly swap the root with
//! the last unsorted slot and sift the new root down.
//!
//! The sorted region grows from the end backward and stays marked while the
//! remaining heap is re-sifted.

use super::Stepper;
use super::tape::Tape;

#[derive(Clone, Copy)]
struct Sift {
    /// Heap occupies `[0, size)`; `[size, n)` is sorted.
    size: usize,
    root: usize,
}

#[derive(Clone, Copy)]
enum Phase {
    /// Roots `pending - 1` down to `0` still need sifting.
    Build { pending: usize },
    /// Swap the root into slot `last`, then re-sift.
    Extract { last: usize },
    Done,
}

pub(crate) struct Heap {
    phase: Phase,
    sift: Option<Sift>,
}

impl Heap {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            phase: Phase::Build { pending: n / 2 },
            sift: None,
        }
    }
}

impl Stepper for Heap {
    fn advance(&mut self, tape: &mut Tape) -> bool {
        let n = tape.len();

        if let Some(Sift { size, root }) = self.sift {
            let mut largest = root;
            for child in [2 * root + 1, 2 * root + 2] {
                if child < size {
                    tape.compare(size..n, &[largest, child]);
                    if tape.value(child) > tape.value(largest) {
                        largest = child;
                    }
                }
            }
            self.sift = if largest != root {
                tape.swap(root, largest);
                Some(Sift {
                    size,
                    root: largest,
                })
            } else {
                None
            };
            return true;
        }

        match self.phase {
            Phase::Build { pending } if pending > 0 => {
                self.sift = Some(Sift {
                    size: n,
                    root: pending - 1,
                });
                self.phase = Phase::Build {
                    pending: pending - 1,
                };
            }
            Phase::Build { .. } => {
                self.phase = if n > 1 {
                    Phase::Extract { last: n - 1 }
                } else {
                    Phase::Done
                };
            }
            Phase::Extract { last } => {
                tape.swap(0, last);
                tape.settle(last..n);
                self.sift = Some(Sift {
                    size: last,
                    root: 0,
                });
                self.phase = if last > 1 {
                    Phase::Extract { last: last - 1 }
                } else {
                    Phase::Done
                };
            }
            Phase::Done => return false,
        }
        true
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
    fn sorts_small_input() {
        let initial = elements(&[4, 10, 3, 5, 1]);
        let last = run(AlgorithmId::Heap, &initial).last().unwrap();
        assert_eq!(last.values(), vec![1, 3, 4, 5, 10]);
    }

    #[test]
    fn sorted_suffix_stays_marked_during_sift() {
        let initial = elements(&[1, 2, 3, 4, 5, 6, 7]);
        let suffixes: Vec<usize> = run(AlgorithmId::Heap, &initial)
            .filter(|s| {
                s.elements()
                    .iter()
                    .filter(|e| e.state == ElementState::Comparing)
                    .count()
                    == 2
            })
            .map(|s| {
                s.elements()
                    .iter()
                    .rev()
                    .take_while(|e| e.state == ElementState::Sorted)
                    .count()
            })
            .collect();
        assert_eq!(suffixes.first(), Some(&0));
        assert!(suffixes.windows(2).all(|w| w[0] <= w[1]));
        // The last sift with a comparison runs on a heap of two.
        assert_eq!(suffixes.last(), Some(&5));
    }

    #[test]
    fn two_elements() {
        let initial = elements(&[1, 2]);
        let steps: Vec<_> = run(AlgorithmId::Heap, &initial).collect();
        let last = steps.last().unwrap();
        assert_eq!(last.values(), vec![1, 2]);
        assert_eq!(last.comparisons(), 1);
    }
}
