#![forbid(unsafe_code)]

//! Bubble sort: adjacent compare-and-swap with a shrinking upper bound.
//!
//! Runs all `n` passes with no early exit. After pass `i` the element at
//! `n - i - 1` is in place and the whole settled suffix stays marked sorted.

use super::Stepper;
use super::tape::Tape;

pub(crate) struct Bubble {
    pass: usize,
    j: usize,
}

impl Bubble {
    pub(crate) fn new() -> Self {
        Self { pass: 0, j: 0 }
    }
}

impl Stepper for Bubble {
    fn advance(&mut self, tape: &mut Tape) -> bool {
        let n = tape.len();
        if self.pass >= n {
            return false;
        }
        let bound = n - self.pass - 1;
        if self.j < bound {
            let j = self.j;
            tape.compare(bound + 1..n, &[j, j + 1]);
            if tape.value(j) > tape.value(j + 1) {
                tape.swap(j, j + 1);
            }
            self.j += 1;
        } else {
            tape.settle(bound..n);
            self.pass += 1;
            self.j = 0;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithm::AlgorithmId;
    use crate::element::Element;
    use crate::engine::run;

    fn elements(values: &[u32]) -> Vec<Element> {
        values.iter().copied().map(Element::new).collect()
    }

    #[test]
    fn sorted_input_never_swaps() {
        let initial = elements(&[1, 2, 3, 4]);
        let steps: Vec<_> = run(AlgorithmId::Bubble, &initial).collect();
        // 6 comparisons, 4 pass-end marks, 1 final step.
        assert_eq!(steps.len(), 11);
        assert_eq!(steps.last().unwrap().comparisons(), 6);
    }

    #[test]
    fn single_swap_yields_marked_then_moved() {
        let initial = elements(&[2, 1]);
        let values: Vec<Vec<u32>> = run(AlgorithmId::Bubble, &initial)
            .map(|s| s.values())
            .collect();
        // compare, swapping, swapped, pass-end, pass-end, final
        assert_eq!(
            values,
            vec![
                vec![2, 1],
                vec![2, 1],
                vec![1, 2],
                vec![1, 2],
                vec![1, 2],
                vec![1, 2]
            ]
        );
    }

    #[test]
    fn settled_suffix_stays_marked_during_later_passes() {
        use crate::element::ElementState;

        let initial = elements(&[3, 1, 2, 4]);
        let steps: Vec<_> = run(AlgorithmId::Bubble, &initial).collect();
        // First comparison of the second pass: index 3 is already settled.
        let second_pass = steps
            .iter()
            .find(|s| s.comparisons() == 4)
            .unwrap();
        assert_eq!(second_pass.elements()[3].state, ElementState::Sorted);
        assert_eq!(second_pass.elements()[0].state, ElementState::Comparing);
    }
}
