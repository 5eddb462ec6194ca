#![forbid(unsafe_code)]

//! Insertion sort: shift the key backward while its predecessor is greater.
//!
//! Index 0 starts out marked sorted. While a key is being inserted the
//! prefix it is moving through stays marked sorted.

use super::Stepper;
use super::tape::Tape;
use crate::element::ElementState;

enum Stage {
    Start,
    /// Highlight the key at `i` before scanning.
    Pick { i: usize },
    /// The key that started at `i` currently sits at `key_at`.
    Shift { i: usize, key_at: usize },
}

pub(crate) struct Insertion {
    stage: Stage,
}

impl Insertion {
    pub(crate) fn new() -> Self {
        Self {
            stage: Stage::Start,
        }
    }
}

impl Stepper for Insertion {
    fn advance(&mut self, tape: &mut Tape) -> bool {
        let n = tape.len();
        match self.stage {
            Stage::Start => {
                if n > 0 {
                    tape.mark(&[0], ElementState::Sorted);
                    tape.emit();
                }
                self.stage = Stage::Pick { i: 1 };
            }
            Stage::Pick { i } => {
                if i >= n {
                    return false;
                }
                tape.clear();
                tape.mark_range(0..i, ElementState::Sorted);
                tape.mark(&[i], ElementState::Comparing);
                tape.emit();
                self.stage = Stage::Shift { i, key_at: i };
            }
            Stage::Shift { i, key_at } => {
                if key_at == 0 {
                    tape.settle(0..i + 1);
                    self.stage = Stage::Pick { i: i + 1 };
                    return true;
                }
                let j = key_at - 1;
                tape.compare(0..i, &[j, key_at]);
                if tape.value(j) <= tape.value(key_at) {
                    tape.settle(0..i + 1);
                    self.stage = Stage::Pick { i: i + 1 };
                } else {
                    tape.swap(j, key_at);
                    self.stage = Stage::Shift { i, key_at: j };
                }
            }
        }
        true
    }
}
