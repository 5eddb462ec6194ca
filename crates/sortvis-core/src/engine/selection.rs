#![forbid(unsafe_code)]

//! Selection sort: scan the unsorted remainder for its minimum and swap it
//! into place. The sorted prefix grows by one each pass.

use super::Stepper;
use super::tape::Tape;

pub(crate) struct Selection {
    i: usize,
    j: usize,
    min: usize,
}

impl Selection {
    pub(crate) fn new() -> Self {
        Self { i: 0, j: 1, min: 0 }
    }
}

impl Stepper for Selection {
    fn advance(&mut self, tape: &mut Tape) -> bool {
        let n = tape.len();
        if self.i + 1 >= n {
            return false;
        }
        if self.j < n {
            tape.compare(0..0, &[self.min, self.j]);
            if tape.value(self.j) < tape.value(self.min) {
                self.min = self.j;
            }
            self.j += 1;
        } else {
            if self.min != self.i {
                tape.swap(self.i, self.min);
            }
            tape.settle(0..self.i + 1);
            self.i += 1;
            self.min = self.i;
            self.j = self.i + 1;
        }
        true
    }
}
