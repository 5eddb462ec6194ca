#![forbid(unsafe_code)]

//! Top-down merge sort with the recursion unrolled onto an explicit stack.
//!
//! The merge works directly in the working array. Each comparison looks at
//! the heads of the two runs; ties go to the left run. When the right head
//! is smaller it is rotated into the left head's slot, so the array always
//! holds exactly the initial values.

use super::Stepper;
use super::tape::Tape;

#[derive(Clone, Copy)]
enum Task {
    Sort { start: usize, end: usize },
    Merge { start: usize, mid: usize, end: usize },
}

/// In-progress merge of `[start, right)` and `[right, end]`.
#[derive(Clone, Copy)]
struct Cursor {
    start: usize,
    end: usize,
    /// Head of the left run. Everything before it is merged.
    left: usize,
    /// Head of the right run. The left run occupies `[left, right)`.
    right: usize,
}

pub(crate) struct Merge {
    tasks: Vec<Task>,
    cursor: Option<Cursor>,
}

impl Merge {
    pub(crate) fn new(n: usize) -> Self {
        let tasks = if n > 1 {
            vec![Task::Sort { start: 0, end: n - 1 }]
        } else {
            Vec::new()
        };
        Self {
            tasks,
            cursor: None,
        }
    }
}

impl Stepper for Merge {
    fn advance(&mut self, tape: &mut Tape) -> bool {
        if let Some(mut cur) = self.cursor {
            if cur.left < cur.right && cur.right <= cur.end {
                tape.compare(0..0, &[cur.left, cur.right]);
                if tape.value(cur.left) > tape.value(cur.right) {
                    tape.shift_into(cur.left, cur.right);
                    cur.right += 1;
                }
                cur.left += 1;
                self.cursor = Some(cur);
            } else {
                tape.settle(cur.start..cur.end + 1);
                self.cursor = None;
            }
            return true;
        }

        match self.tasks.pop() {
            None => false,
            Some(Task::Sort { start, end }) => {
                if start < end {
                    let mid = start + (end - start) / 2;
                    tape.highlight(start..end + 1);
                    self.tasks.push(Task::Merge { start, mid, end });
                    self.tasks.push(Task::Sort { start: mid + 1, end });
                    self.tasks.push(Task::Sort { start, end: mid });
                }
                true
            }
            Some(Task::Merge { start, mid, end }) => {
                self.cursor = Some(Cursor {
                    start,
                    end,
                    left: start,
                    right: mid + 1,
                });
                true
            }
        }
    }
}
