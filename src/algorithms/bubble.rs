//! Bubble sort, one adjacent comparison per step
//!
//! Pass bookkeeping happens inside the call that makes a pass's last
//! comparison, so an `n`-element pass costs exactly `n - outer - 1` calls.
//! A pass without swaps ends the sort early.

use super::{StepFunction, StepResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum BubbleState {
    #[default]
    Start,
    Pass {
        outer: usize,
        inner: usize,
        swapped: bool,
    },
    Done,
}

/// Resumable bubble sort
#[derive(Debug, Clone, Default)]
pub struct BubbleSort {
    state: BubbleState,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.state == BubbleState::Done
    }
}

impl<T: Ord> StepFunction<T> for BubbleSort {
    fn step(&mut self, array: &mut [T]) -> StepResult {
        let n = array.len();
        let (outer, inner, swapped) = match self.state {
            BubbleState::Done => return StepResult::finished(),
            BubbleState::Start if n < 2 => {
                self.state = BubbleState::Done;
                return StepResult::finished();
            }
            BubbleState::Start => (0, 0, false),
            BubbleState::Pass {
                outer,
                inner,
                swapped,
            } => (outer, inner, swapped),
        };

        let exchange = array[inner] > array[inner + 1];
        if exchange {
            array.swap(inner, inner + 1);
        }
        let swapped = swapped || exchange;

        let next = inner + 1;
        self.state = if next < n - outer - 1 {
            BubbleState::Pass {
                outer,
                inner: next,
                swapped,
            }
        } else if !swapped || outer + 2 >= n {
            BubbleState::Done
        } else {
            BubbleState::Pass {
                outer: outer + 1,
                inner: 0,
                swapped: false,
            }
        };

        let result = if exchange {
            StepResult::moved(inner, inner + 1)
        } else {
            StepResult::compared(inner, inner + 1)
        };
        result.settle(self.is_finished())
    }

    fn is_finished(&self) -> bool {
        BubbleSort::is_finished(self)
    }
}
