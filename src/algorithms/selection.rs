//! Selection sort, one comparison per step
//!
//! Each pass scans the unsorted suffix for its minimum. The call that makes
//! the pass's final comparison also performs the single swap for that pass.

use super::{StepFunction, StepResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum SelectionState {
    #[default]
    Start,
    Scan {
        outer: usize,
        inner: usize,
        min: usize,
    },
    Done,
}

/// Resumable selection sort
#[derive(Debug, Clone, Default)]
pub struct SelectionSort {
    state: SelectionState,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.state == SelectionState::Done
    }
}

impl<T: Ord> StepFunction<T> for SelectionSort {
    fn step(&mut self, array: &mut [T]) -> StepResult {
        let n = array.len();
        let (outer, inner, min) = match self.state {
            SelectionState::Done => return StepResult::finished(),
            SelectionState::Start if n < 2 => {
                self.state = SelectionState::Done;
                return StepResult::finished();
            }
            SelectionState::Start => (0, 1, 0),
            SelectionState::Scan { outer, inner, min } => (outer, inner, min),
        };

        let compared = StepResult::compared(min, inner);
        let min = if array[inner] < array[min] { inner } else { min };

        if inner + 1 < n {
            self.state = SelectionState::Scan {
                outer,
                inner: inner + 1,
                min,
            };
            return compared;
        }

        // Last comparison of the pass: place the minimum.
        let result = if min != outer {
            array.swap(outer, min);
            StepResult::moved(outer, min)
        } else {
            compared
        };

        self.state = if outer + 2 >= n {
            SelectionState::Done
        } else {
            SelectionState::Scan {
                outer: outer + 1,
                inner: outer + 2,
                min: outer + 1,
            }
        };
        result.settle(self.is_finished())
    }

    fn is_finished(&self) -> bool {
        SelectionSort::is_finished(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::run_to_end;

    #[test]
    fn test_one_swap_per_pass() {
        let mut array = vec![4, 3, 2, 1];
        let mut sort = SelectionSort::new();

        let results = run_to_end(&mut sort, &mut array);

        assert_eq!(array, vec![1, 2, 3, 4]);
        // Passes scan 3, 2 and 1 elements; the swap-free last pass terminates.
        assert_eq!(results.len(), 3 + 2 + 1);
        // [4,3,2,1] -> [1,3,2,4] -> [1,2,3,4] -> no swap
        assert_eq!(results.iter().filter(|r| r.mutated).count(), 2);
        assert!(results[5].terminated);
    }

    #[test]
    fn test_swap_reports_pass_start_and_minimum() {
        let mut array = vec![3, 1, 2];
        let mut sort = SelectionSort::new();

        assert_eq!(sort.step(&mut array), StepResult::compared(0, 1));
        assert_eq!(sort.step(&mut array), StepResult::moved(0, 1));
        assert_eq!(array, vec![1, 3, 2]);
    }

    #[test]
    fn test_tracks_minimum_across_calls() {
        let mut array = vec![5, 2, 9, 1, 7];
        let mut sort = SelectionSort::new();

        for _ in 0..3 {
            assert!(!sort.step(&mut array).mutated);
        }
        let swap = sort.step(&mut array);
        assert_eq!(swap, StepResult::moved(0, 3));
        assert_eq!(array, vec![1, 2, 9, 5, 7]);
    }

    #[test]
    fn test_duplicates() {
        let mut array = vec![2, 2, 1, 1, 3, 1];
        let mut sort = SelectionSort::new();

        run_to_end(&mut sort, &mut array);

        assert_eq!(array, vec![1, 1, 1, 2, 2, 3]);
    }
}
