//! Insertion sort, one comparison per step
//!
//! The key being inserted travels left by adjacent swaps, so the array is a
//! permutation of its input after every call. A comparison that finds the
//! left neighbour no greater than the key finishes that insertion without
//! touching the array.
//!
//! Two registered variants share these transitions and differ only in which
//! position they report first:
//!
//! - [`InsertionReport::Displaced`]: the element shifted right
//! - [`InsertionReport::Key`]: the key's new position

use super::{StepFunction, StepResult};

/// Which moved position an insertion step reports as `first`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertionReport {
    Displaced,
    Key,
}

impl InsertionReport {
    /// Order a `(left, right)` pair for this variant. The key sits on the
    /// left after a shift and on the right before one.
    fn shifted(self, left: usize, right: usize) -> StepResult {
        match self {
            InsertionReport::Displaced => StepResult::moved(right, left),
            InsertionReport::Key => StepResult::moved(left, right),
        }
    }

    fn compared(self, left: usize, right: usize) -> StepResult {
        match self {
            InsertionReport::Displaced => StepResult::compared(left, right),
            InsertionReport::Key => StepResult::compared(right, left),
        }
    }
}

#[derive(Debug, Clone)]
enum InsertionState<T> {
    Start,
    Inserting { outer: usize, cursor: usize, key: T },
    Done,
}

/// Resumable insertion sort
#[derive(Debug, Clone)]
pub struct InsertionSort<T> {
    state: InsertionState<T>,
    report: InsertionReport,
}

impl<T> InsertionSort<T> {
    pub fn new(report: InsertionReport) -> Self {
        InsertionSort {
            state: InsertionState::Start,
            report,
        }
    }

    pub fn report(&self) -> InsertionReport {
        self.report
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, InsertionState::Done)
    }
}

impl<T: Clone> InsertionSort<T> {
    fn begin(outer: usize, array: &[T]) -> InsertionState<T> {
        match array.get(outer) {
            Some(key) => InsertionState::Inserting {
                outer,
                cursor: outer,
                key: key.clone(),
            },
            None => InsertionState::Done,
        }
    }
}

impl<T: Ord + Clone> StepFunction<T> for InsertionSort<T> {
    fn step(&mut self, array: &mut [T]) -> StepResult {
        let (outer, cursor, key) =
            match std::mem::replace(&mut self.state, InsertionState::Done) {
                InsertionState::Done => return StepResult::finished(),
                InsertionState::Start if array.len() < 2 => return StepResult::finished(),
                InsertionState::Start => (1, 1, array[1].clone()),
                InsertionState::Inserting { outer, cursor, key } => (outer, cursor, key),
            };

        debug_assert!(cursor >= 1 && cursor <= outer);
        let left = cursor - 1;

        if array[left] > key {
            array.swap(left, cursor);
            self.state = if left == 0 {
                Self::begin(outer + 1, array)
            } else {
                InsertionState::Inserting {
                    outer,
                    cursor: left,
                    key,
                }
            };
            self.report.shifted(left, cursor).settle(self.is_finished())
        } else {
            self.state = Self::begin(outer + 1, array);
            self.report.compared(left, cursor).settle(self.is_finished())
        }
    }

    fn is_finished(&self) -> bool {
        InsertionSort::is_finished(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::run_to_end;

    #[test]
    fn test_key_moves_left_until_in_place() {
        let mut array = vec![2, 3, 1];
        let mut sort = InsertionSort::new(InsertionReport::Displaced);

        // 3 is already after 2
        assert_eq!(sort.step(&mut array), StepResult::compared(0, 1));
        // 1 passes 3, then 2
        assert_eq!(sort.step(&mut array), StepResult::moved(2, 1));
        assert_eq!(array, vec![2, 1, 3]);
        assert_eq!(sort.step(&mut array), StepResult::moved(1, 0));
        assert_eq!(array, vec![1, 2, 3]);
        assert_eq!(sort.step(&mut array), StepResult::finished());
    }

    #[test]
    fn test_variants_differ_only_in_reported_order() {
        let input = vec![4, 1, 3, 5, 2, 2, 0];
        let mut displaced_array = input.clone();
        let mut key_array = input.clone();
        let mut displaced = InsertionSort::new(InsertionReport::Displaced);
        let mut key = InsertionSort::new(InsertionReport::Key);

        let displaced_results = run_to_end(&mut displaced, &mut displaced_array);
        let key_results = run_to_end(&mut key, &mut key_array);

        assert_eq!(displaced_array, key_array);
        assert_eq!(displaced_results.len(), key_results.len());
        for (d, k) in displaced_results.iter().zip(&key_results) {
            assert_eq!(d.mutated, k.mutated);
            assert_eq!(d.terminated, k.terminated);
            assert_eq!(d.first, k.second);
            assert_eq!(d.second, k.first);
        }
    }

    #[test]
    fn test_sorted_input_is_linear() {
        let mut array = vec![1, 2, 3, 4, 5];
        let mut sort = InsertionSort::new(InsertionReport::Key);

        let results = run_to_end(&mut sort, &mut array);

        assert_eq!(results.len(), 4);
        assert!(results[3].terminated);
        assert!(results.iter().all(|r| !r.mutated));
    }

    #[test]
    fn test_stable_for_equal_keys() {
        use crate::algorithms::testing::Keyed;

        let mut array = vec![
            Keyed { key: 3, tag: 'a' },
            Keyed { key: 1, tag: 'b' },
            Keyed { key: 3, tag: 'c' },
        ];
        let mut sort = InsertionSort::new(InsertionReport::Displaced);

        run_to_end(&mut sort, &mut array);

        let tags: String = array.iter().map(|k| k.tag).collect();
        assert_eq!(tags, "bac");
    }
}
