//! Resumable step functions for the supported sorting algorithms
//!
//! Every algorithm is driven one unit of work at a time through the
//! [`StepFunction`] trait. A unit of work is one comparison (with a possible
//! swap), one element shift, or one merge-cell write. All progress lives in
//! an explicit resumption state owned by the step function value itself, so
//! the caller can stop between any two calls and pick up later.
//!
//! - [`bubble`]: adjacent-pair passes with early exit on a swap-free pass
//! - [`selection`]: scan for the minimum, swap once at the end of each pass
//! - [`insertion`]: move the key left one neighbour at a time
//! - [`merge`]: bottom-up iterative merge through a private buffer
//!
//! # Contract
//!
//! - The zeroed state is `Start`; the first call performs any setup as part
//!   of its first unit of work.
//! - A call reports the pair of positions it touched. `mutated == true`
//!   implies both indices are present and in bounds.
//! - `terminated` is reported by a call that does not mutate the array.
//!   When the final unit of work mutates, termination is reported by the
//!   following call.
//! - Once terminated, further calls return [`StepResult::finished`] and do
//!   not touch the array.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod selection;

pub use bubble::BubbleSort;
pub use insertion::{InsertionReport, InsertionSort};
pub use merge::MergeSort;
pub use selection::SelectionSort;

use std::fmt;

/// Number of buffer slots the flat-vector merge layout reserves.
pub const MERGE_BUFFER_SLOTS: usize = 10;

/// Outcome of a single step function call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    pub first: Option<usize>,
    pub second: Option<usize>,
    pub mutated: bool,
    pub terminated: bool,
}

impl StepResult {
    /// A call that did nothing visible.
    pub fn idle() -> Self {
        StepResult::default()
    }

    /// A call that inspected two positions without changing the array.
    pub fn compared(first: usize, second: usize) -> Self {
        StepResult {
            first: Some(first),
            second: Some(second),
            mutated: false,
            terminated: false,
        }
    }

    /// A call that changed the array at (or between) two positions.
    pub fn moved(first: usize, second: usize) -> Self {
        StepResult {
            first: Some(first),
            second: Some(second),
            mutated: true,
            terminated: false,
        }
    }

    /// The array is sorted and no work was performed.
    pub fn finished() -> Self {
        StepResult {
            terminated: true,
            ..StepResult::default()
        }
    }

    /// Both touched positions, if the call reported a pair.
    pub fn indices(&self) -> Option<(usize, usize)> {
        Some((self.first?, self.second?))
    }

    /// Mark termination on a call whose work left the state finished.
    ///
    /// A mutating call never terminates; its successor does.
    pub(crate) fn settle(mut self, done: bool) -> Self {
        if done && !self.mutated {
            self.terminated = true;
        }
        self
    }
}

/// Single-unit-of-work transition for one sorting algorithm
pub trait StepFunction<T: Ord> {
    /// Perform at most one unit of work on `array`.
    fn step(&mut self, array: &mut [T]) -> StepResult;

    /// Whether the resumption state has reached its terminal state.
    fn is_finished(&self) -> bool;
}

/// The algorithms the visualizer knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion(InsertionReport),
    Merge,
}

impl Algorithm {
    /// Every variant, in default registration order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion(InsertionReport::Displaced),
        Algorithm::Insertion(InsertionReport::Key),
        Algorithm::Merge,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion(InsertionReport::Displaced) => "Insertion Sort",
            Algorithm::Insertion(InsertionReport::Key) => "Insertion Sort (key trace)",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Slots this algorithm would occupy in a flat integer state vector.
    ///
    /// Checked against the session's state capacity at registration time.
    pub fn state_slots(self) -> usize {
        match self {
            Algorithm::Bubble | Algorithm::Selection => 2,
            Algorithm::Insertion(_) => 3,
            Algorithm::Merge => 7 + MERGE_BUFFER_SLOTS,
        }
    }

    /// Create a zeroed step function for this algorithm.
    pub fn start<T: Ord + Clone>(self) -> Stepper<T> {
        match self {
            Algorithm::Bubble => Stepper::Bubble(BubbleSort::new()),
            Algorithm::Selection => Stepper::Selection(SelectionSort::new()),
            Algorithm::Insertion(report) => Stepper::Insertion(InsertionSort::new(report)),
            Algorithm::Merge => Stepper::Merge(MergeSort::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Resumption state for whichever algorithm is active
#[derive(Debug, Clone)]
pub enum Stepper<T> {
    Bubble(BubbleSort),
    Selection(SelectionSort),
    Insertion(InsertionSort<T>),
    Merge(MergeSort<T>),
}

impl<T> Stepper<T> {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Stepper::Bubble(_) => Algorithm::Bubble,
            Stepper::Selection(_) => Algorithm::Selection,
            Stepper::Insertion(sort) => Algorithm::Insertion(sort.report()),
            Stepper::Merge(_) => Algorithm::Merge,
        }
    }
}

impl<T: Ord + Clone> StepFunction<T> for Stepper<T> {
    fn step(&mut self, array: &mut [T]) -> StepResult {
        match self {
            Stepper::Bubble(sort) => sort.step(array),
            Stepper::Selection(sort) => sort.step(array),
            Stepper::Insertion(sort) => sort.step(array),
            Stepper::Merge(sort) => sort.step(array),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Stepper::Bubble(sort) => sort.is_finished(),
            Stepper::Selection(sort) => sort.is_finished(),
            Stepper::Insertion(sort) => sort.is_finished(),
            Stepper::Merge(sort) => sort.is_finished(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{StepFunction, StepResult};

    /// Drive `sorter` until it terminates, returning every result.
    ///
    /// Panics if the run exceeds a generous quadratic budget.
    pub fn run_to_end<T: Ord, S: StepFunction<T>>(
        sorter: &mut S,
        array: &mut [T],
    ) -> Vec<StepResult> {
        let n = array.len();
        let budget = 2 * n * n + 8 * n + 16;
        let mut results = Vec::new();
        for _ in 0..budget {
            let result = sorter.step(array);
            results.push(result);
            if result.terminated {
                return results;
            }
        }
        panic!("sorter did not terminate within {} steps", budget);
    }

    /// Sorts by `key` only, so equal keys expose ordering of `tag`.
    #[derive(Debug, Clone, Copy)]
    pub struct Keyed {
        pub key: i32,
        pub tag: char,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }
}
