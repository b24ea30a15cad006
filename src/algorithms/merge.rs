//! Bottom-up merge sort driven one cell at a time
//!
//! Runs of width 1, 2, 4, ... are merged pairwise. Each merge has two
//! phases:
//!
//! 1. **Merge**: one call takes one element into a private buffer, comparing
//!    the heads of both runs while both are non-empty. The array is not
//!    touched in this phase.
//! 2. **Copy back**: one call writes one buffered element to its final
//!    position. Elements whose origin equals their destination are skipped
//!    without counting as a mutation.
//!
//! Locating the next pair of runs is not a unit of work of its own; it is
//! folded into the first take of the following merge. Equal elements are
//! taken from the left run first, which keeps the sort stable.

use std::collections::VecDeque;

use super::{StepFunction, StepResult};

/// Bounds of one merge: left run is `lo..mid`, right run is `mid..hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    width: usize,
    lo: usize,
    mid: usize,
    hi: usize,
}

#[derive(Debug, Clone)]
enum MergeState<T> {
    Start,
    Locate {
        width: usize,
        lo: usize,
    },
    Merging {
        span: Span,
        left: usize,
        right: usize,
        // (value, origin index)
        buffer: VecDeque<(T, usize)>,
    },
    CopyBack {
        span: Span,
        buffer: VecDeque<(T, usize)>,
    },
    Done,
}

/// Resumable bottom-up merge sort
#[derive(Debug, Clone)]
pub struct MergeSort<T> {
    state: MergeState<T>,
}

impl<T> MergeSort<T> {
    pub fn new() -> Self {
        MergeSort {
            state: MergeState::Start,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, MergeState::Done)
    }
}

impl<T> Default for MergeSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> MergeSort<T> {
    /// Find the next pair of runs starting at `lo` and take its first element.
    fn locate(&mut self, array: &[T], mut width: usize, mut lo: usize) -> StepResult {
        let n = array.len();
        loop {
            if width >= n {
                self.state = MergeState::Done;
                return StepResult::finished();
            }
            let mid = lo + width;
            if mid >= n {
                // No right run left in this pass
                width *= 2;
                lo = 0;
                continue;
            }
            let hi = (lo + 2 * width).min(n);
            let span = Span { width, lo, mid, hi };
            return self.take(array, span, lo, mid, VecDeque::with_capacity(hi - lo));
        }
    }

    fn take(
        &mut self,
        array: &[T],
        span: Span,
        mut left: usize,
        mut right: usize,
        mut buffer: VecDeque<(T, usize)>,
    ) -> StepResult {
        let dest = span.lo + buffer.len();
        let result = if left < span.mid && right < span.hi {
            let result = StepResult::compared(left, right);
            // Ties go left
            if array[left] <= array[right] {
                buffer.push_back((array[left].clone(), left));
                left += 1;
            } else {
                buffer.push_back((array[right].clone(), right));
                right += 1;
            }
            result
        } else if left < span.mid {
            buffer.push_back((array[left].clone(), left));
            left += 1;
            StepResult::compared(left - 1, dest)
        } else {
            buffer.push_back((array[right].clone(), right));
            right += 1;
            StepResult::compared(right - 1, dest)
        };

        self.state = if buffer.len() == span.hi - span.lo {
            MergeState::CopyBack { span, buffer }
        } else {
            MergeState::Merging {
                span,
                left,
                right,
                buffer,
            }
        };
        result
    }

    fn copy_back(
        &mut self,
        array: &mut [T],
        span: Span,
        mut buffer: VecDeque<(T, usize)>,
    ) -> StepResult {
        let dest = span.hi - buffer.len();
        let result = match buffer.pop_front() {
            Some((value, origin)) if origin != dest => {
                array[dest] = value;
                StepResult::moved(origin, dest)
            }
            Some((_, origin)) => StepResult::compared(origin, dest),
            None => StepResult::idle(),
        };

        self.state = if buffer.is_empty() {
            MergeState::Locate {
                width: span.width,
                lo: span.lo + 2 * span.width,
            }
        } else {
            MergeState::CopyBack { span, buffer }
        };
        result
    }
}

impl<T: Ord + Clone> StepFunction<T> for MergeSort<T> {
    fn step(&mut self, array: &mut [T]) -> StepResult {
        match std::mem::replace(&mut self.state, MergeState::Done) {
            MergeState::Done => StepResult::finished(),
            MergeState::Start => self.locate(array, 1, 0),
            MergeState::Locate { width, lo } => self.locate(array, width, lo),
            MergeState::Merging {
                span,
                left,
                right,
                buffer,
            } => self.take(array, span, left, right, buffer),
            MergeState::CopyBack { span, buffer } => self.copy_back(array, span, buffer),
        }
    }

    fn is_finished(&self) -> bool {
        MergeSort::is_finished(self)
    }
}
