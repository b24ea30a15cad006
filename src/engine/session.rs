// Sort session driving one step function at a time

use super::intent::{Intent, Outcome, Projection, Status};
use crate::algorithms::{Algorithm, StepFunction, StepResult, Stepper};
use crate::errors::{ConfigurationError, SelectionError};
use crate::history::{History, Snapshot, DEFAULT_HISTORY_LIMIT};
use crate::registry::Registry;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, trace, warn};

/// Element type of the sorted array
pub type Value = i32;

/// Upper bound on step function calls needed to sort `n` elements with any
/// built-in algorithm
pub fn step_budget(n: usize) -> usize {
    2 * n * n + 8 * n + 16
}

/// Where the session is in its sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Array set, no steps taken
    Ready,
    /// At least one step taken, not terminated
    Running,
    /// The step function reported termination
    Complete,
}

/// Inclusive bounds for resizing the array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min: usize,
    pub max: usize,
}

impl SizeBounds {
    pub fn contains(&self, size: usize) -> bool {
        (self.min..=self.max).contains(&size)
    }

    /// Non-empty range of non-zero sizes whose `1..=max` fits in a [`Value`]
    pub fn is_valid(&self) -> bool {
        self.min >= 1 && self.min <= self.max && Value::try_from(self.max).is_ok()
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        SizeBounds { min: 2, max: 64 }
    }
}

/// Startup parameters for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub size: usize,
    pub bounds: SizeBounds,
    /// Registry index of the initial algorithm
    pub algorithm_index: usize,
    /// Seed for shuffles; `None` draws from the OS
    pub seed: Option<u64>,
    pub paused: bool,
    pub history_limit: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            size: 10,
            bounds: SizeBounds::default(),
            algorithm_index: 0,
            seed: None,
            paused: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Owns the array, the active step function and everything derived from them
#[derive(Debug)]
pub struct SortSession {
    registry: Registry,
    algorithm_index: usize,

    /// Live array, mutated by the step function
    values: Vec<Value>,

    /// Array as it was before sorting, restored by reset
    original: Vec<Value>,

    /// Resumption state of the active algorithm
    stepper: Stepper<Value>,

    phase: Phase,
    steps: usize,
    swaps: usize,
    highlight: Option<(usize, usize)>,
    last_mutated: bool,
    paused: bool,
    bounds: SizeBounds,
    rng: StdRng,
    history: History,
}

impl SortSession {
    /// Create a session over a shuffled `1..=size` array.
    pub fn new(registry: Registry, options: SessionOptions) -> Result<Self, ConfigurationError> {
        if !options.bounds.is_valid() || !options.bounds.contains(options.size) {
            return Err(ConfigurationError::InvalidSizeBounds {
                size: options.size,
                min: options.bounds.min,
                max: options.bounds.max,
            });
        }
        let mut session = Self::from_values(registry, options.clone(), Vec::new())?;
        session.regenerate(options.size);
        info!(
            algorithm = session.algorithm_name(),
            size = options.size,
            "session started"
        );
        Ok(session)
    }

    /// Create a session over exactly `values`, unshuffled.
    ///
    /// `options.size` is ignored; the array may be empty or lie outside the
    /// resize bounds.
    pub fn from_values(
        registry: Registry,
        options: SessionOptions,
        values: Vec<Value>,
    ) -> Result<Self, ConfigurationError> {
        if registry.is_empty() {
            return Err(ConfigurationError::EmptyRegistry);
        }
        if !options.bounds.is_valid() {
            return Err(ConfigurationError::InvalidSizeBounds {
                size: values.len(),
                min: options.bounds.min,
                max: options.bounds.max,
            });
        }
        let algorithm = registry
            .by_index(options.algorithm_index)
            .map_err(|_| ConfigurationError::UnknownAlgorithm {
                name: format!("#{}", options.algorithm_index),
            })?
            .algorithm;
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut session = SortSession {
            registry,
            algorithm_index: options.algorithm_index,
            original: values.clone(),
            values,
            stepper: algorithm.start(),
            phase: Phase::Ready,
            steps: 0,
            swaps: 0,
            highlight: None,
            last_mutated: false,
            paused: options.paused,
            bounds: options.bounds,
            rng,
            history: History::new(options.history_limit),
        };
        session.reset();
        Ok(session)
    }

    /// Restore the original array and zero all progress.
    pub fn reset(&mut self) {
        self.values.clone_from(&self.original);
        self.stepper = self.algorithm().start();
        self.steps = 0;
        self.swaps = 0;
        self.highlight = None;
        self.last_mutated = false;
        self.history.clear();
        // Nothing to sort: no step is needed to observe completion
        self.phase = if self.values.is_empty() {
            Phase::Complete
        } else {
            Phase::Ready
        };
        debug!(algorithm = self.algorithm_name(), "session reset");
    }

    /// Shuffle the original values into a new original and reset.
    ///
    /// The live array is not shuffled: mid-merge it may hold a duplicate in
    /// place of a value still waiting in the merge buffer.
    pub fn randomize(&mut self) {
        let mut values = self.original.clone();
        values.shuffle(&mut self.rng);
        self.original = values;
        info!(size = self.original.len(), "array randomized");
        self.reset();
    }

    pub fn select_algorithm(&mut self, index: usize) -> Result<(), SelectionError> {
        let name = self.registry.by_index(index)?.name.clone();
        self.algorithm_index = index;
        info!(algorithm = %name, index, "algorithm selected");
        self.reset();
        Ok(())
    }

    /// Cycle to the next registered algorithm.
    pub fn next_algorithm(&mut self) -> Result<(), SelectionError> {
        let next = (self.algorithm_index + 1) % self.registry.count();
        self.select_algorithm(next)
    }

    pub fn select_algorithm_by_name(&mut self, name: &str) -> Result<(), SelectionError> {
        let index = self.registry.index_of(name)?;
        self.select_algorithm(index)
    }

    /// Perform one unit of work. Returns `None` once the sort is complete.
    pub fn step_forward(&mut self) -> Option<StepResult> {
        if self.phase == Phase::Complete {
            return None;
        }

        let snapshot = self.snapshot();
        self.history.push(snapshot);
        let result = self.stepper.step(&mut self.values);

        let n = self.values.len();
        let in_bounds = result.indices().filter(|&(a, b)| a < n && b < n);
        debug_assert!(
            !result.mutated || in_bounds.is_some(),
            "{} mutated the array without reporting valid indices: {:?}",
            self.algorithm_name(),
            result
        );

        self.steps += 1;
        if result.mutated {
            self.swaps += 1;
        }
        self.highlight = in_bounds;
        self.last_mutated = result.mutated;
        trace!(step = self.steps, ?result, "step");

        if result.terminated {
            self.phase = Phase::Complete;
            self.highlight = None;
            info!(
                algorithm = self.algorithm_name(),
                steps = self.steps,
                swaps = self.swaps,
                "sort complete"
            );
        } else {
            self.phase = Phase::Running;
        }
        Some(result)
    }

    /// Undo the most recent forward step. Returns false with no history.
    pub fn step_backward(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.values = snapshot.values;
        self.stepper = snapshot.stepper;
        self.phase = snapshot.phase;
        self.steps = snapshot.steps;
        self.swaps = snapshot.swaps;
        self.highlight = snapshot.highlight;
        self.last_mutated = snapshot.last_mutated;
        true
    }

    /// Step until complete. Returns the number of steps taken.
    pub fn run_to_completion(&mut self) -> usize {
        let budget = step_budget(self.values.len());
        let mut taken = 0;
        while taken < budget && self.step_forward().is_some() {
            taken += 1;
        }
        if self.phase != Phase::Complete {
            warn!(
                algorithm = self.algorithm_name(),
                budget, "sort did not complete within its step budget"
            );
        }
        taken
    }

    /// Regenerate a shuffled `1..=size` array and reset.
    pub fn resize(&mut self, size: usize) -> Result<(), SelectionError> {
        if !self.bounds.contains(size) {
            return Err(SelectionError::SizeOutOfRange {
                size,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        self.regenerate(size);
        info!(size, "array resized");
        Ok(())
    }

    /// Grow by one element; no-op at the upper bound.
    pub fn increase_size(&mut self) -> bool {
        let size = self.values.len() + 1;
        self.bounds.contains(size) && self.resize(size).is_ok()
    }

    /// Shrink by one element; no-op at the lower bound.
    pub fn decrease_size(&mut self) -> bool {
        let Some(size) = self.values.len().checked_sub(1) else {
            return false;
        };
        self.bounds.contains(size) && self.resize(size).is_ok()
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Apply a UI intent. Rejections are logged and leave the session as is.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        let result = match intent {
            Intent::StepForward => {
                return match self.step_forward() {
                    Some(_) => Outcome::Applied,
                    None => Outcome::Unchanged,
                }
            }
            Intent::StepBackward => {
                return if self.step_backward() {
                    Outcome::Applied
                } else {
                    Outcome::Unchanged
                }
            }
            Intent::RunToEnd => {
                return if self.run_to_completion() > 0 {
                    Outcome::Applied
                } else {
                    Outcome::Unchanged
                }
            }
            Intent::IncreaseSize => {
                return if self.increase_size() {
                    Outcome::Applied
                } else {
                    Outcome::Unchanged
                }
            }
            Intent::DecreaseSize => {
                return if self.decrease_size() {
                    Outcome::Applied
                } else {
                    Outcome::Unchanged
                }
            }
            Intent::TogglePause => {
                self.toggle_pause();
                Ok(())
            }
            Intent::Reset => {
                self.reset();
                Ok(())
            }
            Intent::Randomize => {
                self.randomize();
                Ok(())
            }
            Intent::NextAlgorithm => self.next_algorithm(),
            Intent::SelectAlgorithm(index) => self.select_algorithm(index),
            Intent::Quit => return Outcome::Quit,
        };

        match result {
            Ok(()) => Outcome::Applied,
            Err(e) => {
                warn!(?intent, error = %e, "intent ignored");
                Outcome::Ignored(e)
            }
        }
    }

    pub fn projection(&self) -> Projection<'_> {
        Projection {
            values: &self.values,
            algorithm: self.algorithm_name(),
            algorithm_index: self.algorithm_index,
            algorithm_count: self.registry.count(),
            status: self.status(),
            phase: self.phase,
            highlight: self.highlight,
            last_mutated: self.last_mutated,
            steps: self.steps,
            swaps: self.swaps,
            size: self.values.len(),
            can_step_back: !self.history.is_empty(),
        }
    }

    pub fn status(&self) -> Status {
        if self.phase == Phase::Complete {
            Status::Complete
        } else if self.paused {
            Status::Paused
        } else {
            Status::Running
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn original(&self) -> &[Value] {
        &self.original
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn swaps(&self) -> usize {
        self.swaps
    }

    pub fn highlight(&self) -> Option<(usize, usize)> {
        self.highlight
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn algorithm_index(&self) -> usize {
        self.algorithm_index
    }

    pub fn algorithm_name(&self) -> &str {
        self.registry
            .by_index(self.algorithm_index)
            .map(|d| d.name.as_str())
            .unwrap_or("?")
    }

    fn algorithm(&self) -> Algorithm {
        self.registry
            .by_index(self.algorithm_index)
            .map(|d| d.algorithm)
            .unwrap_or(Algorithm::Bubble)
    }

    fn regenerate(&mut self, size: usize) {
        // Bounds are validated to fit a Value
        let top = Value::try_from(size).unwrap_or(Value::MAX);
        let mut values: Vec<Value> = (1..=top).collect();
        values.shuffle(&mut self.rng);
        self.original = values;
        self.reset();
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self.values.clone(),
            stepper: self.stepper.clone(),
            phase: self.phase,
            steps: self.steps,
            swaps: self.swaps,
            highlight: self.highlight,
            last_mutated: self.last_mutated,
        }
    }
}
