//! The UI-facing boundary of a session
//!
//! The UI sends [`Intent`]s in and renders from a [`Projection`]; it never
//! reaches into the session otherwise.

use super::session::{Phase, Value};
use crate::errors::SelectionError;

/// User intents the session knows how to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    StepForward,
    StepBackward,
    TogglePause,
    Reset,
    Randomize,
    NextAlgorithm,
    SelectAlgorithm(usize),
    IncreaseSize,
    DecreaseSize,
    RunToEnd,
    Quit,
}

/// What applying an intent did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The session changed
    Applied,
    /// The intent was valid but had nothing to do (e.g. stepping a finished sort)
    Unchanged,
    /// The intent was rejected and ignored
    Ignored(SelectionError),
    /// The UI should shut down
    Quit,
}

/// Playback status shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Paused,
    Running,
    Complete,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Paused => "PAUSED",
            Status::Running => "RUNNING",
            Status::Complete => "COMPLETE",
        }
    }
}

/// Read-only view of a session for rendering
#[derive(Debug, Clone, Copy)]
pub struct Projection<'a> {
    pub values: &'a [Value],
    pub algorithm: &'a str,
    pub algorithm_index: usize,
    pub algorithm_count: usize,
    pub status: Status,
    pub phase: Phase,
    /// Positions touched by the most recent step
    pub highlight: Option<(usize, usize)>,
    /// Whether the most recent step changed the array
    pub last_mutated: bool,
    pub steps: usize,
    pub swaps: usize,
    pub size: usize,
    pub can_step_back: bool,
}

impl Projection<'_> {
    /// Whether `index` is one of the highlighted positions
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.is_some_and(|(a, b)| a == index || b == index)
    }

    /// Largest value in the array, for scaling bars
    pub fn max_value(&self) -> Value {
        self.values.iter().copied().max().unwrap_or(0)
    }
}
