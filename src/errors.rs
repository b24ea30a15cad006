//! Error types for the visualizer core
//!
//! Two families, split by how they are handled:
//!
//! - [`ConfigurationError`]: raised while assembling the registry and the
//!   session at startup. Fatal; `main` reports it and exits.
//! - [`SelectionError`]: an intent named an algorithm or size that does not
//!   exist. The session is left unchanged and the intent is ignored.
//!
//! Contract violations by a step function are not represented here; they are
//! debug assertions in the session.

use std::fmt;

/// Startup errors that abort initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// An algorithm name was registered twice
    DuplicateAlgorithm { name: String },

    /// An algorithm needs more state slots than the session provides
    StateCapacityExceeded {
        name: String,
        required: usize,
        capacity: usize,
    },

    /// The registry has nothing to drive
    EmptyRegistry,

    /// The requested initial algorithm is not registered
    UnknownAlgorithm { name: String },

    /// Size bounds are empty, inverted, or exclude the initial size
    InvalidSizeBounds { size: usize, min: usize, max: usize },

    /// Autoplay must advance at least one step per tick
    InvalidStepsPerTick,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::DuplicateAlgorithm { name } => {
                write!(f, "Algorithm '{}' is already registered", name)
            }
            ConfigurationError::StateCapacityExceeded {
                name,
                required,
                capacity,
            } => {
                write!(
                    f,
                    "Algorithm '{}' needs {} state slots, capacity is {}",
                    name, required, capacity
                )
            }
            ConfigurationError::EmptyRegistry => {
                write!(f, "No sorting algorithms are registered")
            }
            ConfigurationError::UnknownAlgorithm { name } => {
                write!(f, "Unknown algorithm '{}'", name)
            }
            ConfigurationError::InvalidSizeBounds { size, min, max } => {
                write!(
                    f,
                    "Invalid array size {} for bounds [{}, {}] (bounds must satisfy 1 <= min <= max)",
                    size, min, max
                )
            }
            ConfigurationError::InvalidStepsPerTick => {
                write!(f, "Steps per tick must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Rejected selection intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Algorithm index outside `[0, count)`
    AlgorithmIndexOutOfRange { index: usize, count: usize },

    /// No algorithm with this display name
    AlgorithmNotFound { name: String },

    /// Array size outside the configured bounds
    SizeOutOfRange { size: usize, min: usize, max: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::AlgorithmIndexOutOfRange { index, count } => {
                write!(
                    f,
                    "Algorithm index {} out of range ({} registered)",
                    index, count
                )
            }
            SelectionError::AlgorithmNotFound { name } => {
                write!(f, "Algorithm '{}' not found", name)
            }
            SelectionError::SizeOutOfRange { size, min, max } => {
                write!(f, "Size {} outside [{}, {}]", size, min, max)
            }
        }
    }
}

impl std::error::Error for SelectionError {}
