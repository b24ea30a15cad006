//! Catalog of drivable algorithms
//!
//! The registry is built once at startup, either entry by entry with
//! [`Registry::register`] or in one go with [`Registry::register_all`], and
//! then handed to the session by value. Nothing mutates it afterwards.
//!
//! Entries are kept in registration order; lookups by display name go through
//! an index map.

use crate::algorithms::Algorithm;
use crate::errors::{ConfigurationError, SelectionError};
use rustc_hash::FxHashMap;

/// State-vector capacity of the session: merge sort's 7 bookkeeping slots
/// plus a 10-element buffer.
pub const DEFAULT_STATE_CAPACITY: usize = 17;

/// One registered algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    pub name: String,
    pub algorithm: Algorithm,
    pub state_slots: usize,
}

/// Append-only, name-unique list of algorithms
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<AlgorithmDescriptor>,
    by_name: FxHashMap<String, usize>,
    state_capacity: usize,
}

impl Registry {
    /// Create an empty registry for a session with `state_capacity` slots.
    pub fn new(state_capacity: usize) -> Self {
        Registry {
            entries: Vec::new(),
            by_name: FxHashMap::default(),
            state_capacity,
        }
    }

    /// Registry holding every built-in algorithm in default order.
    pub fn with_defaults() -> Result<Self, ConfigurationError> {
        let mut registry = Registry::new(DEFAULT_STATE_CAPACITY);
        registry.register_all()?;
        Ok(registry)
    }

    /// Register every built-in algorithm under its display name.
    pub fn register_all(&mut self) -> Result<(), ConfigurationError> {
        for algorithm in Algorithm::ALL {
            self.register(algorithm.display_name(), algorithm, algorithm.state_slots())?;
        }
        Ok(())
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        algorithm: Algorithm,
        state_slots: usize,
    ) -> Result<(), ConfigurationError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(ConfigurationError::DuplicateAlgorithm { name });
        }
        if state_slots > self.state_capacity {
            return Err(ConfigurationError::StateCapacityExceeded {
                name,
                required: state_slots,
                capacity: self.state_capacity,
            });
        }

        tracing::debug!(name = %name, slots = state_slots, "registered algorithm");
        self.by_name.insert(name.clone(), self.entries.len());
        self.entries.push(AlgorithmDescriptor {
            name,
            algorithm,
            state_slots,
        });
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn by_index(&self, index: usize) -> Result<&AlgorithmDescriptor, SelectionError> {
        self.entries
            .get(index)
            .ok_or(SelectionError::AlgorithmIndexOutOfRange {
                index,
                count: self.entries.len(),
            })
    }

    pub fn by_name(&self, name: &str) -> Result<&AlgorithmDescriptor, SelectionError> {
        self.index_of(name).map(|index| &self.entries[index])
    }

    /// Registration index of `name`.
    pub fn index_of(&self, name: &str) -> Result<usize, SelectionError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| SelectionError::AlgorithmNotFound {
                name: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.entries.iter()
    }
}
