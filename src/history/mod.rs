// Snapshot history for stepping backward

use crate::algorithms::Stepper;
use crate::engine::{Phase, Value};
use std::collections::VecDeque;

/// Default number of snapshots kept before the oldest are evicted
pub const DEFAULT_HISTORY_LIMIT: usize = 4096;

/// Everything a forward step can change, captured just before it runs
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub values: Vec<Value>,
    pub stepper: Stepper<Value>,
    pub phase: Phase,
    pub steps: usize,
    pub swaps: usize,
    pub highlight: Option<(usize, usize)>,
    pub last_mutated: bool,
}

/// Bounded stack of snapshots, newest last
#[derive(Debug)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        History {
            snapshots: VecDeque::new(),
            limit,
        }
    }

    /// Record a snapshot, evicting the oldest one when full
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.limit == 0 {
            return;
        }
        if self.snapshots.len() == self.limit {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Take the most recent snapshot
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

}

impl Default for History {
    fn default() -> Self {
        History::new(DEFAULT_HISTORY_LIMIT)
    }
}
