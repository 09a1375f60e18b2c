//! Shared, bounded score history.
//!
//! The only state that persists across scoring calls. Injectable so that
//! tests and multi-tenant callers get independent instances; shared via
//! `Arc` between scorers that should calibrate against the same stream.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use sector_core::constants::DEFAULT_HISTORY_CAPACITY;

/// Bounded FIFO ring buffer of past overall scores.
#[derive(Debug)]
pub struct ScoreHistory {
    entries: Mutex<VecDeque<f64>>,
    capacity: usize,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<f64>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a score, evicting the oldest entry past capacity.
    pub fn record(&self, score: f64) {
        let mut entries = self.lock();
        entries.push_back(score);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Copy of all retained scores, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        self.lock().iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all retained scores.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for ScoreHistory {
    fn default() -> Self {
        Self::new()
    }
}
