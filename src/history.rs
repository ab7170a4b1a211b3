//! Bounded most-recent-first history of past searches and analyses.
//!
//! Owned by the caller; the search and strength functions never touch it.

use std::collections::VecDeque;

use crate::types::{SearchComparison, Strength, StrengthReport};

pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Fixed-capacity buffer, newest entry first. Pushing past capacity drops the oldest.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> History<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: T) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistoryEntry {
    pub password: String,
    pub linear: String,
    pub binary: String,
}

impl From<&SearchComparison> for SearchHistoryEntry {
    fn from(comparison: &SearchComparison) -> Self {
        Self {
            password: comparison.target.clone(),
            linear: comparison.linear.outcome(),
            binary: comparison.binary.result.outcome(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisHistoryEntry {
    pub password: String,
    pub strength: Strength,
}

impl AnalysisHistoryEntry {
    pub fn new(password: impl Into<String>, report: &StrengthReport) -> Self {
        Self {
            password: password.into(),
            strength: report.strength,
        }
    }
}
