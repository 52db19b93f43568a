//! Collected-clue log - every clue in the order it was picked up.

use manor::BoundedText;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Append-only, bounded record of collected clues.
///
/// Unlike the ledger this keeps collection order and does not deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectedLog {
    entries: Vec<BoundedText>,
    capacity: usize,
}

impl CollectedLog {
    /// Create an empty log holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a clue. Returns `false` (and drops the clue) when the log is full.
    pub fn push(&mut self, clue: BoundedText) -> bool {
        if self.is_full() {
            warn!(%clue, capacity = self.capacity, "collected-clue log is full, dropping clue");
            return false;
        }
        self.entries.push(clue);
        true
    }

    pub fn entries(&self) -> &[BoundedText] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoundedText> {
        self.entries.iter()
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

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}

impl<'a> IntoIterator for &'a CollectedLog {
    type Item = &'a BoundedText;
    type IntoIter = std::slice::Iter<'a, BoundedText>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
