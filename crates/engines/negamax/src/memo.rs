//! Score memoization and recent-position bookkeeping.

use std::collections::{HashMap, VecDeque};

use chess_rules::Score;

/// Fingerprint-keyed score cache.
///
/// Entries carry no depth or bound metadata and are never evicted; a
/// fingerprint reached again in a different search context reuses the
/// stored score as-is.
#[derive(Debug, Default)]
pub(crate) struct MemoTable {
    entries: HashMap<u64, Score>,
}

impl MemoTable {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, fingerprint: u64) -> Option<Score> {
        self.entries.get(&fingerprint).copied()
    }

    pub(crate) fn insert(&mut self, fingerprint: u64, score: Score) {
        self.entries.insert(fingerprint, score);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Bounded FIFO of fingerprints for positions reached after the agent's
/// own moves. The oldest entry falls out at capacity; nothing else ever
/// clears it.
#[derive(Debug)]
pub(crate) struct RecentPositions {
    queue: VecDeque<u64>,
    capacity: usize,
}

impl RecentPositions {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, fingerprint: u64) {
        self.queue.push_back(fingerprint);
        if self.queue.len() > self.capacity {
            self.queue.pop_front();
        }
    }

    pub(crate) fn contains(&self, fingerprint: u64) -> bool {
        self.queue.contains(&fingerprint)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
#[path = "memo_tests.rs"]
mod memo_tests;
