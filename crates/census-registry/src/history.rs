//! # Bounded Root History
//!
//! A capacity-`H` record of superseded accumulator roots and the position
//! at which each stopped being current. Provers build membership proofs
//! against whatever root is current at proof-construction time; by
//! submission the registry may have advanced. Retaining the last `H`
//! superseded roots gives provers a grace window of `H` intervening
//! admissions while bounding storage to O(H).
//!
//! ## Layout
//!
//! Ring buffer (slot vector + head index) paired with a root → slot map.
//! Insert and evict are O(1); validity lookup is O(1). Evicting a slot
//! also deletes its map entry, so a query against an evicted root reports
//! "unknown" — never stale data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use census_core::{ConfigError, Position};
use census_crypto::Node;

/// A superseded root and the position at which it stopped being current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootHistoryEntry {
    /// The superseded root value.
    pub root: Node,
    /// The admission position at which the root was replaced.
    pub superseded_at: Position,
}

/// Fixed-capacity history of superseded roots, oldest evicted first.
#[derive(Debug, Clone)]
pub struct RootHistory {
    slots: Vec<Option<RootHistoryEntry>>,
    /// Next slot to write; wraps modulo capacity.
    head: usize,
    len: usize,
    /// Root value → slot index, kept in lockstep with `slots`.
    lookup: HashMap<Node, usize>,
}

impl RootHistory {
    /// Create an empty history with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroHistoryCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        Ok(Self {
            slots: vec![None; capacity],
            head: 0,
            len: 0,
            lookup: HashMap::with_capacity(capacity),
        })
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Current number of retained entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no root has been superseded yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bookkeeping hook for a root transition.
    ///
    /// Records `(old_root, now)` iff the old root is non-null
    /// (`Node::EMPTY` is the empty-tree sentinel and is never retained)
    /// and actually changed.
    pub fn on_root_changed(&mut self, old_root: Node, new_root: Node, now: Position) {
        if old_root != Node::EMPTY && old_root != new_root {
            self.record(old_root, now);
        }
    }

    /// Record that `root` stopped being current at `superseded_at`.
    ///
    /// When full, the oldest entry is evicted first and its lookup record
    /// removed. If the same root value is superseded again (possible only
    /// if the tree root ever repeats), the newer position wins and the
    /// stale slot is vacated.
    pub fn record(&mut self, root: Node, superseded_at: Position) {
        if let Some(old_slot) = self.lookup.remove(&root) {
            self.slots[old_slot] = None;
            self.len -= 1;
        }
        if let Some(evicted) = self.slots[self.head].take() {
            self.lookup.remove(&evicted.root);
            self.len -= 1;
        }
        self.slots[self.head] = Some(RootHistoryEntry { root, superseded_at });
        self.lookup.insert(root, self.head);
        self.head = (self.head + 1) % self.slots.len();
        self.len += 1;
    }

    /// The position at which `root` was superseded, or `None` if the root
    /// was never recorded or has been evicted.
    pub fn superseded_at(&self, root: &Node) -> Option<Position> {
        let slot = *self.lookup.get(root)?;
        self.slots[slot].map(|entry| entry.superseded_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(i: u8) -> Node {
        Node::new([i; 32])
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            RootHistory::new(0).unwrap_err(),
            ConfigError::ZeroHistoryCapacity
        );
    }

    #[test]
    fn test_record_and_lookup() {
        let mut h = RootHistory::new(3).unwrap();
        h.record(node(1), Position(1));
        h.record(node(2), Position(2));
        assert_eq!(h.len(), 2);
        assert_eq!(h.superseded_at(&node(1)), Some(Position(1)));
        assert_eq!(h.superseded_at(&node(2)), Some(Position(2)));
        assert_eq!(h.superseded_at(&node(9)), None);
    }

    #[test]
    fn test_eviction_is_oldest_first_and_forgets() {
        let mut h = RootHistory::new(2).unwrap();
        h.record(node(1), Position(1));
        h.record(node(2), Position(2));
        h.record(node(3), Position(3));
        assert_eq!(h.len(), 2);
        // node(1) was evicted: unknown, not stale.
        assert_eq!(h.superseded_at(&node(1)), None);
        assert_eq!(h.superseded_at(&node(2)), Some(Position(2)));
        assert_eq!(h.superseded_at(&node(3)), Some(Position(3)));
    }

    #[test]
    fn test_wraparound_keeps_lookup_consistent() {
        let mut h = RootHistory::new(2).unwrap();
        for i in 1..=10u8 {
            h.record(node(i), Position(i as u64));
        }
        assert_eq!(h.len(), 2);
        assert_eq!(h.superseded_at(&node(9)), Some(Position(9)));
        assert_eq!(h.superseded_at(&node(10)), Some(Position(10)));
        for i in 1..=8u8 {
            assert_eq!(h.superseded_at(&node(i)), None, "slot {i} leaked");
        }
    }

    #[test]
    fn test_on_root_changed_skips_null_and_unchanged_roots() {
        let mut h = RootHistory::new(2).unwrap();
        // Empty-tree sentinel is never retained.
        h.on_root_changed(Node::EMPTY, node(1), Position(1));
        assert!(h.is_empty());
        // An unchanged root is not a supersession.
        h.on_root_changed(node(1), node(1), Position(2));
        assert!(h.is_empty());
        h.on_root_changed(node(1), node(2), Position(3));
        assert_eq!(h.superseded_at(&node(1)), Some(Position(3)));
    }

    #[test]
    fn test_repeated_root_takes_newer_position() {
        let mut h = RootHistory::new(3).unwrap();
        h.record(node(1), Position(1));
        h.record(node(1), Position(5));
        assert_eq!(h.len(), 1);
        assert_eq!(h.superseded_at(&node(1)), Some(Position(5)));
    }
}
