//! # Append-Only Merkle Accumulator
//!
//! A binary Merkle tree that only ever appends. Admitted leaves are
//! permanent: there is no deletion or update operation, and duplicate leaf
//! values are structurally permitted (uniqueness belongs to the registry
//! layer, not the accumulator).
//!
//! ## Shape
//!
//! The tree is dynamic-depth: `depth` grows by one level exactly when
//! `size` exceeds the current capacity `2^depth`. Absent right subtrees are
//! padded with cached per-level zero nodes (`zeros[0] = Node::EMPTY`,
//! `zeros[l+1] = H(zeros[l], zeros[l])`).
//!
//! ## Lone-leaf rule
//!
//! The empty tree has root `Node::EMPTY`. At `size == 1` the depth is zero
//! and the root IS the leaf itself — no padding hash is applied. The first
//! padding appears when the second leaf forces `depth == 1`.
//!
//! ## Determinism
//!
//! The root depends solely on the ordered leaf list and the injected
//! combining function. [`root_from_leaves`] recomputes it from scratch and
//! must always agree with the incremental state.

use crate::hasher::NodeHasher;
use crate::node::Node;

/// An append-only binary Merkle tree over an injected combining strategy.
///
/// `levels[0]` holds the leaves in admission order; `levels[l + 1]` holds
/// the parents of `levels[l]`. Only the O(log size) path touched by an
/// insert is recomputed.
#[derive(Debug, Clone)]
pub struct MerkleAccumulator<H> {
    hasher: H,
    levels: Vec<Vec<Node>>,
    zeros: Vec<Node>,
}

impl<H: NodeHasher> MerkleAccumulator<H> {
    /// Create an empty accumulator over the given combining strategy.
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            levels: vec![Vec::new()],
            zeros: vec![Node::EMPTY],
        }
    }

    /// Borrow the combining strategy.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Number of leaves inserted so far.
    pub fn size(&self) -> usize {
        self.levels[0].len()
    }

    /// Current tree depth. Zero until the second leaf arrives.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// The current root.
    ///
    /// `Node::EMPTY` for the empty tree; the lone leaf itself at
    /// `size == 1`; otherwise the top of the recomputed parent chain.
    pub fn root(&self) -> Node {
        if self.size() == 0 {
            return Node::EMPTY;
        }
        // The top level always holds exactly one node once size > 0.
        self.levels[self.depth()][0]
    }

    /// Borrow the ordered leaf list.
    pub fn leaves(&self) -> &[Node] {
        &self.levels[0]
    }

    /// Append a leaf at index `size` and return the new root.
    ///
    /// Grows `depth` by one when the new size exceeds `2^depth`, then
    /// recomputes only the parent path of the appended index. Total: this
    /// operation cannot fail.
    pub fn insert(&mut self, leaf: Node) -> Node {
        let index = self.size();
        self.levels[0].push(leaf);
        let size = index + 1;

        while size > (1usize << self.depth()) {
            let top_zero = self.zeros[self.zeros.len() - 1];
            self.zeros.push(self.hasher.combine(&top_zero, &top_zero));
            self.levels.push(Vec::new());
        }

        let mut idx = index;
        for level in 0..self.depth() {
            let left_idx = idx & !1;
            let left = self.levels[level][left_idx];
            let right = self.levels[level]
                .get(left_idx + 1)
                .copied()
                .unwrap_or(self.zeros[level]);
            let parent = self.hasher.combine(&left, &right);

            let parent_idx = idx / 2;
            if parent_idx == self.levels[level + 1].len() {
                self.levels[level + 1].push(parent);
            } else {
                self.levels[level + 1][parent_idx] = parent;
            }
            idx = parent_idx;
        }

        self.root()
    }
}

/// Recompute the root of an ordered leaf list from scratch.
///
/// The independent-replay counterpart of [`MerkleAccumulator::insert`]:
/// auditors (and tests) use this to confirm the incremental root is a pure
/// function of the admitted leaves.
pub fn root_from_leaves<H: NodeHasher>(hasher: &H, leaves: &[Node]) -> Node {
    if leaves.is_empty() {
        return Node::EMPTY;
    }
    let mut current: Vec<Node> = leaves.to_vec();
    let mut zero = Node::EMPTY;
    while current.len() > 1 {
        let mut next = Vec::with_capacity(current.len().div_ceil(2));
        for pair in current.chunks(2) {
            let right = pair.get(1).copied().unwrap_or(zero);
            next.push(hasher.combine(&pair[0], &right));
        }
        zero = hasher.combine(&zero, &zero);
        current = next;
    }
    current[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Sha256Hasher;
    use proptest::prelude::*;

    fn leaf(i: u8) -> Node {
        Node::new([i; 32])
    }

    #[test]
    fn test_empty_tree_root() {
        let acc = MerkleAccumulator::new(Sha256Hasher);
        assert_eq!(acc.size(), 0);
        assert_eq!(acc.depth(), 0);
        assert_eq!(acc.root(), Node::EMPTY);
    }

    #[test]
    fn test_lone_leaf_is_its_own_root() {
        // Pinned rule: at size == 1 the root is the leaf itself, with no
        // padding hash applied.
        let mut acc = MerkleAccumulator::new(Sha256Hasher);
        let root = acc.insert(leaf(7));
        assert_eq!(root, leaf(7));
        assert_eq!(acc.depth(), 0);
        assert_eq!(acc.root(), leaf(7));
    }

    #[test]
    fn test_two_leaves_combine() {
        let h = Sha256Hasher;
        let mut acc = MerkleAccumulator::new(h);
        acc.insert(leaf(1));
        let root = acc.insert(leaf(2));
        assert_eq!(root, h.combine(&leaf(1), &leaf(2)));
        assert_eq!(acc.depth(), 1);
    }

    #[test]
    fn test_three_leaves_pad_with_zero() {
        let h = Sha256Hasher;
        let mut acc = MerkleAccumulator::new(h);
        acc.insert(leaf(1));
        acc.insert(leaf(2));
        let root = acc.insert(leaf(3));
        let expected = h.combine(
            &h.combine(&leaf(1), &leaf(2)),
            &h.combine(&leaf(3), &Node::EMPTY),
        );
        assert_eq!(root, expected);
        assert_eq!(acc.depth(), 2);
    }

    #[test]
    fn test_depth_growth_schedule() {
        // size 1, 2, 3, 5, 9 leaves cross capacity at depths 0, 1, 2, 3, 4.
        let mut acc = MerkleAccumulator::new(Sha256Hasher);
        let expected = [
            (1, 0),
            (2, 1),
            (3, 2),
            (4, 2),
            (5, 3),
            (8, 3),
            (9, 4),
            (16, 4),
            (17, 5),
        ];
        let mut inserted = 0usize;
        for (size, depth) in expected {
            while inserted < size {
                acc.insert(leaf(inserted as u8));
                inserted += 1;
            }
            assert_eq!(acc.depth(), depth, "depth mismatch at size {size}");
        }
    }

    #[test]
    fn test_incremental_matches_replay() {
        let h = Sha256Hasher;
        for size in [1usize, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 33] {
            let leaves: Vec<Node> = (0..size).map(|i| leaf(i as u8)).collect();
            let mut acc = MerkleAccumulator::new(h);
            let mut last = Node::EMPTY;
            for l in &leaves {
                last = acc.insert(*l);
            }
            assert_eq!(last, acc.root());
            assert_eq!(
                acc.root(),
                root_from_leaves(&h, &leaves),
                "replay mismatch at size {size}"
            );
        }
    }

    #[test]
    fn test_duplicate_leaf_values_permitted() {
        let mut acc = MerkleAccumulator::new(Sha256Hasher);
        acc.insert(leaf(1));
        acc.insert(leaf(1));
        assert_eq!(acc.size(), 2);
    }

    #[test]
    fn test_insert_changes_root() {
        let mut acc = MerkleAccumulator::new(Sha256Hasher);
        let r1 = acc.insert(leaf(1));
        let r2 = acc.insert(leaf(2));
        assert_ne!(r1, r2);
    }

    proptest! {
        #[test]
        fn prop_incremental_equals_replay(raw in proptest::collection::vec(
            proptest::array::uniform32(any::<u8>()), 1..64,
        )) {
            let h = Sha256Hasher;
            let leaves: Vec<Node> = raw.into_iter().map(Node::new).collect();
            let mut acc = MerkleAccumulator::new(h);
            for l in &leaves {
                acc.insert(*l);
            }
            prop_assert_eq!(acc.root(), root_from_leaves(&h, &leaves));
        }
    }
}
