//! # census-crypto — Accumulator Primitives for the Census Registry
//!
//! Provides the append-only Merkle accumulator that commits to the ordered
//! set of admitted members, together with the node value type and the
//! pluggable combining-hash strategy it is built on.
//!
//! ## Design
//!
//! The accumulator has no compile-time dependency on a specific hash: it is
//! generic over [`NodeHasher`], a two-input combining strategy supplied at
//! construction. [`Sha256Hasher`] is the provided implementation, using the
//! byte domain separation `0x00` (leaf) / `0x01` (interior node) so a leaf
//! value can never be confused with an interior node preimage.
//!
//! The root is a pure function of the ordered leaf list: replaying the
//! leaves through [`root_from_leaves`] always reproduces the incremental
//! root. No hidden state participates in root computation.

pub mod hasher;
pub mod node;
pub mod tree;

pub use hasher::{leaf_for_handle, NodeHasher, Sha256Hasher};
pub use node::Node;
pub use tree::{root_from_leaves, MerkleAccumulator};
