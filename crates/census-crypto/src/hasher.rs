//! # Combining-Hash Strategy
//!
//! The accumulator is generic over a two-input combining function supplied
//! at construction, so it has no compile-time dependency on a specific hash
//! implementation. [`Sha256Hasher`] is the provided strategy.
//!
//! ## Domain Separation
//!
//! - Leaf: `SHA256(0x00 || data)`.
//! - Interior node: `SHA256(0x01 || left || right)`.
//!
//! The prefix byte makes it impossible to present an interior node preimage
//! as a leaf or vice versa.

use sha2::{Digest, Sha256};

use census_core::AccountHandle;

use crate::node::Node;

/// Prefix byte for leaf hashing.
const LEAF_DOMAIN: u8 = 0x00;
/// Prefix byte for interior-node hashing.
const NODE_DOMAIN: u8 = 0x01;

/// A pluggable combining-hash strategy for the accumulator.
///
/// Implementations must be pure: the same inputs always produce the same
/// output, with no side effects. `Send + Sync` so a registry can sit behind
/// a shared lock.
pub trait NodeHasher: Send + Sync {
    /// Hash raw data into a leaf node.
    fn leaf(&self, data: &[u8]) -> Node;

    /// Combine two child nodes into their parent.
    fn combine(&self, left: &Node, right: &Node) -> Node;
}

/// The provided SHA-256 combining strategy with byte domain separation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl NodeHasher for Sha256Hasher {
    fn leaf(&self, data: &[u8]) -> Node {
        let mut input = Vec::with_capacity(1 + data.len());
        input.push(LEAF_DOMAIN);
        input.extend_from_slice(data);
        sha256_node(&input)
    }

    fn combine(&self, left: &Node, right: &Node) -> Node {
        let mut input = Vec::with_capacity(65);
        input.push(NODE_DOMAIN);
        input.extend_from_slice(left.as_bytes());
        input.extend_from_slice(right.as_bytes());
        sha256_node(&input)
    }
}

/// Compute SHA-256 of raw bytes as a `Node`.
fn sha256_node(input: &[u8]) -> Node {
    let hash = Sha256::digest(input);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    Node::new(out)
}

/// Derive the accumulator leaf for an admitted account handle.
///
/// One leaf per admission: the leaf is the domain-separated hash of the
/// handle's UTF-8 bytes, so it is reproducible by any party holding the
/// handle and the same hasher.
pub fn leaf_for_handle<H: NodeHasher>(hasher: &H, handle: &AccountHandle) -> Node {
    hasher.leaf(handle.as_str().as_bytes())
}
