//! # Node Values
//!
//! `Node` is the 32-byte value type flowing through the accumulator: leaves,
//! interior nodes, and roots are all `Node`s. The registry's root history
//! keys on `Node`, so it is `Copy`, hashable, and ordered.

use serde::{Deserialize, Serialize};

use census_core::ConfigError;

/// A 32-byte accumulator value: leaf, interior node, or root.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Node(pub [u8; 32]);

impl Node {
    /// The all-zero node: the empty-tree root and the padding value for
    /// absent right subtrees.
    pub const EMPTY: Node = Node([0u8; 32]);

    /// Wrap raw node bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the node as lowercase hex.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a node from 64 hex characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 64 hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let hex = hex.trim();
        if hex.len() != 64 {
            return Err(ConfigError::MalformedNode(format!(
                "expected 64 hex chars, got {}",
                hex.len()
            )));
        }
        let mut out = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let s = std::str::from_utf8(chunk)
                .map_err(|e| ConfigError::MalformedNode(format!("invalid hex: {e}")))?;
            out[i] = u8::from_str_radix(s, 16)
                .map_err(|e| ConfigError::MalformedNode(format!("invalid hex at {i}: {e}")))?;
        }
        Ok(Self(out))
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
