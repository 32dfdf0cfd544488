//! # Admission Positions
//!
//! `Position` is the registry's single ordering type: the global admission
//! sequence number. Every successful registration advances it by exactly
//! one, and every superseded root is stamped with the position at which it
//! stopped being current.
//!
//! The registry deliberately orders by sequence number rather than
//! wall-clock time: positions are total, gap-free, and reproducible from
//! the admission log alone.

use serde::{Deserialize, Serialize};

/// A point in the global admission order. Starts at zero, advances by one
/// per successful registration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Position(pub u64);

impl Position {
    /// The position before any admission.
    pub const GENESIS: Position = Position(0);

    /// The position immediately after this one.
    pub fn next(&self) -> Position {
        Position(self.0 + 1)
    }

    /// Access the inner sequence number.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "position:{}", self.0)
    }
}
