//! # Registry Events
//!
//! Records emitted on every committed registration, intended for external
//! indexers. The registry pushes events into an internal outbox drained by
//! [`crate::CensusRegistry::drain_events`]; the same facts are mirrored to
//! `tracing` for operators.

use serde::{Deserialize, Serialize};

use census_core::{AccountHandle, CredentialNullifier, Position, Weight};
use census_crypto::Node;

/// An observable registry state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A disclosure was admitted: its leaf is in the accumulator and the
    /// root advanced.
    Registered {
        /// The admitted identifier.
        identifier: AccountHandle,
        /// The consumed nullifier.
        nullifier: CredentialNullifier,
        /// The leaf inserted for this admission.
        leaf: Node,
        /// The root after insertion.
        new_root: Node,
        /// The position this admission occupies in the global order.
        position: Position,
    },
    /// An identifier's ledger weight changed (here: its one 0 → non-zero
    /// transition).
    WeightChanged {
        /// The identifier whose weight changed.
        identifier: AccountHandle,
        /// The weight before the change.
        old_weight: Weight,
        /// The weight after the change.
        new_weight: Weight,
    },
}
