//! # Registration Outcome Types
//!
//! A registration walks the phases
//! `PolicyCheck → IdentityGateCheck → LedgerUpdate → AccumulatorInsert →
//! HistoryUpdate → Committed`, with rejection possible from the first
//! three. The facade performs every check before any mutation, so a
//! rejection from any phase leaves the registry untouched, and the
//! mutating phases are total functions of already-validated input.

use serde::{Deserialize, Serialize};

use census_core::{AccountHandle, CredentialNullifier, Position};
use census_crypto::Node;

/// Proof of a committed registration, returned by
/// [`crate::CensusRegistry::register`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    /// The admitted identifier.
    pub identifier: AccountHandle,
    /// The consumed nullifier.
    pub nullifier: CredentialNullifier,
    /// The leaf inserted into the accumulator.
    pub leaf: Node,
    /// The root after this admission.
    pub new_root: Node,
    /// This admission's position in the global order.
    pub position: Position,
}
