//! # Identity Gate — Consumed-Nullifier Set
//!
//! Enforces "one real person, one admission" independent of which external
//! identifier a disclosure carries. A nullifier may be consumed at most
//! once, globally.
//!
//! ## Security Invariant
//!
//! Consumption is deliberately **not** idempotent: a second attempt with
//! the same nullifier fails with [`RegistrationError::DuplicateCredential`].
//! Replay and duplicate-identity attempts must be observable, logged
//! events, never silent no-ops.

use std::collections::HashSet;

use census_core::{CredentialNullifier, RegistrationError};

/// The set of credential nullifiers consumed by past admissions.
#[derive(Debug, Clone, Default)]
pub struct IdentityGate {
    consumed: HashSet<CredentialNullifier>,
}

impl IdentityGate {
    /// Create an empty gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `nullifier` has already been consumed. Pure pre-check used
    /// by the registration orchestration before any mutation.
    pub fn is_consumed(&self, nullifier: &CredentialNullifier) -> bool {
        self.consumed.contains(nullifier)
    }

    /// Consume `nullifier`, failing if it was consumed before.
    ///
    /// # Errors
    ///
    /// [`RegistrationError::DuplicateCredential`] on a second attempt.
    pub fn consume(&mut self, nullifier: CredentialNullifier) -> Result<(), RegistrationError> {
        if !self.consumed.insert(nullifier) {
            return Err(RegistrationError::DuplicateCredential { nullifier });
        }
        Ok(())
    }

    /// Number of consumed nullifiers.
    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    /// Whether no nullifier has been consumed yet.
    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nullifier(i: u8) -> CredentialNullifier {
        CredentialNullifier::new([i; 32])
    }

    #[test]
    fn test_first_consume_succeeds() {
        let mut gate = IdentityGate::new();
        assert!(!gate.is_consumed(&nullifier(1)));
        gate.consume(nullifier(1)).unwrap();
        assert!(gate.is_consumed(&nullifier(1)));
    }

    #[test]
    fn test_second_consume_fails_not_idempotent() {
        let mut gate = IdentityGate::new();
        gate.consume(nullifier(1)).unwrap();
        let err = gate.consume(nullifier(1)).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::DuplicateCredential {
                nullifier: nullifier(1)
            }
        );
        assert_eq!(gate.len(), 1);
    }

    #[test]
    fn test_distinct_nullifiers_independent() {
        let mut gate = IdentityGate::new();
        gate.consume(nullifier(1)).unwrap();
        gate.consume(nullifier(2)).unwrap();
        assert_eq!(gate.len(), 2);
    }
}
