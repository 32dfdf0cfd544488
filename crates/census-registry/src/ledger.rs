//! # Member Ledger — Identifier → Weight
//!
//! Enforces "one identifier, one admission". An identifier's weight is
//! zero until its first admission, then fixed at a non-zero value; this
//! registry never resets a weight to zero.

use std::collections::HashMap;

use census_core::{AccountHandle, RegistrationError, Weight};

/// Map from external identifier to admission weight.
#[derive(Debug, Clone, Default)]
pub struct MemberLedger {
    weights: HashMap<AccountHandle, Weight>,
}

impl MemberLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `identifier` already holds a non-zero weight. Pure
    /// pre-check used by the registration orchestration before any
    /// mutation.
    pub fn is_registered(&self, identifier: &AccountHandle) -> bool {
        self.weights
            .get(identifier)
            .is_some_and(|w| !w.is_zero())
    }

    /// Set `identifier`'s weight, failing if it is already non-zero.
    ///
    /// # Errors
    ///
    /// [`RegistrationError::AlreadyRegisteredIdentifier`] if the
    /// identifier was admitted before. Zero admission weights are rejected
    /// upstream at registry construction.
    pub fn register(
        &mut self,
        identifier: AccountHandle,
        weight: Weight,
    ) -> Result<(), RegistrationError> {
        if self.is_registered(&identifier) {
            return Err(RegistrationError::AlreadyRegisteredIdentifier { identifier });
        }
        self.weights.insert(identifier, weight);
        Ok(())
    }

    /// The weight recorded for `identifier`; `Weight::ZERO` if it was
    /// never admitted.
    pub fn weight_of(&self, identifier: &AccountHandle) -> Weight {
        self.weights
            .get(identifier)
            .copied()
            .unwrap_or(Weight::ZERO)
    }

    /// Number of admitted members.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether nobody has been admitted yet.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_weight_is_zero() {
        let ledger = MemberLedger::new();
        assert_eq!(ledger.weight_of(&AccountHandle::new("0xAAA")), Weight::ZERO);
    }

    #[test]
    fn test_register_sets_weight_once() {
        let mut ledger = MemberLedger::new();
        let id = AccountHandle::new("0xAAA");
        ledger.register(id.clone(), Weight(1)).unwrap();
        assert_eq!(ledger.weight_of(&id), Weight(1));

        let err = ledger.register(id.clone(), Weight(2)).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::AlreadyRegisteredIdentifier { identifier: id.clone() }
        );
        // The first admission's weight stands.
        assert_eq!(ledger.weight_of(&id), Weight(1));
    }

    #[test]
    fn test_distinct_identifiers_independent() {
        let mut ledger = MemberLedger::new();
        ledger
            .register(AccountHandle::new("0xAAA"), Weight(1))
            .unwrap();
        ledger
            .register(AccountHandle::new("0xBBB"), Weight(1))
            .unwrap();
        assert_eq!(ledger.len(), 2);
    }
}
