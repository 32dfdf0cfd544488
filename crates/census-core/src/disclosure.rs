//! # Disclosure — Authenticated Claims Presented for Admission
//!
//! The carrier type handed to the registry by the external verifier. By
//! the time a `Disclosure` reaches this workspace its certificate chain,
//! zero-knowledge proof, and signatures have already been checked; the
//! registry trusts the fields and performs no cryptographic verification
//! of its own.

use serde::{Deserialize, Serialize};

use crate::identity::{AccountHandle, CredentialNullifier, PopulationTag};

/// An authenticated set of claims presented for admission to the census.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    /// The external identifier requesting admission.
    pub identifier: AccountHandle,
    /// The credential nullifier binding this disclosure to one real person.
    pub nullifier: CredentialNullifier,
    /// The age the credential disclosed.
    pub disclosed_age: u16,
    /// The population/category the credential disclosed.
    pub disclosed_population: PopulationTag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclosure_serde_roundtrip() {
        let d = Disclosure {
            identifier: AccountHandle::new("0xAAA"),
            nullifier: CredentialNullifier::new([7u8; 32]),
            disclosed_age: 20,
            disclosed_population: PopulationTag::new("ESP"),
        };
        let json = serde_json::to_string(&d).unwrap();
        let back: Disclosure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
