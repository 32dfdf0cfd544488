//! # Error Types — Registration Taxonomy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! The three registration rejections are local, deterministic, and
//! non-retryable: retrying any of them with identical input will always
//! fail again. None of them mutates registry state. `DuplicateCredential`
//! is the security-relevant branch — it is the observable signal of a
//! replay or duplicate-identity attempt and is logged as such by the
//! registry facade.

use thiserror::Error;

use crate::identity::{AccountHandle, CredentialNullifier, PopulationTag};

/// Why an admission policy rejected a disclosure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdmissionRejection {
    /// The disclosed age is below the census minimum.
    #[error("disclosed age {disclosed} is below the minimum age {required}")]
    UnderMinimumAge {
        /// The configured minimum age.
        required: u16,
        /// The age the credential disclosed.
        disclosed: u16,
    },

    /// The disclosed population does not match the census target.
    #[error("disclosed population {disclosed} does not match target {required}")]
    PopulationMismatch {
        /// The configured target population.
        required: PopulationTag,
        /// The population the credential disclosed.
        disclosed: PopulationTag,
    },
}

/// A rejected registration. Every variant leaves the registry unmutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The disclosure failed the admission predicate.
    #[error("policy rejected: {0}")]
    PolicyRejected(#[from] AdmissionRejection),

    /// The nullifier was already consumed by an earlier admission.
    /// Possible replay or duplicate-identity attempt.
    #[error("credential nullifier {nullifier} already consumed")]
    DuplicateCredential {
        /// The nullifier that was presented a second time.
        nullifier: CredentialNullifier,
    },

    /// The identifier already holds a non-zero weight.
    #[error("identifier {identifier} is already registered")]
    AlreadyRegisteredIdentifier {
        /// The handle that attempted a second admission.
        identifier: AccountHandle,
    },
}

/// Invalid construction input for registry components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Root history capacity must be at least one.
    #[error("history capacity must be non-zero")]
    ZeroHistoryCapacity,

    /// Admission weight must be non-zero (zero means "never admitted").
    #[error("admission weight must be non-zero")]
    ZeroWeight,

    /// A nullifier string failed to parse.
    #[error("malformed nullifier: {0}")]
    MalformedNullifier(String),

    /// A node/root string failed to parse.
    #[error("malformed node: {0}")]
    MalformedNode(String),
}

/// Rejected administrative operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// The presented operator token does not match the configured operator.
    #[error("operator token not authorized for {operation}")]
    Unauthorized {
        /// The operation that was attempted.
        operation: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let r = AdmissionRejection::UnderMinimumAge {
            required: 18,
            disclosed: 17,
        };
        assert_eq!(r.to_string(), "disclosed age 17 is below the minimum age 18");
    }

    #[test]
    fn test_policy_rejection_wraps_reason() {
        let r = AdmissionRejection::PopulationMismatch {
            required: PopulationTag::new("ESP"),
            disclosed: PopulationTag::new("FRA"),
        };
        let e: RegistrationError = r.clone().into();
        assert_eq!(e, RegistrationError::PolicyRejected(r));
    }

    #[test]
    fn test_duplicate_credential_names_nullifier() {
        let e = RegistrationError::DuplicateCredential {
            nullifier: CredentialNullifier::new([0u8; 32]),
        };
        assert!(e.to_string().contains("nullifier:00"));
    }
}
