//! # Admission Policy — Pure Predicate over Disclosures
//!
//! Evaluates a disclosure's claimed age and population against the census
//! configuration. Evaluation never mutates anything; a rejected disclosure
//! leaves the registry exactly as it found it.
//!
//! ## Configuration Mutability
//!
//! The hard thresholds (`min_age`, `target_population`) are fixed at
//! creation and have no update path: changing them mid-census would make
//! earlier admissions unauditable against the current configuration. The
//! one mutable field is `requirements_id`, the pointer naming which
//! verification-requirement set disclosures must satisfy, and it can only
//! be changed by presenting the operator token configured at creation.

use serde::{Deserialize, Serialize};

use census_core::{AdminError, AdmissionRejection, Disclosure, PopulationTag};

/// An opaque operator capability. The registry stores the token issued at
/// creation; administrative calls must present a matching token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorToken(pub String);

impl OperatorToken {
    /// Wrap a token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

/// Admission thresholds and the verification-requirements pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Minimum disclosed age for admission. Immutable after creation.
    pub min_age: u16,
    /// Required disclosed population. Immutable after creation.
    pub target_population: PopulationTag,
    /// Pointer to the verification-requirement set disclosures must
    /// satisfy upstream. Updatable via [`AdmissionPolicy::set_requirements_id`].
    pub requirements_id: String,
}

/// The census admission predicate.
#[derive(Debug, Clone)]
pub struct AdmissionPolicy {
    config: PolicyConfig,
    operator: OperatorToken,
}

impl AdmissionPolicy {
    /// Create a policy with the given configuration and operator token.
    pub fn new(config: PolicyConfig, operator: OperatorToken) -> Self {
        Self { config, operator }
    }

    /// Evaluate a disclosure against the thresholds. Pure: no mutation on
    /// any path.
    ///
    /// # Errors
    ///
    /// [`AdmissionRejection::UnderMinimumAge`] or
    /// [`AdmissionRejection::PopulationMismatch`].
    pub fn evaluate(&self, disclosure: &Disclosure) -> Result<(), AdmissionRejection> {
        if disclosure.disclosed_age < self.config.min_age {
            return Err(AdmissionRejection::UnderMinimumAge {
                required: self.config.min_age,
                disclosed: disclosure.disclosed_age,
            });
        }
        if disclosure.disclosed_population != self.config.target_population {
            return Err(AdmissionRejection::PopulationMismatch {
                required: self.config.target_population.clone(),
                disclosed: disclosure.disclosed_population.clone(),
            });
        }
        Ok(())
    }

    /// Borrow the current configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Update the verification-requirements pointer.
    ///
    /// The capability check is an explicit parameter: the caller must
    /// present the operator token issued at creation. The hard thresholds
    /// deliberately have no equivalent setter.
    ///
    /// # Errors
    ///
    /// [`AdminError::Unauthorized`] if the token does not match.
    pub fn set_requirements_id(
        &mut self,
        token: &OperatorToken,
        requirements_id: impl Into<String>,
    ) -> Result<(), AdminError> {
        if token != &self.operator {
            return Err(AdminError::Unauthorized {
                operation: "set_requirements_id".to_string(),
            });
        }
        self.config.requirements_id = requirements_id.into();
        Ok(())
    }
}
