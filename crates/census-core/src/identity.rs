//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifier namespaces of the census registry.
//! These prevent accidental identifier confusion — you cannot pass a
//! `CredentialNullifier` where an `AccountHandle` is expected.
//!
//! ## Security Invariant
//!
//! The registry enforces "one real person, one admission" through the
//! nullifier namespace and "one account, one admission" through the handle
//! namespace. Keeping the two as distinct types means no code path can
//! check one channel while believing it checked the other.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// External identifier of a would-be member (e.g. an account handle).
///
/// Supplied by the caller, never minted by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountHandle(pub String);

/// A credential nullifier: a 32-byte value derived from an underlying
/// credential that uniquely identifies the real-world subject without
/// revealing who they are.
///
/// Consumed at most once, globally, regardless of which handle presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialNullifier(pub [u8; 32]);

/// Population/category tag a disclosure claims membership of (e.g. `"ESP"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopulationTag(pub String);

/// Ledger weight of an identifier: zero until first admission, then fixed
/// at a non-zero value. Never reset to zero by this registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Weight(pub u64);

impl AccountHandle {
    /// Wrap a handle string.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CredentialNullifier {
    /// Wrap raw nullifier bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a nullifier from 64 lowercase/uppercase hex characters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedNullifier`] if the input is not
    /// exactly 64 hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let hex = hex.trim();
        if hex.len() != 64 {
            return Err(ConfigError::MalformedNullifier(format!(
                "expected 64 hex chars, got {}",
                hex.len()
            )));
        }
        let mut out = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let s = std::str::from_utf8(chunk)
                .map_err(|e| ConfigError::MalformedNullifier(format!("invalid hex: {e}")))?;
            out[i] = u8::from_str_radix(s, 16)
                .map_err(|e| ConfigError::MalformedNullifier(format!("invalid hex at {i}: {e}")))?;
        }
        Ok(Self(out))
    }

    /// Render the nullifier as lowercase hex.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl PopulationTag {
    /// Wrap a population tag string.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Weight {
    /// The weight of an identifier that was never admitted.
    pub const ZERO: Weight = Weight(0);

    /// Whether this is the never-admitted weight.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for AccountHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "handle:{}", self.0)
    }
}

impl std::fmt::Display for CredentialNullifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "nullifier:{}", self.to_hex())
    }
}

impl std::fmt::Display for PopulationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullifier_hex_roundtrip() {
        let n = CredentialNullifier::new([0xab; 32]);
        let hex = n.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(CredentialNullifier::from_hex(&hex).unwrap(), n);
    }

    #[test]
    fn test_nullifier_rejects_bad_hex() {
        assert!(CredentialNullifier::from_hex("aabb").is_err());
        assert!(CredentialNullifier::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_weight_zero() {
        assert!(Weight::ZERO.is_zero());
        assert!(!Weight(1).is_zero());
        assert_eq!(Weight::default(), Weight::ZERO);
    }

    #[test]
    fn test_display_prefixes() {
        let h = AccountHandle::new("0xAAA");
        assert_eq!(h.to_string(), "handle:0xAAA");
        let n = CredentialNullifier::new([0u8; 32]);
        assert!(n.to_string().starts_with("nullifier:00"));
    }
}
