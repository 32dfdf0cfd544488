//! # Registry Facade — Atomic Registration Orchestration
//!
//! Composes the admission policy, identity gate, member ledger,
//! accumulator, and root history into one registration operation and
//! exposes the root/validity queries downstream consumers need.
//!
//! ## Ordering Invariant
//!
//! Every check runs before any mutation: policy evaluation, nullifier
//! freshness, and ledger vacancy are all reads. Only when all three pass
//! does the facade consume the nullifier, set the weight, insert the leaf,
//! and record the superseded root. The mutating tail cannot fail, so a
//! rejected registration leaves the registry byte-identical to its prior
//! state, and the accumulator never contains an admission that violates
//! policy or uniqueness.
//!
//! ## Concurrency Contract
//!
//! The facade itself is single-writer: callers must serialize
//! registrations externally (see [`crate::shared::SharedRegistry`] for the
//! lock-guarded wrapper). Queries on an unshared registry are plain `&self`
//! reads.

use serde::{Deserialize, Serialize};

use census_core::{
    AccountHandle, AdminError, ConfigError, Disclosure, Position, RegistrationError, Weight,
};
use census_crypto::{leaf_for_handle, MerkleAccumulator, Node, NodeHasher};

use crate::events::RegistryEvent;
use crate::gate::IdentityGate;
use crate::history::RootHistory;
use crate::ledger::MemberLedger;
use crate::policy::{AdmissionPolicy, OperatorToken, PolicyConfig};
use crate::registration::RegistrationReceipt;

/// Default bound on retained superseded roots: a prover's proof survives
/// up to 100 intervening admissions.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Creation-time configuration of a census registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Admission thresholds and requirements pointer.
    pub policy: PolicyConfig,
    /// Capacity of the superseded-root history.
    pub history_capacity: usize,
    /// The weight granted by an admission. Must be non-zero.
    pub admission_weight: Weight,
}

impl RegistryConfig {
    /// Configuration with the default history capacity and unit weight.
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            policy,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            admission_weight: Weight(1),
        }
    }
}

/// The census membership registry.
#[derive(Debug)]
pub struct CensusRegistry<H> {
    accumulator: MerkleAccumulator<H>,
    history: RootHistory,
    gate: IdentityGate,
    ledger: MemberLedger,
    policy: AdmissionPolicy,
    admission_weight: Weight,
    /// Position of the latest admission; `Position::GENESIS` before any.
    last_position: Position,
    /// Undelivered indexer events.
    outbox: Vec<RegistryEvent>,
}

impl<H: NodeHasher> CensusRegistry<H> {
    /// Create an empty registry.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroHistoryCapacity`] or [`ConfigError::ZeroWeight`]
    /// for a configuration no registry can honor.
    pub fn new(config: RegistryConfig, hasher: H, operator: OperatorToken) -> Result<Self, ConfigError> {
        if config.admission_weight.is_zero() {
            return Err(ConfigError::ZeroWeight);
        }
        Ok(Self {
            accumulator: MerkleAccumulator::new(hasher),
            history: RootHistory::new(config.history_capacity)?,
            gate: IdentityGate::new(),
            ledger: MemberLedger::new(),
            policy: AdmissionPolicy::new(config.policy, operator),
            admission_weight: config.admission_weight,
            last_position: Position::GENESIS,
            outbox: Vec::new(),
        })
    }

    /// Register a disclosure: the one atomic write operation.
    ///
    /// Checks policy, nullifier freshness, and ledger vacancy — in that
    /// order, all before any mutation — then consumes the nullifier, sets
    /// the weight, inserts the derived leaf, and records the superseded
    /// root.
    ///
    /// # Errors
    ///
    /// One of the three deterministic rejections; the registry is
    /// unmutated on every error path.
    pub fn register(
        &mut self,
        disclosure: &Disclosure,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        // PolicyCheck
        self.policy.evaluate(disclosure)?;

        // IdentityGateCheck (read only)
        if self.gate.is_consumed(&disclosure.nullifier) {
            tracing::warn!(
                nullifier = %disclosure.nullifier,
                identifier = %disclosure.identifier,
                "duplicate credential presented, possible replay"
            );
            return Err(RegistrationError::DuplicateCredential {
                nullifier: disclosure.nullifier,
            });
        }

        // LedgerUpdate pre-check (read only)
        if self.ledger.is_registered(&disclosure.identifier) {
            return Err(RegistrationError::AlreadyRegisteredIdentifier {
                identifier: disclosure.identifier.clone(),
            });
        }

        // All checks passed; the mutating tail cannot fail.
        self.gate.consume(disclosure.nullifier)?;
        self.ledger
            .register(disclosure.identifier.clone(), self.admission_weight)?;

        let old_root = self.accumulator.root();
        let leaf = leaf_for_handle(self.accumulator.hasher(), &disclosure.identifier);
        let new_root = self.accumulator.insert(leaf);

        let position = self.last_position.next();
        self.history.on_root_changed(old_root, new_root, position);
        self.last_position = position;

        self.outbox.push(RegistryEvent::WeightChanged {
            identifier: disclosure.identifier.clone(),
            old_weight: Weight::ZERO,
            new_weight: self.admission_weight,
        });
        self.outbox.push(RegistryEvent::Registered {
            identifier: disclosure.identifier.clone(),
            nullifier: disclosure.nullifier,
            leaf,
            new_root,
            position,
        });
        tracing::info!(
            identifier = %disclosure.identifier,
            position = %position,
            root = %new_root,
            "registration committed"
        );

        Ok(RegistrationReceipt {
            identifier: disclosure.identifier.clone(),
            nullifier: disclosure.nullifier,
            leaf,
            new_root,
            position,
        })
    }

    /// The current accumulator root.
    pub fn current_root(&self) -> Node {
        self.accumulator.root()
    }

    /// Whether `root` is acceptable for a proof constructed at `now`.
    ///
    /// True unconditionally for the current root; otherwise true iff the
    /// root is in history with `superseded_at >= now` (the boundary is
    /// inclusive: a proof raced by exactly one admission still verifies).
    /// Evicted and unknown roots are always false.
    pub fn is_valid_as_of(&self, root: &Node, now: Position) -> bool {
        if *root == self.current_root() {
            return true;
        }
        self.history
            .superseded_at(root)
            .is_some_and(|superseded| superseded >= now)
    }

    /// The ledger weight of `identifier`; zero if never admitted.
    pub fn weight_of(&self, identifier: &AccountHandle) -> Weight {
        self.ledger.weight_of(identifier)
    }

    /// Number of admitted members (equals the accumulator leaf count).
    pub fn size(&self) -> usize {
        self.accumulator.size()
    }

    /// Position of the latest admission; `Position::GENESIS` before any.
    pub fn current_position(&self) -> Position {
        self.last_position
    }

    /// Borrow the ordered admitted-leaf list (for independent replay).
    pub fn leaves(&self) -> &[Node] {
        self.accumulator.leaves()
    }

    /// Borrow the policy configuration.
    pub fn policy_config(&self) -> &PolicyConfig {
        self.policy.config()
    }

    /// Number of retained superseded roots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Update the verification-requirements pointer; requires the operator
    /// token issued at creation.
    ///
    /// # Errors
    ///
    /// [`AdminError::Unauthorized`] for a non-matching token.
    pub fn set_requirements_id(
        &mut self,
        token: &OperatorToken,
        requirements_id: impl Into<String>,
    ) -> Result<(), AdminError> {
        self.policy.set_requirements_id(token, requirements_id)
    }

    /// Drain undelivered indexer events, oldest first.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_core::{CredentialNullifier, PopulationTag};
    use census_crypto::Sha256Hasher;

    fn registry(history_capacity: usize) -> CensusRegistry<Sha256Hasher> {
        let mut config = RegistryConfig::new(PolicyConfig {
            min_age: 18,
            target_population: PopulationTag::new("ESP"),
            requirements_id: "reqs-v1".to_string(),
        });
        config.history_capacity = history_capacity;
        CensusRegistry::new(config, Sha256Hasher, OperatorToken::new("operator-secret"))
            .expect("valid config")
    }

    fn disclosure(id: &str, nullifier: u8, age: u16, population: &str) -> Disclosure {
        Disclosure {
            identifier: AccountHandle::new(id),
            nullifier: CredentialNullifier::new([nullifier; 32]),
            disclosed_age: age,
            disclosed_population: PopulationTag::new(population),
        }
    }

    #[test]
    fn test_zero_weight_config_rejected() {
        let mut config = RegistryConfig::new(PolicyConfig {
            min_age: 18,
            target_population: PopulationTag::new("ESP"),
            requirements_id: String::new(),
        });
        config.admission_weight = Weight::ZERO;
        let err = CensusRegistry::new(config, Sha256Hasher, OperatorToken::new("t")).unwrap_err();
        assert_eq!(err, ConfigError::ZeroWeight);
    }

    #[test]
    fn test_commit_advances_root_position_and_weight() {
        let mut reg = registry(100);
        let receipt = reg.register(&disclosure("0xAAA", 1, 20, "ESP")).unwrap();
        assert_eq!(receipt.position, Position(1));
        assert_eq!(receipt.new_root, reg.current_root());
        assert_eq!(reg.size(), 1);
        assert_eq!(reg.weight_of(&AccountHandle::new("0xAAA")), Weight(1));
        assert_eq!(reg.current_position(), Position(1));
    }

    #[test]
    fn test_first_admission_records_no_history() {
        // The empty-tree root is the null root; it is never recorded.
        let mut reg = registry(100);
        reg.register(&disclosure("0xAAA", 1, 20, "ESP")).unwrap();
        assert_eq!(reg.history_len(), 0);
    }

    #[test]
    fn test_rejections_do_not_mutate() {
        let mut reg = registry(100);
        reg.register(&disclosure("0xAAA", 1, 20, "ESP")).unwrap();
        let root = reg.current_root();

        // Policy rejection: fresh nullifier stays fresh.
        let under_age = disclosure("0xBBB", 2, 17, "ESP");
        assert!(matches!(
            reg.register(&under_age),
            Err(RegistrationError::PolicyRejected(_))
        ));
        // The same nullifier is accepted once the policy passes.
        reg.register(&disclosure("0xBBB", 2, 19, "ESP")).unwrap();

        // Duplicate nullifier: no mutation.
        let before = (reg.size(), reg.current_root(), reg.current_position());
        assert!(matches!(
            reg.register(&disclosure("0xCCC", 2, 25, "ESP")),
            Err(RegistrationError::DuplicateCredential { .. })
        ));
        assert_eq!(
            (reg.size(), reg.current_root(), reg.current_position()),
            before
        );

        // Duplicate identifier: no mutation, nullifier 3 stays fresh.
        assert!(matches!(
            reg.register(&disclosure("0xAAA", 3, 30, "ESP")),
            Err(RegistrationError::AlreadyRegisteredIdentifier { .. })
        ));
        assert_eq!(reg.size(), 2);
        reg.register(&disclosure("0xDDD", 3, 30, "ESP")).unwrap();

        assert_ne!(reg.current_root(), root);
    }

    #[test]
    fn test_events_emitted_in_order() {
        let mut reg = registry(100);
        let receipt = reg.register(&disclosure("0xAAA", 1, 20, "ESP")).unwrap();
        let events = reg.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            RegistryEvent::WeightChanged {
                identifier: AccountHandle::new("0xAAA"),
                old_weight: Weight::ZERO,
                new_weight: Weight(1),
            }
        );
        assert_eq!(
            events[1],
            RegistryEvent::Registered {
                identifier: receipt.identifier.clone(),
                nullifier: receipt.nullifier,
                leaf: receipt.leaf,
                new_root: receipt.new_root,
                position: receipt.position,
            }
        );
        // Drained means drained.
        assert!(reg.drain_events().is_empty());
    }

    #[test]
    fn test_rejections_emit_no_events() {
        let mut reg = registry(100);
        reg.register(&disclosure("0xAAA", 1, 20, "ESP")).unwrap();
        reg.drain_events();
        let _ = reg.register(&disclosure("0xBBB", 1, 25, "ESP"));
        assert!(reg.drain_events().is_empty());
    }

    #[test]
    fn test_requirements_update_gated_by_token() {
        let mut reg = registry(100);
        assert!(reg
            .set_requirements_id(&OperatorToken::new("wrong"), "reqs-v2")
            .is_err());
        reg.set_requirements_id(&OperatorToken::new("operator-secret"), "reqs-v2")
            .unwrap();
        assert_eq!(reg.policy_config().requirements_id, "reqs-v2");
    }
}
