//! # census-registry — The Census Membership Registry
//!
//! Admits verified identities exactly once per real-world person,
//! maintains a Merkle accumulator of admitted members suitable for
//! zero-knowledge set-membership proofs, and retains a bounded history of
//! superseded roots so asynchronously submitted proofs survive a window
//! of intervening admissions.
//!
//! ## Components
//!
//! - [`history::RootHistory`] — ring-buffered record of superseded roots.
//! - [`gate::IdentityGate`] — consumed-nullifier set ("one person, one
//!   admission").
//! - [`ledger::MemberLedger`] — identifier → weight map ("one identifier,
//!   one admission").
//! - [`policy::AdmissionPolicy`] — pure age/population predicate with an
//!   operator-gated requirements pointer.
//! - [`registry::CensusRegistry`] — the facade orchestrating one atomic
//!   registration and the downstream queries.
//! - [`shared::SharedRegistry`] — lock-guarded wrapper supplying the
//!   single-writer contract for in-process concurrent use.
//!
//! ## Write Path
//!
//! `PolicyCheck → IdentityGateCheck → LedgerUpdate → AccumulatorInsert →
//! HistoryUpdate → Committed`. All checks precede all mutations; every
//! rejection is deterministic, non-retryable, and mutation-free.

pub mod events;
pub mod gate;
pub mod history;
pub mod ledger;
pub mod policy;
pub mod registration;
pub mod registry;
pub mod shared;

pub use events::RegistryEvent;
pub use gate::IdentityGate;
pub use history::{RootHistory, RootHistoryEntry};
pub use ledger::MemberLedger;
pub use policy::{AdmissionPolicy, OperatorToken, PolicyConfig};
pub use registration::RegistrationReceipt;
pub use registry::{CensusRegistry, RegistryConfig, DEFAULT_HISTORY_CAPACITY};
pub use shared::SharedRegistry;
