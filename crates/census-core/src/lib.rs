//! # census-core — Foundational Types for the Census Registry
//!
//! This crate is the bedrock of the census membership registry. It defines
//! the type-system primitives every other crate in the workspace depends on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountHandle`,
//!    `CredentialNullifier`, `PopulationTag`, `Weight`, `Position` — all
//!    newtypes. No bare strings or integers for identifiers or ordering.
//!
//! 2. **Type-level separation of identity namespaces.** You cannot pass a
//!    nullifier where an account handle is expected. The nullifier is the
//!    per-person channel, the handle is the per-account channel; conflating
//!    them is exactly the double-admission bug this registry exists to
//!    prevent.
//!
//! 3. **Position-indexed ordering.** The registry's global order is the
//!    admission sequence number (`Position`), not wall-clock time. Every
//!    superseded root is stamped with the position at which it stopped
//!    being current.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `census-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod disclosure;
pub mod error;
pub mod identity;
pub mod position;

// Re-export primary types for ergonomic imports.
pub use disclosure::Disclosure;
pub use error::{AdminError, AdmissionRejection, ConfigError, RegistrationError};
pub use identity::{AccountHandle, CredentialNullifier, PopulationTag, Weight};
pub use position::Position;
