//! # Shared Registry — Lock-Guarded Single Writer
//!
//! The registry facade assumes totally serialized writers. This wrapper
//! supplies that contract for in-process concurrent use: one `RwLock`
//! write section spans the whole registration (all checks, all
//! mutations, history bookkeeping included), so a reader can never
//! observe a current root whose history entry is missing. Readers take
//! the read lock concurrently and see internally consistent snapshots.
//!
//! Lock poisoning is recovered by taking the inner guard: the registry's
//! invariants hold between registrations, and no mutation path can panic
//! mid-write (the mutating tail of `register` is total).

use std::sync::{Arc, PoisonError, RwLock};

use census_core::{
    AccountHandle, AdminError, Disclosure, Position, RegistrationError, Weight,
};
use census_crypto::{Node, NodeHasher};

use crate::events::RegistryEvent;
use crate::policy::OperatorToken;
use crate::registration::RegistrationReceipt;
use crate::registry::CensusRegistry;

/// A cloneable, thread-safe handle to a census registry.
#[derive(Debug)]
pub struct SharedRegistry<H> {
    inner: Arc<RwLock<CensusRegistry<H>>>,
}

impl<H> Clone for SharedRegistry<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: NodeHasher> SharedRegistry<H> {
    /// Wrap a registry for shared use.
    pub fn new(registry: CensusRegistry<H>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Register a disclosure under the write lock.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CensusRegistry::register`].
    pub fn register(
        &self,
        disclosure: &Disclosure,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register(disclosure)
    }

    /// Snapshot of the current root.
    pub fn current_root(&self) -> Node {
        self.read(|reg| reg.current_root())
    }

    /// Snapshot validity query; root and history are read under one lock.
    pub fn is_valid_as_of(&self, root: &Node, now: Position) -> bool {
        self.read(|reg| reg.is_valid_as_of(root, now))
    }

    /// Snapshot of an identifier's weight.
    pub fn weight_of(&self, identifier: &AccountHandle) -> Weight {
        self.read(|reg| reg.weight_of(identifier))
    }

    /// Snapshot of the member count.
    pub fn size(&self) -> usize {
        self.read(|reg| reg.size())
    }

    /// Snapshot of the latest admission position.
    pub fn current_position(&self) -> Position {
        self.read(|reg| reg.current_position())
    }

    /// Snapshot of root and position taken under a single read lock, for
    /// provers that must pair them consistently.
    pub fn root_at(&self) -> (Node, Position) {
        self.read(|reg| (reg.current_root(), reg.current_position()))
    }

    /// Update the verification-requirements pointer under the write lock.
    ///
    /// # Errors
    ///
    /// [`AdminError::Unauthorized`] for a non-matching token.
    pub fn set_requirements_id(
        &self,
        token: &OperatorToken,
        requirements_id: impl Into<String>,
    ) -> Result<(), AdminError> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_requirements_id(token, requirements_id)
    }

    /// Drain undelivered indexer events under the write lock.
    pub fn drain_events(&self) -> Vec<RegistryEvent> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .drain_events()
    }

    fn read<T>(&self, f: impl FnOnce(&CensusRegistry<H>) -> T) -> T {
        f(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }
}
