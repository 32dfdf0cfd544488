//! # `census leaf` — Leaf Derivation
//!
//! Prints the accumulator leaf derived for an account handle, so external
//! provers can confirm they reproduce the registry's leaf encoding.

use clap::Args;

use census_core::AccountHandle;
use census_crypto::{leaf_for_handle, Sha256Hasher};

/// Arguments for `census leaf`.
#[derive(Args, Debug)]
pub struct LeafArgs {
    /// The account handle to derive a leaf for.
    pub handle: String,
}

/// Derive and print the leaf.
pub fn run(args: LeafArgs) -> anyhow::Result<()> {
    let leaf = leaf_for_handle(&Sha256Hasher, &AccountHandle::new(args.handle));
    println!("{leaf}");
    Ok(())
}
