//! # census-cli — Operator Tooling for the Census Registry
//!
//! Subcommand handlers live one module per command; `main.rs` only
//! assembles and dispatches.

pub mod leaf;
pub mod register;
