//! # `census register` — Batch Registration
//!
//! Reads a JSON array of disclosures, runs each through a freshly
//! constructed registry, and prints per-disclosure outcomes followed by
//! the final root and member count. Intended for replaying an admission
//! log or smoke-testing a policy configuration.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use census_core::{Disclosure, PopulationTag};
use census_crypto::Sha256Hasher;
use census_registry::{
    CensusRegistry, OperatorToken, PolicyConfig, RegistryConfig, DEFAULT_HISTORY_CAPACITY,
};

/// Arguments for `census register`.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Minimum disclosed age for admission.
    #[arg(long)]
    pub min_age: u16,

    /// Required disclosed population tag (e.g. ESP).
    #[arg(long)]
    pub population: String,

    /// Capacity of the superseded-root history.
    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
    pub history_capacity: usize,

    /// Verification-requirements pointer recorded in the policy.
    #[arg(long, default_value = "default")]
    pub requirements_id: String,

    /// Path to a JSON array of disclosures.
    pub file: PathBuf,
}

/// Run the batch registration.
pub fn run(args: RegisterArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading disclosures from {}", args.file.display()))?;
    let disclosures: Vec<Disclosure> =
        serde_json::from_str(&raw).context("parsing disclosure array")?;

    let mut config = RegistryConfig::new(PolicyConfig {
        min_age: args.min_age,
        target_population: PopulationTag::new(args.population),
        requirements_id: args.requirements_id,
    });
    config.history_capacity = args.history_capacity;

    // The CLI operator token never leaves this process; admin updates are
    // not exposed as a subcommand yet.
    let mut registry = CensusRegistry::new(config, Sha256Hasher, OperatorToken::new("census-cli"))
        .context("constructing registry")?;
    tracing::info!(
        count = disclosures.len(),
        min_age = registry.policy_config().min_age,
        population = %registry.policy_config().target_population,
        "registering disclosure batch"
    );

    let mut admitted = 0usize;
    for (index, disclosure) in disclosures.iter().enumerate() {
        match registry.register(disclosure) {
            Ok(receipt) => {
                admitted += 1;
                println!(
                    "[{index}] committed {} at {} root {}",
                    receipt.identifier, receipt.position, receipt.new_root
                );
            }
            Err(err) => {
                println!("[{index}] rejected {}: {err}", disclosure.identifier);
            }
        }
    }

    println!(
        "admitted {admitted}/{} — size {} root {}",
        disclosures.len(),
        registry.size(),
        registry.current_root()
    );
    Ok(())
}
