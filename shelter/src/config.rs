//! Built-in shelter configuration, embedded from `shelter.toml`.
//!
//! The file is compiled into the binary; nothing is read from disk at runtime.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::record::Record;
use crate::core::store::RecordStore;

const BUILTIN_CONFIG: &str = include_str!("../shelter.toml");

/// Shelter configuration (TOML).
///
/// Missing fields default to an empty seed list and a `$` currency symbol.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShelterConfig {
    /// Prefix printed before every formatted fee.
    pub currency_symbol: String,

    /// Records loaded into the store when a session starts, in order.
    pub seed: Vec<Record>,
}

impl Default for ShelterConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            seed: Vec::new(),
        }
    }
}

impl ShelterConfig {
    /// Parse and validate the configuration shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CONFIG).context("parse built-in shelter.toml")
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: ShelterConfig = toml::from_str(contents).context("parse shelter config toml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(anyhow!("currency_symbol must be non-empty"));
        }
        Ok(())
    }

    /// Build the initial record store from `seed`.
    pub fn seeded_store(&self) -> Result<RecordStore> {
        RecordStore::from_seed(&self.seed).context("load seed records")
    }
}
