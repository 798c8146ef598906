//! Configuration: one explicit config object, never global state.

pub mod defaults;

mod embedding_config;
mod retrieval_config;

pub use embedding_config::EmbeddingConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, GrimoireResult};

/// Root configuration for the retrieval engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrimoireConfig {
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
}

impl GrimoireConfig {
    /// Parse from a TOML string. Missing sections and fields fall back to
    /// defaults.
    pub fn from_toml_str(s: &str) -> GrimoireResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate ranges. Called at engine construction; invalid values are
    /// fatal, never auto-corrected.
    pub fn validate(&self) -> GrimoireResult<()> {
        self.retrieval.validate()?;
        self.embedding.validate()?;
        Ok(())
    }
}
