use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, GrimoireResult};

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: String,
    /// Pinned dimension. Every embedding in the system must match exactly;
    /// a provider producing anything else fails at first use.
    pub dimensions: usize,
    pub cache_capacity: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            cache_capacity: defaults::DEFAULT_EMBEDDING_CACHE_CAPACITY,
        }
    }
}

impl EmbeddingConfig {
    pub fn validate(&self) -> GrimoireResult<()> {
        if self.dimensions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "embedding.dimensions".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
