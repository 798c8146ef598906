//! EmbeddingEngine — caching wrapper around a provider, with the pinned
//! dimension validated once at construction, before any index read/write.

use moka::sync::Cache;
use tracing::{debug, info};

use grimoire_core::config::EmbeddingConfig;
use grimoire_core::errors::{ConfigError, GrimoireResult};
use grimoire_core::traits::IEmbeddingProvider;

/// Caching embedding engine over an injected provider.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: Cache<String, Vec<f32>>,
    dimensions: usize,
}

impl std::fmt::Debug for EmbeddingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingEngine")
            .field("provider", &self.provider.name())
            .field("dimensions", &self.dimensions)
            .finish_non_exhaustive()
    }
}

impl EmbeddingEngine {
    /// Wrap a provider, validating it against the pinned configuration.
    ///
    /// A dimension mismatch between the provider and the configured value
    /// is a hard [`ConfigError`] here — never padded, truncated, or
    /// deferred to search time.
    pub fn new(
        provider: Box<dyn IEmbeddingProvider>,
        config: &EmbeddingConfig,
    ) -> Result<Self, ConfigError> {
        if !provider.is_available() {
            return Err(ConfigError::MissingEmbeddingBackend);
        }
        if provider.dimensions() != config.dimensions {
            return Err(ConfigError::DimensionMismatch {
                expected: config.dimensions,
                actual: provider.dimensions(),
            });
        }

        info!(
            provider = provider.name(),
            dims = config.dimensions,
            cache_capacity = config.cache_capacity,
            "embedding engine initialized"
        );

        Ok(Self {
            provider,
            cache: Cache::new(config.cache_capacity),
            dimensions: config.dimensions,
        })
    }

    /// Embed one query text, cache-through.
    pub fn embed_query(&self, text: &str) -> GrimoireResult<Vec<f32>> {
        if let Some(hit) = self.cache.get(text) {
            debug!(len = text.len(), "embedding cache hit");
            return Ok(hit);
        }
        let vec = self.provider.embed(text)?;
        self.cache.insert(text.to_string(), vec.clone());
        Ok(vec)
    }

    /// Embed a batch of query texts, sending only cache misses to the
    /// provider in a single invocation.
    pub fn embed_batch(&self, texts: &[String]) -> GrimoireResult<Vec<Vec<f32>>> {
        let mut out: Vec<Option<Vec<f32>>> = texts.iter().map(|t| self.cache.get(t)).collect();

        let misses: Vec<(usize, String)> = out
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_none())
            .map(|(i, _)| (i, texts[i].clone()))
            .collect();

        if !misses.is_empty() {
            let miss_texts: Vec<String> = misses.iter().map(|(_, t)| t.clone()).collect();
            let embedded = self.provider.embed_batch(&miss_texts)?;
            for ((i, text), vec) in misses.into_iter().zip(embedded) {
                self.cache.insert(text, vec.clone());
                out[i] = Some(vec);
            }
        }

        // Every slot is filled at this point.
        Ok(out.into_iter().map(|v| v.unwrap_or_default()).collect())
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}
