//! Lazily-initialized shared embedding engine handle.
//!
//! The engine is created at most once across concurrent first callers and
//! shared read-only thereafter. The handle is injected into the
//! orchestrator, never reached through ambient global state.

use std::sync::{Arc, OnceLock};

use grimoire_core::config::EmbeddingConfig;
use grimoire_core::errors::{ConfigError, GrimoireResult};
use grimoire_core::traits::IEmbeddingProvider;

use crate::engine::EmbeddingEngine;
use crate::provider::HashEmbedder;

type ProviderFactory = Box<dyn Fn() -> Box<dyn IEmbeddingProvider> + Send + Sync>;

/// Shared handle to a lazily-initialized [`EmbeddingEngine`].
///
/// Construction outcomes are sticky: a configuration failure (dimension
/// mismatch, missing backend) is surfaced on every subsequent call rather
/// than silently retried.
pub struct SharedEmbedder {
    config: EmbeddingConfig,
    factory: ProviderFactory,
    cell: OnceLock<Result<Arc<EmbeddingEngine>, ConfigError>>,
}

impl SharedEmbedder {
    /// Handle backed by the default deterministic hash provider.
    pub fn new(config: EmbeddingConfig) -> Self {
        let dims = config.dimensions;
        Self::with_factory(config, move || Box::new(HashEmbedder::new(dims)))
    }

    /// Handle backed by a caller-supplied provider factory. The factory
    /// runs at most once, on first use.
    pub fn with_factory<F>(config: EmbeddingConfig, factory: F) -> Self
    where
        F: Fn() -> Box<dyn IEmbeddingProvider> + Send + Sync + 'static,
    {
        Self {
            config,
            factory: Box::new(factory),
            cell: OnceLock::new(),
        }
    }

    /// Get the engine, initializing it on first call.
    pub fn get(&self) -> GrimoireResult<Arc<EmbeddingEngine>> {
        self.cell
            .get_or_init(|| EmbeddingEngine::new((self.factory)(), &self.config).map(Arc::new))
            .clone()
            .map_err(Into::into)
    }

    /// Whether the engine has been initialized yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
