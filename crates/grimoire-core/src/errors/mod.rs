//! Error types, one file per subsystem, aggregated into [`GrimoireError`].

mod config_error;
mod content_error;
mod embedding_error;

pub use config_error::ConfigError;
pub use content_error::ContentError;
pub use embedding_error::EmbeddingError;

/// Top-level error for the Grimoire retrieval engine.
#[derive(Debug, thiserror::Error)]
pub enum GrimoireError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Content(#[from] ContentError),
}

pub type GrimoireResult<T> = Result<T, GrimoireError>;
