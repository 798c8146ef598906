/// Configuration errors. Fatal at first use, never silently corrected.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("embedding dimension mismatch: configured {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("no embedding backend available")]
    MissingEmbeddingBackend,

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
