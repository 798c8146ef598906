/// Embedding subsystem errors.
///
/// All variants are recoverable per-query: the affected query degrades to
/// keyword-only retrieval instead of failing the whole request.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding exceeded time budget: {elapsed_ms}ms elapsed, {budget_ms}ms allowed")]
    Timeout { elapsed_ms: u64, budget_ms: u64 },

    #[error("embedding provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },
}
