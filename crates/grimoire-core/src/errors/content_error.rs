/// Errors surfaced by the external content collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("content pack not found: {pack}")]
    PackNotFound { pack: String },
}
