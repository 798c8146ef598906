//! # grimoire-embeddings
//!
//! Embedding generation for the retrieval engine: the deterministic
//! signed-feature-hashing provider, a caching engine with pinned-dimension
//! validation, a lazily-initialized shared handle, and deadline-bounded
//! batch embedding.

pub mod deadline;
pub mod engine;
pub mod provider;
pub mod shared;

pub use deadline::embed_batch_with_deadline;
pub use engine::EmbeddingEngine;
pub use provider::HashEmbedder;
pub use shared::SharedEmbedder;
