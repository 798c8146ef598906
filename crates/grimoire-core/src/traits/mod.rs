//! Trait seams to external collaborators.

mod content;
mod embedding;

pub use content::IContentStore;
pub use embedding::IEmbeddingProvider;
