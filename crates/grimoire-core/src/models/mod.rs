//! Data model for content resolution and retrieval.

mod entity;
mod knowledge;
mod pack;
mod priority;
mod query;
mod state;

pub use entity::{ContentEntity, EntityId, EntityKey, EntityType};
pub use knowledge::KnowledgeResult;
pub use pack::{ContentPack, PackId};
pub use priority::PriorityContext;
pub use query::{QueryCategory, RagQuery};
pub use state::GameState;
