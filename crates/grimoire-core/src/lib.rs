//! # grimoire-core
//!
//! Foundation crate for the Grimoire content retrieval engine.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GrimoireConfig;
pub use errors::{GrimoireError, GrimoireResult};
pub use models::{
    ContentEntity, ContentPack, EntityId, EntityKey, EntityType, GameState, KnowledgeResult,
    PackId, PriorityContext, QueryCategory, RagQuery,
};
