use serde::{Deserialize, Serialize};

use super::entity::EntityType;
use super::pack::PackId;
use super::query::QueryCategory;

/// One piece of grounding knowledge returned to the caller.
///
/// Ephemeral: created and discarded within a single orchestration call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeResult {
    pub entity_type: EntityType,
    /// The pack whose definition won priority resolution.
    pub source_pack_id: PackId,
    pub title: String,
    pub content_snippet: String,
    /// Fused + boosted relevance score on the normalized [0, ~3.0] scale.
    pub score: f64,
    /// Category of the query that surfaced this result.
    pub category: QueryCategory,
}
