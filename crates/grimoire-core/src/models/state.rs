use serde::{Deserialize, Serialize};

use super::pack::PackId;

/// Caller-supplied narrative state for one retrieval request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    /// Requested override precedence, highest priority first. Sanitized by
    /// the orchestrator before use.
    pub content_pack_priority: Vec<PackId>,
    pub location: Option<String>,
    pub combat_active: bool,
    /// Names of creatures currently engaged, used to sharpen creature
    /// matching during classification.
    pub combatants: Vec<String>,
}
