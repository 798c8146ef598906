use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::EntityType;

/// Query categories produced by action-text classification. Several may
/// fire on one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryCategory {
    Combat,
    Spellcasting,
    SkillCheck,
    RulesLookup,
    MonsterInfo,
    Equipment,
    CharacterInfo,
    Lore,
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Combat => "combat",
            Self::Spellcasting => "spellcasting",
            Self::SkillCheck => "skill_check",
            Self::RulesLookup => "rules_lookup",
            Self::MonsterInfo => "monster_info",
            Self::Equipment => "equipment",
            Self::CharacterInfo => "character_info",
            Self::Lore => "lore",
        };
        f.write_str(s)
    }
}

/// One typed sub-query derived from the raw action text.
///
/// Ephemeral: created and discarded within a single orchestration call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagQuery {
    pub category: QueryCategory,
    /// Focused phrase to search with (a matched proper noun, spell, creature
    /// or item name) — not necessarily the raw action text.
    pub query_text: String,
    pub target_entity_types: Vec<EntityType>,
    /// Entity name extracted from the action, when one matched.
    pub extracted_entity_name: Option<String>,
}
