use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pack::PackId;

/// The fixed set of entity types known to the engine. Searchable-text
/// projections are fixed per type; this is not a general-purpose search
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Rule,
    Spell,
    Creature,
    Item,
    Character,
    Lore,
}

/// Globally unique entity id, distinct from the logical [`EntityKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Logical identity of an entity across packs: `(entity_type, name)`.
///
/// Uniqueness holds within a pack only — the same key may legitimately
/// exist in several packs, with priority resolution deciding the winner.
/// Name comparison is case-insensitive; the key stores the lowercase form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityKey {
    pub entity_type: EntityType,
    pub name: String,
}

impl EntityKey {
    pub fn new(entity_type: EntityType, name: &str) -> Self {
        Self {
            entity_type,
            name: name.to_lowercase(),
        }
    }
}

/// A single entry in a content pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntity {
    pub id: EntityId,
    pub content_pack_id: PackId,
    pub entity_type: EntityType,
    pub name: String,
    pub searchable_text: String,
    /// `None` means the entity is reachable through keyword search only.
    /// `Some` must match the pinned embedding dimension; a mismatch is a
    /// hard configuration error at the point of index construction.
    pub embedding: Option<Vec<f32>>,
}

impl ContentEntity {
    /// The logical identity key of this entity.
    pub fn key(&self) -> EntityKey {
        EntityKey::new(self.entity_type, &self.name)
    }
}
