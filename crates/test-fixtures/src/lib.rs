//! Shared test fixtures: an in-memory [`IContentStore`] and a small sample
//! world with a system pack and an overriding homebrew pack.

use grimoire_core::errors::GrimoireResult;
use grimoire_core::models::{ContentEntity, ContentPack, EntityId, EntityType, PackId};
use grimoire_core::traits::{IContentStore, IEmbeddingProvider};
use grimoire_embeddings::HashEmbedder;

/// In-memory content store. Lifecycles are owned by the caller; retrieval
/// only reads through the trait, as with the real collaborator.
#[derive(Default)]
pub struct MemoryContentStore {
    packs: Vec<ContentPack>,
    entities: Vec<ContentEntity>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pack(&mut self, id: &str, active: bool, is_system: bool) {
        self.packs.push(ContentPack {
            id: PackId::from(id),
            name: id.to_string(),
            active,
            is_system,
        });
    }

    pub fn add_entity(&mut self, entity: ContentEntity) {
        self.entities.push(entity);
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

impl IContentStore for MemoryContentStore {
    fn get_entity(
        &self,
        entity_type: EntityType,
        name: &str,
        pack: &PackId,
    ) -> GrimoireResult<Option<ContentEntity>> {
        Ok(self
            .entities
            .iter()
            .find(|e| {
                e.entity_type == entity_type
                    && e.content_pack_id == *pack
                    && e.name.eq_ignore_ascii_case(name)
            })
            .cloned())
    }

    fn list_entities(
        &self,
        entity_type: EntityType,
        pack: &PackId,
    ) -> GrimoireResult<Vec<ContentEntity>> {
        Ok(self
            .entities
            .iter()
            .filter(|e| e.entity_type == entity_type && e.content_pack_id == *pack)
            .cloned()
            .collect())
    }

    fn list_active_packs(&self) -> GrimoireResult<Vec<ContentPack>> {
        Ok(self.packs.iter().filter(|p| p.active).cloned().collect())
    }
}

/// Build an entity with its searchable text embedded by the hash provider.
pub fn embedded_entity(
    embedder: &HashEmbedder,
    pack: &str,
    entity_type: EntityType,
    name: &str,
    text: &str,
) -> ContentEntity {
    let embedding = embedder
        .embed(&format!("{name} {text}"))
        .expect("hash embedder is infallible");
    ContentEntity {
        id: EntityId::new(),
        content_pack_id: PackId::from(pack),
        entity_type,
        name: name.to_string(),
        searchable_text: text.to_string(),
        embedding: Some(embedding),
    }
}

/// A small world: the system pack `srd` plus a `homebrew` pack that
/// overrides Fireball, all embedded at `dimensions`.
pub fn sample_world(dimensions: usize) -> MemoryContentStore {
    let embedder = HashEmbedder::new(dimensions);
    let mut store = MemoryContentStore::new();
    store.add_pack("srd", true, true);
    store.add_pack("homebrew", true, false);

    let seed: &[(&str, EntityType, &str, &str)] = &[
        (
            "srd",
            EntityType::Creature,
            "Goblin",
            "Goblin: small green humanoid that attacks in packs, favoring ambush \
             tactics and shortbows. Armor class 15, hit points 7.",
        ),
        (
            "srd",
            EntityType::Creature,
            "Guard",
            "Guard: trained human soldier found at gates and palisades. Carries a \
             spear and chain shirt.",
        ),
        (
            "srd",
            EntityType::Creature,
            "Orc",
            "Orc: aggressive raider that charges the nearest foe with a greataxe.",
        ),
        (
            "srd",
            EntityType::Item,
            "Shortsword",
            "Shortsword: light martial melee weapon, 1d6 piercing, finesse.",
        ),
        (
            "srd",
            EntityType::Item,
            "Longbow",
            "Longbow: martial ranged weapon, 1d8 piercing, range 150/600, heavy.",
        ),
        (
            "srd",
            EntityType::Spell,
            "Fireball",
            "Fireball: 3rd-level evocation. A bright streak blossoms into an \
             explosion of flame, 8d6 fire damage in a 20-foot radius.",
        ),
        (
            "srd",
            EntityType::Spell,
            "Sleep",
            "Sleep: 1st-level enchantment sending creatures into a magical slumber.",
        ),
        (
            "srd",
            EntityType::Rule,
            "Persuasion",
            "Persuasion: a Charisma check to influence someone with tact or good \
             nature, such as convincing a guard to let you pass.",
        ),
        (
            "srd",
            EntityType::Rule,
            "Opportunity Attack",
            "Opportunity Attack: a melee attack against a creature leaving your \
             reach without disengaging.",
        ),
        (
            "srd",
            EntityType::Rule,
            "Grapple",
            "Grapple: a Strength (Athletics) contest to seize a creature.",
        ),
        (
            "srd",
            EntityType::Lore,
            "The Sunken Court",
            "The Sunken Court: a drowned elven palace beneath the mere, subject of \
             many a tavern legend.",
        ),
        (
            "homebrew",
            EntityType::Spell,
            "Fireball",
            "Fireball (house rules): 3rd-level evocation dealing 10d6 fire damage, \
             but the caster rolls on the wild surge table.",
        ),
    ];

    for (pack, entity_type, name, text) in seed {
        store.add_entity(embedded_entity(&embedder, pack, *entity_type, name, text));
    }
    store
}
