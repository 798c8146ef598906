//! Declarative classification lexicon.
//!
//! Each entry maps a query category to its trigger terms, the entity terms
//! that sharpen the focus phrase, the entity types it searches, and a
//! precedence rank. Classification rules live in data, not in control
//! flow, so they can be tested in isolation.

use grimoire_core::models::{EntityType, QueryCategory};

/// One row of the classification table.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub category: QueryCategory,
    /// Terms whose presence fires this category. Single words match whole
    /// tokens; multi-word phrases match as substrings.
    pub triggers: &'static [&'static str],
    /// Known entity names used for focus-phrase extraction (lowercase).
    pub entity_terms: &'static [&'static str],
    pub target_types: &'static [EntityType],
    /// Lower wins when categories compete; intent-verb categories rank
    /// above entity-noun categories.
    pub precedence: u8,
}

/// The classification table. Default entries cover the stock categories;
/// callers may substitute their own table via [`Lexicon::with_entries`].
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

pub(crate) const CREATURE_TERMS: &[&str] = &[
    "goblin", "orc", "kobold", "skeleton", "zombie", "troll", "ogre", "dragon", "wolf", "bandit",
    "guard", "cultist", "giant", "wyvern", "ghoul", "mimic",
];

pub(crate) const ITEM_TERMS: &[&str] = &[
    "shortsword", "longsword", "greatsword", "dagger", "rapier", "mace", "warhammer", "battleaxe",
    "shortbow", "longbow", "crossbow", "sling", "quarterstaff", "shield", "torch", "rope",
    "potion", "lantern",
];

pub(crate) const SPELL_TERMS: &[&str] = &[
    "fireball", "magic missile", "shield", "sleep", "invisibility", "counterspell",
    "healing word", "cure wounds", "lightning bolt", "mage hand", "misty step", "bless",
];

const SKILL_TERMS: &[&str] = &[
    "persuasion", "deception", "intimidation", "stealth", "athletics", "acrobatics",
    "investigation", "perception", "insight", "sleight of hand",
];

const RULE_TERMS: &[&str] = &[
    "grapple", "opportunity attack", "advantage", "disadvantage", "saving throw",
    "concentration", "cover", "flanking", "initiative",
];

impl Lexicon {
    /// Build the default table.
    pub fn default_entries() -> Self {
        let entries = vec![
            // Skill intent verbs dominate entity nouns (precedence 0).
            LexiconEntry {
                category: QueryCategory::SkillCheck,
                triggers: &[
                    "persuade", "convince", "intimidate", "deceive", "bluff", "sneak", "hide",
                    "climb", "jump", "swim", "bribe", "distract", "lie", "pickpocket",
                    "pick the lock", "sleight of hand",
                ],
                entity_terms: SKILL_TERMS,
                target_types: &[EntityType::Rule, EntityType::Character],
                precedence: 0,
            },
            LexiconEntry {
                category: QueryCategory::Spellcasting,
                triggers: &["cast", "spell", "ritual", "concentrate", "counterspell"],
                entity_terms: SPELL_TERMS,
                target_types: &[EntityType::Spell, EntityType::Rule],
                precedence: 1,
            },
            LexiconEntry {
                category: QueryCategory::Combat,
                triggers: &[
                    "attack", "strike", "swing", "stab", "slash", "shoot", "charge", "fight",
                    "lunge", "parry",
                ],
                entity_terms: CREATURE_TERMS,
                target_types: &[EntityType::Creature, EntityType::Rule],
                precedence: 1,
            },
            LexiconEntry {
                category: QueryCategory::Equipment,
                triggers: &["draw", "wield", "equip", "sheathe", "reload", "don", "unsling"],
                entity_terms: ITEM_TERMS,
                target_types: &[EntityType::Item],
                precedence: 2,
            },
            LexiconEntry {
                category: QueryCategory::MonsterInfo,
                triggers: &["examine", "identify", "study", "recall", "what do i know about"],
                entity_terms: CREATURE_TERMS,
                target_types: &[EntityType::Creature, EntityType::Lore],
                precedence: 2,
            },
            LexiconEntry {
                category: QueryCategory::RulesLookup,
                triggers: &[
                    "how does", "can i", "rules for", "what happens when", "grapple",
                    "opportunity attack", "saving throw", "advantage", "disadvantage",
                ],
                entity_terms: RULE_TERMS,
                target_types: &[EntityType::Rule],
                precedence: 2,
            },
            LexiconEntry {
                category: QueryCategory::CharacterInfo,
                triggers: &[
                    "my character", "character sheet", "level up", "my abilities", "my class",
                    "inventory",
                ],
                entity_terms: &[],
                target_types: &[EntityType::Character, EntityType::Rule],
                precedence: 3,
            },
            LexiconEntry {
                category: QueryCategory::Lore,
                triggers: &["history", "legend", "lore", "story of", "who is", "tale", "prophecy"],
                entity_terms: &[],
                target_types: &[EntityType::Lore],
                precedence: 3,
            },
        ];
        Self { entries }
    }

    /// Build from a caller-supplied table.
    pub fn with_entries(entries: Vec<LexiconEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn entry(&self, category: QueryCategory) -> Option<&LexiconEntry> {
        self.entries.iter().find(|e| e.category == category)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::default_entries()
    }
}
