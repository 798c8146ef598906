//! QueryEngine: classifies action text against the lexicon.

use tracing::debug;

use grimoire_core::models::{GameState, QueryCategory, RagQuery};
use grimoire_core::text::contains_term;

use super::lexicon::{Lexicon, LexiconEntry};

/// Classifies raw action text into zero or more typed sub-queries.
pub struct QueryEngine {
    lexicon: Lexicon,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::default_entries(),
        }
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classify `action_text` into sub-queries. Zero matches is a valid,
    /// non-error outcome.
    pub fn analyze(&self, action_text: &str, state: &GameState) -> Vec<RagQuery> {
        let mut fired: Vec<(&LexiconEntry, Option<String>)> = Vec::new();

        for entry in self.lexicon.entries() {
            let trigger_hit = entry
                .triggers
                .iter()
                .any(|t| contains_term(action_text, t));
            let focus = self.extract_focus(entry, action_text, state);

            // Combat also fires without a verb when a known combatant is
            // named while combat is active.
            let combat_by_state = entry.category == QueryCategory::Combat
                && state.combat_active
                && focus.is_some();

            if trigger_hit || combat_by_state {
                fired.push((entry, focus));
            }
        }

        if fired.is_empty() {
            debug!(action = action_text, "no lexicon match");
            return Vec::new();
        }

        // Precedence rule: skill-intent verbs dominate creature/combat
        // nouns — "persuade the guard" is a skill check, not combat.
        if fired
            .iter()
            .any(|(e, _)| e.category == QueryCategory::SkillCheck)
        {
            fired.retain(|(e, _)| e.category != QueryCategory::Combat);
        }

        // Equipment nouns co-occurring with combat fire both categories:
        // a mentioned weapon must surface alongside combat results.
        let combat_fired = fired
            .iter()
            .any(|(e, _)| e.category == QueryCategory::Combat);
        let equipment_fired = fired
            .iter()
            .any(|(e, _)| e.category == QueryCategory::Equipment);
        if combat_fired && !equipment_fired {
            if let Some(entry) = self.lexicon.entry(QueryCategory::Equipment) {
                if let Some(item) = matched_entity_term(entry, action_text) {
                    fired.push((entry, Some(item)));
                }
            }
        }

        fired.sort_by_key(|(e, _)| (e.precedence, e.category));

        let queries: Vec<RagQuery> = fired
            .into_iter()
            .map(|(entry, focus)| RagQuery {
                category: entry.category,
                query_text: focus.clone().unwrap_or_else(|| action_text.to_string()),
                target_entity_types: entry.target_types.to_vec(),
                extracted_entity_name: focus,
            })
            .collect();

        debug!(
            action = action_text,
            queries = queries.len(),
            categories = ?queries.iter().map(|q| q.category).collect::<Vec<_>>(),
            "classified action"
        );
        queries
    }

    /// Pick the focus phrase for an entry: a matched known entity term, a
    /// named combatant for creature-scoped categories, a quoted phrase, or
    /// the current location for lore questions.
    fn extract_focus(
        &self,
        entry: &LexiconEntry,
        action_text: &str,
        state: &GameState,
    ) -> Option<String> {
        if let Some(term) = matched_entity_term(entry, action_text) {
            return Some(term);
        }

        let creature_scoped = matches!(
            entry.category,
            QueryCategory::Combat | QueryCategory::MonsterInfo
        );
        if creature_scoped {
            for combatant in &state.combatants {
                if contains_term(action_text, combatant) {
                    return Some(combatant.to_lowercase());
                }
            }
        }

        if let Some(phrase) = quoted_phrase(action_text) {
            return Some(phrase);
        }

        // Lore questions without a named subject are about where the
        // party currently is.
        if entry.category == QueryCategory::Lore {
            if let Some(location) = &state.location {
                return Some(location.to_lowercase());
            }
        }

        None
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn matched_entity_term(entry: &LexiconEntry, action_text: &str) -> Option<String> {
    entry
        .entity_terms
        .iter()
        .find(|term| contains_term(action_text, term))
        .map(|term| term.to_string())
}

/// First double-quoted phrase in the text, if any.
fn quoted_phrase(text: &str) -> Option<String> {
    let start = text.find('"')?;
    let rest = &text[start + 1..];
    let end = rest.find('"')?;
    let phrase = rest[..end].trim();
    (!phrase.is_empty()).then(|| phrase.to_lowercase())
}
