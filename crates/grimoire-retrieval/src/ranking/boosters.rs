//! The stock boosters: exact text match and named-entity match.

use grimoire_core::models::{EntityType, QueryCategory, RagQuery};
use grimoire_core::text::contains_term;

use super::{BoostContext, Booster, RankedCandidate};

/// Adds a fixed delta when the originating query's focus text appears
/// verbatim (case-insensitive) inside a candidate's searchable text.
pub struct ExactMatchBooster {
    pub delta: f64,
}

impl Booster for ExactMatchBooster {
    fn name(&self) -> &'static str {
        "exact_match"
    }

    fn boost(
        &self,
        ctx: &BoostContext<'_>,
        mut candidates: Vec<RankedCandidate>,
    ) -> Vec<RankedCandidate> {
        for candidate in &mut candidates {
            let Some(query) = query_for(ctx, candidate.category) else {
                continue;
            };
            let focus = query.query_text.to_lowercase();
            if candidate
                .entity
                .searchable_text
                .to_lowercase()
                .contains(&focus)
            {
                candidate.score += self.delta;
            }
        }
        candidates
    }
}

/// Adds a delta when the query's extracted entity name matches the
/// candidate's entity key. Also boosts item results when the query is a
/// combat query and the item's name is mentioned in the action text, so a
/// named weapon surfaces alongside combat results.
pub struct EntityMatchBooster {
    pub delta: f64,
}

impl Booster for EntityMatchBooster {
    fn name(&self) -> &'static str {
        "entity_match"
    }

    fn boost(
        &self,
        ctx: &BoostContext<'_>,
        mut candidates: Vec<RankedCandidate>,
    ) -> Vec<RankedCandidate> {
        let combat_fired = ctx
            .queries
            .iter()
            .any(|q| q.category == QueryCategory::Combat);

        for candidate in &mut candidates {
            let name_matches = query_for(ctx, candidate.category)
                .and_then(|q| q.extracted_entity_name.as_deref())
                .is_some_and(|extracted| extracted.eq_ignore_ascii_case(&candidate.entity.name));
            if name_matches {
                candidate.score += self.delta;
                continue;
            }

            if combat_fired
                && candidate.entity.entity_type == EntityType::Item
                && contains_term(ctx.action_text, &candidate.entity.name)
            {
                candidate.score += self.delta;
            }
        }
        candidates
    }
}

fn query_for<'a>(ctx: &'a BoostContext<'_>, category: QueryCategory) -> Option<&'a RagQuery> {
    ctx.queries.iter().find(|q| q.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_core::models::{ContentEntity, EntityId, PackId};

    fn candidate(
        name: &str,
        entity_type: EntityType,
        snippet: &str,
        category: QueryCategory,
    ) -> RankedCandidate {
        RankedCandidate {
            entity: ContentEntity {
                id: EntityId::new(),
                content_pack_id: PackId::from("srd"),
                entity_type,
                name: name.to_string(),
                searchable_text: snippet.to_string(),
                embedding: None,
            },
            category,
            score: 1.0,
            pre_boost_rank: 0,
        }
    }

    fn combat_query(focus: &str) -> RagQuery {
        RagQuery {
            category: QueryCategory::Combat,
            query_text: focus.to_string(),
            target_entity_types: vec![EntityType::Creature],
            extracted_entity_name: Some(focus.to_string()),
        }
    }

    #[test]
    fn exact_match_boosts_verbatim_snippet_hit() {
        let queries = vec![combat_query("goblin")];
        let ctx = BoostContext {
            action_text: "I attack the goblin",
            queries: &queries,
        };
        let booster = ExactMatchBooster { delta: 0.2 };
        let out = booster.boost(
            &ctx,
            vec![
                candidate(
                    "Goblin",
                    EntityType::Creature,
                    "A Goblin is a small humanoid",
                    QueryCategory::Combat,
                ),
                candidate(
                    "Orc",
                    EntityType::Creature,
                    "A brutish raider",
                    QueryCategory::Combat,
                ),
            ],
        );
        assert!((out[0].score - 1.2).abs() < 1e-9);
        assert!((out[1].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn entity_match_boosts_matching_key() {
        let queries = vec![combat_query("goblin")];
        let ctx = BoostContext {
            action_text: "I attack the goblin",
            queries: &queries,
        };
        let booster = EntityMatchBooster { delta: 0.3 };
        let out = booster.boost(
            &ctx,
            vec![candidate(
                "Goblin",
                EntityType::Creature,
                "small humanoid",
                QueryCategory::Combat,
            )],
        );
        assert!((out[0].score - 1.3).abs() < 1e-9);
    }

    #[test]
    fn mentioned_weapon_is_boosted_for_combat_queries() {
        let queries = vec![combat_query("goblin")];
        let ctx = BoostContext {
            action_text: "I attack the goblin with my shortsword",
            queries: &queries,
        };
        let booster = EntityMatchBooster { delta: 0.3 };
        let out = booster.boost(
            &ctx,
            vec![candidate(
                "Shortsword",
                EntityType::Item,
                "a light piercing blade",
                QueryCategory::Equipment,
            )],
        );
        assert!((out[0].score - 1.3).abs() < 1e-9);
    }

    #[test]
    fn unmentioned_item_is_not_boosted() {
        let queries = vec![combat_query("goblin")];
        let ctx = BoostContext {
            action_text: "I attack the goblin",
            queries: &queries,
        };
        let booster = EntityMatchBooster { delta: 0.3 };
        let out = booster.boost(
            &ctx,
            vec![candidate(
                "Greataxe",
                EntityType::Item,
                "a heavy chopping blade",
                QueryCategory::Equipment,
            )],
        );
        assert!((out[0].score - 1.0).abs() < 1e-9);
    }
}
