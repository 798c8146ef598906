use grimoire_core::config::RetrievalConfig;
use grimoire_core::constants::RRF_SCORE_SCALE;
use grimoire_core::models::{
    ContentEntity, EntityId, EntityKey, EntityType, PackId, PriorityContext, QueryCategory,
    RagQuery,
};
use grimoire_core::traits::IContentStore;
use grimoire_retrieval::fusion::fuse;
use grimoire_retrieval::ranking::{BoostContext, RankedCandidate, RerankerChain};
use grimoire_retrieval::resolve::{resolve_point, resolve_set};
use proptest::prelude::*;
use test_fixtures::MemoryContentStore;

const PACK_IDS: [&str; 5] = ["base", "alpha", "beta", "gamma", "delta"];

fn make_entity(pack: &str, name: &str) -> ContentEntity {
    ContentEntity {
        id: EntityId::new(),
        content_pack_id: PackId::from(pack),
        entity_type: EntityType::Spell,
        name: name.to_string(),
        searchable_text: format!("the {name} spell as defined in {pack}"),
        embedding: None,
    }
}

/// A store holding all five packs (pack 0 is the system pack), with one
/// "Fireball" definition in each pack selected by `mask`.
fn store_with_mask(mask: &[bool; 5]) -> MemoryContentStore {
    let mut store = MemoryContentStore::new();
    for (i, id) in PACK_IDS.iter().enumerate() {
        store.add_pack(id, true, i == 0);
        if mask[i] {
            store.add_entity(make_entity(id, "Fireball"));
        }
    }
    store
}

fn arb_priority_order() -> impl Strategy<Value = Vec<PackId>> {
    Just(PACK_IDS.map(PackId::from).to_vec()).prop_shuffle()
}

fn score_of(fused: &[grimoire_retrieval::fusion::FusedCandidate], id: EntityId) -> f64 {
    fused
        .iter()
        .find(|f| f.entity_id == id)
        .map(|f| f.score)
        .expect("candidate present in fused output")
}

// ── Point resolution ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn point_resolution_returns_the_highest_priority_definition(
        mask in prop::array::uniform5(any::<bool>()),
        order in arb_priority_order(),
    ) {
        let store = store_with_mask(&mask);
        let active = store.list_active_packs().unwrap();
        let ctx = PriorityContext::sanitize(&order, &active);
        let key = EntityKey::new(EntityType::Spell, "Fireball");

        let expected = ctx
            .packs()
            .iter()
            .find(|pack| {
                let i = PACK_IDS.iter().position(|p| pack.as_str() == *p).unwrap();
                mask[i]
            })
            .cloned();

        let resolved = resolve_point(&store, &key, &ctx).unwrap();
        prop_assert_eq!(resolved.map(|e| e.content_pack_id), expected);
    }

    /// Deleting every shadowed copy must not change what resolves.
    #[test]
    fn shadowed_definitions_never_affect_resolution(
        mask in prop::array::uniform5(any::<bool>()),
        order in arb_priority_order(),
    ) {
        let store = store_with_mask(&mask);
        let active = store.list_active_packs().unwrap();
        let ctx = PriorityContext::sanitize(&order, &active);
        let key = EntityKey::new(EntityType::Spell, "Fireball");

        let winner = resolve_point(&store, &key, &ctx).unwrap();
        prop_assume!(winner.is_some());
        let winner_pack = winner.unwrap().content_pack_id;

        let mut lone = [false; 5];
        let i = PACK_IDS
            .iter()
            .position(|p| winner_pack.as_str() == *p)
            .unwrap();
        lone[i] = true;
        let pruned = store_with_mask(&lone);

        let resolved = resolve_point(&pruned, &key, &ctx).unwrap().unwrap();
        prop_assert_eq!(resolved.content_pack_id, winner_pack);
    }
}

// ── Set resolution ───────────────────────────────────────────────────────

fn arb_entity_refs() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..5, 0usize..4), 0..12)
}

proptest! {
    #[test]
    fn set_resolution_is_idempotent(
        refs in arb_entity_refs(),
        order in arb_priority_order(),
    ) {
        let names = ["Fireball", "Sleep", "Shield", "Haste"];
        let entities: Vec<ContentEntity> = refs
            .iter()
            .map(|&(p, n)| make_entity(PACK_IDS[p], names[n]))
            .collect();
        let store = store_with_mask(&[true, true, true, true, true]);
        let active = store.list_active_packs().unwrap();
        let ctx = PriorityContext::sanitize(&order, &active);

        let once = resolve_set(entities, &ctx);
        let once_ids: Vec<EntityId> = once.iter().map(|e| e.id).collect();
        let twice = resolve_set(once, &ctx);
        let twice_ids: Vec<EntityId> = twice.iter().map(|e| e.id).collect();
        prop_assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn set_resolution_keeps_one_minimum_rank_winner_per_key(
        refs in arb_entity_refs(),
        order in arb_priority_order(),
    ) {
        let names = ["Fireball", "Sleep", "Shield", "Haste"];
        let entities: Vec<ContentEntity> = refs
            .iter()
            .map(|&(p, n)| make_entity(PACK_IDS[p], names[n]))
            .collect();
        let store = store_with_mask(&[true, true, true, true, true]);
        let active = store.list_active_packs().unwrap();
        let ctx = PriorityContext::sanitize(&order, &active);

        let resolved = resolve_set(entities.clone(), &ctx);

        for winner in &resolved {
            let key = winner.key();
            let doubles = resolved.iter().filter(|e| e.key() == key).count();
            prop_assert_eq!(doubles, 1, "duplicate key survived resolution");

            let best = entities
                .iter()
                .filter(|e| e.key() == key)
                .map(|e| ctx.rank_of(&e.content_pack_id))
                .min()
                .unwrap();
            prop_assert_eq!(ctx.rank_of(&winner.content_pack_id), best);
        }
    }
}

// ── RRF fusion ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn fused_scores_stay_on_the_fixed_scale(
        n in 1usize..8,
        kw_len_raw in 0usize..100,
        alpha in 0.0f64..=1.0,
        c in 1u32..200,
    ) {
        let ids: Vec<EntityId> = (0..n).map(|_| EntityId::new()).collect();
        let vector: Vec<(EntityId, f64)> = ids.iter().map(|id| (*id, 1.0)).collect();
        let kw_len = kw_len_raw % (n + 1);
        let keyword: Vec<(EntityId, f64)> =
            ids.iter().rev().take(kw_len).map(|id| (*id, 1.0)).collect();

        for fused in fuse(&vector, &keyword, alpha, c) {
            prop_assert!(fused.score > 0.0);
            prop_assert!(fused.score <= RRF_SCORE_SCALE + 1e-9);
        }
    }

    #[test]
    fn improving_a_vector_rank_never_lowers_the_fused_score(
        n in 2usize..8,
        swap_raw in 0usize..100,
        kw_len_raw in 0usize..100,
        alpha in 0.0f64..=1.0,
        c in 1u32..200,
    ) {
        let ids: Vec<EntityId> = (0..n).map(|_| EntityId::new()).collect();
        let vector: Vec<(EntityId, f64)> = ids.iter().map(|id| (*id, 1.0)).collect();
        let kw_len = kw_len_raw % (n + 1);
        let keyword: Vec<(EntityId, f64)> =
            ids.iter().rev().take(kw_len).map(|id| (*id, 1.0)).collect();

        let swap_at = 1 + swap_raw % (n - 1);
        let target = ids[swap_at];
        let before = score_of(&fuse(&vector, &keyword, alpha, c), target);

        let mut improved = vector.clone();
        improved.swap(swap_at - 1, swap_at);
        let after = score_of(&fuse(&improved, &keyword, alpha, c), target);

        prop_assert!(
            after >= before - 1e-12,
            "moving up from rank {} dropped the score: {} -> {}",
            swap_at + 1,
            before,
            after
        );
    }

    #[test]
    fn improving_a_keyword_rank_never_lowers_the_fused_score(
        n in 2usize..8,
        swap_raw in 0usize..100,
        vec_len_raw in 0usize..100,
        alpha in 0.0f64..=1.0,
        c in 1u32..200,
    ) {
        let ids: Vec<EntityId> = (0..n).map(|_| EntityId::new()).collect();
        let keyword: Vec<(EntityId, f64)> = ids.iter().map(|id| (*id, 1.0)).collect();
        let vec_len = vec_len_raw % (n + 1);
        let vector: Vec<(EntityId, f64)> =
            ids.iter().rev().take(vec_len).map(|id| (*id, 1.0)).collect();

        let swap_at = 1 + swap_raw % (n - 1);
        let target = ids[swap_at];
        let before = score_of(&fuse(&vector, &keyword, alpha, c), target);

        let mut improved = keyword.clone();
        improved.swap(swap_at - 1, swap_at);
        let after = score_of(&fuse(&vector, &improved, alpha, c), target);

        prop_assert!(
            after >= before - 1e-12,
            "moving up from keyword rank {} dropped the score: {} -> {}",
            swap_at + 1,
            before,
            after
        );
    }
}

// ── Rerank chain ─────────────────────────────────────────────────────────

proptest! {
    /// When nothing in the action matches, boosters must leave every score
    /// untouched and the chain reduces to a descending sort.
    #[test]
    fn chain_without_matches_only_sorts(scores in prop::collection::vec(0.0f64..3.0, 1..10)) {
        let chain = RerankerChain::from_config(&RetrievalConfig::default()).unwrap();
        let candidates: Vec<RankedCandidate> = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| RankedCandidate {
                entity: make_entity("base", &format!("Entity{i}")),
                category: QueryCategory::RulesLookup,
                score,
                pre_boost_rank: 0,
            })
            .collect();
        let queries = vec![RagQuery {
            category: QueryCategory::RulesLookup,
            query_text: "xylographic".to_string(),
            target_entity_types: vec![EntityType::Rule],
            extracted_entity_name: None,
        }];
        let ctx = BoostContext {
            action_text: "completely unrelated words",
            queries: &queries,
        };

        let ranked = chain.apply(&ctx, candidates);

        let mut expected = scores.clone();
        expected.sort_by(|a, b| b.partial_cmp(a).unwrap());
        let got: Vec<f64> = ranked.iter().map(|c| c.score).collect();
        prop_assert_eq!(got, expected);
    }

    /// A boosted candidate may overtake unboosted ones, but it must never
    /// disturb their order relative to each other.
    #[test]
    fn boosted_candidate_never_reorders_the_unboosted(
        scores in prop::collection::vec(0.0f64..2.0, 2..8),
        creature_score in 0.0f64..2.0,
        insert_raw in 0usize..100,
    ) {
        let chain = RerankerChain::from_config(&RetrievalConfig::default()).unwrap();

        let creature = RankedCandidate {
            entity: ContentEntity {
                id: EntityId::new(),
                content_pack_id: PackId::from("base"),
                entity_type: EntityType::Creature,
                name: "Goblin".to_string(),
                searchable_text: "the goblin lurks at the cave mouth".to_string(),
                embedding: None,
            },
            category: QueryCategory::Combat,
            score: creature_score,
            pre_boost_rank: 0,
        };
        let mut candidates: Vec<RankedCandidate> = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| RankedCandidate {
                entity: make_entity("base", &format!("Entity{i}")),
                category: QueryCategory::RulesLookup,
                score,
                pre_boost_rank: 0,
            })
            .collect();
        let creature_id = creature.entity.id;
        candidates.insert(insert_raw % (scores.len() + 1), creature);

        let queries = vec![
            RagQuery {
                category: QueryCategory::Combat,
                query_text: "goblin".to_string(),
                target_entity_types: vec![EntityType::Creature],
                extracted_entity_name: Some("goblin".to_string()),
            },
            RagQuery {
                category: QueryCategory::RulesLookup,
                query_text: "xylographic".to_string(),
                target_entity_types: vec![EntityType::Rule],
                extracted_entity_name: None,
            },
        ];
        let ctx = BoostContext {
            action_text: "I attack the goblin",
            queries: &queries,
        };

        let ranked = chain.apply(&ctx, candidates);

        let boosted = ranked
            .iter()
            .find(|c| c.entity.id == creature_id)
            .expect("boosted candidate survives the chain");
        prop_assert!((boosted.score - (creature_score + 0.2 + 0.3)).abs() < 1e-9);

        // Unboosted candidates keep the stable descending order of their
        // untouched scores, wherever the boosted one lands.
        let mut expected = scores.clone();
        expected.sort_by(|a, b| b.partial_cmp(a).unwrap());
        let got: Vec<f64> = ranked
            .iter()
            .filter(|c| c.entity.id != creature_id)
            .map(|c| c.score)
            .collect();
        prop_assert_eq!(got, expected);
    }
}
