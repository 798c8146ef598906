//! Pure override-resolution algorithms.
//!
//! Both functions are deterministic and side-effect-free: identical inputs
//! always produce identical outputs, independent of any storage
//! technology, so they can be cached safely and unit-tested without a
//! database fixture. Resolution is always single-valued — one pack's
//! definition wins whole, never a field-level merge of two packs.

use std::collections::HashMap;

use grimoire_core::errors::GrimoireResult;
use grimoire_core::models::{ContentEntity, EntityKey, PriorityContext};
use grimoire_core::traits::IContentStore;

/// Point resolution: return the definition of `key` from the first pack in
/// priority order that contains it.
///
/// The sanitized context carries the system pack in its tail, so the
/// system fallback needs no special casing here. Absence everywhere is
/// `Ok(None)`, not an error.
pub fn resolve_point(
    store: &dyn IContentStore,
    key: &EntityKey,
    ctx: &PriorityContext,
) -> GrimoireResult<Option<ContentEntity>> {
    for pack in ctx.packs() {
        if let Some(entity) = store.get_entity(key.entity_type, &key.name, pack)? {
            return Ok(Some(entity));
        }
    }
    Ok(None)
}

/// Set resolution: group candidates by identity key and keep only the
/// minimum-rank member per group, dropping shadowed duplicates.
///
/// Packs outside the context rank last, tied among themselves; ties keep
/// the earlier input element. Survivors preserve their input order, so
/// passing a ranked candidate list through keeps its ranking.
pub fn resolve_set(entities: Vec<ContentEntity>, ctx: &PriorityContext) -> Vec<ContentEntity> {
    // First pass: pick the winner per key (lowest rank, earliest on ties).
    let mut winners: HashMap<EntityKey, (usize, usize)> = HashMap::new(); // key -> (rank, input index)
    for (i, entity) in entities.iter().enumerate() {
        let rank = ctx.rank_of(&entity.content_pack_id);
        winners
            .entry(entity.key())
            .and_modify(|(best_rank, best_i)| {
                if rank < *best_rank {
                    *best_rank = rank;
                    *best_i = i;
                }
            })
            .or_insert((rank, i));
    }

    // Second pass: emit winners in input order.
    entities
        .into_iter()
        .enumerate()
        .filter(|(i, entity)| winners.get(&entity.key()).is_some_and(|(_, wi)| wi == i))
        .map(|(_, entity)| entity)
        .collect()
}
