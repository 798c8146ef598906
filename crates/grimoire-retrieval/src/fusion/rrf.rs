//! Weighted Reciprocal Rank Fusion.
//!
//! `score(e) = scale · [α/(rank_v(e) + c) + (1−α)/(rank_k(e) + c)]`
//!
//! Ranks are 1-based. An entity absent from one list is assigned a rank
//! one past that list's end — a large-but-finite penalty, so single-source
//! hits still surface with a nonzero contribution from both terms.
//!
//! `scale = (c + 1) · RRF_SCORE_SCALE` pins the score range independent of
//! the request: a rank-1 hit in both legs scores exactly
//! [`RRF_SCORE_SCALE`], decaying with rank. The relevance threshold and
//! booster deltas are calibrated against this fixed range.

use std::collections::HashMap;

use grimoire_core::constants::RRF_SCORE_SCALE;
use grimoire_core::models::EntityId;

/// A candidate after RRF fusion, prior to priority resolution.
#[derive(Debug, Clone, Copy)]
pub struct FusedCandidate {
    pub entity_id: EntityId,
    /// Fused score on the fixed [0, RRF_SCORE_SCALE] range.
    pub score: f64,
}

/// Fuse the vector and keyword result lists.
///
/// `alpha` weights the vector leg; `c` is the smoothing constant damping
/// the dominance of rank 1. Ties break by entity id so the output never
/// depends on incidental input order.
pub fn fuse(
    vector: &[(EntityId, f64)],
    keyword: &[(EntityId, f64)],
    alpha: f64,
    c: u32,
) -> Vec<FusedCandidate> {
    let c = c as f64;
    let scale = (c + 1.0) * RRF_SCORE_SCALE;

    let vector_ranks: HashMap<EntityId, f64> = vector
        .iter()
        .enumerate()
        .map(|(i, (id, _))| (*id, (i + 1) as f64))
        .collect();
    let keyword_ranks: HashMap<EntityId, f64> = keyword
        .iter()
        .enumerate()
        .map(|(i, (id, _))| (*id, (i + 1) as f64))
        .collect();

    // Absence penalty: one past the end of the missing list.
    let vector_miss = (vector.len() + 1) as f64;
    let keyword_miss = (keyword.len() + 1) as f64;

    let mut ids: Vec<EntityId> = vector_ranks.keys().chain(keyword_ranks.keys()).copied().collect();
    ids.sort_unstable();
    ids.dedup();

    let mut candidates: Vec<FusedCandidate> = ids
        .into_iter()
        .map(|id| {
            let rank_v = vector_ranks.get(&id).copied().unwrap_or(vector_miss);
            let rank_k = keyword_ranks.get(&id).copied().unwrap_or(keyword_miss);
            let score = scale * (alpha / (rank_v + c) + (1.0 - alpha) / (rank_k + c));
            FusedCandidate {
                entity_id: id,
                score,
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.entity_id.cmp(&b.entity_id))
    });
    candidates
}
