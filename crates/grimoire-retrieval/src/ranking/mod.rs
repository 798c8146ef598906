//! Composable rerank chain: ordered boosters, then a deterministic
//! re-sort.
//!
//! Boosters are strategy objects selected and ordered by configuration;
//! each sees the previous booster's adjusted scores. Composition order is
//! config, not code.

pub mod boosters;

use grimoire_core::config::RetrievalConfig;
use grimoire_core::errors::{ConfigError, GrimoireResult};
use grimoire_core::models::{ContentEntity, QueryCategory, RagQuery};

use boosters::{EntityMatchBooster, ExactMatchBooster};

/// A fused, resolved candidate flowing through the rerank chain.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub entity: ContentEntity,
    /// Category of the query that surfaced this candidate.
    pub category: QueryCategory,
    pub score: f64,
    /// Position before any booster ran; the final tie-breaker, so ties
    /// never depend on incidental storage order.
    pub pre_boost_rank: usize,
}

/// What a booster scores against.
pub struct BoostContext<'a> {
    /// The original action text, the exact-match reference.
    pub action_text: &'a str,
    pub queries: &'a [RagQuery],
}

/// One scoring adjustment. Pure: returns an adjusted copy of the
/// candidates, never reorders or drops them.
pub trait Booster: Send + Sync {
    fn name(&self) -> &'static str;
    fn boost(&self, ctx: &BoostContext<'_>, candidates: Vec<RankedCandidate>)
        -> Vec<RankedCandidate>;
}

/// The configured booster chain.
pub struct RerankerChain {
    boosters: Vec<Box<dyn Booster>>,
}

impl RerankerChain {
    /// Build the chain from `booster_order`. Unknown names are a
    /// configuration error.
    pub fn from_config(config: &RetrievalConfig) -> GrimoireResult<Self> {
        let mut boosters: Vec<Box<dyn Booster>> = Vec::with_capacity(config.booster_order.len());
        for name in &config.booster_order {
            let booster: Box<dyn Booster> = match name.as_str() {
                "exact_match" => Box::new(ExactMatchBooster {
                    delta: config.exact_match_boost,
                }),
                "entity_match" => Box::new(EntityMatchBooster {
                    delta: config.entity_match_boost,
                }),
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: "retrieval.booster_order".to_string(),
                        reason: format!("unknown booster {other:?}"),
                    }
                    .into())
                }
            };
            boosters.push(booster);
        }
        Ok(Self { boosters })
    }

    /// Apply all boosters in declared order, then stable-sort by descending
    /// score with pre-boost rank breaking ties.
    pub fn apply(
        &self,
        ctx: &BoostContext<'_>,
        mut candidates: Vec<RankedCandidate>,
    ) -> Vec<RankedCandidate> {
        for (i, candidate) in candidates.iter_mut().enumerate() {
            candidate.pre_boost_rank = i;
        }
        for booster in &self.boosters {
            candidates = booster.boost(ctx, candidates);
        }
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.pre_boost_rank.cmp(&b.pre_boost_rank))
        });
        candidates
    }

    pub fn booster_names(&self) -> Vec<&'static str> {
        self.boosters.iter().map(|b| b.name()).collect()
    }
}
