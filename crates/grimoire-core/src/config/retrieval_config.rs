use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, GrimoireResult};

/// Retrieval pipeline configuration.
///
/// Scores live on a fixed scale: RRF fusion maps a rank-1 hit in both legs
/// to 2.5 and decays with rank; boosters add on top. The default
/// `relevance_threshold` of 2.0 therefore keeps the strong cohort and drops
/// deep-tail candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Vector-vs-keyword weight in RRF fusion, in [0, 1].
    pub alpha: f64,
    /// RRF smoothing constant `c` in `1/(rank + c)`.
    pub rrf_constant: u32,
    pub per_category_cap: usize,
    pub global_cap: usize,
    pub relevance_threshold: f64,
    pub exact_match_boost: f64,
    pub entity_match_boost: f64,
    /// Booster chain, applied in declared order. Composition is itself
    /// configuration, not hard-coded.
    pub booster_order: Vec<String>,
    /// Time budget per query for embedding work; overruns degrade that
    /// query to keyword-only retrieval.
    pub query_time_budget_ms: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_ALPHA,
            rrf_constant: defaults::DEFAULT_RRF_CONSTANT,
            per_category_cap: defaults::DEFAULT_PER_CATEGORY_CAP,
            global_cap: defaults::DEFAULT_GLOBAL_CAP,
            relevance_threshold: defaults::DEFAULT_RELEVANCE_THRESHOLD,
            exact_match_boost: defaults::DEFAULT_EXACT_MATCH_BOOST,
            entity_match_boost: defaults::DEFAULT_ENTITY_MATCH_BOOST,
            booster_order: defaults::default_booster_order(),
            query_time_budget_ms: defaults::DEFAULT_QUERY_TIME_BUDGET_MS,
        }
    }
}

impl RetrievalConfig {
    pub fn validate(&self) -> GrimoireResult<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.alpha".to_string(),
                reason: format!("must be in [0, 1], got {}", self.alpha),
            }
            .into());
        }
        if self.global_cap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.global_cap".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.query_time_budget_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.query_time_budget_ms".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
