//! Default config values, named so they are greppable from docs and tests.

/// Weight of the vector leg in RRF fusion.
pub const DEFAULT_ALPHA: f64 = 0.7;

/// RRF smoothing constant damping the dominance of rank 1.
pub const DEFAULT_RRF_CONSTANT: u32 = 60;

pub const DEFAULT_PER_CATEGORY_CAP: usize = 2;
pub const DEFAULT_GLOBAL_CAP: usize = 5;

/// Minimum fused+boosted score a result must reach to be returned.
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 2.0;

pub const DEFAULT_EXACT_MATCH_BOOST: f64 = 0.2;
pub const DEFAULT_ENTITY_MATCH_BOOST: f64 = 0.3;

/// Per-query time budget for embedding + index work (milliseconds).
pub const DEFAULT_QUERY_TIME_BUDGET_MS: u64 = 250;

/// Pinned embedding dimension shared by the whole system.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 1024;
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hash";

pub fn default_booster_order() -> Vec<String> {
    vec!["exact_match".to_string(), "entity_match".to_string()]
}
