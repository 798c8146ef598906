/// BM25 term-frequency saturation constant.
pub const BM25_K1: f64 = 1.2;

/// BM25 document-length normalization constant.
pub const BM25_B: f64 = 0.75;

/// Minimum token length indexed by keyword search and hashed embeddings.
pub const MIN_TOKEN_LEN: usize = 2;

/// Fixed fused-score normalization factor. Together with the RRF smoothing
/// constant this maps a rank-1 hit in both retrieval legs to 2.5, so the
/// relevance threshold operates on a stable, request-independent scale.
pub const RRF_SCORE_SCALE: f64 = 2.5;

/// Maximum length of a result content snippet, in characters.
pub const MAX_SNIPPET_CHARS: usize = 240;
