//! Signed feature-hashing embedding provider.
//!
//! Produces deterministic fixed-dimension dense vectors without a model:
//! unigram and adjacent-bigram features are hashed into buckets, with the
//! hash's top bit choosing the sign so colliding features tend to cancel
//! instead of compounding. Identical text always embeds identically.

use std::collections::HashMap;

use grimoire_core::errors::GrimoireResult;
use grimoire_core::text::tokenize;
use grimoire_core::traits::IEmbeddingProvider;

/// Weight of an adjacent-pair feature relative to a single token. Pairs
/// carry phrase identity ("magic missile") but must not drown out the
/// tokens themselves.
const BIGRAM_WEIGHT: f32 = 0.5;

/// Deterministic signed-hashing embedding provider.
pub struct HashEmbedder {
    dimensions: usize,
}

impl HashEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Map a feature to a bucket and a sign (FNV-1a, top bit as sign).
    fn slot(feature: &str, dims: usize) -> (usize, f32) {
        let hash = feature.bytes().fold(0xcbf29ce484222325u64, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x100000001b3)
        });
        let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
        ((hash as usize) % dims, sign)
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut features: HashMap<String, f32> = HashMap::new();
        for token in &tokens {
            *features.entry(token.clone()).or_default() += 1.0;
        }
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            *features.entry(bigram).or_default() += BIGRAM_WEIGHT;
        }

        let total = tokens.len() as f32;
        let mut vector = vec![0.0f32; self.dimensions];
        for (feature, count) in &features {
            // Rarity proxy: longer features (and all bigrams) carry more
            // signal than short, likely-stopword tokens.
            let rarity = 1.0 + (feature.len() as f32).ln();
            let (slot, sign) = Self::slot(feature, self.dimensions);
            vector[slot] += sign * (count / total) * rarity;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl IEmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> GrimoireResult<Vec<f32>> {
        Ok(self.vector_for(text))
    }

    fn embed_batch(&self, texts: &[String]) -> GrimoireResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector_for(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "signed-hash"
    }

    fn is_available(&self) -> bool {
        true
    }
}
