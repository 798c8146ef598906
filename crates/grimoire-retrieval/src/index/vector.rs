//! Cosine-similarity nearest-neighbor lookup over the pinned dimension.

use grimoire_core::errors::{ConfigError, GrimoireResult};
use grimoire_core::models::{ContentEntity, EntityId};

/// Nearest-neighbor index over a scoped entity snapshot.
///
/// Entities without embeddings are keyword-only and skipped here. Any
/// embedding whose length differs from the pinned dimension is a hard
/// configuration error at build or search time — never silently padded or
/// truncated.
#[derive(Debug)]
pub struct VectorIndex<'a> {
    entries: Vec<(EntityId, &'a [f32])>,
    dimensions: usize,
}

impl<'a> VectorIndex<'a> {
    pub fn build(entities: &'a [ContentEntity], dimensions: usize) -> GrimoireResult<Self> {
        let mut entries = Vec::new();
        for entity in entities {
            if let Some(embedding) = &entity.embedding {
                if embedding.len() != dimensions {
                    return Err(ConfigError::DimensionMismatch {
                        expected: dimensions,
                        actual: embedding.len(),
                    }
                    .into());
                }
                entries.push((entity.id, embedding.as_slice()));
            }
        }
        Ok(Self {
            entries,
            dimensions,
        })
    }

    /// Ordered `(entity_id, similarity)` pairs, best first. Ties break by
    /// entity id so the ordering never depends on snapshot order.
    pub fn search(&self, query: &[f32], limit: usize) -> GrimoireResult<Vec<(EntityId, f64)>> {
        if query.len() != self.dimensions {
            return Err(ConfigError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            }
            .into());
        }

        let mut scored: Vec<(EntityId, f64)> = self
            .entries
            .iter()
            .map(|(id, embedding)| (*id, cosine(query, embedding)))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(limit);
        Ok(scored)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| (*x as f64) * (*y as f64)).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    if norm_a <= f64::EPSILON || norm_b <= f64::EPSILON {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
