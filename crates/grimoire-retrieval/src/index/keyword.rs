//! BM25 lexical relevance over the scoped snapshot.
//!
//! Term-frequency / length-normalized weighting with corpus-level document
//! frequencies, so an exact rare token (a quoted proper noun) scores
//! proportionally higher than common vocabulary.

use std::collections::HashMap;

use grimoire_core::constants::{BM25_B, BM25_K1};
use grimoire_core::models::{ContentEntity, EntityId};
use grimoire_core::text::tokenize;

struct Doc {
    id: EntityId,
    term_counts: HashMap<String, f64>,
    len: f64,
}

/// Lexical index over a scoped entity snapshot. Entity names are indexed
/// together with the searchable text so name tokens always match.
pub struct KeywordIndex {
    docs: Vec<Doc>,
    doc_freq: HashMap<String, usize>,
    avg_doc_len: f64,
}

impl KeywordIndex {
    pub fn build(entities: &[ContentEntity]) -> Self {
        let mut docs = Vec::with_capacity(entities.len());
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for entity in entities {
            let text = format!("{} {}", entity.name, entity.searchable_text);
            let tokens = tokenize(&text);
            let mut term_counts: HashMap<String, f64> = HashMap::new();
            for tok in &tokens {
                *term_counts.entry(tok.clone()).or_default() += 1.0;
            }
            for term in term_counts.keys() {
                *doc_freq.entry(term.clone()).or_default() += 1;
            }
            docs.push(Doc {
                id: entity.id,
                len: tokens.len() as f64,
                term_counts,
            });
        }

        let avg_doc_len = if docs.is_empty() {
            0.0
        } else {
            docs.iter().map(|d| d.len).sum::<f64>() / docs.len() as f64
        };

        Self {
            docs,
            doc_freq,
            avg_doc_len,
        }
    }

    /// Ordered `(entity_id, bm25_score)` pairs for the query, zero-score
    /// documents omitted. Ties break by entity id.
    pub fn search(&self, query_text: &str, limit: usize) -> Vec<(EntityId, f64)> {
        let query_terms = tokenize(query_text);
        if query_terms.is_empty() || self.docs.is_empty() {
            return Vec::new();
        }

        let n = self.docs.len() as f64;
        let mut scored: Vec<(EntityId, f64)> = self
            .docs
            .iter()
            .filter_map(|doc| {
                let mut score = 0.0;
                for term in &query_terms {
                    let tf = match doc.term_counts.get(term) {
                        Some(tf) => *tf,
                        None => continue,
                    };
                    let df = *self.doc_freq.get(term).unwrap_or(&0) as f64;
                    let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
                    let norm = BM25_K1 * (1.0 - BM25_B + BM25_B * doc.len / self.avg_doc_len);
                    score += idf * (tf * (BM25_K1 + 1.0)) / (tf + norm);
                }
                (score > 0.0).then_some((doc.id, score))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(limit);
        scored
    }
}
