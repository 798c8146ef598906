//! RetrievalEngine: orchestrates one full request/response cycle.
//!
//! action text + state → classify → per query: embed → vector/keyword
//! search over a pack-scoped snapshot → RRF fusion → priority resolution →
//! merge → booster chain → threshold + caps → ordered knowledge list.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use grimoire_core::config::GrimoireConfig;
use grimoire_core::constants::MAX_SNIPPET_CHARS;
use grimoire_core::errors::{GrimoireError, GrimoireResult};
use grimoire_core::models::{
    ContentEntity, EntityId, GameState, KnowledgeResult, PriorityContext, QueryCategory, RagQuery,
};
use grimoire_core::traits::IContentStore;
use grimoire_embeddings::{embed_batch_with_deadline, SharedEmbedder};

use crate::fusion;
use crate::index::{KeywordIndex, VectorIndex};
use crate::query::QueryEngine;
use crate::ranking::{BoostContext, RankedCandidate, RerankerChain};
use crate::resolve;

/// Per-query candidate pool size fed into fusion and reranking.
const CANDIDATE_LIMIT: usize = 20;

/// The retrieval orchestrator. Read-only with respect to content data;
/// safe to call concurrently — per-request snapshots are immutable and the
/// only shared state is the once-initialized embedder handle.
pub struct RetrievalEngine<'a> {
    store: &'a dyn IContentStore,
    embedder: Arc<SharedEmbedder>,
    query_engine: QueryEngine,
    reranker: RerankerChain,
    config: GrimoireConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        store: &'a dyn IContentStore,
        embedder: Arc<SharedEmbedder>,
        config: GrimoireConfig,
    ) -> GrimoireResult<Self> {
        config.validate()?;
        let reranker = RerankerChain::from_config(&config.retrieval)?;
        Ok(Self {
            store,
            embedder,
            query_engine: QueryEngine::new(),
            reranker,
            config,
        })
    }

    /// Substitute the classification lexicon (e.g. a campaign-specific
    /// table).
    pub fn with_query_engine(mut self, query_engine: QueryEngine) -> Self {
        self.query_engine = query_engine;
        self
    }

    /// Run one retrieval cycle for the given action text and state.
    pub fn get_relevant_knowledge(
        &self,
        action_text: &str,
        state: &GameState,
    ) -> GrimoireResult<Vec<KnowledgeResult>> {
        self.get_relevant_knowledge_cancellable(action_text, state, &AtomicBool::new(false))
    }

    /// Like [`Self::get_relevant_knowledge`], but observes `cancel`: once
    /// set, no further per-query work is launched. Sub-queries already
    /// issued complete on their own and their candidates are discarded —
    /// a cancelled call returns `Ok(vec![])`, never partial results.
    pub fn get_relevant_knowledge_cancellable(
        &self,
        action_text: &str,
        state: &GameState,
        cancel: &AtomicBool,
    ) -> GrimoireResult<Vec<KnowledgeResult>> {
        let active = self.store.list_active_packs()?;
        let ctx = PriorityContext::sanitize(&state.content_pack_priority, &active);
        if ctx.is_empty() {
            debug!("no active packs in priority context");
            return Ok(Vec::new());
        }

        let queries = self.query_engine.analyze(action_text, state);
        if queries.is_empty() {
            return Ok(Vec::new());
        }

        let embeddings = self.embed_queries(&queries)?;

        // Per-query pools, merged keeping the best-scoring candidate when
        // several queries surface the same entity.
        let mut pools: HashMap<EntityId, RankedCandidate> = HashMap::new();
        for (i, query) in queries.iter().enumerate() {
            if cancel.load(Ordering::Relaxed) {
                info!(
                    completed = i,
                    remaining = queries.len() - i,
                    "call cancelled, discarding gathered candidates"
                );
                return Ok(Vec::new());
            }
            let query_embedding = embeddings.as_ref().map(|v| v[i].as_slice());
            for candidate in self.run_query(query, query_embedding, &ctx)? {
                match pools.entry(candidate.entity.id) {
                    Entry::Occupied(mut slot) => {
                        if candidate.score > slot.get().score {
                            slot.insert(candidate);
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(candidate);
                    }
                }
            }
        }

        let mut merged: Vec<RankedCandidate> = pools.into_values().collect();
        merged.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.entity.id.cmp(&b.entity.id))
        });

        let boost_ctx = BoostContext {
            action_text,
            queries: &queries,
        };
        let boosted = self.reranker.apply(&boost_ctx, merged);
        let results = self.cap_and_threshold(boosted);

        info!(
            queries = queries.len(),
            results = results.len(),
            "retrieval complete"
        );
        Ok(results)
    }

    /// Batch-embed all query focus texts in one model invocation, bounded
    /// by the time budget. Overruns and provider failures degrade every
    /// query to keyword-only retrieval; configuration errors are fatal.
    fn embed_queries(&self, queries: &[RagQuery]) -> GrimoireResult<Option<Vec<Vec<f32>>>> {
        let engine = self.embedder.get()?;
        let texts: Vec<String> = queries.iter().map(|q| q.query_text.clone()).collect();
        let budget = Duration::from_millis(self.config.retrieval.query_time_budget_ms);
        match embed_batch_with_deadline(&engine, texts, budget) {
            Ok(vectors) => Ok(Some(vectors)),
            Err(GrimoireError::Embedding(e)) => {
                warn!(error = %e, "embedding degraded, continuing keyword-only");
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }

    /// One sub-query: snapshot, search both legs, fuse, resolve overrides.
    fn run_query(
        &self,
        query: &RagQuery,
        query_embedding: Option<&[f32]>,
        ctx: &PriorityContext,
    ) -> GrimoireResult<Vec<RankedCandidate>> {
        let snapshot = self.snapshot(query, ctx)?;
        if snapshot.is_empty() {
            debug!(category = %query.category, "empty snapshot for query");
            return Ok(Vec::new());
        }

        let keyword_hits =
            KeywordIndex::build(&snapshot).search(&query.query_text, CANDIDATE_LIMIT);
        let vector_hits = match query_embedding {
            Some(embedding) => VectorIndex::build(&snapshot, self.config.embedding.dimensions)?
                .search(embedding, CANDIDATE_LIMIT)?,
            None => Vec::new(),
        };

        let fused = fusion::fuse(
            &vector_hits,
            &keyword_hits,
            self.config.retrieval.alpha,
            self.config.retrieval.rrf_constant,
        );
        debug!(
            category = %query.category,
            vector = vector_hits.len(),
            keyword = keyword_hits.len(),
            fused = fused.len(),
            "query legs fused"
        );

        let scores: HashMap<EntityId, f64> =
            fused.iter().map(|c| (c.entity_id, c.score)).collect();
        let by_id: HashMap<EntityId, &ContentEntity> =
            snapshot.iter().map(|e| (e.id, e)).collect();
        let ordered: Vec<ContentEntity> = fused
            .iter()
            .filter_map(|c| by_id.get(&c.entity_id).map(|e| (*e).clone()))
            .collect();

        // Drop pack-shadowed duplicates, preserving the fused ordering.
        let resolved = resolve::resolve_set(ordered, ctx);

        Ok(resolved
            .into_iter()
            .map(|entity| RankedCandidate {
                score: scores[&entity.id],
                category: query.category,
                entity,
                pre_boost_rank: 0,
            })
            .collect())
    }

    /// Immutable per-request snapshot of the entities a query may see:
    /// its target entity types across the sanitized pack set.
    fn snapshot(
        &self,
        query: &RagQuery,
        ctx: &PriorityContext,
    ) -> GrimoireResult<Vec<ContentEntity>> {
        let mut entities = Vec::new();
        for entity_type in &query.target_entity_types {
            for pack in ctx.packs() {
                entities.extend(self.store.list_entities(*entity_type, pack)?);
            }
        }
        Ok(entities)
    }

    fn cap_and_threshold(&self, candidates: Vec<RankedCandidate>) -> Vec<KnowledgeResult> {
        let cfg = &self.config.retrieval;
        let mut per_category: HashMap<QueryCategory, usize> = HashMap::new();
        let mut out = Vec::with_capacity(cfg.global_cap);

        for candidate in candidates {
            if candidate.score < cfg.relevance_threshold {
                continue;
            }
            let used = per_category.entry(candidate.category).or_insert(0);
            if *used >= cfg.per_category_cap {
                continue;
            }
            *used += 1;
            out.push(to_result(candidate));
            if out.len() >= cfg.global_cap {
                break;
            }
        }
        out
    }
}

fn to_result(candidate: RankedCandidate) -> KnowledgeResult {
    KnowledgeResult {
        entity_type: candidate.entity.entity_type,
        source_pack_id: candidate.entity.content_pack_id,
        title: candidate.entity.name,
        content_snippet: snippet(&candidate.entity.searchable_text),
        score: candidate.score,
        category: candidate.category,
    }
}

fn snippet(text: &str) -> String {
    if text.chars().count() <= MAX_SNIPPET_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_SNIPPET_CHARS).collect();
    format!("{}…", cut.trim_end())
}
