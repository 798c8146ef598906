//! Deadline-bounded embedding.
//!
//! The provider call runs on a worker thread; if it misses the budget the
//! caller gets `EmbeddingError::Timeout` and the in-flight work is left to
//! finish on its thread and be discarded. The orchestrator degrades the
//! affected queries to keyword-only retrieval instead of failing the call.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use grimoire_core::errors::{EmbeddingError, GrimoireResult};

use crate::engine::EmbeddingEngine;

/// Embed a batch of texts, bounded by `budget`.
pub fn embed_batch_with_deadline(
    engine: &Arc<EmbeddingEngine>,
    texts: Vec<String>,
    budget: Duration,
) -> GrimoireResult<Vec<Vec<f32>>> {
    let started = Instant::now();
    let (tx, rx) = mpsc::channel();
    let worker_engine = Arc::clone(engine);

    thread::spawn(move || {
        // The receiver may be gone after a timeout; dropping the result is
        // exactly the discard semantics we want.
        let _ = tx.send(worker_engine.embed_batch(&texts));
    });

    match rx.recv_timeout(budget) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout | mpsc::RecvTimeoutError::Disconnected) => {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            warn!(elapsed_ms, budget_ms = budget.as_millis() as u64, "embedding deadline exceeded");
            Err(EmbeddingError::Timeout {
                elapsed_ms,
                budget_ms: budget.as_millis() as u64,
            }
            .into())
        }
    }
}
