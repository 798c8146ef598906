//! # grimoire-retrieval
//!
//! The content resolution and hybrid retrieval engine: action text is
//! classified into typed sub-queries, each runs vector + keyword search
//! over pack-scoped snapshots, results fuse via Reciprocal Rank Fusion,
//! cross-pack overrides resolve by priority, and a composable booster
//! chain produces the final ordered knowledge list.

pub mod engine;
pub mod fusion;
pub mod index;
pub mod query;
pub mod ranking;
pub mod resolve;

pub use engine::RetrievalEngine;
pub use query::QueryEngine;
