//! Per-request, in-memory index views over pack-scoped entity snapshots.
//!
//! Both indexes are built from an immutable snapshot taken at the start of
//! the request, so concurrent orchestration calls never share mutable
//! index state.

pub mod keyword;
pub mod vector;

pub use keyword::KeywordIndex;
pub use vector::VectorIndex;
