//! Hybrid rank fusion of the vector and keyword retrieval legs.

pub mod rrf;

pub use rrf::{fuse, FusedCandidate};
