//! Priority-based override resolution across content packs.

pub mod priority;

pub use priority::{resolve_point, resolve_set};
