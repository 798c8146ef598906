use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a content pack (e.g. `"srd"`, `"homebrew-undermountain"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackId(pub String);

impl PackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An independently toggled collection of content entities.
///
/// Owned and mutated by the external content-management collaborator; the
/// retrieval engine only reads snapshots per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPack {
    pub id: PackId,
    pub name: String,
    pub active: bool,
    /// The system pack is immutable and always resolves last among active
    /// packs unless explicitly reordered by the caller.
    pub is_system: bool,
}
