use serde::{Deserialize, Serialize};

use super::pack::{ContentPack, PackId};

/// Ordered override precedence for one request, highest priority first.
///
/// Only constructed through [`PriorityContext::sanitize`], so it never
/// contains duplicates or unknown/inactive pack ids. Immutable per call;
/// resolution is a pure function of this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityContext {
    packs: Vec<PackId>,
}

impl PriorityContext {
    /// Sanitize a caller-supplied priority list against the known active
    /// packs.
    ///
    /// Duplicates and ids that do not name an active pack are dropped
    /// (malformed input is not an error). Active system packs the caller
    /// omitted are appended last, so the system fallback is always present.
    pub fn sanitize(requested: &[PackId], active_packs: &[ContentPack]) -> Self {
        let mut packs: Vec<PackId> = Vec::with_capacity(requested.len());
        for id in requested {
            if packs.contains(id) {
                continue;
            }
            if active_packs.iter().any(|p| p.active && p.id == *id) {
                packs.push(id.clone());
            }
        }
        for system in active_packs.iter().filter(|p| p.active && p.is_system) {
            if !packs.contains(&system.id) {
                packs.push(system.id.clone());
            }
        }
        Self { packs }
    }

    /// Override rank of a pack: its index in this context. Packs outside
    /// the context rank last, tied among themselves.
    pub fn rank_of(&self, pack: &PackId) -> usize {
        self.packs
            .iter()
            .position(|p| p == pack)
            .unwrap_or(self.packs.len())
    }

    pub fn packs(&self) -> &[PackId] {
        &self.packs
    }

    pub fn contains(&self, pack: &PackId) -> bool {
        self.packs.contains(pack)
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}
