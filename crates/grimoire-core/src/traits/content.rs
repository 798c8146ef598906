use crate::errors::GrimoireResult;
use crate::models::{ContentEntity, ContentPack, EntityType, PackId};

/// Read-only seam to the external content-management collaborator.
///
/// The retrieval engine only reads snapshots through this trait; entity and
/// pack lifecycles are owned elsewhere. Name lookups are case-insensitive.
pub trait IContentStore: Send + Sync {
    /// Point lookup of one entity in one pack.
    fn get_entity(
        &self,
        entity_type: EntityType,
        name: &str,
        pack: &PackId,
    ) -> GrimoireResult<Option<ContentEntity>>;

    /// Bulk listing of all entities of one type in one pack.
    fn list_entities(
        &self,
        entity_type: EntityType,
        pack: &PackId,
    ) -> GrimoireResult<Vec<ContentEntity>>;

    fn list_active_packs(&self) -> GrimoireResult<Vec<ContentPack>>;
}
