//! Persistence seam for the catalog.
//!
//! `RecordStore` is the contract a backing collection must satisfy; the
//! in-memory implementation lives in [`memory`]. A document-database driver
//! drops in behind the same trait without touching the service.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use happycat_core::{CatalogError, GifPatch, GifRecord};

/// Which unique field a duplicate probe inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictField {
    Name,
    Url,
}

/// Primitive operations the catalog needs from its backing collection.
///
/// Implementations report transport failures as
/// [`CatalogError::StorageUnavailable`] and never use the domain kinds. Each
/// method is one logical round trip; there is no compare-and-swap, so two
/// writers racing on the same name/url may both pass their duplicate probe.
/// That race is accepted here; a uniqueness constraint at the persistence
/// layer is the place to close it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every record in iteration order, capped at `cap`.
    async fn find_all(&self, cap: usize) -> Result<Vec<GifRecord>, CatalogError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<GifRecord>, CatalogError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<GifRecord>, CatalogError>;

    /// Every record whose tag list contains `tag`.
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<GifRecord>, CatalogError>;

    /// First record whose `field` equals `value`, skipping the record with
    /// id `exclude_id` (so an update can collide with itself harmlessly).
    async fn find_conflict(
        &self,
        field: ConflictField,
        value: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<GifRecord>, CatalogError>;

    /// One uniformly-sampled record, `None` when the collection is empty.
    async fn sample_random(&self) -> Result<Option<GifRecord>, CatalogError>;

    async fn insert_one(&self, record: GifRecord) -> Result<GifRecord, CatalogError>;

    /// Merge `patch` into the record with `id`. `None` when no record has
    /// that id.
    async fn update_by_id(
        &self,
        id: &str,
        patch: &GifPatch,
    ) -> Result<Option<GifRecord>, CatalogError>;

    /// True when a record existed and was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, CatalogError>;
}
