use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use happycat_core::{CatalogError, GifPatch, GifRecord};

use super::{ConflictField, RecordStore};
use crate::index::CatalogIndex;

/// In-memory backing collection with derived name/tag indexes.
///
/// The records live inside a [`CatalogIndex`] snapshot; every mutation takes
/// the records out, applies the change, and rebuilds the indexes, so reads
/// always see a consistent snapshot.
pub struct MemoryStore {
    index: RwLock<CatalogIndex>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<GifRecord>) -> Self {
        info!(count = records.len(), "in-memory GIF store initialized");
        Self {
            index: RwLock::new(CatalogIndex::build(records)),
        }
    }

    /// Run `f` over the owned record list and rebuild the indexes.
    async fn mutate<T>(&self, f: impl FnOnce(&mut Vec<GifRecord>) -> T) -> T {
        let mut guard = self.index.write().await;
        let mut records = std::mem::replace(&mut *guard, CatalogIndex::build(Vec::new()))
            .into_records();
        let out = f(&mut records);
        *guard = CatalogIndex::build(records);
        out
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_all(&self, cap: usize) -> Result<Vec<GifRecord>, CatalogError> {
        Ok(self.index.read().await.all(cap).to_vec())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<GifRecord>, CatalogError> {
        let index = self.index.read().await;
        Ok(index
            .records()
            .iter()
            .find(|r| r.id.as_deref() == Some(id))
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<GifRecord>, CatalogError> {
        Ok(self.index.read().await.by_name(name).cloned())
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<GifRecord>, CatalogError> {
        let index = self.index.read().await;
        Ok(index.by_tag(tag).into_iter().cloned().collect())
    }

    async fn find_conflict(
        &self,
        field: ConflictField,
        value: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<GifRecord>, CatalogError> {
        let index = self.index.read().await;
        Ok(index
            .records()
            .iter()
            .filter(|r| exclude_id.is_none() || r.id.as_deref() != exclude_id)
            .find(|r| match field {
                ConflictField::Name => r.name == value,
                ConflictField::Url => r.url == value,
            })
            .cloned())
    }

    async fn sample_random(&self) -> Result<Option<GifRecord>, CatalogError> {
        Ok(self.index.read().await.random().cloned())
    }

    async fn insert_one(&self, record: GifRecord) -> Result<GifRecord, CatalogError> {
        let stored = self
            .mutate(|records| {
                records.push(record.clone());
                record
            })
            .await;
        info!(name = %stored.name, "GIF inserted");
        Ok(stored)
    }

    async fn update_by_id(
        &self,
        id: &str,
        patch: &GifPatch,
    ) -> Result<Option<GifRecord>, CatalogError> {
        let updated = self
            .mutate(|records| {
                let target = records.iter_mut().find(|r| r.id.as_deref() == Some(id))?;
                patch.apply(target);
                Some(target.clone())
            })
            .await;
        if updated.is_some() {
            info!(id = %id, "GIF updated");
        }
        Ok(updated)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, CatalogError> {
        let removed = self
            .mutate(|records| {
                let before = records.len();
                records.retain(|r| r.id.as_deref() != Some(id));
                records.len() < before
            })
            .await;
        if removed {
            info!(id = %id, "GIF deleted");
        }
        Ok(removed)
    }
}
