use std::sync::Arc;

use tracing::debug;

use happycat_core::{CatalogError, GifPatch, GifRecord, NewGif};

use crate::object_id;
use crate::store::{ConflictField, RecordStore};
use crate::validate;

/// The catalog's public contract: four reads and three writes over an
/// injected record store, with every invariant enforced before a write
/// reaches persistence.
pub struct CatalogService {
    store: Arc<dyn RecordStore>,
    list_cap: usize,
}

impl CatalogService {
    pub fn new(store: Arc<dyn RecordStore>, list_cap: usize) -> Self {
        Self { store, list_cap }
    }

    // ── Reads ─────────────────────────────────────────────────────

    pub async fn get_all(&self) -> Result<Vec<GifRecord>, CatalogError> {
        self.store.find_all(self.list_cap).await
    }

    pub async fn get_random(&self) -> Result<GifRecord, CatalogError> {
        self.store
            .sample_random()
            .await?
            .ok_or(CatalogError::EmptyCatalog)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<GifRecord, CatalogError> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| CatalogError::name_not_found(name))
    }

    pub async fn get_by_tag(&self, tag: &str) -> Result<Vec<GifRecord>, CatalogError> {
        let records = self.store.find_by_tag(tag).await?;
        if records.is_empty() {
            return Err(CatalogError::tag_not_found(tag));
        }
        Ok(records)
    }

    // ── Writes ────────────────────────────────────────────────────

    /// Insert a new record under a fresh id. No exclusion on the duplicate
    /// probes: every existing record counts.
    pub async fn add(&self, new: NewGif) -> Result<GifRecord, CatalogError> {
        validate::validate_name(&new.name)?;
        validate::validate_url(&new.url)?;
        self.check_duplicate(None, Some(new.name.as_str()), Some(new.url.as_str()))
            .await?;

        let record = new.into_record(object_id::generate());
        debug!(name = %record.name, "adding GIF");
        self.store.insert_one(record).await
    }

    /// Merge `patch` into the record with `id`. Absent fields stay put; an
    /// empty patch succeeds and returns the unchanged record. Duplicate
    /// probes run against the supplied fields only, excluding the target.
    pub async fn update(
        &self,
        id: &str,
        patch: Option<GifPatch>,
    ) -> Result<GifRecord, CatalogError> {
        validate::validate_id(id)?;
        let patch = validate::require_body(patch)?;

        if let Some(name) = &patch.name {
            validate::validate_name(name)?;
        }
        if let Some(url) = &patch.url {
            validate::validate_url(url)?;
        }
        self.check_duplicate(Some(id), patch.name.as_deref(), patch.url.as_deref())
            .await?;

        debug!(id = %id, "updating GIF");
        self.store
            .update_by_id(id, &patch)
            .await?
            .ok_or_else(|| CatalogError::id_not_found(id))
    }

    pub async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        validate::validate_id(id)?;
        if !self.store.delete_by_id(id).await? {
            return Err(CatalogError::id_not_found(id));
        }
        Ok(())
    }

    /// Probe the store for an existing record with the same name, then the
    /// same url. The checks run independently; whichever hits first names
    /// the conflict.
    async fn check_duplicate(
        &self,
        exclude_id: Option<&str>,
        name: Option<&str>,
        url: Option<&str>,
    ) -> Result<(), CatalogError> {
        if let Some(name) = name {
            if self
                .store
                .find_conflict(ConflictField::Name, name, exclude_id)
                .await?
                .is_some()
            {
                return Err(CatalogError::Conflict(format!(
                    "A GIF named {name} already exists."
                )));
            }
        }
        if let Some(url) = url {
            if let Some(existing) = self
                .store
                .find_conflict(ConflictField::Url, url, exclude_id)
                .await?
            {
                let id = existing.id.as_deref().unwrap_or("unknown");
                return Err(CatalogError::Conflict(format!(
                    "URL is tied to another GIF (id={id})."
                )));
            }
        }
        Ok(())
    }
}
