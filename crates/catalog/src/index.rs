use std::collections::HashMap;

use indexmap::IndexMap;
use rand::Rng;

use happycat_core::GifRecord;

/// Derived name/tag indexes over one snapshot of the catalog.
///
/// Built by iterating the records once: each record lands in the name index
/// (last write wins on a duplicate name, though the validator keeps
/// duplicates from ever being stored) and in every tag bucket it declares.
/// The index owns no state independent of the records it was built from; it
/// is rebuilt whenever the backing collection changes.
pub struct CatalogIndex {
    records: Vec<GifRecord>,
    by_name: IndexMap<String, usize>,
    by_tag: HashMap<String, Vec<usize>>,
}

impl CatalogIndex {
    pub fn build(records: Vec<GifRecord>) -> Self {
        let mut by_name = IndexMap::with_capacity(records.len());
        let mut by_tag: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            by_name.insert(record.name.clone(), i);
            for tag in &record.tags {
                by_tag.entry(tag.clone()).or_default().push(i);
            }
        }
        Self {
            records,
            by_name,
            by_tag,
        }
    }

    /// Every record in backing-collection order, capped at `cap`.
    pub fn all(&self, cap: usize) -> &[GifRecord] {
        &self.records[..self.records.len().min(cap)]
    }

    /// One uniformly-chosen record; independent draw per call.
    pub fn random(&self) -> Option<&GifRecord> {
        if self.records.is_empty() {
            return None;
        }
        let i = rand::thread_rng().gen_range(0..self.records.len());
        self.records.get(i)
    }

    /// Exact-match lookup on the name index.
    pub fn by_name(&self, name: &str) -> Option<&GifRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// Every record carrying `tag`, in backing-collection order.
    pub fn by_tag(&self, tag: &str) -> Vec<&GifRecord> {
        self.by_tag
            .get(tag)
            .map(|bucket| bucket.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    pub fn records(&self) -> &[GifRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<GifRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
