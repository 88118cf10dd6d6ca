use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use roster_model::{DatasetId, ExcludedRecord, IncludedRecord, PartitionKind};

use crate::error::StoreError;
use crate::store::RecordStore;

/// Reference `RecordStore` keeping both partitions in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Partitions>,
}

#[derive(Debug, Default)]
struct Partitions {
    included: BTreeMap<DatasetId, Vec<IncludedRecord>>,
    excluded: BTreeMap<DatasetId, Vec<ExcludedRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Partitions>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("partition lock poisoned".to_string()))
    }
}

impl RecordStore for MemoryStore {
    fn create_partitions(&self, dataset: &DatasetId) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.included.entry(dataset.clone()).or_default();
        inner.excluded.entry(dataset.clone()).or_default();
        Ok(())
    }

    fn clear_partition(&self, dataset: &DatasetId, kind: PartitionKind) -> Result<(), StoreError> {
        tracing::debug!(dataset = %dataset, partition = %kind, "clearing partition");
        let mut inner = self.lock()?;
        match kind {
            PartitionKind::Included => {
                inner.included.insert(dataset.clone(), Vec::new());
            }
            PartitionKind::Excluded => {
                inner.excluded.insert(dataset.clone(), Vec::new());
            }
        }
        Ok(())
    }

    fn insert_included(
        &self,
        dataset: &DatasetId,
        records: &[IncludedRecord],
    ) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner
            .included
            .entry(dataset.clone())
            .or_default()
            .extend_from_slice(records);
        Ok(())
    }

    fn insert_excluded(
        &self,
        dataset: &DatasetId,
        records: &[ExcludedRecord],
    ) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner
            .excluded
            .entry(dataset.clone())
            .or_default()
            .extend_from_slice(records);
        Ok(())
    }

    fn fetch_included(
        &self,
        dataset: &DatasetId,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<IncludedRecord>, StoreError> {
        let inner = self.lock()?;
        Ok(page(inner.included.get(dataset), limit, offset))
    }

    fn fetch_excluded(
        &self,
        dataset: &DatasetId,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ExcludedRecord>, StoreError> {
        let inner = self.lock()?;
        Ok(page(inner.excluded.get(dataset), limit, offset))
    }

    fn count(&self, dataset: &DatasetId, kind: PartitionKind) -> Result<usize, StoreError> {
        let inner = self.lock()?;
        let count = match kind {
            PartitionKind::Included => inner.included.get(dataset).map_or(0, Vec::len),
            PartitionKind::Excluded => inner.excluded.get(dataset).map_or(0, Vec::len),
        };
        Ok(count)
    }
}

/// A dataset that was never cleaned reads as empty, not as an error.
fn page<R: Clone>(records: Option<&Vec<R>>, limit: usize, offset: usize) -> Vec<R> {
    records
        .map(|rows| rows.iter().skip(offset).take(limit).cloned().collect())
        .unwrap_or_default()
}
