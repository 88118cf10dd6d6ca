use roster_model::{DatasetId, ExcludedRecord, IncludedRecord, PartitionKind};

use crate::error::StoreError;

/// Contract a record store adapter must meet.
///
/// Partitions are keyed by `(dataset, kind)`. Methods take `&self` so one
/// adapter can serve concurrent batch writers; implementations own their
/// interior synchronization.
pub trait RecordStore: Send + Sync {
    /// Ensure both partitions exist for the dataset.
    fn create_partitions(&self, dataset: &DatasetId) -> Result<(), StoreError>;

    /// Drop all records of one partition. Part of the replace-all write path.
    fn clear_partition(&self, dataset: &DatasetId, kind: PartitionKind) -> Result<(), StoreError>;

    fn insert_included(
        &self,
        dataset: &DatasetId,
        records: &[IncludedRecord],
    ) -> Result<(), StoreError>;

    fn insert_excluded(
        &self,
        dataset: &DatasetId,
        records: &[ExcludedRecord],
    ) -> Result<(), StoreError>;

    /// Page through a partition in insertion order.
    fn fetch_included(
        &self,
        dataset: &DatasetId,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<IncludedRecord>, StoreError>;

    fn fetch_excluded(
        &self,
        dataset: &DatasetId,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ExcludedRecord>, StoreError>;

    fn count(&self, dataset: &DatasetId, kind: PartitionKind) -> Result<usize, StoreError>;
}
