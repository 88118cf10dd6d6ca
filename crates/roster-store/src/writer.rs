//! Batch write policy: replace-all semantics, bounded retry with backoff,
//! and a row-by-row fallback so one malformed row cannot sink its batch.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use roster_model::{DatasetId, PartitionKind, PartitionOutput};

use crate::error::StoreError;
use crate::store::RecordStore;

/// What actually landed in the store. Failed rows were dropped after the
/// per-row fallback also failed; any nonzero failure count is a
/// data-integrity gap the caller must surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WriteSummary {
    pub included_written: usize,
    pub included_failed: usize,
    pub excluded_written: usize,
    pub excluded_failed: usize,
}

impl WriteSummary {
    pub fn written(&self) -> usize {
        self.included_written + self.excluded_written
    }

    pub fn failed(&self) -> usize {
        self.included_failed + self.excluded_failed
    }
}

/// Writes a partition output through a `RecordStore` in parallel batches.
#[derive(Debug, Clone)]
pub struct BatchWriter {
    batch_size: usize,
    max_attempts: u32,
    base_delay: Duration,
    max_workers: usize,
}

impl Default for BatchWriter {
    fn default() -> Self {
        Self {
            batch_size: 10_000,
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
            max_workers: 5,
        }
    }
}

impl BatchWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    /// Replace both partitions of a dataset with the given output.
    ///
    /// Failures creating or clearing a partition are fatal (the store is
    /// effectively unreachable); failures inserting degrade per batch and
    /// then per row, and are reported in the summary instead.
    pub fn replace_partitions(
        &self,
        store: &dyn RecordStore,
        dataset: &DatasetId,
        partition: &PartitionOutput,
    ) -> Result<WriteSummary, StoreError> {
        store.create_partitions(dataset)?;

        store.clear_partition(dataset, PartitionKind::Included)?;
        let (included_written, included_failed) =
            self.write_batches(&partition.included, &|batch| {
                store.insert_included(dataset, batch)
            });

        store.clear_partition(dataset, PartitionKind::Excluded)?;
        let (excluded_written, excluded_failed) =
            self.write_batches(&partition.excluded, &|batch| {
                store.insert_excluded(dataset, batch)
            });

        let summary = WriteSummary {
            included_written,
            included_failed,
            excluded_written,
            excluded_failed,
        };
        if summary.failed() > 0 {
            tracing::error!(
                dataset = %dataset,
                written = summary.written(),
                failed = summary.failed(),
                "partition write completed with dropped rows"
            );
        } else {
            tracing::info!(
                dataset = %dataset,
                written = summary.written(),
                "partition write complete"
            );
        }
        Ok(summary)
    }

    /// Fan batches out over a bounded pool of scoped worker threads.
    fn write_batches<R: Sync>(
        &self,
        records: &[R],
        insert: &(impl Fn(&[R]) -> Result<(), StoreError> + Sync),
    ) -> (usize, usize) {
        if records.is_empty() {
            return (0, 0);
        }
        let batches: Vec<&[R]> = records.chunks(self.batch_size).collect();
        let workers = self.max_workers.min(batches.len());

        let next = AtomicUsize::new(0);
        let written = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);
        std::thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| {
                    loop {
                        let idx = next.fetch_add(1, Ordering::Relaxed);
                        let Some(&batch) = batches.get(idx) else {
                            break;
                        };
                        let (ok, bad) = self.insert_with_retry(idx, batch, insert);
                        written.fetch_add(ok, Ordering::Relaxed);
                        failed.fetch_add(bad, Ordering::Relaxed);
                    }
                });
            }
        });
        (written.load(Ordering::Relaxed), failed.load(Ordering::Relaxed))
    }

    fn insert_with_retry<R>(
        &self,
        batch_num: usize,
        batch: &[R],
        insert: &(impl Fn(&[R]) -> Result<(), StoreError> + Sync),
    ) -> (usize, usize) {
        for attempt in 1..=self.max_attempts {
            match insert(batch) {
                Ok(()) => return (batch.len(), 0),
                Err(error) if attempt < self.max_attempts => {
                    let delay = self.base_delay * attempt;
                    tracing::warn!(
                        batch = batch_num,
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %error,
                        "batch insert failed, retrying"
                    );
                    std::thread::sleep(delay);
                }
                Err(error) => {
                    tracing::warn!(
                        batch = batch_num,
                        error = %error,
                        "batch insert exhausted retries, falling back to row-by-row"
                    );
                }
            }
        }

        let mut written = 0;
        let mut failed = 0;
        for (offset, row) in batch.chunks(1).enumerate() {
            match insert(row) {
                Ok(()) => written += 1,
                Err(error) => {
                    tracing::error!(
                        batch = batch_num,
                        row = offset,
                        error = %error,
                        "row insert failed, dropping row"
                    );
                    failed += 1;
                }
            }
        }
        (written, failed)
    }
}
