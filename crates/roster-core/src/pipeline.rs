//! End-to-end cleaning pipeline: fetch rows, partition, persist, analyze.
//!
//! The context object carries every collaborator explicitly; the core keeps
//! no global state and no lazily-initialized clients.

use roster_analytics::{AnalyticsEngine, AnalyticsReport};
use roster_ingest::{RowSource, SourceError};
use roster_model::{DatasetId, PartitionOutput};
use roster_store::{BatchWriter, RecordStore, StoreError, WriteSummary};
use thiserror::Error;

use crate::partition::partition_rows;

/// Dataset-level failures. Per-row validation problems are data, not errors,
/// and never appear here.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset {0} has no data rows")]
    NoData(DatasetId),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("record store failure: {0}")]
    Store(#[from] StoreError),
}

/// Result of one cleaning run.
#[derive(Debug, Clone)]
pub struct CleaningRun {
    pub dataset: DatasetId,
    pub partition: PartitionOutput,
    pub report: AnalyticsReport,
    /// Present when a record store was attached; nonzero failures are a
    /// data-integrity gap callers must surface.
    pub write_summary: Option<WriteSummary>,
}

/// Collaborators for a cleaning run, constructed once and injected.
pub struct PipelineContext<S> {
    source: S,
    store: Option<Box<dyn RecordStore>>,
    writer: BatchWriter,
}

impl<S: RowSource> PipelineContext<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: None,
            writer: BatchWriter::new(),
        }
    }

    pub fn with_store(mut self, store: Box<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_writer(mut self, writer: BatchWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn store(&self) -> Option<&dyn RecordStore> {
        self.store.as_deref()
    }

    /// Clean one dataset end to end.
    ///
    /// Replaces any prior partitions for the dataset wholesale. The
    /// partition result and analytics are computed before persistence, so a
    /// degraded store write never changes what the run reports.
    pub fn run_cleaning(&self, dataset: &DatasetId) -> Result<CleaningRun, DatasetError> {
        let rows = self.source.fetch(dataset)?;
        if rows.is_empty() {
            return Err(DatasetError::NoData(dataset.clone()));
        }

        let partition = partition_rows(&rows);

        let write_summary = match &self.store {
            Some(store) => Some(
                self.writer
                    .replace_partitions(store.as_ref(), dataset, &partition)?,
            ),
            None => None,
        };

        let report = AnalyticsEngine::from_partition(&partition).comprehensive_report();

        Ok(CleaningRun {
            dataset: dataset.clone(),
            partition,
            report,
            write_summary,
        })
    }
}
