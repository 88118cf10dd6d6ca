//! Single-pass partitioning of one batch of raw rows.

use roster_model::{PartitionOutput, RawRow};
use roster_validate::{RowOutcome, clean_row};

/// Rows between progress signals.
const PROGRESS_INTERVAL: usize = 10_000;

/// Partition one batch of rows into included and excluded records.
///
/// Source order is preserved within each partition. The pass holds no
/// cross-batch state: callers slicing a large dataset invoke this once per
/// batch and concatenate the outputs. Progress is reported through tracing
/// only and never affects the output.
pub fn partition_rows(rows: &[RawRow]) -> PartitionOutput {
    let mut output = PartitionOutput {
        original_count: rows.len(),
        ..PartitionOutput::default()
    };

    tracing::info!(rows = rows.len(), "cleaning batch");
    for (idx, row) in rows.iter().enumerate() {
        match clean_row(row) {
            RowOutcome::Included(record) => output.included.push(record),
            RowOutcome::Excluded(record) => output.excluded.push(record),
        }
        if (idx + 1) % PROGRESS_INTERVAL == 0 {
            tracing::info!(processed = idx + 1, total = rows.len(), "cleaning progress");
        }
    }
    tracing::info!(
        included = output.included.len(),
        excluded = output.excluded.len(),
        "cleaning complete"
    );

    output
}
