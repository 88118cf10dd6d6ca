use roster_model::{DatasetId, RawRow};

use crate::error::SourceError;

/// Contract for anything that can produce the raw rows of a dataset.
///
/// Implementations return data rows only (header already stripped), in
/// source order, with `original_row_number` assigned 1-based and a
/// deterministic `row_id` so reruns of the same dataset yield identical
/// identity.
pub trait RowSource {
    fn fetch(&self, dataset: &DatasetId) -> Result<Vec<RawRow>, SourceError>;
}
