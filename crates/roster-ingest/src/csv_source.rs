#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use sha2::Digest;

use roster_model::{DatasetId, RawRow, RowId};

use crate::error::SourceError;
use crate::source::RowSource;

/// Column positions in the source sheet. The core never branches on header
/// names; position-to-field mapping happens here, once, at the boundary.
const NAME_CELL: usize = 0;
const DAY_CELL: usize = 1;
const MONTH_CELL: usize = 2;
const YEAR_CELL: usize = 3;

/// Row source backed by a spreadsheet export on disk (one CSV per dataset).
#[derive(Debug, Clone)]
pub struct CsvRowSource {
    path: PathBuf,
}

impl CsvRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for CsvRowSource {
    fn fetch(&self, dataset: &DatasetId) -> Result<Vec<RawRow>, SourceError> {
        read_raw_rows(&self.path, dataset)
    }
}

fn derive_row_id(dataset: &DatasetId, row_number: u64) -> RowId {
    // Deterministic: sha256("<dataset>\0<row_number>"), first 16 bytes.
    let mut hasher = sha2::Sha256::new();
    hasher.update(dataset.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(row_number.to_string().as_bytes());
    RowId::from_sha256_prefix(hasher.finalize().into())
}

/// Read the data rows of a roster CSV.
///
/// The header row is consumed and discarded. Cells are kept untrimmed;
/// rows shorter than four cells are padded with empty strings and extra
/// trailing cells are ignored.
pub fn read_raw_rows(csv_path: &Path, dataset: &DatasetId) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(csv_path)?;

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row_number = (idx as u64) + 1;
        let cell = |pos: usize| record.get(pos).unwrap_or_default().to_string();

        rows.push(RawRow {
            row_id: derive_row_id(dataset, row_number),
            original_row_number: row_number,
            name: cell(NAME_CELL),
            birth_day: cell(DAY_CELL),
            birth_month: cell(MONTH_CELL),
            birth_year: cell(YEAR_CELL),
        });
    }

    tracing::debug!(
        dataset = %dataset,
        rows = rows.len(),
        path = %csv_path.display(),
        "read roster csv"
    );
    Ok(rows)
}
