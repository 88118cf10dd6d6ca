#![deny(unsafe_code)]

use std::fmt;

use crate::RowId;

/// One raw row as read from the source, header already stripped.
///
/// Cell text is kept exactly as received (untrimmed, unparsed); cleaning
/// never mutates a raw row, it only derives records from one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawRow {
    pub row_id: RowId,
    /// 1-based position in the source, stable identity back to the sheet.
    pub original_row_number: u64,
    pub name: String,
    pub birth_day: String,
    pub birth_month: String,
    pub birth_year: String,
}

/// A row that passed all four field validations.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IncludedRecord {
    pub row_id: RowId,
    pub original_row_number: u64,
    pub name: String,
    pub birth_day: i64,
    pub birth_month: i64,
    pub birth_year: i64,
}

/// A row that failed at least one validation, with every applicable reason.
///
/// The original_* fields preserve the raw input for audit; a cell that was
/// empty in the source is `None`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExcludedRecord {
    pub row_id: RowId,
    pub original_row_number: u64,
    pub original_name: Option<String>,
    pub original_birth_day: Option<String>,
    pub original_birth_month: Option<String>,
    pub original_birth_year: Option<String>,
    /// Distinct failure reasons in field order, joined with "; ". Never empty.
    pub exclusion_reason: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PartitionKind {
    Included,
    Excluded,
}

impl PartitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionKind::Included => "included",
            PartitionKind::Excluded => "excluded",
        }
    }
}

impl fmt::Display for PartitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The total, disjoint split of one batch of raw rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PartitionOutput {
    pub included: Vec<IncludedRecord>,
    pub excluded: Vec<ExcludedRecord>,
    pub original_count: usize,
}

impl PartitionOutput {
    pub fn included_count(&self) -> usize {
        self.included.len()
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }
}
