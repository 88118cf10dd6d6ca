//! Delimited-text export of both partitions.
//!
//! Column names and order match the record field names exactly; renderers
//! and downstream consumers depend on that contract.

use roster_model::{ExcludedRecord, IncludedRecord};

pub const INCLUDED_COLUMNS: [&str; 6] = [
    "row_id",
    "original_row_number",
    "name",
    "birth_day",
    "birth_month",
    "birth_year",
];

pub const EXCLUDED_COLUMNS: [&str; 7] = [
    "row_id",
    "original_row_number",
    "original_name",
    "original_birth_day",
    "original_birth_month",
    "original_birth_year",
    "exclusion_reason",
];

pub fn included_csv(records: &[IncludedRecord]) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(INCLUDED_COLUMNS)?;
    for record in records {
        writer.write_record([
            record.row_id.to_hex(),
            record.original_row_number.to_string(),
            record.name.clone(),
            record.birth_day.to_string(),
            record.birth_month.to_string(),
            record.birth_year.to_string(),
        ])?;
    }
    Ok(writer.into_inner()?)
}

pub fn excluded_csv(records: &[ExcludedRecord]) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXCLUDED_COLUMNS)?;
    for record in records {
        writer.write_record([
            record.row_id.to_hex(),
            record.original_row_number.to_string(),
            record.original_name.clone().unwrap_or_default(),
            record.original_birth_day.clone().unwrap_or_default(),
            record.original_birth_month.clone().unwrap_or_default(),
            record.original_birth_year.clone().unwrap_or_default(),
            record.exclusion_reason.clone(),
        ])?;
    }
    Ok(writer.into_inner()?)
}
