//! Row cleaning: apply every field rule to one raw row and produce exactly
//! one of an included or excluded record.

use roster_model::{ExcludedRecord, IncludedRecord, RawRow};

use crate::rules::{
    validate_day_range, validate_month_range, validate_name, validate_numeric,
    validate_year_range,
};

/// Outcome of cleaning a single raw row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Included(IncludedRecord),
    Excluded(ExcludedRecord),
}

/// Clean one raw row.
///
/// All four fields are validated independently so every applicable reason is
/// collected, in field order (name, day, month, year). Identity fields pass
/// through untouched; the cleaner never renumbers a row.
pub fn clean_row(row: &RawRow) -> RowOutcome {
    let mut reasons: Vec<String> = Vec::new();

    let name = record_reason(validate_name(&row.name), &mut reasons);
    let day = numeric_in_range(&row.birth_day, "birth_day", validate_day_range, &mut reasons);
    let month = numeric_in_range(
        &row.birth_month,
        "birth_month",
        validate_month_range,
        &mut reasons,
    );
    let year = numeric_in_range(
        &row.birth_year,
        "birth_year",
        validate_year_range,
        &mut reasons,
    );

    match (name, day, month, year) {
        (Some(name), Some(birth_day), Some(birth_month), Some(birth_year))
            if reasons.is_empty() =>
        {
            RowOutcome::Included(IncludedRecord {
                row_id: row.row_id,
                original_row_number: row.original_row_number,
                name: name.to_string(),
                birth_day,
                birth_month,
                birth_year,
            })
        }
        _ => RowOutcome::Excluded(ExcludedRecord {
            row_id: row.row_id,
            original_row_number: row.original_row_number,
            original_name: original_cell(&row.name),
            original_birth_day: original_cell(&row.birth_day),
            original_birth_month: original_cell(&row.birth_month),
            original_birth_year: original_cell(&row.birth_year),
            exclusion_reason: reasons.join("; "),
        }),
    }
}

/// Parse a numeric cell, then check its range. A parse failure short-circuits
/// the range check for this field only.
fn numeric_in_range(
    raw: &str,
    field: &str,
    range: impl Fn(i64) -> Result<(), String>,
    reasons: &mut Vec<String>,
) -> Option<i64> {
    let value = record_reason(validate_numeric(raw, field), reasons)?;
    record_reason(range(value), reasons)?;
    Some(value)
}

fn record_reason<T>(result: Result<T, String>, reasons: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(reason) => {
            reasons.push(reason);
            None
        }
    }
}

/// Raw cell text preserved for audit; empty cells become None.
fn original_cell(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
