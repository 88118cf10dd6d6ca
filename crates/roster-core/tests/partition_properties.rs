//! Property tests for the partitioner: totality, disjointness, reason
//! completeness, and idempotence over arbitrary cell text.

use std::collections::HashSet;

use proptest::prelude::*;

use roster_core::partition_rows;
use roster_model::{RawRow, RowId};
use roster_validate::{
    validate_day_range, validate_month_range, validate_name, validate_numeric,
    validate_year_range,
};

fn row_id(idx: usize) -> RowId {
    let mut digest = [0u8; 32];
    digest[0] = (idx >> 8) as u8;
    digest[1] = idx as u8;
    RowId::from_sha256_prefix(digest)
}

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z ]{0,8}",
        "[0-9]{1,4}",
        "-?[0-9]{1,2}\\.[0-9]",
        Just(String::new()),
        "[!-~]{1,6}",
    ]
}

fn raw_rows() -> impl Strategy<Value = Vec<RawRow>> {
    prop::collection::vec((cell(), cell(), cell(), cell()), 0..40).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(idx, (name, day, month, year))| RawRow {
                row_id: row_id(idx),
                original_row_number: idx as u64 + 1,
                name,
                birth_day: day,
                birth_month: month,
                birth_year: year,
            })
            .collect()
    })
}

/// Independent per-field validation pass, used to cross-check the cleaner.
fn expected_reasons(row: &RawRow) -> Vec<String> {
    let mut reasons = Vec::new();
    if let Err(reason) = validate_name(&row.name) {
        reasons.push(reason);
    }
    for (raw, field, range) in [
        (
            &row.birth_day,
            "birth_day",
            validate_day_range as fn(i64) -> Result<(), String>,
        ),
        (&row.birth_month, "birth_month", validate_month_range),
        (&row.birth_year, "birth_year", validate_year_range),
    ] {
        match validate_numeric(raw, field) {
            Ok(value) => {
                if let Err(reason) = range(value) {
                    reasons.push(reason);
                }
            }
            Err(reason) => reasons.push(reason),
        }
    }
    reasons
}

proptest! {
    #[test]
    fn partition_is_total_and_disjoint(rows in raw_rows()) {
        let output = partition_rows(&rows);

        prop_assert_eq!(output.included.len() + output.excluded.len(), rows.len());

        let mut seen: HashSet<RowId> = HashSet::new();
        for id in output
            .included
            .iter()
            .map(|r| r.row_id)
            .chain(output.excluded.iter().map(|r| r.row_id))
        {
            prop_assert!(seen.insert(id), "row id appears in both partitions");
        }
        let input_ids: HashSet<RowId> = rows.iter().map(|r| r.row_id).collect();
        prop_assert_eq!(seen, input_ids);
    }

    #[test]
    fn excluded_reasons_match_an_independent_pass(rows in raw_rows()) {
        let output = partition_rows(&rows);

        for record in &output.excluded {
            let row = rows
                .iter()
                .find(|r| r.row_id == record.row_id)
                .expect("excluded record maps back to an input row");
            let expected = expected_reasons(row);
            prop_assert!(!expected.is_empty());
            prop_assert_eq!(&record.exclusion_reason, &expected.join("; "));
        }
        for record in &output.included {
            let row = rows
                .iter()
                .find(|r| r.row_id == record.row_id)
                .expect("included record maps back to an input row");
            prop_assert!(expected_reasons(row).is_empty());
        }
    }

    #[test]
    fn rerunning_partition_is_byte_identical(rows in raw_rows()) {
        let first = partition_rows(&rows);
        let second = partition_rows(&rows);

        prop_assert_eq!(&first, &second);

        let first_bytes = serde_json::to_vec(&first).expect("serialize partition");
        let second_bytes = serde_json::to_vec(&second).expect("serialize partition");
        prop_assert_eq!(first_bytes, second_bytes);
    }
}
