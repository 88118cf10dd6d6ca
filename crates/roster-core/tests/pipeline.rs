//! Pipeline integration: source through partitioner to store and analytics.

use std::io::Write;

use roster_core::{DatasetError, PipelineContext};
use roster_ingest::{CsvRowSource, RowSource, SourceError};
use roster_model::{DatasetId, PartitionKind, RawRow, RowId};
use roster_store::{MemoryStore, RecordStore};

struct VecSource(Vec<RawRow>);

impl RowSource for VecSource {
    fn fetch(&self, _dataset: &DatasetId) -> Result<Vec<RawRow>, SourceError> {
        Ok(self.0.clone())
    }
}

fn raw(row: u64, name: &str, day: &str, month: &str, year: &str) -> RawRow {
    RawRow {
        row_id: RowId::from_sha256_prefix([row as u8; 32]),
        original_row_number: row,
        name: name.to_string(),
        birth_day: day.to_string(),
        birth_month: month.to_string(),
        birth_year: year.to_string(),
    }
}

fn dataset() -> DatasetId {
    DatasetId::new("jan").unwrap()
}

#[test]
fn run_persists_both_partitions_and_reports() {
    let source = VecSource(vec![
        raw(1, "Ann Lee", "1", "5", "1990"),
        raw(2, "Bob", "2", "6", "1991"),
        raw(3, "Cal", "3", "7", "1992"),
        raw(4, "Dee", "32", "8", "1993"),
        raw(5, "", "4", "9", "1994"),
    ]);
    let context = PipelineContext::new(source).with_store(Box::new(MemoryStore::new()));

    let run = context.run_cleaning(&dataset()).unwrap();

    assert_eq!(run.partition.included_count(), 3);
    assert_eq!(run.partition.excluded_count(), 2);
    assert_eq!(run.report.dataset_sizes.percent_included_vs_original, 60.0);
    assert_eq!(run.report.dataset_sizes.percent_excluded_vs_original, 40.0);

    let summary = run.write_summary.expect("store attached");
    assert_eq!(summary.written(), 5);
    assert_eq!(summary.failed(), 0);

    let store = context.store().expect("store attached");
    assert_eq!(store.count(&dataset(), PartitionKind::Included).unwrap(), 3);
    assert_eq!(store.count(&dataset(), PartitionKind::Excluded).unwrap(), 2);
    let excluded = store.fetch_excluded(&dataset(), 10, 0).unwrap();
    assert_eq!(excluded[0].exclusion_reason, "invalid day (not 1-31)");
    assert_eq!(excluded[1].exclusion_reason, "missing name");
}

#[test]
fn rerunning_replaces_rather_than_appends() {
    let source = VecSource(vec![raw(1, "Ann", "1", "5", "1990")]);
    let context = PipelineContext::new(source).with_store(Box::new(MemoryStore::new()));

    context.run_cleaning(&dataset()).unwrap();
    context.run_cleaning(&dataset()).unwrap();

    let store = context.store().expect("store attached");
    assert_eq!(store.count(&dataset(), PartitionKind::Included).unwrap(), 1);
}

#[test]
fn empty_source_is_an_explicit_no_data_condition() {
    let context = PipelineContext::new(VecSource(Vec::new()));
    match context.run_cleaning(&dataset()) {
        Err(DatasetError::NoData(id)) => assert_eq!(id, dataset()),
        other => panic!("expected NoData, got {other:?}"),
    }
}

#[test]
fn runs_without_a_store_skip_persistence() {
    let context = PipelineContext::new(VecSource(vec![raw(1, "Ann", "1", "5", "1990")]));
    let run = context.run_cleaning(&dataset()).unwrap();
    assert!(run.write_summary.is_none());
}

#[test]
fn csv_source_feeds_the_pipeline_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"firstname,birthday,birthmonth,birthyear\nAnn,1,5,1990\nO'Brien,2,6,1991\n")
        .unwrap();

    let context = PipelineContext::new(CsvRowSource::new(file.path()))
        .with_store(Box::new(MemoryStore::new()));
    let run = context.run_cleaning(&dataset()).unwrap();

    assert_eq!(run.partition.included_count(), 1);
    assert_eq!(run.partition.excluded_count(), 1);
    assert_eq!(
        run.partition.excluded[0].exclusion_reason,
        "special character in name"
    );
    assert_eq!(
        run.report.exclusion_reasons[0].reason,
        "special character in name"
    );

    let rerun = context.run_cleaning(&dataset()).unwrap();
    assert_eq!(rerun.partition, run.partition);
}
