use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use indicatif::ProgressBar;

use roster_core::{CleaningRun, PipelineContext};
use roster_ingest::{CsvRowSource, RetryingSource};
use roster_model::DatasetId;
use roster_report::{write_analytics_json, write_partition_csvs};
use roster_store::{BatchWriter, MemoryStore};

use crate::cli::{CheckArgs, CleanArgs};

/// Everything a finished run produced, for the terminal summary.
pub struct RunResult {
    pub dataset: DatasetId,
    pub run: CleaningRun,
    pub included_csv: Option<PathBuf>,
    pub excluded_csv: Option<PathBuf>,
    pub analytics_json: Option<PathBuf>,
}

impl RunResult {
    /// Rows that failed even the row-by-row store fallback.
    pub fn dropped_rows(&self) -> usize {
        self.run.write_summary.map_or(0, |summary| summary.failed())
    }
}

pub fn run_clean(args: &CleanArgs) -> anyhow::Result<RunResult> {
    let dataset = resolve_dataset_id(args.dataset_id.as_deref(), &args.input)?;
    let source = RetryingSource::new(CsvRowSource::new(&args.input));

    let mut context =
        PipelineContext::new(source).with_writer(BatchWriter::new().with_batch_size(args.batch_size));
    if !args.no_store {
        context = context.with_store(Box::new(MemoryStore::new()));
    }

    let run = with_spinner(&dataset, || context.run_cleaning(&dataset))
        .with_context(|| format!("cleaning dataset {dataset}"))?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let (included_csv, excluded_csv) = write_partition_csvs(&output_dir, &dataset, &run.partition)
        .with_context(|| format!("writing partition CSVs to {}", output_dir.display()))?;
    let analytics_json = write_analytics_json(&output_dir, &dataset, &run.report)
        .with_context(|| format!("writing analytics report to {}", output_dir.display()))?;

    Ok(RunResult {
        dataset,
        run,
        included_csv: Some(included_csv),
        excluded_csv: Some(excluded_csv),
        analytics_json: Some(analytics_json),
    })
}

pub fn run_check(args: &CheckArgs) -> anyhow::Result<RunResult> {
    let dataset = resolve_dataset_id(args.dataset_id.as_deref(), &args.input)?;
    let source = RetryingSource::new(CsvRowSource::new(&args.input));
    let context = PipelineContext::new(source);

    let run = with_spinner(&dataset, || context.run_cleaning(&dataset))
        .with_context(|| format!("checking dataset {dataset}"))?;

    Ok(RunResult {
        dataset,
        run,
        included_csv: None,
        excluded_csv: None,
        analytics_json: None,
    })
}

fn with_spinner<T, E>(
    dataset: &DatasetId,
    work: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("cleaning {dataset}"));
    spinner.enable_steady_tick(Duration::from_millis(120));
    let result = work();
    spinner.finish_and_clear();
    result
}

fn resolve_dataset_id(explicit: Option<&str>, input: &Path) -> anyhow::Result<DatasetId> {
    match explicit {
        Some(value) => Ok(DatasetId::new(value)?),
        None => {
            let stem = input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("roster");
            DatasetId::sanitize(stem)
                .with_context(|| format!("cannot derive a dataset id from {}", input.display()))
        }
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("output")
}
