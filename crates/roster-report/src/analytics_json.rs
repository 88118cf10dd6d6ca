//! Machine-readable analytics payload written alongside the CSV exports.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use roster_analytics::AnalyticsReport;
use roster_model::{DatasetId, PartitionOutput};

use crate::csv_export::{excluded_csv, included_csv};

const REPORT_SCHEMA: &str = "roster-cleaner.analytics-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct AnalyticsPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    dataset_id: String,
    report: &'a AnalyticsReport,
}

/// Write the comprehensive report as pretty JSON, returning the file path.
pub fn write_analytics_json(
    output_dir: &Path,
    dataset: &DatasetId,
    report: &AnalyticsReport,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("analytics_{dataset}.json"));
    let payload = AnalyticsPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        dataset_id: dataset.to_string(),
        report,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}

/// Write both partition CSVs, returning (included, excluded) paths.
pub fn write_partition_csvs(
    output_dir: &Path,
    dataset: &DatasetId,
    partition: &PartitionOutput,
) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(output_dir)?;
    let included_path = output_dir.join(format!("included_{dataset}.csv"));
    let excluded_path = output_dir.join(format!("excluded_{dataset}.csv"));
    std::fs::write(&included_path, included_csv(&partition.included)?)?;
    std::fs::write(&excluded_path, excluded_csv(&partition.excluded)?)?;
    Ok((included_path, excluded_path))
}
