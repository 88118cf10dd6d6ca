//! Report structure produced by the analytics engine.
//!
//! Field names and nesting are a stable contract consumed by report
//! renderers; recomputed on demand, never persisted.

use roster_model::IncludedRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSizes {
    pub original_row_count: usize,
    pub included_row_count: usize,
    pub excluded_row_count: usize,
    pub percent_included_vs_original: f64,
    pub percent_excluded_vs_original: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniquenessMetrics {
    pub unique_names: usize,
    pub unique_birthday_combinations: usize,
    pub unique_name_year: usize,
    pub unique_name_month: usize,
    pub unique_name_day: usize,
}

/// The six pairwise field combinations checked for duplicates.
///
/// Declaration order doubles as the deterministic tie-break order when two
/// groups have the same member count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PairKey {
    NameDay,
    NameMonth,
    NameYear,
    DayMonth,
    DayYear,
    MonthYear,
}

impl PairKey {
    /// Wire name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PairKey::NameDay => "name_day",
            PairKey::NameMonth => "name_month",
            PairKey::NameYear => "name_year",
            PairKey::DayMonth => "day_month",
            PairKey::DayYear => "day_year",
            PairKey::MonthYear => "month_year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub combination_type: PairKey,
    pub combination_value: String,
    pub count: usize,
    /// Up to 10 sample members for display.
    pub records: Vec<IncludedRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DuplicateAnalysis {
    /// Sum of member counts across retained groups; a record counts once per
    /// key it matches, so this can exceed the included count.
    pub total_duplicate_records: usize,
    pub unique_duplicate_groups: usize,
    /// Top groups by member count, largest first.
    pub duplicate_groups: Vec<DuplicateGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    pub month: i64,
    pub month_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCount {
    pub reason: String,
    pub count: usize,
}

/// Everything the engine computes, bundled for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub dataset_sizes: DatasetSizes,
    pub uniqueness_metrics: UniquenessMetrics,
    pub duplicate_analysis: DuplicateAnalysis,
    pub birth_year_distribution: Vec<YearCount>,
    pub birth_month_distribution: Vec<MonthCount>,
    pub exclusion_reasons: Vec<ReasonCount>,
}

/// Canonical English month name; "Unknown" outside 1-12.
pub fn month_name(month: i64) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
