//! Aggregate analytics over one partitioned dataset.
//!
//! Every operation is a pure function of `(included, excluded,
//! original_count)` and degrades to its zero/empty form on empty input.
//! Computation is in-memory over the resident collections; callers with
//! collections too large to hold are expected to push the same aggregations
//! into their store adapter instead.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use roster_model::{ExcludedRecord, IncludedRecord, PartitionOutput};

use crate::report::{
    AnalyticsReport, DatasetSizes, DuplicateAnalysis, DuplicateGroup, MonthCount, PairKey,
    ReasonCount, UniquenessMetrics, YearCount, month_name,
};

/// Sample members reported per duplicate group.
const MAX_GROUP_SAMPLES: usize = 10;
/// Duplicate groups reported, largest first.
const MAX_REPORTED_GROUPS: usize = 50;

pub struct AnalyticsEngine<'a> {
    included: &'a [IncludedRecord],
    excluded: &'a [ExcludedRecord],
    original_count: usize,
}

impl<'a> AnalyticsEngine<'a> {
    pub fn new(
        included: &'a [IncludedRecord],
        excluded: &'a [ExcludedRecord],
        original_count: usize,
    ) -> Self {
        Self {
            included,
            excluded,
            original_count,
        }
    }

    pub fn from_partition(partition: &'a PartitionOutput) -> Self {
        Self::new(
            &partition.included,
            &partition.excluded,
            partition.original_count,
        )
    }

    pub fn dataset_sizes(&self) -> DatasetSizes {
        let included = self.included.len();
        let excluded = self.excluded.len();
        DatasetSizes {
            original_row_count: self.original_count,
            included_row_count: included,
            excluded_row_count: excluded,
            percent_included_vs_original: percent_of(included, self.original_count),
            percent_excluded_vs_original: percent_of(excluded, self.original_count),
        }
    }

    pub fn uniqueness_metrics(&self) -> UniquenessMetrics {
        let mut names: HashSet<&str> = HashSet::new();
        let mut birthdays: BTreeSet<(i64, i64, i64)> = BTreeSet::new();
        let mut name_year: BTreeSet<(&str, i64)> = BTreeSet::new();
        let mut name_month: BTreeSet<(&str, i64)> = BTreeSet::new();
        let mut name_day: BTreeSet<(&str, i64)> = BTreeSet::new();

        for record in self.included {
            names.insert(&record.name);
            birthdays.insert((record.birth_day, record.birth_month, record.birth_year));
            name_year.insert((&record.name, record.birth_year));
            name_month.insert((&record.name, record.birth_month));
            name_day.insert((&record.name, record.birth_day));
        }

        UniquenessMetrics {
            unique_names: names.len(),
            unique_birthday_combinations: birthdays.len(),
            unique_name_year: name_year.len(),
            unique_name_month: name_month.len(),
            unique_name_day: name_day.len(),
        }
    }

    pub fn duplicate_analysis(&self) -> DuplicateAnalysis {
        let mut groups: BTreeMap<(PairKey, String), Vec<&IncludedRecord>> = BTreeMap::new();
        for record in self.included {
            for (kind, value) in pair_keys(record) {
                groups.entry((kind, value)).or_default().push(record);
            }
        }

        let mut retained: Vec<DuplicateGroup> = groups
            .into_iter()
            .filter(|(_, members)| members.len() >= 2)
            .map(|((kind, value), members)| DuplicateGroup {
                combination_type: kind,
                combination_value: value,
                count: members.len(),
                records: members
                    .iter()
                    .take(MAX_GROUP_SAMPLES)
                    .map(|record| (*record).clone())
                    .collect(),
            })
            .collect();

        let total_duplicate_records = retained.iter().map(|group| group.count).sum();
        let unique_duplicate_groups = retained.len();

        // Stable sort over BTreeMap order: ties keep (type, value) ascending.
        retained.sort_by(|a, b| b.count.cmp(&a.count));
        retained.truncate(MAX_REPORTED_GROUPS);

        DuplicateAnalysis {
            total_duplicate_records,
            unique_duplicate_groups,
            duplicate_groups: retained,
        }
    }

    pub fn birth_year_distribution(&self) -> Vec<YearCount> {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for record in self.included {
            *counts.entry(record.birth_year).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect()
    }

    pub fn birth_month_distribution(&self) -> Vec<MonthCount> {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for record in self.included {
            *counts.entry(record.birth_month).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(month, count)| MonthCount {
                month,
                month_name: month_name(month).to_string(),
                count,
            })
            .collect()
    }

    /// Tally individual reason codes across the excluded set. A record with
    /// three reasons contributes to three counters.
    pub fn exclusion_reasons(&self) -> Vec<ReasonCount> {
        let mut summary: Vec<ReasonCount> = Vec::new();
        for record in self.excluded {
            for reason in record.exclusion_reason.split(';') {
                let reason = reason.trim();
                if reason.is_empty() {
                    continue;
                }
                match summary.iter_mut().find(|entry| entry.reason == reason) {
                    Some(entry) => entry.count += 1,
                    None => summary.push(ReasonCount {
                        reason: reason.to_string(),
                        count: 1,
                    }),
                }
            }
        }
        // Stable sort: ties keep first-encountered order.
        summary.sort_by(|a, b| b.count.cmp(&a.count));
        summary
    }

    pub fn comprehensive_report(&self) -> AnalyticsReport {
        AnalyticsReport {
            dataset_sizes: self.dataset_sizes(),
            uniqueness_metrics: self.uniqueness_metrics(),
            duplicate_analysis: self.duplicate_analysis(),
            birth_year_distribution: self.birth_year_distribution(),
            birth_month_distribution: self.birth_month_distribution(),
            exclusion_reasons: self.exclusion_reasons(),
        }
    }
}

fn percent_of(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn pair_keys(record: &IncludedRecord) -> [(PairKey, String); 6] {
    let name = &record.name;
    let (day, month, year) = (record.birth_day, record.birth_month, record.birth_year);
    [
        (PairKey::NameDay, format!("{name}|{day}")),
        (PairKey::NameMonth, format!("{name}|{month}")),
        (PairKey::NameYear, format!("{name}|{year}")),
        (PairKey::DayMonth, format!("{day}|{month}")),
        (PairKey::DayYear, format!("{day}|{year}")),
        (PairKey::MonthYear, format!("{month}|{year}")),
    ]
}

#[cfg(test)]
mod tests {
    use roster_model::RowId;

    use super::*;

    fn included(row: u64, name: &str, day: i64, month: i64, year: i64) -> IncludedRecord {
        IncludedRecord {
            row_id: RowId::from_sha256_prefix([row as u8; 32]),
            original_row_number: row,
            name: name.to_string(),
            birth_day: day,
            birth_month: month,
            birth_year: year,
        }
    }

    fn excluded(row: u64, reason: &str) -> ExcludedRecord {
        ExcludedRecord {
            row_id: RowId::from_sha256_prefix([row as u8; 32]),
            original_row_number: row,
            original_name: None,
            original_birth_day: None,
            original_birth_month: None,
            original_birth_year: None,
            exclusion_reason: reason.to_string(),
        }
    }

    #[test]
    fn empty_dataset_degrades_to_zeroes() {
        let engine = AnalyticsEngine::new(&[], &[], 0);
        let report = engine.comprehensive_report();

        assert_eq!(report.dataset_sizes.percent_included_vs_original, 0.0);
        assert_eq!(report.dataset_sizes.percent_excluded_vs_original, 0.0);
        assert_eq!(report.uniqueness_metrics, UniquenessMetrics::default());
        assert_eq!(report.duplicate_analysis.total_duplicate_records, 0);
        assert!(report.duplicate_analysis.duplicate_groups.is_empty());
        assert!(report.birth_year_distribution.is_empty());
        assert!(report.birth_month_distribution.is_empty());
        assert!(report.exclusion_reasons.is_empty());
    }

    #[test]
    fn dataset_sizes_round_to_two_decimals() {
        let records = vec![
            included(1, "Ann", 1, 5, 1990),
            included(2, "Bob", 2, 6, 1991),
        ];
        let rejects = vec![excluded(3, "missing name")];
        let engine = AnalyticsEngine::new(&records, &rejects, 3);
        let sizes = engine.dataset_sizes();

        assert_eq!(sizes.original_row_count, 3);
        assert_eq!(sizes.included_row_count, 2);
        assert_eq!(sizes.excluded_row_count, 1);
        assert_eq!(sizes.percent_included_vs_original, 66.67);
        assert_eq!(sizes.percent_excluded_vs_original, 33.33);
    }

    #[test]
    fn uniqueness_counts_distinct_values_and_pairs() {
        let records = vec![
            included(1, "Ann", 1, 5, 1990),
            included(2, "Ann", 1, 5, 1990),
            included(3, "Ann", 2, 5, 1991),
            included(4, "Bob", 2, 6, 1991),
        ];
        let engine = AnalyticsEngine::new(&records, &[], 4);
        let metrics = engine.uniqueness_metrics();

        assert_eq!(metrics.unique_names, 2);
        assert_eq!(metrics.unique_birthday_combinations, 3);
        assert_eq!(metrics.unique_name_year, 3);
        assert_eq!(metrics.unique_name_month, 2);
        assert_eq!(metrics.unique_name_day, 3);
    }

    #[test]
    fn duplicate_groups_require_two_members() {
        let records = vec![
            included(1, "Ann", 1, 5, 1990),
            included(2, "Ann", 1, 5, 1990),
            included(3, "Bob", 2, 6, 1991),
        ];
        let engine = AnalyticsEngine::new(&records, &[], 3);
        let analysis = engine.duplicate_analysis();

        // The identical Ann rows collide on all six keys; Bob matches none.
        assert_eq!(analysis.unique_duplicate_groups, 6);
        assert_eq!(analysis.total_duplicate_records, 12);

        let name_day = analysis
            .duplicate_groups
            .iter()
            .find(|group| group.combination_type == PairKey::NameDay)
            .expect("name_day group");
        assert_eq!(name_day.combination_value, "Ann|1");
        assert_eq!(name_day.count, 2);
        assert!(
            analysis
                .duplicate_groups
                .iter()
                .all(|group| !group.combination_value.contains("Bob"))
        );
    }

    #[test]
    fn duplicate_groups_sort_by_count_then_key() {
        let records = vec![
            included(1, "Ann", 1, 5, 1990),
            included(2, "Ann", 1, 6, 1991),
            included(3, "Ann", 1, 7, 1992),
            included(4, "Bob", 2, 8, 1993),
            included(5, "Bob", 3, 8, 1993),
        ];
        let engine = AnalyticsEngine::new(&records, &[], 5);
        let analysis = engine.duplicate_analysis();

        // Ann|1 name_day triple first, then the two-member groups in
        // (type, value) order.
        assert_eq!(analysis.duplicate_groups[0].count, 3);
        assert_eq!(analysis.duplicate_groups[0].combination_value, "Ann|1");
        let two_member_types: Vec<PairKey> = analysis.duplicate_groups[1..]
            .iter()
            .map(|group| group.combination_type)
            .collect();
        assert_eq!(
            two_member_types,
            vec![PairKey::NameMonth, PairKey::NameYear, PairKey::MonthYear]
        );
    }

    #[test]
    fn duplicate_group_samples_cap_at_ten() {
        let records: Vec<IncludedRecord> = (1..=15)
            .map(|row| included(row, "Ann", 1, 5, 1990))
            .collect();
        let engine = AnalyticsEngine::new(&records, &[], 15);
        let analysis = engine.duplicate_analysis();

        assert_eq!(analysis.duplicate_groups[0].count, 15);
        assert_eq!(analysis.duplicate_groups[0].records.len(), 10);
    }

    #[test]
    fn distributions_sort_ascending() {
        let records = vec![
            included(1, "Ann", 1, 12, 1991),
            included(2, "Bob", 2, 1, 1990),
            included(3, "Cal", 3, 12, 1991),
        ];
        let engine = AnalyticsEngine::new(&records, &[], 3);

        let years = engine.birth_year_distribution();
        assert_eq!(
            years,
            vec![
                YearCount {
                    year: 1990,
                    count: 1
                },
                YearCount {
                    year: 1991,
                    count: 2
                },
            ]
        );

        let months = engine.birth_month_distribution();
        assert_eq!(months[0].month, 1);
        assert_eq!(months[0].month_name, "January");
        assert_eq!(months[1].month, 12);
        assert_eq!(months[1].month_name, "December");
        assert_eq!(months[1].count, 2);
    }

    #[test]
    fn exclusion_reasons_tally_individual_codes() {
        let rejects = vec![
            excluded(1, "missing name; invalid birth_day (not numeric)"),
            excluded(2, "missing name"),
        ];
        let engine = AnalyticsEngine::new(&[], &rejects, 2);
        let summary = engine.exclusion_reasons();

        assert_eq!(
            summary,
            vec![
                ReasonCount {
                    reason: "missing name".to_string(),
                    count: 2
                },
                ReasonCount {
                    reason: "invalid birth_day (not numeric)".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn exclusion_reason_ties_keep_first_encountered_order() {
        let rejects = vec![
            excluded(1, "name too short"),
            excluded(2, "missing birth_year"),
            excluded(3, "name too short; missing birth_year"),
        ];
        let engine = AnalyticsEngine::new(&[], &rejects, 3);
        let summary = engine.exclusion_reasons();

        assert_eq!(summary[0].reason, "name too short");
        assert_eq!(summary[1].reason, "missing birth_year");
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[1].count, 2);
    }
}
