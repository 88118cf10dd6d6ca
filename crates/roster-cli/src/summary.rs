use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_analytics::AnalyticsReport;

use crate::commands::RunResult;

/// Duplicate groups and exclusion reasons shown in the terminal tables.
const MAX_SUMMARY_ROWS: usize = 10;

pub fn print_summary(result: &RunResult) {
    println!("Dataset: {}", result.dataset);
    if let Some(path) = &result.included_csv {
        println!("Included CSV: {}", path.display());
    }
    if let Some(path) = &result.excluded_csv {
        println!("Excluded CSV: {}", path.display());
    }
    if let Some(path) = &result.analytics_json {
        println!("Analytics report: {}", path.display());
    }

    print_sizes_table(&result.run.report);
    print_exclusion_table(&result.run.report);
    print_duplicate_table(&result.run.report);

    if result.dropped_rows() > 0 {
        eprintln!(
            "WARNING: {} row(s) could not be persisted and were dropped from the store; \
             the CSV exports above remain complete.",
            result.dropped_rows()
        );
    }
}

fn print_sizes_table(report: &AnalyticsReport) {
    let sizes = &report.dataset_sizes;
    let uniqueness = &report.uniqueness_metrics;

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Original rows"),
        Cell::new(sizes.original_row_count),
    ]);
    table.add_row(vec![
        Cell::new("Included rows"),
        count_cell(sizes.included_row_count, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Excluded rows"),
        count_cell(sizes.excluded_row_count, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Included vs original"),
        Cell::new(format!("{:.2}%", sizes.percent_included_vs_original)),
    ]);
    table.add_row(vec![
        Cell::new("Excluded vs original"),
        Cell::new(format!("{:.2}%", sizes.percent_excluded_vs_original)),
    ]);
    table.add_row(vec![
        Cell::new("Unique names"),
        Cell::new(uniqueness.unique_names),
    ]);
    table.add_row(vec![
        Cell::new("Unique birthday combinations"),
        Cell::new(uniqueness.unique_birthday_combinations),
    ]);

    println!("{table}");
}

fn print_exclusion_table(report: &AnalyticsReport) {
    if report.exclusion_reasons.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Exclusion reason"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for entry in report.exclusion_reasons.iter().take(MAX_SUMMARY_ROWS) {
        table.add_row(vec![
            Cell::new(&entry.reason),
            count_cell(entry.count, Color::Yellow),
        ]);
    }
    let hidden = report.exclusion_reasons.len().saturating_sub(MAX_SUMMARY_ROWS);
    if hidden > 0 {
        table.add_row(vec![dim_cell(format!("... {hidden} more")), dim_cell("-")]);
    }

    println!();
    println!("Exclusions:");
    println!("{table}");
}

fn print_duplicate_table(report: &AnalyticsReport) {
    let analysis = &report.duplicate_analysis;
    if analysis.duplicate_groups.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Combination"),
        header_cell("Value"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for group in analysis.duplicate_groups.iter().take(MAX_SUMMARY_ROWS) {
        table.add_row(vec![
            Cell::new(group.combination_type.as_str()),
            Cell::new(&group.combination_value),
            count_cell(group.count, Color::Red),
        ]);
    }

    println!();
    println!(
        "Duplicate groups: {} (records involved: {})",
        analysis.unique_duplicate_groups, analysis.total_duplicate_records
    );
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
