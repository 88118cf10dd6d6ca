mod analytics_json;
mod csv_export;

pub use analytics_json::{write_analytics_json, write_partition_csvs};
pub use csv_export::{EXCLUDED_COLUMNS, INCLUDED_COLUMNS, excluded_csv, included_csv};
