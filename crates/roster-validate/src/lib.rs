mod cleaner;
mod rules;

pub use cleaner::{RowOutcome, clean_row};
pub use rules::{
    MIN_BIRTH_YEAR, validate_day_range, validate_month_range, validate_name, validate_numeric,
    validate_year_range,
};
