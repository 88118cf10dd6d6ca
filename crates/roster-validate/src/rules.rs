//! Field-level validation rules for client roster rows.
//!
//! Each rule is a pure function returning either the normalized value or a
//! short, machine-stable reason code. Reason codes are data carried on
//! excluded records, never raised as errors.
//!
//! The rule set is deliberately strict: a name may contain only ASCII
//! letters and spaces, so apostrophes, hyphens, and accented letters are all
//! rejected as "special character in name".

/// Minimum length of a trimmed name.
const MIN_NAME_LEN: usize = 2;

/// Earliest accepted birth year. There is no upper bound.
pub const MIN_BIRTH_YEAR: i64 = 1940;

/// Validate a name cell. Returns the trimmed name on success.
pub fn validate_name(raw: &str) -> Result<&str, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("missing name".to_string());
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err("name too short".to_string());
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err("special character in name".to_string());
    }
    Ok(name)
}

/// Validate a numeric cell, accepting integer or float text and truncating
/// toward zero. `field` names the cell in reason codes ("birth_day", ...).
pub fn validate_numeric(raw: &str, field: &str) -> Result<i64, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(format!("missing {field}"));
    }
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed.trunc() as i64),
        _ => Err(format!("invalid {field} (not numeric)")),
    }
}

/// Validate a parsed day is in 1-31.
pub fn validate_day_range(day: i64) -> Result<(), String> {
    if !(1..=31).contains(&day) {
        return Err("invalid day (not 1-31)".to_string());
    }
    Ok(())
}

/// Validate a parsed month is in 1-12.
pub fn validate_month_range(month: i64) -> Result<(), String> {
    if !(1..=12).contains(&month) {
        return Err("invalid month (not 1-12)".to_string());
    }
    Ok(())
}

/// Validate a parsed year is 1940 or later.
pub fn validate_year_range(year: i64) -> Result<(), String> {
    if year < MIN_BIRTH_YEAR {
        return Err("birth_year older than 1940".to_string());
    }
    Ok(())
}
