//! Forecast horizon derivation
//!
//! The backend's model was trained on data ending at a fixed month; the user
//! picks a target month and the horizon sent over the wire is the number of
//! whole months between the two.

use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, NaiveDate};

/// Last month covered by the backend's historical reservoir data.
pub const LAST_OBSERVATION_YEAR: i32 = 2024;
pub const LAST_OBSERVATION_MONTH: u32 = 12;

/// Human-readable form of the last observation, for error messages and labels.
pub fn last_observation_label() -> String {
    format!("{}-{:02}", LAST_OBSERVATION_YEAR, LAST_OBSERVATION_MONTH)
}

/// Longest horizon the form accepts. The model's forecasts are meaningless
/// beyond a few years; this also keeps the month arithmetic in range for
/// any year the text field can hold.
pub const MAX_HORIZON_MONTHS: u32 = 120;

/// Parse a target month (`YYYY-MM` or `YYYY-MM-DD`) and return how many whole
/// months it lies after the last observation.
///
/// The month immediately after the last observation yields 1. Months at or
/// before the last observation, and unparseable input, are validation errors.
pub fn months_ahead(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("enter a target month (YYYY-MM)");
    }

    let (year, month) = parse_year_month(trimmed)
        .ok_or_else(|| anyhow!("'{}' is not a valid month, expected YYYY-MM", trimmed))?;

    // Widen before multiplying: the field accepts any digits, so the year
    // can be far outside i32 month range.
    let span = (year as i64 - LAST_OBSERVATION_YEAR as i64) * 12 + month as i64
        - LAST_OBSERVATION_MONTH as i64;

    if span <= 0 {
        bail!(
            "target month must be after {} (the last month with observed data)",
            last_observation_label()
        );
    }

    if span > MAX_HORIZON_MONTHS as i64 {
        bail!(
            "target month is too far ahead, the horizon is capped at {} months",
            MAX_HORIZON_MONTHS
        );
    }

    Ok(span as u32)
}

fn parse_year_month(input: &str) -> Option<(i32, u32)> {
    // Full dates are accepted; the day is ignored.
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some((date.year(), date.month()));
    }

    let (year_str, month_str) = input.split_once('-')?;
    let year: i32 = year_str.parse().ok()?;
    let month: u32 = month_str.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_month_after_last_observation() {
        assert_eq!(months_ahead("2025-01").unwrap(), 1);
    }

    #[test]
    fn test_one_year_ahead() {
        assert_eq!(months_ahead("2025-12").unwrap(), 12);
    }

    #[test]
    fn test_accepts_full_date() {
        assert_eq!(months_ahead("2025-06-15").unwrap(), 6);
    }

    #[test]
    fn test_same_month_is_rejected() {
        let err = months_ahead("2024-12").unwrap_err();
        assert!(err.to_string().contains("after 2024-12"));
    }

    #[test]
    fn test_earlier_month_is_rejected() {
        assert!(months_ahead("2023-05").is_err());
    }

    #[test]
    fn test_unparseable_input_is_rejected() {
        assert!(months_ahead("next spring").is_err());
        assert!(months_ahead("2025-13").is_err());
        assert!(months_ahead("2025").is_err());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = months_ahead("   ").unwrap_err();
        assert!(err.to_string().contains("target month"));
    }

    #[test]
    fn test_huge_year_is_a_validation_error_not_a_panic() {
        let err = months_ahead("200000000-01").unwrap_err();
        assert!(err.to_string().contains("too far ahead"));

        // Beyond i64? The year no longer parses as i32 at all.
        assert!(months_ahead("99999999999-01").is_err());
    }

    #[test]
    fn test_horizon_cap_boundary() {
        assert_eq!(months_ahead("2034-12").unwrap(), MAX_HORIZON_MONTHS);
        assert!(months_ahead("2035-01").is_err());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(months_ahead(" 2025-03 ").unwrap(), 3);
    }
}
