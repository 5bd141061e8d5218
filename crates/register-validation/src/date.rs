//! Date of birth validation

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Outcome;

/// Format produced by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const INVALID_DATE_MESSAGE: &str = "Invalid date";
pub const FUTURE_DATE_MESSAGE: &str = "Date of birth cannot be in the future";

// chrono alone also takes unpadded fields and signed years
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

/// Strict `YYYY-MM-DD`, surrounding whitespace ignored
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if !DATE_SHAPE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Whole years elapsed between `dob` and `today`
///
/// The year only counts once the birthday (month and day) has been reached.
/// A 29 February birthday is reached on 1 March in common years.
/// Returns 0 when `dob` is after `today`.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> u32 {
    if dob > today {
        return 0;
    }

    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Fails on an unparseable date, a date after `today`, or an age below `min_age`
pub fn is_adult(value: &str, today: NaiveDate, min_age: u32) -> Outcome {
    let dob = parse_date(value).ok_or_else(|| INVALID_DATE_MESSAGE.to_string())?;

    if dob > today {
        return Err(FUTURE_DATE_MESSAGE.to_string());
    }

    if age_on(dob, today) < min_age {
        return Err(format!("You must be at least {} years old", min_age));
    }

    Ok(())
}
