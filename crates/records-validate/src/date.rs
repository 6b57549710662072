//! Strict `YYYY-MM-DD` calendar dates.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Four-digit year, two-digit month and day, nothing else.
static CALENDAR_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("Invalid calendar date regex")
});

/// Parses `YYYY-MM-DD`. Returns `None` for any other shape or for dates
/// that do not exist (such as `2019-02-30`).
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let caps = CALENDAR_DATE_REGEX.captures(value)?;
    let year = caps[1].parse::<i32>().ok()?;
    let month = caps[2].parse::<u32>().ok()?;
    let day = caps[3].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
