use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Zone in which "today" is evaluated. Stored dates carry no zone at all.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceZone {
    Utc,
    Local,
}

impl Default for ReferenceZone {
    fn default() -> Self {
        ReferenceZone::Utc
    }
}

impl ReferenceZone {
    pub fn today(&self) -> NaiveDate {
        match self {
            ReferenceZone::Utc => Utc::now().date_naive(),
            ReferenceZone::Local => Local::now().date_naive(),
        }
    }
}

impl FromStr for ReferenceZone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "utc" => Ok(ReferenceZone::Utc),
            "local" => Ok(ReferenceZone::Local),
            other => Err(Error::InvalidInput(format!("Unknown reference zone: {}", other))),
        }
    }
}

impl fmt::Display for ReferenceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceZone::Utc => write!(f, "utc"),
            ReferenceZone::Local => write!(f, "local"),
        }
    }
}

pub fn format_day(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Resolves a user supplied day relative to `today`.
///
/// Accepts `YYYY-MM-DD`, `today`, `yesterday`, `-Nd`, `-Nw` and weekday
/// names. A weekday resolves to its most recent occurrence, today included,
/// since attendance is only ever recorded for the past.
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::InvalidInput("Empty date string".to_string()));
    }

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yes" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('-') {
        let back = parse_offset(rest)?;
        return today
            .checked_sub_signed(back)
            .ok_or_else(|| Error::InvalidInput(format!("Relative date out of range: {}", input)));
    }

    if let Ok(weekday) = parse_weekday_str(input) {
        let back = (7 + today.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
        return Ok(today - Duration::days(back as i64));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| Error::InvalidInput(format!("Could not parse date: {}", input)))
}

fn parse_offset(input: &str) -> Result<Duration> {
    let invalid = || Error::InvalidInput(format!("Invalid relative date: -{}", input));
    let unit = input.chars().last().ok_or_else(invalid)?;
    let num_str = &input[..input.len() - unit.len_utf8()];
    let count: i64 = num_str.parse().map_err(|_| invalid())?;

    let offset = match unit.to_ascii_lowercase() {
        'd' => Duration::try_days(count),
        'w' => Duration::try_weeks(count),
        _ => return Err(Error::InvalidInput(format!("Unknown unit in relative date: {}", unit))),
    };
    offset.ok_or_else(|| Error::InvalidInput(format!("Relative date out of range: -{}", input)))
}

fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(Error::InvalidInput("Invalid weekday".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_keywords_resolve_against_today() {
        let today = day(2025, 3, 10);
        assert_eq!(parse_day("today", today).unwrap(), today);
        assert_eq!(parse_day("Yesterday", today).unwrap(), day(2025, 3, 9));
    }

    #[test]
    fn test_relative_offsets() {
        let today = day(2025, 3, 10);
        assert_eq!(parse_day("-3d", today).unwrap(), day(2025, 3, 7));
        assert_eq!(parse_day("-2w", today).unwrap(), day(2025, 2, 24));
        assert!(parse_day("-d", today).is_err());
        assert!(parse_day("-3x", today).is_err());
    }

    #[test]
    fn test_bad_relative_offsets_are_errors() {
        let today = day(2025, 3, 10);
        assert!(matches!(parse_day("-1é", today), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_day("-é", today), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_day("-999999999999999d", today), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_day("-999999999999999999w", today), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_day("-99999999d", today), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_weekday_is_most_recent_occurrence() {
        let today = day(2025, 3, 10);
        assert_eq!(today.weekday(), Weekday::Mon);
        assert_eq!(parse_day("mon", today).unwrap(), today);
        assert_eq!(parse_day("fri", today).unwrap(), day(2025, 3, 7));
        assert_eq!(parse_day("tuesday", today).unwrap(), day(2025, 3, 4));
    }

    #[test]
    fn test_iso_date_and_garbage() {
        let today = day(2025, 3, 10);
        assert_eq!(parse_day("2024-12-31", today).unwrap(), day(2024, 12, 31));
        assert!(parse_day("31/12/2024", today).is_err());
        assert!(parse_day("   ", today).is_err());
    }

    #[test]
    fn test_reference_zone_from_str() {
        assert_eq!("UTC".parse::<ReferenceZone>().unwrap(), ReferenceZone::Utc);
        assert_eq!("local".parse::<ReferenceZone>().unwrap(), ReferenceZone::Local);
        assert!("mars".parse::<ReferenceZone>().is_err());
    }
}
