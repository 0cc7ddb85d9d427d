//! Millisecond-precision dates with an explicit invalid state

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use std::fmt::{self, Display};

use crate::constants::{DATE_DISPLAY_FORMAT, INVALID_DATE_TEXT, MAX_TIME_VALUE};

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;

// Days between 0001-01-01 and 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A point in time held as milliseconds since the Unix epoch (UTC).
///
/// An unparseable or out-of-range date is still a `Date`; its time value is
/// NaN and [`Date::is_valid`] reports false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Date {
    time: f64,
}

impl Date {
    /// The current time
    #[must_use]
    pub fn now() -> Self {
        Self::from_timestamp(Utc::now().timestamp_millis() as f64)
    }

    /// The invalid date
    #[must_use]
    pub const fn invalid() -> Self {
        Self { time: f64::NAN }
    }

    /// Build from milliseconds since the epoch, truncating fractions.
    /// Non-finite or out-of-range values give the invalid date.
    #[must_use]
    pub fn from_timestamp(ms: f64) -> Self {
        if !ms.is_finite() || ms.abs() > MAX_TIME_VALUE {
            return Self::invalid();
        }
        // trunc() keeps -0.0 for small negatives; normalise to +0
        Self {
            time: ms.trunc() + 0.0,
        }
    }

    /// Build from `[year, month, day, hours, minutes, seconds, ms]`.
    ///
    /// Month is zero-based, missing trailing parts default to the start of
    /// the period, overflowing parts carry over (month 12 is January of the
    /// next year) and years `0..=99` map to `1900..=1999`.
    #[must_use]
    pub fn from_parts(parts: &[f64]) -> Self {
        if parts.iter().any(|p| !p.is_finite()) {
            return Self::invalid();
        }
        let part = |idx: usize, default: f64| parts.get(idx).map_or(default, |p| p.trunc());

        let mut year = part(0, f64::NAN);
        if year.is_nan() {
            return Self::invalid();
        }
        if (0.0..=99.0).contains(&year) {
            year += 1900.0;
        }
        let month = part(1, 0.0);
        let day = part(2, 1.0);

        let Some(days) = days_from_epoch(year, month) else {
            return Self::invalid();
        };
        let time = (days + day - 1.0) * MS_PER_DAY
            + part(3, 0.0) * MS_PER_HOUR
            + part(4, 0.0) * MS_PER_MINUTE
            + part(5, 0.0) * MS_PER_SECOND
            + part(6, 0.0);

        Self::from_timestamp(time)
    }

    /// Parse a date string. Unrecognised input gives the invalid date.
    ///
    /// Accepted: RFC 3339, `YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
    /// `YYYY-MM-DDTHH:MM[:SS[.sss]]`, `YYYY-MM-DD HH:MM[:SS[.sss]]` and
    /// RFC 2822. Strings without an offset are read as UTC.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let text = input.trim();
        match parse_datetime(text) {
            Some(datetime) => Self::from_timestamp(datetime.timestamp_millis() as f64),
            None => {
                tracing::trace!(input = %text, "unrecognised date string");
                Self::invalid()
            }
        }
    }

    /// Milliseconds since the epoch, NaN when invalid
    #[must_use]
    pub const fn get_time(&self) -> f64 {
        self.time
    }

    /// Whether the time value is a number
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.time.is_nan()
    }

    /// The chrono representation, `None` when invalid
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        DateTime::from_timestamp_millis(self.time as i64)
    }

    /// RFC 3339 rendering with millisecond precision, `None` when invalid
    #[must_use]
    pub fn to_iso_string(&self) -> Option<String> {
        self.to_datetime()
            .map(|dt| dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.format(DATE_DISPLAY_FORMAT)),
            None => f.write_str(INVALID_DATE_TEXT),
        }
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_timestamp(datetime.timestamp_millis() as f64)
    }
}

// Days from the epoch to the first day of `month` (0-based, may overflow) in `year`
fn days_from_epoch(year: f64, month: f64) -> Option<f64> {
    let year = year + (month / 12.0).floor();
    let month = month.rem_euclid(12.0);
    if year.abs() > f64::from(i32::MAX) {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year as i32, month as u32 + 1, 1)?;
    Some((i64::from(first.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE) as f64)
}

fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    if let Some(date) = parse_calendar_date(text) {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// `YYYY`, `YYYY-MM` and `YYYY-MM-DD`
fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let mut fields = text.split('-');
    let year = fields.next().filter(|y| y.len() == 4)?.parse::<i32>().ok()?;
    let month = match fields.next() {
        Some(m) if m.len() == 2 => m.parse::<u32>().ok()?,
        Some(_) => return None,
        None => 1,
    };
    let day = match fields.next() {
        Some(d) if d.len() == 2 => d.parse::<u32>().ok()?,
        Some(_) => return None,
        None => 1,
    };
    if fields.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_timestamp() {
        assert_eq!(Date::from_timestamp(0.0).get_time(), 0.0);
        assert_eq!(Date::from_timestamp(1.9).get_time(), 1.0);
        assert!(!Date::from_timestamp(f64::NAN).is_valid());
        assert!(!Date::from_timestamp(9e15).is_valid());
    }

    #[test]
    fn test_from_parts() {
        let date = Date::from_parts(&[2024.0, 0.0, 2.0]);
        assert_eq!(date.to_iso_string().unwrap(), "2024-01-02T00:00:00.000Z");

        let overflow = Date::from_parts(&[2023.0, 12.0, 1.0]);
        assert_eq!(overflow.to_iso_string().unwrap(), "2024-01-01T00:00:00.000Z");

        let negative_month = Date::from_parts(&[2024.0, -1.0]);
        assert_eq!(
            negative_month.to_iso_string().unwrap(),
            "2023-12-01T00:00:00.000Z"
        );

        let two_digit = Date::from_parts(&[99.0, 0.0]);
        assert_eq!(two_digit.to_iso_string().unwrap(), "1999-01-01T00:00:00.000Z");

        let full = Date::from_parts(&[2020.0, 1.0, 29.0, 13.0, 45.0, 30.0, 250.0]);
        assert_eq!(full.to_iso_string().unwrap(), "2020-02-29T13:45:30.250Z");

        assert!(!Date::from_parts(&[2020.0, f64::NAN]).is_valid());
    }

    #[test]
    fn test_parse_formats() {
        let cases = [
            ("2024-03-05", "2024-03-05T00:00:00.000Z"),
            ("2024-03", "2024-03-01T00:00:00.000Z"),
            ("2024", "2024-01-01T00:00:00.000Z"),
            ("2024-03-05T10:20", "2024-03-05T10:20:00.000Z"),
            ("2024-03-05T10:20:30.5", "2024-03-05T10:20:30.500Z"),
            ("2024-03-05 10:20:30", "2024-03-05T10:20:30.000Z"),
            ("2024-03-05T10:20:30+02:00", "2024-03-05T08:20:30.000Z"),
            ("Tue, 5 Mar 2024 10:20:30 +0000", "2024-03-05T10:20:30.000Z"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                Date::parse(input).to_iso_string().as_deref(),
                Some(expected),
                "parsing {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "not a date", "2024-13-01", "[object Object]", "24-01-01"] {
            assert!(!Date::parse(input).is_valid(), "{input:?} should be invalid");
        }
    }

    #[test]
    fn test_display() {
        let date = Date::from_parts(&[2024.0, 0.0, 2.0]);
        assert_eq!(
            date.to_string(),
            "Tue Jan 02 2024 00:00:00 GMT+0000 (Coordinated Universal Time)"
        );
        assert_eq!(Date::invalid().to_string(), "Invalid Date");
    }
}
