//! Calendar month used by the report and month queries
//!
//! Months are addressed as `(year, month0)` with a zero-based month index.
//! Membership is evaluated on the local calendar: a record stored at
//! 21:00 UTC on Jan 31 belongs to February for a user at UTC+5.
//!
//! Only years whose whole month fits in chrono's date range are accepted.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    /// Zero-based month index (0 = January)
    pub month0: u32,
}

impl Month {
    /// Create a month from a zero-based index
    pub fn new(year: i32, month0: u32) -> Result<Self, MonthParseError> {
        if month0 > 11 {
            return Err(MonthParseError::InvalidMonth(month0 + 1));
        }
        let month = Self { year, month0 };
        if month.bounds().is_none() {
            return Err(MonthParseError::YearOutOfRange(year));
        }
        Ok(month)
    }

    /// The month containing `at` on the local calendar
    pub fn of(at: DateTime<Utc>) -> Self {
        Self::of_in(at, &Local)
    }

    /// The month containing `at` on the calendar of `tz`
    pub fn of_in<Tz: TimeZone>(at: DateTime<Utc>, tz: &Tz) -> Self {
        let local = at.with_timezone(tz);
        Self {
            year: local.year(),
            month0: local.month0(),
        }
    }

    /// The current local month
    pub fn current() -> Self {
        Self::of(Utc::now())
    }

    /// First and last day, or `None` when the month falls outside chrono's range
    fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.month0 > 11 {
            return None;
        }
        let first = NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)?;
        let next = self.next();
        let last = NaiveDate::from_ymd_opt(next.year, next.month0 + 1, 1)?.pred_opt()?;
        Some((first, last))
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.bounds().map_or(NaiveDate::MIN, |(first, _)| first)
    }

    /// Last day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        self.bounds().map_or(NaiveDate::MAX, |(_, last)| last)
    }

    /// Check if a timestamp falls within this month on the local calendar
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.contains_in(at, &Local)
    }

    /// Check if a timestamp falls within this month on the calendar of `tz`
    pub fn contains_in<Tz: TimeZone>(&self, at: DateTime<Utc>, tz: &Tz) -> bool {
        Self::of_in(at, tz) == *self
    }

    /// The following month, wrapping into the next year
    pub fn next(&self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year.saturating_add(1),
                month0: 0,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    /// The preceding month, wrapping into the previous year
    pub fn prev(&self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year.saturating_sub(1),
                month0: 11,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    /// Parse a `YYYY-MM` string (one-based month, as users write it)
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }

        Self::new(year, month - 1)
    }

    /// Month name and year, e.g. "January 2025"
    pub fn long_name(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize % 12], self.year)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month0 + 1)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    YearOutOfRange(i32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "invalid month '{}', expected YYYY-MM", s),
            Self::InvalidMonth(m) => write!(f, "month must be between 1 and 12, got {}", m),
            Self::YearOutOfRange(y) => write!(f, "year {} is out of range", y),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_parse() {
        let month = Month::parse("2025-01").unwrap();
        assert_eq!(month, Month::new(2025, 0).unwrap());
        assert_eq!(month.to_string(), "2025-01");

        assert!(Month::parse("2025-13").is_err());
        assert!(Month::parse("2025").is_err());
        assert!(Month::parse("abcd-01").is_err());
    }

    #[test]
    fn test_navigation_wraps_years() {
        let dec = Month::new(2024, 11).unwrap();
        assert_eq!(dec.next(), Month::new(2025, 0).unwrap());
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(Month::new(2025, 0).unwrap().prev(), dec);
    }

    #[test]
    fn test_day_bounds() {
        let feb = Month::new(2024, 1).unwrap();
        assert_eq!(feb.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let dec = Month::new(2025, 11).unwrap();
        assert_eq!(dec.last_day(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_rejects_years_outside_date_range() {
        assert_eq!(
            Month::parse("300000-01"),
            Err(MonthParseError::YearOutOfRange(300000))
        );
        assert!(Month::parse("-300000-01").is_err());
        assert!(Month::new(i32::MAX, 11).is_err());
        // December of the last representable year has no following month
        assert!(Month::new(NaiveDate::MAX.year(), 11).is_err());
        assert!(Month::new(NaiveDate::MAX.year(), 10).is_ok());
    }

    #[test]
    fn test_day_bounds_never_panic() {
        let huge = Month {
            year: 300000,
            month0: 0,
        };
        assert_eq!(huge.first_day(), NaiveDate::MIN);
        assert_eq!(huge.last_day(), NaiveDate::MAX);

        let edge = Month {
            year: i32::MAX,
            month0: 11,
        };
        assert_eq!(edge.next().year, i32::MAX);
        assert_eq!(edge.last_day(), NaiveDate::MAX);
    }

    #[test]
    fn test_contains() {
        let utc = Utc;
        let month = Month::new(2025, 2).unwrap();
        assert!(month.contains_in(Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap(), &utc));
        assert!(!month.contains_in(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(), &utc));
        assert!(!month.contains_in(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(), &utc));
    }

    #[test]
    fn test_membership_follows_local_calendar_across_utc_boundary() {
        // 02:00 on Feb 1 at UTC+5 is still Jan 31 in UTC
        let karachi = FixedOffset::east_opt(5 * 3600).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 21, 0, 0).unwrap();

        assert_eq!(Month::of_in(at, &karachi), Month::new(2025, 1).unwrap());
        assert!(Month::new(2025, 1).unwrap().contains_in(at, &karachi));
        assert!(!Month::new(2025, 0).unwrap().contains_in(at, &karachi));

        // Same instant, UTC-8: the last day of January
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(Month::of_in(at, &pacific), Month::new(2025, 0).unwrap());
    }

    #[test]
    fn test_default_calendar_is_local() {
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 21, 0, 0).unwrap();
        let local = at.with_timezone(&Local);
        let expected = Month::new(local.year(), local.month0()).unwrap();

        assert_eq!(Month::of(at), expected);
        assert!(expected.contains(at));
    }

    #[test]
    fn test_long_name() {
        assert_eq!(Month::new(2025, 0).unwrap().long_name(), "January 2025");
    }
}
