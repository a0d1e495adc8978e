//! The 8-digit `YYYYMMDD` calendar date key used by NASA POWER daily data and by
//! every filtering and estimation step in this crate.

use crate::types::error::DateKeyError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of characters in a canonical date key.
const KEY_LENGTH: usize = 8;

/// A validated calendar date encoded as `YYYYMMDD`.
///
/// Month is always in `1..=12` and the day is valid for that month and year
/// (February 29th only exists in leap years). Ordering is chronological.
///
/// # Examples
///
/// ```
/// use climatecast::DateKey;
///
/// let key = DateKey::parse("20240229").unwrap();
/// assert_eq!((key.year(), key.month(), key.day()), (2024, 2, 29));
/// assert_eq!(key.to_string(), "20240229");
///
/// assert!(DateKey::parse("20230229").is_err()); // 2023 is not a leap year
/// assert!(DateKey::parse("2024-02-29").is_err()); // not 8 digits
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DateKey {
    /// Parses a strict 8-digit `YYYYMMDD` key.
    ///
    /// # Errors
    ///
    /// * [`DateKeyError::WrongLength`] if the input is not exactly 8 characters long.
    /// * [`DateKeyError::NonNumeric`] if any character is not an ASCII digit.
    /// * [`DateKeyError::InvalidCalendarDate`] if month or day don't form a real date.
    pub fn parse(key: &str) -> Result<Self, DateKeyError> {
        if key.chars().count() != KEY_LENGTH {
            return Err(DateKeyError::WrongLength {
                key: key.to_string(),
                length: key.chars().count(),
            });
        }
        if !key.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateKeyError::NonNumeric {
                key: key.to_string(),
            });
        }

        // All ASCII digits, so byte slicing is safe and the parses can't fail.
        let component = |range: std::ops::Range<usize>| -> Result<u32, DateKeyError> {
            key[range]
                .parse::<u32>()
                .map_err(|_| DateKeyError::NonNumeric {
                    key: key.to_string(),
                })
        };
        let year = component(0..4)? as i32;
        let month = component(4..6)?;
        let day = component(6..8)?;

        Self::from_ymd(year, month, day).ok_or_else(|| DateKeyError::InvalidCalendarDate {
            key: key.to_string(),
        })
    }

    /// Parses either the strict `YYYYMMDD` form or the `YYYY-MM-DD` form
    /// produced by HTML date inputs and most user-facing tools.
    pub fn from_input(input: &str) -> Result<Self, DateKeyError> {
        let compact: String = input.trim().chars().filter(|c| *c != '-').collect();
        Self::parse(&compact)
    }

    /// For compile-time constants that are known to be valid.
    pub(crate) const fn new_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Builds a key from its components, returning `None` for an impossible date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(0..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// `(month, day)` with the year discarded.
    pub fn month_day(&self) -> (u32, u32) {
        (self.month, self.day)
    }

    /// True when both keys fall on the same calendar day, ignoring the year.
    ///
    /// ```
    /// use climatecast::DateKey;
    ///
    /// let a = DateKey::parse("20000101").unwrap();
    /// let b = DateKey::parse("20250101").unwrap();
    /// assert!(a.matches_day_of_year(&b));
    /// ```
    pub fn matches_day_of_year(&self, other: &DateKey) -> bool {
        self.month_day() == other.month_day()
    }

    /// True when this key's calendar day lies within `[start, end]` once all
    /// three dates are moved onto one common (leap) year.
    ///
    /// Ranges are not wrapped across the year boundary: a range such as
    /// Dec 20 - Jan 5 has `start > end` and therefore contains no day at all.
    ///
    /// ```
    /// use climatecast::DateKey;
    ///
    /// let start = DateKey::parse("20250801").unwrap();
    /// let end = DateKey::parse("20250810").unwrap();
    /// assert!(DateKey::parse("19990805").unwrap().in_calendar_range(&start, &end));
    /// assert!(!DateKey::parse("19990811").unwrap().in_calendar_range(&start, &end));
    /// ```
    pub fn in_calendar_range(&self, start: &DateKey, end: &DateKey) -> bool {
        let candidate = self.month_day();
        start.month_day() <= candidate && candidate <= end.month_day()
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u32> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::parse(&value.to_string())
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.to_string()
    }
}

impl TryFrom<NaiveDate> for DateKey {
    type Error = DateKeyError;

    /// Fails for years outside `0..=9999`, which have no 4-digit encoding.
    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_ymd(value.year(), value.month(), value.day()).ok_or_else(|| {
            DateKeyError::InvalidCalendarDate {
                key: value.to_string(),
            }
        })
    }
}
