//! Payroll month token.
//!
//! This module defines [`PayMonth`], the `YYYY-MM` calendar-month token that
//! keys every payroll record and scopes every generation run.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// A calendar month in the proleptic Gregorian calendar, identified by year
/// and month number.
///
/// `PayMonth` is the unit of payroll generation: one record exists per
/// `(company, employee, month)`. It is always supplied explicitly by callers;
/// the engine never assumes a "current month". The token serializes as the
/// `YYYY-MM` string used on the wire.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayMonth;
/// use std::str::FromStr;
///
/// let month = PayMonth::from_str("2026-02").unwrap();
/// assert_eq!(month.days_in_month(), 28);
/// assert_eq!(month.to_string(), "2026-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PayMonth {
    year: i32,
    month: u32,
}

impl PayMonth {
    /// Creates a pay month from a year and a 1-based month number.
    ///
    /// Returns `None` if the pair does not name a representable month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // Probe chrono so out-of-range years are rejected along with months.
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 1-based month component.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("PayMonth holds a valid year/month")
    }

    /// The last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("successor month is a valid year/month")
            .pred_opt()
            .expect("first day of a month has a predecessor")
    }

    /// The number of calendar days in the month (28 to 31).
    ///
    /// This is raw calendar days, not configured working days.
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Whether the given date falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PayMonth {
    type Err = EngineError;

    /// Parses a strict `YYYY-MM` token.
    ///
    /// Rejects anything else: missing parts, out-of-range months, trailing
    /// day components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidMonth {
            value: s.to_string(),
        };

        let (year_part, month_part) = s.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for PayMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PayMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
