// Calendar month in YYYY-MM form and its inclusive date range.
//
// Purpose
// - Shared by the monthly time entry report and the shift report.
//
// Responsibilities
// - Parse and print YYYY-MM.
// - Derive first and last calendar day, including leap years.

use crate::shared::core::validation::ValidationError;
use chrono::{DateTime, Months, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    first: NaiveDate,
    last: NaiveDate,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidMonth(format!("{year:04}-{month:02}"));
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        // Day zero of the following month.
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;
        Ok(Self { first, last })
    }

    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.first, self.last)
    }

    /// First day 00:00:00 through last day 23:59:59, in UTC.
    pub fn timestamp_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.first.and_time(NaiveTime::MIN).and_utc();
        let end = self.last.and_time(NaiveTime::MIN).and_utc() + TimeDelta::days(1)
            - TimeDelta::seconds(1);
        (start, end)
    }
}

impl FromStr for Month {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidMonth(value.to_string());
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Month {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}
