//! Upcoming due-date reminders shown in the sidebar.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Leap year used to validate month/day pairs so that 02/29 is accepted.
const VALIDATION_YEAR: i32 = 2024;

/// A calendar day without a year, written `MM/DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

/// Error returned when parsing an invalid `MM/DD` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMonthDayError {
    #[error("invalid date format (expected MM/DD): {0}")]
    Format(String),
    #[error("no such day: {0}")]
    OutOfRange(String),
}

impl MonthDay {
    /// Creates a month/day pair, checking that it names a real calendar day.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day).map(|_| Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = ParseMonthDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (month, day) = s
            .split_once('/')
            .ok_or_else(|| ParseMonthDayError::Format(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| ParseMonthDayError::Format(s.to_string()))?;
        let day: u32 = day
            .parse()
            .map_err(|_| ParseMonthDayError::Format(s.to_string()))?;

        MonthDay::new(month, day).ok_or_else(|| ParseMonthDayError::OutOfRange(s.to_string()))
    }
}

impl Serialize for MonthDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A reminder with a due day and a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueDate {
    date: MonthDay,
    label: String,
}

impl DueDate {
    pub fn new(date: MonthDay, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }

    pub fn date(&self) -> MonthDay {
        self.date
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_month_day() {
        let date: MonthDay = "07/23".parse().unwrap();
        assert_eq!(date.month(), 7);
        assert_eq!(date.day(), 23);
    }

    #[test]
    fn parse_without_padding() {
        let date: MonthDay = "8/1".parse().unwrap();
        assert_eq!(date.to_string(), "08/01");
    }

    #[test]
    fn accepts_leap_day() {
        assert!("02/29".parse::<MonthDay>().is_ok());
    }

    #[test]
    fn rejects_impossible_day() {
        assert_eq!(
            "02/30".parse::<MonthDay>(),
            Err(ParseMonthDayError::OutOfRange("02/30".to_string()))
        );
        assert!("13/01".parse::<MonthDay>().is_err());
    }

    #[test]
    fn rejects_bad_format() {
        assert!(matches!(
            "2024-08-01".parse::<MonthDay>(),
            Err(ParseMonthDayError::Format(_))
        ));
        assert!("08/".parse::<MonthDay>().is_err());
    }

    #[test]
    fn due_date_display() {
        let due = DueDate::new("08/01".parse().unwrap(), "Finish notes");
        assert_eq!(due.to_string(), "08/01: Finish notes");
    }

    #[test]
    fn serializes_as_string() {
        let due = DueDate::new(MonthDay::new(7, 19).unwrap(), "Code");
        let json = serde_json::to_value(&due).unwrap();
        assert_eq!(json["date"], "07/19");
        assert_eq!(json["label"], "Code");
    }
}
