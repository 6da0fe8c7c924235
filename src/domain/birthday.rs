//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Textual layout accepted and produced for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts single-digit days and months, so the layout is
// checked before the calendar.
static BIRTHDAY_LAYOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

/// A contact's birthday.
///
/// Accepted only as `DD.MM.YYYY` and stored as a calendar date so date
/// arithmetic works on it directly.
///
/// # Example
///
/// ```
/// use address_book::domain::BirthdayDate;
/// use chrono::Datelike;
///
/// let birthday = BirthdayDate::new("15.04.1990").unwrap();
/// assert_eq!(birthday.date().month(), 4);
/// assert_eq!(birthday.to_string(), "15.04.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not follow
    /// the layout exactly or names a day that does not exist.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_LAYOUT.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// Wrap an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The first anniversary of this birthday that falls on or after `reference`.
    ///
    /// A 29 February birthday is observed on 28 February in years without one.
    pub fn next_occurrence(&self, reference: NaiveDate) -> NaiveDate {
        let this_year = self.in_year(reference.year());
        if this_year >= reference {
            this_year
        } else {
            self.in_year(reference.year() + 1)
        }
    }

    fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl FromStr for BirthdayDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = BirthdayDate::new("15.04.1990").unwrap();
        assert_eq!(birthday.date(), ymd(1990, 4, 15));
    }

    #[test]
    fn test_birthday_leap_day() {
        assert!(BirthdayDate::new("29.02.2024").is_ok());
        assert!(BirthdayDate::new("29.02.2023").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(BirthdayDate::new("31.02.2024").is_err());
        assert!(BirthdayDate::new("32.01.2024").is_err());
        assert!(BirthdayDate::new("00.01.2024").is_err());
        assert!(BirthdayDate::new("15.13.2024").is_err());
    }

    #[test]
    fn test_birthday_rejects_other_layouts() {
        assert!(BirthdayDate::new("1990-04-15").is_err());
        assert!(BirthdayDate::new("1990.04.15").is_err());
        assert!(BirthdayDate::new("5.4.1990").is_err());
        assert!(BirthdayDate::new("15/04/1990").is_err());
        assert!(BirthdayDate::new(" 15.04.1990").is_err());
        assert!(BirthdayDate::new("").is_err());
    }

    #[test]
    fn test_birthday_display_round_trips() {
        let birthday: BirthdayDate = "01.02.2003".parse().unwrap();
        assert_eq!(birthday.to_string(), "01.02.2003");
    }

    #[test]
    fn test_next_occurrence_same_year() {
        let birthday = BirthdayDate::new("15.04.1990").unwrap();
        assert_eq!(birthday.next_occurrence(ymd(2025, 4, 10)), ymd(2025, 4, 15));
        assert_eq!(birthday.next_occurrence(ymd(2025, 4, 15)), ymd(2025, 4, 15));
    }

    #[test]
    fn test_next_occurrence_rolls_to_next_year() {
        let birthday = BirthdayDate::new("15.04.1990").unwrap();
        assert_eq!(birthday.next_occurrence(ymd(2025, 4, 20)), ymd(2026, 4, 15));
    }

    #[test]
    fn test_next_occurrence_leap_day_in_common_year() {
        let birthday = BirthdayDate::new("29.02.2000").unwrap();
        assert_eq!(birthday.next_occurrence(ymd(2025, 2, 1)), ymd(2025, 2, 28));
        assert_eq!(birthday.next_occurrence(ymd(2027, 3, 1)), ymd(2028, 2, 29));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = BirthdayDate::new("15.04.1990").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"15.04.1990\"");
        let back: BirthdayDate = serde_json::from_str("\"15.04.1990\"").unwrap();
        assert_eq!(back, birthday);
    }
}
