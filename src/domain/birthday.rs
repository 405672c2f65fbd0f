//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used for parsing, display, and serialization.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A type-safe wrapper for a contact's birthday.
///
/// Wraps a calendar date and computes the day count to the next
/// anniversary. Constructing from a [`NaiveDate`] cannot fail; parsing
/// from a string validates the ISO `YYYY-MM-DD` format.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::parse("1994-01-22").unwrap();
/// assert_eq!(birthday.to_string(), "1994-01-22");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a Birthday from an ISO `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string is not a valid
    /// calendar date in that format.
    pub fn parse(date: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Number of days from today to the next anniversary of this birthday.
    pub fn days_until(&self) -> i64 {
        self.days_until_from(Local::now().date_naive())
    }

    /// Number of days from `today` to the next anniversary of this birthday.
    ///
    /// The anniversary is the stored month/day in `today`'s year, or in the
    /// following year if that date has already passed. A birthday on Feb 29
    /// is observed on Mar 1 in years without a leap day. The result is
    /// always non-negative; an anniversary falling on `today` yields 0.
    pub fn days_until_from(&self, today: NaiveDate) -> i64 {
        let mut next = self.anniversary_in(today.year());
        if next < today {
            next = self.anniversary_in(today.year() + 1);
        }
        (next - today).num_days()
    }

    /// The observed anniversary date within the given year.
    fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            // Feb 29 in a non-leap year; observe on Mar 1.
            NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
        })
    }
}

// Serde support - serialize as ISO date string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_parse_valid() {
        let birthday = Birthday::parse("1994-01-22").unwrap();
        assert_eq!(birthday.date(), date(1994, 1, 22));
    }

    #[test]
    fn test_birthday_parse_invalid() {
        assert!(Birthday::parse("not a date").is_err());
        assert!(Birthday::parse("1994-13-01").is_err());
        assert!(Birthday::parse("1994-02-30").is_err());
        assert!(Birthday::parse("22/01/1994").is_err());
        assert!(Birthday::parse("").is_err());
    }

    #[test]
    fn test_days_until_upcoming_this_year() {
        // Birthday later this year counts to this year's date.
        let birthday = Birthday::new(date(1995, 8, 10));
        let today = date(2024, 6, 1);
        let expected = (date(2024, 8, 10) - today).num_days();
        assert_eq!(birthday.days_until_from(today), expected);
    }

    #[test]
    fn test_days_until_already_passed() {
        // Birthday earlier this year rolls over to next year.
        let birthday = Birthday::new(date(1994, 1, 22));
        let today = date(2024, 6, 1);
        let expected = (date(2025, 1, 22) - today).num_days();
        assert_eq!(birthday.days_until_from(today), expected);
    }

    #[test]
    fn test_days_until_today_is_zero() {
        let birthday = Birthday::new(date(1990, 6, 1));
        assert_eq!(birthday.days_until_from(date(2024, 6, 1)), 0);
    }

    #[test]
    fn test_days_until_tomorrow() {
        let birthday = Birthday::new(date(1990, 6, 2));
        assert_eq!(birthday.days_until_from(date(2024, 6, 1)), 1);
    }

    #[test]
    fn test_leap_day_observed_on_march_first() {
        let birthday = Birthday::new(date(2000, 2, 29));

        // 2023 has no Feb 29, so the anniversary is observed on Mar 1.
        let today = date(2023, 1, 15);
        let expected = (date(2023, 3, 1) - today).num_days();
        assert_eq!(birthday.days_until_from(today), expected);

        // 2024 is a leap year, so Feb 29 itself is the anniversary.
        let today = date(2024, 1, 15);
        let expected = (date(2024, 2, 29) - today).num_days();
        assert_eq!(birthday.days_until_from(today), expected);
    }

    #[test]
    fn test_birthday_display() {
        let birthday = Birthday::new(date(1994, 1, 22));
        assert_eq!(format!("{}", birthday), "1994-01-22");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new(date(1994, 1, 22));
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1994-01-22\"");
    }

    #[test]
    fn test_birthday_deserialization() {
        let birthday: Birthday = serde_json::from_str("\"1995-08-10\"").unwrap();
        assert_eq!(birthday.date(), date(1995, 8, 10));
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1995-08-40\"");
        assert!(result.is_err());
    }
}
