//! Record model representing a single address book entry.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An entry in the address book, aggregating one phone number and one
/// birthday. Both fields are optional; when present they are validated
/// at construction time, so a stored record never holds invalid data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Record {
    /// Phone number, digits only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,

    /// Birthday as a calendar date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record from raw inputs.
    ///
    /// The phone string is validated immediately; a validation failure
    /// propagates to the caller and no record is built.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone contains a
    /// non-digit character or is empty.
    pub fn new(phone: Option<&str>, birthday: Option<NaiveDate>) -> Result<Self, ValidationError> {
        let phone = phone.map(PhoneNumber::new).transpose()?;
        let birthday = birthday.map(Birthday::new);

        Ok(Self { phone, birthday })
    }

    /// Replace the phone number, validating before committing.
    ///
    /// The new value is fully validated before the stored one is touched,
    /// so a rejected assignment leaves the record unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the new value is invalid.
    pub fn set_phone(&mut self, phone: Option<&str>) -> Result<(), ValidationError> {
        self.phone = phone.map(PhoneNumber::new).transpose()?;
        Ok(())
    }

    /// Replace the birthday.
    pub fn set_birthday(&mut self, birthday: Option<NaiveDate>) {
        self.birthday = birthday.map(Birthday::new);
    }

    /// Get the phone number, if set.
    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// Get the birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Days from today until the next birthday anniversary.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.birthday.as_ref().map(Birthday::days_until)
    }

    /// Days from `today` until the next birthday anniversary.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until_from(today))
    }
}
