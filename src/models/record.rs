//! Contact record: one person's name, phones, and optional birthday.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact stored in an address book.
///
/// The name is fixed at creation. Phones keep insertion order and may repeat.
/// The birthday can be set or replaced but not cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create a contact from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    /// Validate `number` and append it to the phone list.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(number)?);
        Ok(())
    }

    /// Remove every stored phone equal to `number`.
    ///
    /// Returns `true` if at least one entry was removed.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|phone| phone.as_str() != number);
        self.phones.len() != before
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything changes, so a failed edit leaves
    /// the phone list untouched.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `new` is not a valid phone number
    /// - `BookError::PhoneNotFound` if `old` is not stored on this contact
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new)?;

        match self.phones.iter_mut().find(|phone| phone.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old.to_string(),
            }),
        }
    }

    /// Whether `number` is one of this contact's phones.
    pub fn find_phone(&self, number: &str) -> bool {
        self.phones.iter().any(|phone| phone.as_str() == number)
    }

    /// Parse `date` as `DD.MM.YYYY` and store it, replacing any previous birthday.
    pub fn set_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(BirthdayDate::new(date)?);
        Ok(())
    }

    /// Human-readable one-line summary of the contact.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
