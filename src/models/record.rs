//! Record model representing a single named contact.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named contact owning a list of phone numbers and an optional birthday.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain duplicates; no uniqueness is enforced. Every phone and birthday
/// held by a record has already passed validation, so a `Record` can never
/// carry malformed data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given name, no phones, no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number to the end of the list.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone entry equal to `raw`.
    ///
    /// Removing a value that is not present is a no-op.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|phone| phone.as_str() != raw);
    }

    /// Replace the first phone entry equal to `old_raw` with `new_raw`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no entry equals `old_raw`, or
    /// the validation error if `new_raw` is not a valid phone number.
    /// Either failure leaves the phone list untouched.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old_raw)
            .ok_or(BookError::PhoneNotFound)?;

        let replacement = PhoneNumber::new(new_raw)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Find the phone entry equal to `raw`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no entry matches.
    pub fn find_phone(&self, raw: &str) -> BookResult<&PhoneNumber> {
        self.phones
            .iter()
            .find(|phone| phone.as_str() == raw)
            .ok_or(BookError::PhoneNotFound)
    }

    /// Parse `raw` as a `DD.MM.YYYY` date and set it as the birthday,
    /// replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` on malformed input; the
    /// previous birthday (if any) is kept in that case.
    pub fn set_birthday(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|phone| phone.as_str()).collect();
        write!(
            f,
            "Contact name: {}, phone(s): {}",
            self.name,
            phones.join(", ")
        )
    }
}
