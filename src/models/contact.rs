//! Contact model representing a person in the phone book.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Reject blank names when reading persisted contacts.
fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    if name.trim().is_empty() {
        return Err(serde::de::Error::custom(ValidationError::EmptyName));
    }
    Ok(name)
}

/// A named person with one email address and zero or more phone numbers.
///
/// Phone numbers keep insertion order and may repeat. The email can only be
/// replaced by another valid address, so a failed update leaves the contact
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,

    email: EmailAddress,

    #[serde(default)]
    phone_numbers: Vec<PhoneNumber>,
}

impl Contact {
    /// Create a contact with an empty phone list.
    ///
    /// The name is stored trimmed.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyName` if the trimmed name is empty
    /// - `ValidationError::InvalidEmail` if the email does not match the pattern
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let email = EmailAddress::new(email)?;

        Ok(Self {
            name: name.to_string(),
            email,
            phone_numbers: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone_numbers(&self) -> &[PhoneNumber] {
        &self.phone_numbers
    }

    /// Append a validated phone number. No deduplication is performed.
    pub fn add_phone_number(&mut self, phone: PhoneNumber) {
        self.phone_numbers.push(phone);
    }

    /// Swap in a whole new phone list, returning the previous one.
    pub fn replace_phone_numbers(&mut self, phones: Vec<PhoneNumber>) -> Vec<PhoneNumber> {
        std::mem::replace(&mut self.phone_numbers, phones)
    }

    /// Replace the email if the new one is valid; otherwise leave it unchanged.
    pub fn update_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = EmailAddress::new(email)?;
        Ok(())
    }

    /// Lower-cased name used for case-insensitive ordering and lookup.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether any phone number uses the given country code.
    pub fn has_country_code(&self, code: &str) -> bool {
        self.phone_numbers.iter().any(|p| p.country_code() == code)
    }

    /// Phone numbers rendered as `+<code> <number>` and joined by two spaces.
    pub fn phone_numbers_display(&self) -> String {
        self.phone_numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phone Numbers: {}", self.phone_numbers_display())?;
        write!(f, "Email: {}", self.email)
    }
}
