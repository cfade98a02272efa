//! Test fixtures and sample data.
//!
//! Helpers for building validated contacts without repeating the
//! validator boilerplate in every test.

use phonebook::domain::{CountryCodeTable, PhoneNumber, PhoneNumberValidator};
use phonebook::models::Contact;

/// Validator over the built-in country code table.
pub fn validator() -> PhoneNumberValidator {
    PhoneNumberValidator::new(CountryCodeTable::default())
}

/// A validated phone number. Panics on invalid input.
pub fn phone(code: &str, digits: &str) -> PhoneNumber {
    validator().validate(code, digits).unwrap()
}

/// A contact with the given phone numbers.
pub fn sample_contact(name: &str, email: &str, phones: &[(&str, &str)]) -> Contact {
    let mut contact = Contact::new(name, email).unwrap();
    for (code, digits) in phones {
        contact.add_phone_number(phone(code, digits));
    }
    contact
}

/// A contact with a generated email and no phone numbers.
#[allow(dead_code)]
pub fn sample_contact_name_only(name: &str) -> Contact {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    Contact::new(name, &email).unwrap()
}
