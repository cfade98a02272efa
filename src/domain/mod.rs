//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for email addresses and phone
//! numbers together with the country code table that drives phone validation.
//! These value objects validate at construction time and prevent invalid data
//! from being represented in the system.

pub mod country_codes;
pub mod email;
pub mod errors;
pub mod phone;

pub use country_codes::{CountryCodeTable, DEFAULT_COUNTRY_CODES};
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::{PhoneNumber, PhoneNumberValidator};
