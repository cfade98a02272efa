//! PhoneNumber value object and its validator.

use super::country_codes::CountryCodeTable;
use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A phone number split into its dialing prefix and local digits.
///
/// Instances are produced by [`PhoneNumberValidator::validate`] and are
/// immutable afterwards.
///
/// # Example
///
/// ```
/// use phonebook::domain::{CountryCodeTable, PhoneNumberValidator};
///
/// let validator = PhoneNumberValidator::new(CountryCodeTable::default());
/// let phone = validator.validate("1", "5551234567").unwrap();
/// assert_eq!(phone.to_string(), "+1 5551234567");
/// assert_eq!(phone.compact(), "+15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber {
    country_code: String,
    number: String,
}

impl PhoneNumber {
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Local digits without the country code.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Render as `+<code><number>` with no separator.
    pub fn compact(&self) -> String {
        format!("+{}{}", self.country_code, self.number)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} {}", self.country_code, self.number)
    }
}

/// Validates `(country code, digits)` pairs against a [`CountryCodeTable`].
#[derive(Debug, Clone, Default)]
pub struct PhoneNumberValidator {
    table: CountryCodeTable,
}

impl PhoneNumberValidator {
    pub fn new(table: CountryCodeTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CountryCodeTable {
        &self.table
    }

    pub fn is_supported_code(&self, code: &str) -> bool {
        self.table.contains(code)
    }

    /// Required digit count for `code`, or `None` when the code is unsupported.
    pub fn required_length(&self, code: &str) -> Option<usize> {
        self.table.required_length(code)
    }

    /// Build a [`PhoneNumber`] if the pair is acceptable.
    ///
    /// # Errors
    ///
    /// - `ValidationError::UnsupportedCountryCode` if `code` is not in the table
    /// - `ValidationError::InvalidNumberFormat` if `digits` contains a non-digit
    ///   or has the wrong length for `code`
    pub fn validate(&self, code: &str, digits: &str) -> Result<PhoneNumber, ValidationError> {
        let required_length = self
            .required_length(code)
            .ok_or_else(|| ValidationError::UnsupportedCountryCode(code.to_string()))?;

        let all_digits = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());
        if !all_digits || digits.len() != required_length {
            return Err(ValidationError::InvalidNumberFormat {
                country_code: code.to_string(),
                required_length,
            });
        }

        Ok(PhoneNumber {
            country_code: code.to_string(),
            number: digits.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PhoneNumberValidator {
        PhoneNumberValidator::new(CountryCodeTable::default())
    }

    #[test]
    fn test_validate_accepts_every_default_code() {
        let v = validator();
        for (code, len) in CountryCodeTable::default().iter() {
            let digits = "7".repeat(len);
            let phone = v.validate(code, &digits).unwrap();
            assert_eq!(phone.country_code(), code);
            assert_eq!(phone.number(), digits);
        }
    }

    #[test]
    fn test_validate_unsupported_code() {
        let v = validator();
        assert_eq!(
            v.validate("999", "5551234567"),
            Err(ValidationError::UnsupportedCountryCode("999".to_string()))
        );
        // Code is checked before digits
        assert_eq!(
            v.validate("", "abc"),
            Err(ValidationError::UnsupportedCountryCode(String::new()))
        );
    }

    #[test]
    fn test_validate_wrong_length() {
        let v = validator();
        for digits in ["555123456", "55512345678", ""] {
            assert_eq!(
                v.validate("1", digits),
                Err(ValidationError::InvalidNumberFormat {
                    country_code: "1".to_string(),
                    required_length: 10,
                })
            );
        }
        // 10 digits are too many for Australia
        assert!(v.validate("61", "0412345678").is_err());
        assert!(v.validate("61", "412345678").is_ok());
    }

    #[test]
    fn test_validate_non_digits() {
        let v = validator();
        assert!(v.validate("44", "20-7946-09").is_err());
        assert!(v.validate("44", "207946O958").is_err());
        assert!(v.validate("44", "２０７９４６０９５８").is_err());
    }

    #[test]
    fn test_injected_table() {
        let v = PhoneNumberValidator::new(CountryCodeTable::empty().with_entry("49", 11));
        assert!(v.is_supported_code("49"));
        assert!(!v.is_supported_code("1"));
        assert!(v.validate("49", "15123456789").is_ok());
    }

    #[test]
    fn test_phone_rendering() {
        let phone = validator().validate("44", "2079460958").unwrap();
        assert_eq!(phone.to_string(), "+44 2079460958");
        assert_eq!(phone.compact(), "+442079460958");
    }
}
