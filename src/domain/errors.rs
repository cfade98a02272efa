//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Every variant rejects a single piece of input; none of them imply that
/// previously accepted state was touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty after trimming.
    EmptyName,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The country code is not present in the country code table.
    UnsupportedCountryCode(String),

    /// The local number is not all digits or has the wrong length.
    InvalidNumberFormat {
        country_code: String,
        required_length: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email format: {}", email),
            Self::UnsupportedCountryCode(code) => {
                write!(f, "Unsupported country code: +{}", code)
            }
            Self::InvalidNumberFormat {
                country_code,
                required_length,
            } => write!(
                f,
                "Invalid number length or format for country code +{}. Required length: {}",
                country_code, required_length
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");
        assert_eq!(
            ValidationError::UnsupportedCountryCode("999".to_string()).to_string(),
            "Unsupported country code: +999"
        );

        let err = ValidationError::InvalidNumberFormat {
            country_code: "61".to_string(),
            required_length: 9,
        };
        assert!(err.to_string().contains("+61"));
        assert!(err.to_string().ends_with("Required length: 9"));
    }
}
