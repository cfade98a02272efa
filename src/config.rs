//! Configuration management for the phone book.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::domain::CountryCodeTable;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "contacts.dat";
const DEFAULT_CSV_FILE: &str = "contacts.csv";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for the phone book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted contact data (default: "contacts.dat")
    pub data_file: PathBuf,

    /// Path the CSV export is written to (default: "contacts.csv")
    pub csv_file: PathBuf,

    /// Supported country codes and their local-number lengths
    pub country_codes: CountryCodeTable,

    /// Log level used when RUST_LOG is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_DATA_FILE`: data file path (default: contacts.dat)
    /// - `PHONEBOOK_CSV_FILE`: CSV export path (default: contacts.csv)
    /// - `PHONEBOOK_COUNTRY_CODES`: extra `code=length` pairs, comma separated,
    ///   merged over the built-in table
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let data_file = Self::env_path("PHONEBOOK_DATA_FILE", DEFAULT_DATA_FILE);
        let csv_file = Self::env_path("PHONEBOOK_CSV_FILE", DEFAULT_CSV_FILE);

        let country_codes = match env::var("PHONEBOOK_COUNTRY_CODES") {
            Ok(val) => Self::parse_country_codes(&val, CountryCodeTable::default())?,
            Err(_) => CountryCodeTable::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            data_file,
            csv_file,
            country_codes,
            log_level,
        })
    }

    fn env_path(var_name: &str, default: &str) -> PathBuf {
        env::var(var_name)
            .ok()
            .filter(|val| !val.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(default))
    }

    /// Parse `code=length` pairs and merge them over `base`.
    fn parse_country_codes(value: &str, base: CountryCodeTable) -> ConfigResult<CountryCodeTable> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            var: "PHONEBOOK_COUNTRY_CODES".to_string(),
            reason,
        };

        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .try_fold(base, |table, entry| -> ConfigResult<CountryCodeTable> {
                let (code, len) = entry
                    .split_once('=')
                    .ok_or_else(|| invalid(format!("Expected code=length, got: {}", entry)))?;
                let code = code.trim();

                if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid(format!("Country code must be digits, got: {}", code)));
                }

                let len = len
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|len| *len > 0)
                    .ok_or_else(|| {
                        invalid(format!("Length must be a positive number, got: {}", len.trim()))
                    })?;

                Ok(table.with_entry(code, len))
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            csv_file: PathBuf::from(DEFAULT_CSV_FILE),
            country_codes: CountryCodeTable::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
