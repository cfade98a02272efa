//! Phonebook - an interactive terminal contact manager.
//!
//! Contacts hold a name, an email address and any number of phone numbers
//! with country codes. They live in memory while the program runs, are saved
//! to a versioned data file on exit and reloaded on startup, and can be
//! exported as CSV.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (email, phone number) and the country code table
//! - **models**: The `Contact` entity
//! - **repositories**: `ContactRepository` trait and the in-memory `ContactStore`
//! - **persistence**: Data file save/load and CSV export
//! - **controller**: Text menu that drives the store
//! - **config**: Configuration from environment variables
//! - **error**: Persistence and configuration error types

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod models;
pub mod persistence;
pub mod repositories;

pub use config::Config;
pub use controller::{load_store, InteractionController, MenuChoice, Prompter};
pub use domain::{CountryCodeTable, EmailAddress, PhoneNumber, PhoneNumberValidator, ValidationError};
pub use error::{ConfigError, PersistenceError};
pub use models::Contact;
pub use persistence::{ContactStorage, FileContactStorage};
pub use repositories::{ContactRepository, ContactStore};
