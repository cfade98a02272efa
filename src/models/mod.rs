//! Data models for phone book entities.

pub mod contact;

pub use contact::Contact;
