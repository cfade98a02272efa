//! Saving, loading and exporting the contact list.
//!
//! [`ContactStorage`] is the seam the interaction controller talks to;
//! [`FileContactStorage`] is the production implementation backed by the
//! versioned data file in [`data_file`].

pub mod csv_export;
pub mod data_file;

pub use csv_export::{csv_row, export_csv, write_csv, CSV_HEADER};
pub use data_file::{
    decode_contacts, encode_contacts, load_contacts, save_contacts, DATA_FILE_MAGIC,
    DATA_FILE_VERSION,
};

use crate::error::PersistenceResult;
use crate::models::Contact;
use std::path::{Path, PathBuf};

/// Whole-collection persistence for contacts.
pub trait ContactStorage {
    /// Load every stored contact. A missing store is an empty list.
    fn load(&self) -> PersistenceResult<Vec<Contact>>;

    /// Replace the stored contacts with `contacts`.
    fn save(&self, contacts: &[Contact]) -> PersistenceResult<()>;

    /// Write a CSV snapshot of `contacts`.
    fn export_csv(&self, contacts: &[Contact]) -> PersistenceResult<()>;
}

/// File-backed storage using a data file and a CSV export path.
#[derive(Debug, Clone)]
pub struct FileContactStorage {
    data_path: PathBuf,
    csv_path: PathBuf,
}

impl FileContactStorage {
    pub fn new(data_path: impl Into<PathBuf>, csv_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            csv_path: csv_path.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

impl ContactStorage for FileContactStorage {
    fn load(&self) -> PersistenceResult<Vec<Contact>> {
        load_contacts(&self.data_path)
    }

    fn save(&self, contacts: &[Contact]) -> PersistenceResult<()> {
        save_contacts(contacts, &self.data_path)
    }

    fn export_csv(&self, contacts: &[Contact]) -> PersistenceResult<()> {
        export_csv(contacts, &self.csv_path)
    }
}
