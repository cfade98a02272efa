use phonebook::error::{PersistenceError, PersistenceResult};
use phonebook::models::Contact;
use phonebook::persistence::{csv_row, ContactStorage};
use std::cell::RefCell;

/// In-memory `ContactStorage` that records what was saved and exported.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactStorage {
    stored: Vec<Contact>,
    corrupt: bool,
    fail_writes: bool,
    saved: RefCell<Vec<Vec<Contact>>>,
    exported: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl MockContactStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose load returns `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            stored: contacts,
            ..Self::default()
        }
    }

    /// Storage whose load fails with `CorruptState`.
    pub fn corrupt() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    /// Storage whose save and export fail with an I/O error.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Every contact list passed to `save`, oldest first.
    pub fn saved(&self) -> Vec<Vec<Contact>> {
        self.saved.borrow().clone()
    }

    /// CSV rows of the most recent export.
    pub fn exported_rows(&self) -> Vec<String> {
        self.exported.borrow().clone()
    }

    fn write_failure() -> PersistenceError {
        PersistenceError::Io {
            path: "mock".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        }
    }
}

impl ContactStorage for MockContactStorage {
    fn load(&self) -> PersistenceResult<Vec<Contact>> {
        if self.corrupt {
            return Err(PersistenceError::CorruptState {
                path: "mock".into(),
                reason: "bad header".to_string(),
            });
        }
        Ok(self.stored.clone())
    }

    fn save(&self, contacts: &[Contact]) -> PersistenceResult<()> {
        if self.fail_writes {
            return Err(Self::write_failure());
        }
        self.saved.borrow_mut().push(contacts.to_vec());
        Ok(())
    }

    fn export_csv(&self, contacts: &[Contact]) -> PersistenceResult<()> {
        if self.fail_writes {
            return Err(Self::write_failure());
        }
        *self.exported.borrow_mut() = contacts.iter().map(csv_row).collect();
        Ok(())
    }
}
