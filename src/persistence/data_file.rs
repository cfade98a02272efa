//! Versioned binary data file holding the whole contact list.
//!
//! File format:
//! - Header: magic bytes `PHBK`, one format-version byte
//! - Payload: `serde_json` array of contacts in store order

use crate::error::{PersistenceError, PersistenceResult};
use crate::models::Contact;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

pub const DATA_FILE_MAGIC: [u8; 4] = *b"PHBK";
pub const DATA_FILE_VERSION: u8 = 1;

const HEADER_LEN: usize = DATA_FILE_MAGIC.len() + 1;

/// Serialize `contacts` into the data file format.
pub fn encode_contacts(contacts: &[Contact]) -> serde_json::Result<Vec<u8>> {
    let mut data = Vec::with_capacity(HEADER_LEN + contacts.len() * 96);
    data.extend_from_slice(&DATA_FILE_MAGIC);
    data.push(DATA_FILE_VERSION);
    serde_json::to_writer(&mut data, contacts)?;
    Ok(data)
}

/// Parse bytes produced by [`encode_contacts`]. Errors are human-readable reasons.
pub fn decode_contacts(data: &[u8]) -> Result<Vec<Contact>, String> {
    if data.len() < HEADER_LEN || !data.starts_with(&DATA_FILE_MAGIC) {
        return Err("missing file header".to_string());
    }

    let version = data[DATA_FILE_MAGIC.len()];
    if version != DATA_FILE_VERSION {
        return Err(format!("unsupported format version {}", version));
    }

    serde_json::from_slice(&data[HEADER_LEN..]).map_err(|e| format!("invalid payload: {}", e))
}

/// Write every contact to `path`, replacing any previous file.
///
/// The data is written to a uniquely named temp file in the same directory
/// and renamed into place, so an interrupted save never leaves a half-written
/// data file behind and no other file is touched.
pub fn save_contacts(contacts: &[Contact], path: &Path) -> PersistenceResult<()> {
    let data = encode_contacts(contacts).map_err(|e| {
        PersistenceError::io(path, std::io::Error::new(ErrorKind::InvalidData, e))
    })?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
        warn!("Failed to create temp file in {}: {}", dir.display(), e);
        PersistenceError::io(dir, e)
    })?;

    temp.write_all(&data)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| {
            warn!("Failed to write {}: {}", temp.path().display(), e);
            PersistenceError::io(temp.path(), e)
        })?;

    // On failure the temp file is removed when dropped
    temp.persist(path).map_err(|e| {
        warn!("Failed to move data file into place at {}: {}", path.display(), e.error);
        PersistenceError::io(path, e.error)
    })?;

    info!(count = contacts.len(), "Saved contacts to {}", path.display());
    Ok(())
}

/// Read the contact list from `path`.
///
/// A missing file is a first run and yields an empty list.
pub fn load_contacts(path: &Path) -> PersistenceResult<Vec<Contact>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No data file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return Err(PersistenceError::corrupt(path, e.to_string()));
        }
    };

    let contacts = decode_contacts(&data).map_err(|reason| {
        warn!("Rejecting {}: {}", path.display(), reason);
        PersistenceError::corrupt(path, reason)
    })?;

    info!(count = contacts.len(), "Loaded contacts from {}", path.display());
    Ok(contacts)
}
