//! CSV snapshot of the contact list.
//!
//! Fields are wrapped in double quotes but embedded quotes and commas are
//! written as-is, matching the established export format.

use crate::error::{PersistenceError, PersistenceResult};
use crate::models::Contact;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub const CSV_HEADER: &str = "Name,Email,PhoneNumbers";

const PHONE_SEPARATOR: &str = " | ";

/// Render one contact as a CSV row without the trailing newline.
pub fn csv_row(contact: &Contact) -> String {
    let phones = contact
        .phone_numbers()
        .iter()
        .map(|p| p.compact())
        .collect::<Vec<_>>()
        .join(PHONE_SEPARATOR);

    format!("\"{}\",\"{}\",\"{}\"", contact.name(), contact.email(), phones)
}

/// Write the header and one row per contact to `writer`.
pub fn write_csv<W: Write>(contacts: &[Contact], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for contact in contacts {
        writeln!(writer, "{}", csv_row(contact))?;
    }
    writer.flush()
}

/// Export `contacts` to a CSV file at `path`, truncating any existing file.
pub fn export_csv(contacts: &[Contact], path: &Path) -> PersistenceResult<()> {
    let file = File::create(path).map_err(|e| {
        warn!("Failed to create {}: {}", path.display(), e);
        PersistenceError::io(path, e)
    })?;

    let mut writer = BufWriter::new(file);
    write_csv(contacts, &mut writer).map_err(|e| {
        warn!("Failed to write {}: {}", path.display(), e);
        PersistenceError::io(path, e)
    })?;

    info!(count = contacts.len(), "Exported contacts to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountryCodeTable, PhoneNumberValidator};

    #[test]
    fn test_csv_row_joins_phones_without_trailing_separator() {
        let validator = PhoneNumberValidator::new(CountryCodeTable::default());
        let mut contact = Contact::new("Ann", "ann@example.com").unwrap();
        contact.add_phone_number(validator.validate("1", "2025550100").unwrap());
        contact.add_phone_number(validator.validate("61", "412345678").unwrap());

        assert_eq!(
            csv_row(&contact),
            r#""Ann","ann@example.com","+12025550100 | +61412345678""#
        );
    }

    #[test]
    fn test_csv_row_without_phones() {
        let contact = Contact::new("Ann", "ann@example.com").unwrap();
        assert_eq!(csv_row(&contact), r#""Ann","ann@example.com","""#);
    }

    #[test]
    fn test_csv_does_not_escape_embedded_quotes() {
        let contact = Contact::new("Ann \"Nan\", Jr", "ann@example.com").unwrap();
        assert_eq!(
            csv_row(&contact),
            r#""Ann "Nan", Jr","ann@example.com","""#
        );
    }

    #[test]
    fn test_write_csv_header_only_for_empty_list() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Name,Email,PhoneNumbers\n");
    }
}
