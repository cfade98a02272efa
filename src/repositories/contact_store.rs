use super::traits::{ContactRepository, CountryCodeGroups};
use crate::models::Contact;
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory, exclusively owned contact collection.
///
/// Single-threaded by contract. A synchronized wrapper can implement
/// [`ContactRepository`] on top of this type without changing callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the store and return its contacts in insertion order.
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }

    fn sort_by_name(contacts: &mut [&Contact]) {
        // sort_by_cached_key is stable, ties keep store order
        contacts.sort_by_cached_key(|c| c.name_key());
    }

    fn matches_token(contact: &Contact, token: &str) -> bool {
        contact.name_key() == token
            || contact.phone_numbers().iter().any(|phone| {
                phone.compact().to_lowercase().contains(token)
                    || phone.number().to_lowercase().contains(token)
            })
    }
}

impl From<Vec<Contact>> for ContactStore {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl ContactRepository for ContactStore {
    fn add(&mut self, contact: Contact) {
        debug!(name = contact.name(), "Adding contact");
        self.contacts.push(contact);
    }

    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn count(&self) -> usize {
        self.contacts.len()
    }

    fn sorted_by_name(&self) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        Self::sort_by_name(&mut sorted);
        sorted
    }

    fn find_by_partial_name(&self, query: &str) -> Vec<&Contact> {
        let query = query.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.name_key().contains(&query))
            .collect()
    }

    fn find_by_name(&self, name: &str) -> Option<&Contact> {
        let name = name.to_lowercase();
        self.contacts.iter().find(|c| c.name_key() == name)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Contact> {
        let name = name.to_lowercase();
        self.contacts.iter_mut().find(|c| c.name_key() == name)
    }

    fn remove_matching(&mut self, token: &str) -> bool {
        // A blank token is a substring of every number, so it clears all
        // contacts that have a phone.
        let token = token.trim().to_lowercase();

        let before = self.contacts.len();
        self.contacts.retain(|c| !Self::matches_token(c, &token));
        let removed = before - self.contacts.len();

        debug!(token = %token, removed, "Removed matching contacts");
        removed > 0
    }

    fn group_by_country_code(&self) -> CountryCodeGroups<'_> {
        let mut groups: BTreeMap<String, Vec<&Contact>> = BTreeMap::new();

        for contact in &self.contacts {
            for phone in contact.phone_numbers() {
                let members = groups.entry(phone.country_code().to_string()).or_default();
                // A contact's numbers are visited together, so a repeat is always the last member
                let already_member = members
                    .last()
                    .is_some_and(|last| std::ptr::eq(*last, contact));
                if !already_member {
                    members.push(contact);
                }
            }
        }

        for members in groups.values_mut() {
            Self::sort_by_name(members);
        }
        groups
    }
}
