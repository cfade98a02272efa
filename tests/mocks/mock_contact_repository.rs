use phonebook::models::Contact;
use phonebook::repositories::{ContactRepository, ContactStore, CountryCodeGroups};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Delegates to a real `ContactStore` and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    store: ContactStore,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with contacts.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            store: ContactStore::from(contacts),
            call_counts: RefCell::new(HashMap::new()),
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.borrow_mut().clear();
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&mut self, contact: Contact) {
        self.track_call("add");
        self.store.add(contact);
    }

    fn contacts(&self) -> &[Contact] {
        self.track_call("contacts");
        self.store.contacts()
    }

    fn count(&self) -> usize {
        self.track_call("count");
        self.store.count()
    }

    fn sorted_by_name(&self) -> Vec<&Contact> {
        self.track_call("sorted_by_name");
        self.store.sorted_by_name()
    }

    fn find_by_partial_name(&self, query: &str) -> Vec<&Contact> {
        self.track_call("find_by_partial_name");
        self.store.find_by_partial_name(query)
    }

    fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.track_call("find_by_name");
        self.store.find_by_name(name)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.track_call("find_by_name_mut");
        self.store.find_by_name_mut(name)
    }

    fn remove_matching(&mut self, token: &str) -> bool {
        self.track_call("remove_matching");
        self.store.remove_matching(token)
    }

    fn group_by_country_code(&self) -> CountryCodeGroups<'_> {
        self.track_call("group_by_country_code");
        self.store.group_by_country_code()
    }
}
