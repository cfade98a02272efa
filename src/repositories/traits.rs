use crate::models::Contact;
use std::collections::BTreeMap;

/// Contacts grouped by country code, each group sorted by name.
pub type CountryCodeGroups<'a> = BTreeMap<String, Vec<&'a Contact>>;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage so callers such as the
/// interaction controller do not depend on a concrete container. Insertion
/// order is the canonical order for every method that does not say otherwise.
pub trait ContactRepository {
    /// Append a contact. Duplicate names and emails are allowed.
    fn add(&mut self, contact: Contact);

    /// All contacts in insertion order.
    fn contacts(&self) -> &[Contact];

    /// Number of contacts currently held.
    fn count(&self) -> usize;

    /// Contacts stably sorted by lower-cased name.
    fn sorted_by_name(&self) -> Vec<&Contact>;

    /// Contacts whose name contains `query`, ignoring case, in store order.
    fn find_by_partial_name(&self, query: &str) -> Vec<&Contact>;

    /// First contact whose name equals `name`, ignoring case.
    fn find_by_name(&self, name: &str) -> Option<&Contact>;

    /// Mutable variant of [`ContactRepository::find_by_name`].
    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Contact>;

    /// Remove every contact matched by `token`.
    ///
    /// A contact matches when its name equals the token, or when one of its
    /// phone numbers contains the token either as `+<code><number>` or as bare
    /// digits. Comparison ignores case. Returns whether anything was removed.
    fn remove_matching(&mut self, token: &str) -> bool;

    /// Partition contacts by the country codes of their phone numbers.
    fn group_by_country_code(&self) -> CountryCodeGroups<'_>;
}
