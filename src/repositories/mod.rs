mod contact_store;
mod traits;

pub use contact_store::ContactStore;
pub use traits::{ContactRepository, CountryCodeGroups};
