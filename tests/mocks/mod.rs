mod mock_contact_repository;
mod mock_contact_storage;

pub use mock_contact_repository::MockContactRepository;
pub use mock_contact_storage::MockContactStorage;
