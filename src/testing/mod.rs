mod fake_document;
mod fake_object_storage;
mod fixed_working_directory;
mod in_memory_fetcher;

pub use fake_document::{FakeDocument, FakeDocumentFactory};
pub use fake_object_storage::FakeObjectStorage;
pub use fixed_working_directory::FixedWorkingDirectory;
pub use in_memory_fetcher::InMemoryFetcher;
