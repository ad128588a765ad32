mod document_factory;
mod object_storage;
mod source_fetcher;
mod working_directory;

pub use document_factory::DocumentFactory;
pub use object_storage::{ObjectReader, ObjectStorageClient};
pub use source_fetcher::SourceFetcher;
pub use working_directory::WorkingDirectory;
