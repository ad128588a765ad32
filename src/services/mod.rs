mod gcs_json_client;
mod http_fetcher;
mod include_graph_loader;
mod local_file_fetcher;
mod locator_resolver;
mod object_storage_fetcher;
mod process_working_directory;
mod scheme_fetcher;
mod structured_document;

pub use gcs_json_client::GcsJsonClient;
pub use http_fetcher::HttpFetcher;
pub use include_graph_loader::IncludeGraphLoader;
pub use local_file_fetcher::LocalFileFetcher;
pub use locator_resolver::LocatorResolver;
pub use object_storage_fetcher::ObjectStorageFetcher;
pub use process_working_directory::ProcessWorkingDirectory;
pub use scheme_fetcher::{DefaultFetcher, SchemeFetcher};
pub use structured_document::{Format, INCLUDES_KEY, StructuredDocument, StructuredDocumentFactory};
