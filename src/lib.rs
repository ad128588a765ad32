//! conflate: resolve configuration documents that are split across files, URLs and buckets
//! and linked by include references.
//!
//! The loader fetches every starting source, follows the includes each one declares and
//! returns the payloads with includes ahead of the documents that include them, ready to be
//! merged in order.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use domain::PathNormalizer;
use services::{DefaultFetcher, IncludeGraphLoader, LocatorResolver, StructuredDocumentFactory};

pub use domain::{AppError, Document, LoaderConfig, Locator, Platform, Scheme};
pub use ports::{DocumentFactory, SourceFetcher};
pub use services::{Format, StructuredDocument};

/// Loader wired to the local filesystem, HTTP(S) and object storage.
pub type DefaultLoader = IncludeGraphLoader<DefaultFetcher, StructuredDocumentFactory>;

/// Build the production loader for the running process.
pub fn default_loader(config: &LoaderConfig) -> Result<DefaultLoader, AppError> {
    config.validate()?;
    let normalizer = PathNormalizer::current();
    let fetcher = DefaultFetcher::from_config(config, normalizer)?;

    Ok(IncludeGraphLoader::new(LocatorResolver::current(), fetcher, StructuredDocumentFactory))
}

/// Load the documents behind `paths` and everything they include.
///
/// Relative paths resolve against the current working directory. Includes come before the
/// documents that declare them; siblings keep their declaration order.
pub fn load_paths<S: AsRef<str>>(paths: &[S]) -> Result<Vec<StructuredDocument>, AppError> {
    default_loader(&LoaderConfig::default())?.load_paths(paths)
}

/// Load in-memory payloads (e.g. passed on a command line) and everything they include.
pub fn load_bytes(blobs: Vec<Vec<u8>>) -> Result<Vec<StructuredDocument>, AppError> {
    default_loader(&LoaderConfig::default())?.load_bytes(blobs)
}
