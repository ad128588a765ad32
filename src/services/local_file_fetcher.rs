//! Reads `file` locators straight from the filesystem.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, Locator, PathNormalizer};
use crate::ports::SourceFetcher;

/// Fetcher for local files. Works for anything `fs::read` can open, including named pipes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileFetcher {
    normalizer: PathNormalizer,
}

impl LocalFileFetcher {
    pub fn new(normalizer: PathNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn native_path(&self, locator: &Locator) -> PathBuf {
        PathBuf::from(locator.to_native_path(&self.normalizer))
    }
}

impl SourceFetcher for LocalFileFetcher {
    fn fetch(&self, locator: &Locator) -> Result<Vec<u8>, AppError> {
        let path = self.native_path(locator);
        fs::read(&path).map_err(|source| AppError::LocalRead { path, source })
    }
}
