//! Source fetcher port definition.

use crate::domain::{AppError, Locator};

/// Port returning the full byte content behind an absolute locator.
pub trait SourceFetcher {
    fn fetch(&self, locator: &Locator) -> Result<Vec<u8>, AppError>;
}

impl<T: SourceFetcher + ?Sized> SourceFetcher for &T {
    fn fetch(&self, locator: &Locator) -> Result<Vec<u8>, AppError> {
        (**self).fetch(locator)
    }
}
