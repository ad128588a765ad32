//! Routes each locator to the backend its scheme names.

use crate::domain::{AppError, LoaderConfig, Locator, PathNormalizer, Scheme};
use crate::ports::SourceFetcher;
use crate::services::{GcsJsonClient, HttpFetcher, LocalFileFetcher, ObjectStorageFetcher};

/// The production backend set.
pub type DefaultFetcher = SchemeFetcher<LocalFileFetcher, HttpFetcher, ObjectStorageFetcher<GcsJsonClient>>;

/// [`SourceFetcher`] that dispatches on [`Scheme`].
#[derive(Debug, Clone)]
pub struct SchemeFetcher<L, H, O> {
    local: L,
    http: H,
    object_storage: O,
    fallback_to_http: bool,
}

impl DefaultFetcher {
    /// Build every backend from `config`.
    pub fn from_config(config: &LoaderConfig, normalizer: PathNormalizer) -> Result<Self, AppError> {
        let storage = GcsJsonClient::new(&config.object_storage, &config.http)?;

        Ok(SchemeFetcher::new(
            LocalFileFetcher::new(normalizer),
            HttpFetcher::new(&config.http, normalizer)?,
            ObjectStorageFetcher::new(storage),
        )
        .with_local_fallback(config.local.fallback_to_http))
    }
}

impl<L, H, O> SchemeFetcher<L, H, O>
where
    L: SourceFetcher,
    H: SourceFetcher,
    O: SourceFetcher,
{
    pub fn new(local: L, http: H, object_storage: O) -> Self {
        Self { local, http, object_storage, fallback_to_http: false }
    }

    /// Hand `file` locators that cannot be read locally to the HTTP backend.
    pub fn with_local_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_http = enabled;
        self
    }
}

impl<L, H, O> SourceFetcher for SchemeFetcher<L, H, O>
where
    L: SourceFetcher,
    H: SourceFetcher,
    O: SourceFetcher,
{
    fn fetch(&self, locator: &Locator) -> Result<Vec<u8>, AppError> {
        let scheme = locator.scheme();
        tracing::debug!(%locator, ?scheme, "fetching");

        match scheme {
            Scheme::LocalFile => match self.local.fetch(locator) {
                Ok(bytes) => Ok(bytes),
                Err(err) if self.fallback_to_http => {
                    tracing::debug!(%locator, error = %err, "local read failed, retrying through HTTP transport");
                    self.http.fetch(locator)
                }
                Err(err) => Err(err),
            },
            Scheme::ObjectStorage => self.object_storage.fetch(locator),
            Scheme::Http => self.http.fetch(locator),
        }
    }
}
