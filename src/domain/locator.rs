//! Absolute, scheme-tagged references to configuration sources.

use std::fmt;

use url::Url;

use crate::domain::PathNormalizer;

/// Scheme of the bucket-backed object storage backend.
pub const OBJECT_STORAGE_SCHEME: &str = "gs";
pub const FILE_SCHEME: &str = "file";

/// Backend a locator is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    LocalFile,
    ObjectStorage,
    /// `http`, `https` and any scheme without a dedicated backend.
    Http,
}

impl Scheme {
    fn classify(scheme: &str) -> Self {
        match scheme {
            FILE_SCHEME => Scheme::LocalFile,
            OBJECT_STORAGE_SCHEME => Scheme::ObjectStorage,
            _ => Scheme::Http,
        }
    }
}

/// An absolute URL naming a byte source.
///
/// Equality is structural: two locators are equal only when every URL component matches,
/// so textually different spellings of the same resource are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(Url);

impl Locator {
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Locator)
    }

    pub fn scheme(&self) -> Scheme {
        Scheme::classify(self.0.scheme())
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }

    /// URL path with percent-encoding removed.
    pub fn decoded_path(&self) -> String {
        let raw = self.0.path();
        urlencoding::decode(raw).map(|decoded| decoded.into_owned()).unwrap_or_else(|_| raw.to_string())
    }

    /// Filesystem path for a `file` locator, in the form `normalizer`'s platform expects.
    pub fn to_native_path(&self, normalizer: &PathNormalizer) -> String {
        normalizer.to_native(&self.decoded_path())
    }

    /// `(bucket, object)` pair for an object-storage locator.
    pub fn bucket_object(&self) -> (String, String) {
        (self.host().to_string(), self.decoded_path().trim_start_matches('/').to_string())
    }

    /// Resolve `reference` against this locator, carrying this locator's query over.
    pub(crate) fn join_relative(&self, reference: &str) -> Result<Self, url::ParseError> {
        let mut joined = self.0.join(reference)?;
        joined.set_query(self.0.query());
        Ok(Locator(joined))
    }
}

impl From<Url> for Locator {
    fn from(url: Url) -> Self {
        Locator(url)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
