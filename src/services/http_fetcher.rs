//! HTTP(S) fetcher built on a blocking reqwest client.

use std::fs;
use std::io;

use reqwest::StatusCode;
use reqwest::blocking::{Client, ClientBuilder};

use crate::domain::{AppError, HttpConfig, Locator, PathNormalizer, Scheme};
use crate::ports::SourceFetcher;

/// Client builder carrying every `[http]` transport setting; shared by all remote fetchers.
pub(crate) fn client_builder(config: &HttpConfig) -> ClientBuilder {
    Client::builder()
        .connect_timeout(config.connect_timeout())
        .tcp_keepalive(config.tcp_keepalive())
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(config.pool_idle_timeout())
        .timeout(config.request_timeout())
        .user_agent(config.user_agent.as_str())
}

/// Fetches locators with `GET`; only `200 OK` counts as success.
///
/// `file` locators are served from the filesystem root with HTTP-style status codes, so a
/// missing file surfaces as a 404 like it would from a static file server.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    normalizer: PathNormalizer,
}

impl HttpFetcher {
    /// Build the client from transport settings. Proxies are taken from the environment.
    pub fn new(config: &HttpConfig, normalizer: PathNormalizer) -> Result<Self, AppError> {
        let client = client_builder(config)
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, normalizer })
    }

    /// Read a `file` locator from disk. Directories are not listed; on Unix reading one
    /// surfaces as a 500.
    fn serve_file(&self, locator: &Locator) -> Result<Vec<u8>, AppError> {
        let path = locator.to_native_path(&self.normalizer);
        fs::read(&path).map_err(|err| {
            let status = match err.kind() {
                io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
                io::ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            tracing::debug!(path, error = %err, status = status.as_u16(), "file transport read failed");
            AppError::LoadFailed { status: status.as_u16(), locator: locator.clone() }
        })
    }

    fn get(&self, locator: &Locator) -> Result<Vec<u8>, AppError> {
        let transport_error =
            |e: reqwest::Error| AppError::Http { locator: locator.clone(), details: e.to_string() };

        let response = self.client.get(locator.as_url().clone()).send().map_err(transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::LoadFailed { status: status.as_u16(), locator: locator.clone() });
        }

        let body = response.bytes().map_err(transport_error)?;
        Ok(body.to_vec())
    }
}

impl SourceFetcher for HttpFetcher {
    fn fetch(&self, locator: &Locator) -> Result<Vec<u8>, AppError> {
        match locator.scheme() {
            Scheme::LocalFile => self.serve_file(locator),
            _ => self.get(locator),
        }
    }
}
