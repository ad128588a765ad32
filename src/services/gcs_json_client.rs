//! Google Cloud Storage client speaking the JSON API media endpoint.

use std::io::{self, Read};

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};

use crate::domain::{AppError, HttpConfig, ObjectStorageConfig};
use crate::ports::{ObjectReader, ObjectStorageClient};
use crate::services::http_fetcher::client_builder;

/// Blocking GCS client: `GET {endpoint}/storage/v1/b/{bucket}/o/{object}?alt=media`.
#[derive(Clone)]
pub struct GcsJsonClient {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
}

impl std::fmt::Debug for GcsJsonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GcsJsonClient")
            .field("endpoint", &self.endpoint)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl GcsJsonClient {
    pub fn new(storage: &ObjectStorageConfig, http: &HttpConfig) -> Result<Self, AppError> {
        let client = client_builder(http)
            .build()
            .map_err(|e| {
                AppError::config_error(format!("unable to create gcp storage client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: storage.effective_endpoint(),
            access_token: storage.access_token(),
        })
    }

    fn media_url(&self, bucket: &str, object: &str) -> String {
        format!(
            "{}/storage/v1/b/{}/o/{}?alt=media",
            self.endpoint,
            urlencoding::encode(bucket),
            urlencoding::encode(object)
        )
    }
}

impl ObjectStorageClient for GcsJsonClient {
    fn open(&self, bucket: &str, object: &str) -> Result<Box<dyn ObjectReader>, AppError> {
        let open_error = |details: String| AppError::ObjectStorage {
            bucket: bucket.to_string(),
            object: object.to_string(),
            details: format!("unable to open file from bucket: {}", details),
        };

        let mut request = self.client.get(self.media_url(bucket, object));
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| open_error(e.to_string()))?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(open_error(format!("HTTP {}", status.as_u16())));
        }

        Ok(Box::new(MediaReader { response }))
    }
}

/// Streaming body of a media download.
struct MediaReader {
    response: Response,
}

impl Read for MediaReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.response.read(buf)
    }
}

impl ObjectReader for MediaReader {
    fn close(self: Box<Self>) -> io::Result<()> {
        drop(self.response);
        Ok(())
    }
}
