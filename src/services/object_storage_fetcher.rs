//! Fetches `gs://bucket/object` locators through an [`ObjectStorageClient`].

use std::io::Read;

use crate::domain::{AppError, Locator};
use crate::ports::{ObjectStorageClient, SourceFetcher};

/// Reads whole objects; the locator host is the bucket and its path (minus the leading `/`)
/// the object name.
#[derive(Debug, Clone)]
pub struct ObjectStorageFetcher<C: ObjectStorageClient> {
    client: C,
}

impl<C: ObjectStorageClient> ObjectStorageFetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: ObjectStorageClient> SourceFetcher for ObjectStorageFetcher<C> {
    fn fetch(&self, locator: &Locator) -> Result<Vec<u8>, AppError> {
        let (bucket, object) = locator.bucket_object();
        let mut reader = self.client.open(&bucket, &object)?;

        let mut data = Vec::new();
        let read = reader.read_to_end(&mut data);

        if let Err(err) = reader.close() {
            tracing::warn!(%bucket, %object, error = %err, "error when closing the bucket reader");
        }

        read.map_err(|err| AppError::ObjectStorage {
            bucket,
            object,
            details: format!("unable to read data from bucket: {}", err),
        })?;

        Ok(data)
    }
}
