//! Object storage client port definition.

use std::io::{self, Read};

use crate::domain::AppError;

/// Readable handle on a single stored object.
pub trait ObjectReader: Read {
    /// Release the handle. Called once the object has been read, successfully or not.
    fn close(self: Box<Self>) -> io::Result<()>;
}

/// Port for bucket/object style storage backends.
pub trait ObjectStorageClient {
    fn open(&self, bucket: &str, object: &str) -> Result<Box<dyn ObjectReader>, AppError>;
}

impl<T: ObjectStorageClient + ?Sized> ObjectStorageClient for &T {
    fn open(&self, bucket: &str, object: &str) -> Result<Box<dyn ObjectReader>, AppError> {
        (**self).open(bucket, object)
    }
}
