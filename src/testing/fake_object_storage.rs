use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{ObjectReader, ObjectStorageClient};

/// In-memory buckets. Objects registered as broken fail on read.
#[derive(Debug, Default)]
pub struct FakeObjectStorage {
    objects: HashMap<(String, String), Option<Vec<u8>>>,
    opened: Mutex<Vec<(String, String)>>,
    closed: Arc<AtomicUsize>,
    fail_close: bool,
}

impl FakeObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, bucket: &str, object: &str, data: &[u8]) -> Self {
        self.objects.insert((bucket.to_string(), object.to_string()), Some(data.to_vec()));
        self
    }

    pub fn with_broken_object(mut self, bucket: &str, object: &str) -> Self {
        self.objects.insert((bucket.to_string(), object.to_string()), None);
        self
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub fn opened(&self) -> Vec<(String, String)> {
        self.opened.lock().unwrap().clone()
    }

    pub fn closed_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl ObjectStorageClient for FakeObjectStorage {
    fn open(&self, bucket: &str, object: &str) -> Result<Box<dyn ObjectReader>, AppError> {
        let key = (bucket.to_string(), object.to_string());
        let entry = self.objects.get(&key).ok_or_else(|| AppError::ObjectStorage {
            bucket: bucket.to_string(),
            object: object.to_string(),
            details: "unable to open file from bucket: object not found".into(),
        })?;
        self.opened.lock().unwrap().push(key);

        Ok(Box::new(FakeReader {
            data: entry.clone().map(Cursor::new),
            closed: Arc::clone(&self.closed),
            fail_close: self.fail_close,
        }))
    }
}

struct FakeReader {
    data: Option<Cursor<Vec<u8>>>,
    closed: Arc<AtomicUsize>,
    fail_close: bool,
}

impl Read for FakeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.data {
            Some(cursor) => cursor.read(buf),
            None => Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset")),
        }
    }
}

impl ObjectReader for FakeReader {
    fn close(self: Box<Self>) -> io::Result<()> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        if self.fail_close { Err(io::Error::other("close failed")) } else { Ok(()) }
    }
}
