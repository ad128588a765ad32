use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{AppError, Locator, Scheme};
use crate::ports::SourceFetcher;

/// Fetcher serving fixed payloads and recording every request in order.
#[derive(Debug, Default)]
pub struct InMemoryFetcher {
    sources: HashMap<Locator, Vec<u8>>,
    fetched: Mutex<Vec<Locator>>,
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, raw: &str, content: impl AsRef<[u8]>) -> Self {
        let locator = Locator::parse(raw).unwrap();
        self.sources.insert(locator, content.as_ref().to_vec());
        self
    }

    pub fn fetched(&self) -> Vec<Locator> {
        self.fetched.lock().unwrap().clone()
    }
}

impl SourceFetcher for InMemoryFetcher {
    fn fetch(&self, locator: &Locator) -> Result<Vec<u8>, AppError> {
        self.fetched.lock().unwrap().push(locator.clone());

        match self.sources.get(locator) {
            Some(bytes) => Ok(bytes.clone()),
            None if locator.scheme() == Scheme::LocalFile => Err(AppError::LocalRead {
                path: PathBuf::from(locator.decoded_path()),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            }),
            None => Err(AppError::LoadFailed { status: 404, locator: locator.clone() }),
        }
    }
}
