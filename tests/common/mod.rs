//! Shared testing utilities for conflate integration tests.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use conflate::{Locator, StructuredDocument};
use tempfile::TempDir;
use url::Url;

/// Isolated directory tree of configuration files.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    original_cwd: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let original_cwd = env::current_dir().expect("Failed to get current directory");

        Self { root, work_dir, original_cwd }
    }

    /// Directory used as the process working directory by `with_work_dir`.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `content` to `relative` under the work directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// `file://` locator for a fixture under the work directory.
    pub fn locator(&self, relative: &str) -> Locator {
        let path = self.work_dir.join(relative);
        Locator::from(Url::from_file_path(&path).expect("Fixture path should be absolute"))
    }

    /// Execute a closure after temporarily switching into the work directory.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original_cwd);
    }
}

/// Last path segment of each document's origin, `<inline>` when it has none.
#[allow(dead_code)]
pub fn origin_names(documents: &[StructuredDocument]) -> Vec<String> {
    documents
        .iter()
        .map(|doc| {
            doc.origin()
                .and_then(|origin| origin.as_url().path_segments().and_then(|mut s| s.next_back()))
                .map(str::to_string)
                .unwrap_or_else(|| "<inline>".to_string())
        })
        .collect()
}
