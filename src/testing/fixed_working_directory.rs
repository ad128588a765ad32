use std::io;
use std::path::PathBuf;

use crate::ports::WorkingDirectory;

/// Working directory pinned to a path, or one that always fails.
#[derive(Debug, Clone)]
pub struct FixedWorkingDirectory {
    path: Option<PathBuf>,
}

impl FixedWorkingDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    pub fn failing() -> Self {
        Self { path: None }
    }
}

impl WorkingDirectory for FixedWorkingDirectory {
    fn current_dir(&self) -> io::Result<PathBuf> {
        self.path
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "working directory was removed"))
    }
}
