use std::io;
use std::path::PathBuf;

use crate::ports::WorkingDirectory;

/// Working directory of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDirectory;

impl WorkingDirectory for ProcessWorkingDirectory {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}
