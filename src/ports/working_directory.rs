use std::io;
use std::path::PathBuf;

/// Port supplying the directory relative paths are resolved against
/// when no base locator is known.
pub trait WorkingDirectory {
    fn current_dir(&self) -> io::Result<PathBuf>;
}
