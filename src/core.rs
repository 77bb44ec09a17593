use std::path::{Path, PathBuf};

/// Filesystem operations a scoped directory needs from its host.
pub trait FsBackend {
    /// Returns true, if a directory exists at `path`.
    fn exists<P: AsRef<Path>>(&self, path: P) -> bool;

    /// Creates directory and all it parents, if necessary.
    fn create_dir_all<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Removes directory with all its contents.
    fn remove_dir_all<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Returns the location new directories go to when no base is given.
    fn temp_dir(&self) -> PathBuf;
}

pub type Result<T> = std::result::Result<T, anyhow::Error>;
