use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::{FsBackend, Result};

/// `FsBackend` over the real host file system.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct HostFs;

impl FsBackend for HostFs {
    /// Only directories count; a regular file at `path` is reported as absent.
    fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_dir()
    }

    fn create_dir_all<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::create_dir_all(path)
            .with_context(|| format!("unable to create directory {}", path.display()))
    }

    fn remove_dir_all<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::remove_dir_all(path)
            .with_context(|| format!("unable to remove directory {}", path.display()))
    }

    /// Platform temp location, see `std::env::temp_dir`.
    fn temp_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }
}
