//! This module provides a temporary directory bound to the scope of its owner.
//! The directory is created eagerly under a unique name and removed, together with everything
//! inside it, when the owner releases it or goes out of scope.
//!
//! ### Key Features:
//! - **Unique naming**: Probes `prefix`, `prefix.1`, `prefix.2`, ... until a free name is found.
//! - **Eager creation**: A `ScopedTempDir` always refers to a directory that was created for it.
//! - **One-shot release**: Teardown runs at most once, whether triggered by `release()` or `Drop`.
//! - **Best-effort cleanup**: Removal errors are logged and discarded, never returned.
//! - **Pluggable host**: All file system access goes through `FsBackend`.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::{FsBackend, Result};
use crate::fs::HostFs;
use crate::temp::TempDirOptions;

/// A uniquely named directory that lives as long as its owner.
///
/// `ScopedTempDir` creates an empty directory on construction and, if `delete_on_release` is
/// set (the default), recursively removes it on `release()` or when dropped.
///
/// ### Usage notes:
/// - Name uniqueness is checked by probing, not by locking. Two processes using the same
///   `prefix` and base directory at the same moment may race for one name.
/// - Names are not secret: the default prefix is a UUID, suitable for uniqueness only.
/// - `release()` never fails. A directory that cannot be removed is left on disk and a
///   warning is emitted through `tracing`.
///
/// ### Example:
/// ```
/// use scoped_tempdir::ScopedTempDir;
///
/// let mut dir = ScopedTempDir::new().unwrap();
/// std::fs::write(dir.path().join("note.txt"), b"Hello").unwrap();
///
/// let path = dir.path().to_path_buf();
/// dir.release();
/// assert!(!path.exists());
/// ```
#[derive(Debug)]
pub struct ScopedTempDir<B: FsBackend = HostFs> {
    path: PathBuf,
    delete_on_release: bool,
    released: bool,
    backend: B,
}

impl ScopedTempDir {
    /// Creates a directory with a UUID name in the platform temp location.
    pub fn new() -> Result<Self> {
        Self::with_options(TempDirOptions::default())
    }

    /// Creates a directory named `prefix` (or `prefix.N`) in the platform temp location.
    pub fn with_prefix<S: Into<String>>(prefix: S) -> Result<Self> {
        Self::with_options(TempDirOptions::new().prefix(prefix))
    }

    /// Creates a directory with a UUID name inside `base_dir`.
    pub fn new_in<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        Self::with_options(TempDirOptions::new().base_dir(base_dir))
    }

    pub fn with_options(options: TempDirOptions) -> Result<Self> {
        Self::with_backend(options, HostFs)
    }
}

impl<B: FsBackend> ScopedTempDir<B> {
    /// Resolves a unique path according to `options` and creates the directory through
    /// `backend`, including missing parents.
    ///
    /// An error is returned if the directory cannot be created; nothing is retained then.
    /// The prefix is not sanitized, so a name that is not a valid path segment fails here.
    pub fn with_backend(options: TempDirOptions, backend: B) -> Result<Self> {
        let base_dir = options.resolve_base_dir(&backend);
        let prefix = options.resolve_prefix();
        let path = unique_path(&backend, &base_dir, &prefix);

        backend
            .create_dir_all(&path)
            .with_context(|| format!("failed to create temporary directory {}", path.display()))?;
        tracing::debug!("created temporary directory {}", path.display());

        Ok(Self {
            path,
            delete_on_release: options.is_delete_on_release(),
            released: false,
            backend,
        })
    }

    /// Returns the directory path. It never changes after construction.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn delete_on_release(&self) -> bool {
        self.delete_on_release
    }

    /// Returns true, once `release()` has run.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Releases the directory.
    ///
    /// The first call removes the directory with all its contents if `delete_on_release` is
    /// set and the directory still exists. Removal errors are logged and discarded.
    /// Subsequent calls do nothing. The directory is never recreated.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        if !self.delete_on_release {
            tracing::debug!("keeping temporary directory {}", self.path.display());
            return;
        }
        if !self.backend.exists(&self.path) {
            return;
        }

        match self.backend.remove_dir_all(&self.path) {
            Ok(()) => tracing::debug!("removed temporary directory {}", self.path.display()),
            Err(err) => tracing::warn!(
                "unable to remove temporary directory {}: {err:#}",
                self.path.display()
            ),
        }
    }
}

/// Returns `base_dir/prefix`, or the first `base_dir/prefix.N` (N = 1, 2, ...) where no
/// directory exists yet.
fn unique_path<B: FsBackend>(backend: &B, base_dir: &Path, prefix: &str) -> PathBuf {
    let mut counter = 0u64;
    let mut path = base_dir.join(prefix);
    while backend.exists(&path) {
        counter += 1;
        path = base_dir.join(format!("{prefix}.{counter}"));
    }
    path
}

impl<B: FsBackend> AsRef<Path> for ScopedTempDir<B> {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}

impl<B: FsBackend> fmt::Display for ScopedTempDir<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl<B: FsBackend> Drop for ScopedTempDir<B> {
    fn drop(&mut self) {
        self.release();
    }
}
