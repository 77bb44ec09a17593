use std::path::{Path, PathBuf};

use crate::core::{FsBackend, Result};
use crate::fs::HostFs;
use crate::temp::ScopedTempDir;

/// Settings for a new `ScopedTempDir`.
///
/// Every field is optional:
/// * `prefix` - directory name; a fresh UUID when not set.
/// * `base_dir` - parent directory; the backend temp location when not set.
/// * `delete_on_release` - `true` by default.
///
/// ### Example:
/// ```
/// use scoped_tempdir::TempDirOptions;
///
/// let dir = TempDirOptions::new()
///     .prefix("build")
///     .delete_on_release(true)
///     .create()
///     .unwrap();
/// assert!(dir.path().is_dir());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TempDirOptions {
    prefix: Option<String>,
    base_dir: Option<PathBuf>,
    delete_on_release: bool,
}

impl Default for TempDirOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            base_dir: None,
            delete_on_release: true,
        }
    }
}

impl TempDirOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory name. The value is used as is, without sanitizing.
    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the parent directory. Missing parents are created on `create()`.
    pub fn base_dir<P: AsRef<Path>>(mut self, base_dir: P) -> Self {
        self.base_dir = Some(base_dir.as_ref().to_path_buf());
        self
    }

    /// Changes the delete-on-release flag.
    /// If the flag is false the directory outlives its `ScopedTempDir`.
    pub fn delete_on_release(mut self, delete: bool) -> Self {
        self.delete_on_release = delete;
        self
    }

    /// Creates the directory on the host file system.
    pub fn create(self) -> Result<ScopedTempDir> {
        ScopedTempDir::with_options(self)
    }

    /// Creates the directory through `backend`.
    pub fn create_with<B: FsBackend>(self, backend: B) -> Result<ScopedTempDir<B>> {
        ScopedTempDir::with_backend(self, backend)
    }

    pub(crate) fn is_delete_on_release(&self) -> bool {
        self.delete_on_release
    }

    pub(crate) fn resolve_prefix(&self) -> String {
        self.prefix
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }

    pub(crate) fn resolve_base_dir<B: FsBackend>(&self, backend: &B) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(|| backend.temp_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TempDirOptions::default();
        assert_eq!(options.prefix, None);
        assert_eq!(options.base_dir, None);
        assert!(options.is_delete_on_release());
        assert_eq!(options, TempDirOptions::new());
    }

    #[test]
    fn test_setters() {
        let options = TempDirOptions::new()
            .prefix("foo")
            .base_dir("/var/tmp")
            .delete_on_release(false);

        assert_eq!(options.prefix.as_deref(), Some("foo"));
        assert_eq!(options.base_dir, Some(PathBuf::from("/var/tmp")));
        assert!(!options.is_delete_on_release());
    }

    #[test]
    fn test_resolve_explicit_values() {
        let options = TempDirOptions::new().prefix("foo").base_dir("/var/tmp");
        assert_eq!(options.resolve_prefix(), "foo");
        assert_eq!(options.resolve_base_dir(&HostFs), PathBuf::from("/var/tmp"));
    }

    #[test]
    fn test_resolve_default_base_dir() {
        let options = TempDirOptions::new();
        assert_eq!(options.resolve_base_dir(&HostFs), std::env::temp_dir());
    }

    #[test]
    fn test_resolve_default_prefix_is_uuid() {
        let options = TempDirOptions::new();
        let first = options.resolve_prefix();
        let second = options.resolve_prefix();

        assert!(uuid::Uuid::parse_str(&first).is_ok());
        assert_ne!(first, second); // a new one on every call
    }
}
