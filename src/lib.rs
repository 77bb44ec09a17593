//! Scoped temporary directories for Rust.
//! Creates a uniquely named, empty directory and removes it again when its owner is done
//! with it. Ideal for build scratch space, test fixtures, unpacking archives, and more.
//!
//! ### Overview
//!
//! `scoped-tempdir` gives every caller its own directory without hand-written cleanup.
//! The directory is created eagerly by `ScopedTempDir` and removed on `release()` or `Drop`.
//!
//! **Key ideas**:
//! - **Uniqueness**: A UUID name by default, or your prefix with a `.N` suffix on collision.
//! - **Scoping**: Cleanup is tied to ownership; releasing twice is a no-op.
//! - **Best effort**: Cleanup failures never interrupt the caller, they are only logged.
//! - **Opt-out**: Keep the directory for inspection with `delete_on_release(false)`.
//! - **Testability**: All host access goes through the `FsBackend` trait.

mod core;
mod fs;
mod temp;

pub use crate::core::{FsBackend, Result};
pub use fs::HostFs;
pub use temp::{ScopedTempDir, TempDirOptions};
