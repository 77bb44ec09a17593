mod options;
mod scoped_dir;

pub use options::TempDirOptions;
pub use scoped_dir::ScopedTempDir;
