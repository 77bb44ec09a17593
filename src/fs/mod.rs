mod host;

pub use host::HostFs;
