//! hostwarm Application Layer
pub mod ports;

pub use ports::HostResolver;
