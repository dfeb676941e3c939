//! Domain value objects

mod host;

pub use host::{Host, HostSpec};
