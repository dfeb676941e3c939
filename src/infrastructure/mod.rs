//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process` - Spawning external programs, PATH lookup
//! - `events/` - Event sinks (console, JSON)

pub mod events;
pub mod process;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use process::{find_in_path, SystemRunner};
