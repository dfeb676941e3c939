//! Domain Services
//!
//! Pure services with no I/O dependencies.

mod command_planner;
mod host_selector;

pub use command_planner::{collect_command, rsync_command, rsync_source};
pub use host_selector::{select_hosts, HostSelection};
