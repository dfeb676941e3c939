//! static-deploy - collect static assets and mirror them to role-selected hosts
//!
//! A deploy is two external commands run in sequence: a local collection
//! command that gathers static files into a directory, then an `rsync
//! --delete` from that directory to the same remote path on every host
//! carrying the configured role.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployReport, DeployStaticOptions, DeployStaticUseCase};
pub use config::{Config, LoadedConfig};
pub use domain::ports::{CommandRunner, CommandSpec, CommandStatus};
pub use error::{DeployError, DeployResult};
pub use infrastructure::SystemRunner;
