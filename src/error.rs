//! Error types for static-deploy
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Config file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A config value is out of range or empty
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Host string does not parse as `[user@]host[:port]`
    #[error("invalid host string '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    /// Role is not defined in `[roles]`
    #[error("role '{role}' is not defined (known roles: {known})")]
    UnknownRole { role: String, known: String },

    /// Host selection ended up empty
    #[error("no hosts selected for role(s) {roles}")]
    NoHosts { roles: String },

    /// Task name not registered
    #[error("unknown task '{name}'{suggestion}")]
    UnknownTask { name: String, suggestion: String },

    /// External program could not be started
    #[error("failed to run '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    /// Collection command exited non-zero
    #[error("local command failed with exit code {code}: {command}")]
    CollectFailed { command: String, code: i32 },

    /// Collection finished but the local root is not a directory
    #[error("local static root not found after collection: {path}")]
    LocalRootMissing { path: PathBuf },

    /// rsync exited non-zero for a host
    #[error("rsync to {host} failed with exit code {code}")]
    SyncFailed { host: String, code: i32 },

    /// Ctrl-C received between steps
    #[error("deploy interrupted")]
    Interrupted,
}
