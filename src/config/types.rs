//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{DeployError, DeployResult};

/// Role used by `deploy_static` when nothing overrides it
pub const DEFAULT_ROLE: &str = "static";

/// Static asset paths and the collection step
#[derive(Debug, Clone, Deserialize)]
pub struct StaticConfig {
    /// Where the static files get collected locally
    #[serde(default = "default_local_root")]
    pub local_root: PathBuf,

    /// Where the static files should go remotely
    #[serde(default = "default_remote_root")]
    pub remote_root: String,

    /// Shell command that collects the assets into `local_root`
    #[serde(default = "default_collect_command")]
    pub collect_command: String,

    /// Role the deploy task is restricted to
    #[serde(default = "default_role")]
    pub role: String,

    /// rsync `--exclude` patterns
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Mirror the contents of `local_root` rather than the directory itself
    #[serde(default = "default_true")]
    pub contents_only: bool,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            local_root: default_local_root(),
            remote_root: default_remote_root(),
            collect_command: default_collect_command(),
            role: default_role(),
            exclude: Vec::new(),
            contents_only: true,
        }
    }
}

fn default_local_root() -> PathBuf {
    PathBuf::from("/tmp/static")
}

fn default_remote_root() -> String {
    "/home/www/static.example.com".to_string()
}

fn default_collect_command() -> String {
    "./manage.py collectstatic".to_string()
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

fn default_true() -> bool {
    true
}

/// rsync invocation settings
#[derive(Debug, Clone, Deserialize)]
pub struct RsyncConfig {
    #[serde(default = "default_rsync_program")]
    pub program: String,

    /// Leading option cluster, passed as a single argument
    #[serde(default = "default_rsync_opts")]
    pub default_opts: String,

    #[serde(default)]
    pub extra_opts: Vec<String>,

    /// Appended verbatim to the `--rsh` ssh command
    #[serde(default)]
    pub ssh_opts: String,
}

impl Default for RsyncConfig {
    fn default() -> Self {
        Self {
            program: default_rsync_program(),
            default_opts: default_rsync_opts(),
            extra_opts: Vec::new(),
            ssh_opts: String::new(),
        }
    }
}

fn default_rsync_program() -> String {
    "rsync".to_string()
}

fn default_rsync_opts() -> String {
    "-pthrvz".to_string()
}

/// SSH connection defaults for hosts that do not spell them out
#[derive(Debug, Clone, Deserialize)]
pub struct SshConfig {
    #[serde(default)]
    pub user: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub key_filenames: Vec<PathBuf>,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            user: None,
            port: default_port(),
            key_filenames: Vec::new(),
        }
    }
}

fn default_port() -> u16 {
    22
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default, rename = "static")]
    pub static_files: StaticConfig,

    #[serde(default)]
    pub rsync: RsyncConfig,

    #[serde(default)]
    pub ssh: SshConfig,

    /// Role label to ordered host strings
    #[serde(default)]
    pub roles: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Default SSH user: configured user, then `$USER`, then `root`
    pub fn default_user(&self) -> String {
        self.default_user_from(|key| std::env::var(key).ok())
    }

    /// `default_user` with an arbitrary environment lookup (for testing)
    pub fn default_user_from<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        self.ssh
            .user
            .clone()
            .filter(|u| !u.is_empty())
            .or_else(|| lookup("USER").filter(|u| !u.is_empty()))
            .unwrap_or_else(|| "root".to_string())
    }

    /// Reject values that cannot produce a meaningful deploy
    pub fn validate(&self) -> DeployResult<()> {
        if self.static_files.local_root.as_os_str().is_empty() {
            return Err(DeployError::InvalidValue {
                key: "static.local_root".to_string(),
                message: "path must not be empty".to_string(),
            });
        }
        if self.static_files.remote_root.trim().is_empty() {
            return Err(DeployError::InvalidValue {
                key: "static.remote_root".to_string(),
                message: "path must not be empty".to_string(),
            });
        }
        if self.ssh.port == 0 {
            return Err(DeployError::InvalidValue {
                key: "ssh.port".to_string(),
                message: "port must be between 1 and 65535".to_string(),
            });
        }
        Ok(())
    }
}
