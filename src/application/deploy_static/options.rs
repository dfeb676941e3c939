//! Deploy Options
//!
//! Command-line overrides for a single `deploy_static` run.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::services::HostSelection;

/// Options for the static deploy use case
#[derive(Debug, Clone, Default)]
pub struct DeployStaticOptions {
    /// Explicit hosts / role override
    pub selection: HostSelection,
    /// Print the commands without running them
    pub dry_run: bool,
    /// Skip the collection step
    pub skip_collect: bool,
    /// Overrides `static.local_root`
    pub local_root: Option<PathBuf>,
    /// Overrides `static.remote_root`
    pub remote_root: Option<String>,
}

impl DeployStaticOptions {
    /// Config with the path overrides applied
    pub fn apply(&self, config: &Config) -> Config {
        let mut config = config.clone();
        if let Some(root) = &self.local_root {
            config.static_files.local_root = root.clone();
        }
        if let Some(root) = &self.remote_root {
            config.static_files.remote_root = root.clone();
        }
        config
    }
}
