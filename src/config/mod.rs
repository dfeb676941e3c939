//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STATIC_DEPLOY_*)
//! 3. `--config` file, else `./deploy.toml`
//! 4. User config (~/.config/static-deploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{closest, levenshtein, EnvVarValidator};
pub use loader::{
    resolve, user_config_path, with_env_overrides_from, ConfigWarning, KeyHint, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, RsyncConfig, SshConfig, StaticConfig, DEFAULT_ROLE};
