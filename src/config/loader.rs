//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::Config;

/// Project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "deploy.toml";

/// What an unknown key most likely should have been
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyHint {
    /// A near-miss spelling of a key valid in the same table
    Typo(String),
    /// The key is valid, but in another table
    WrongTable(String),
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    /// Table the key was found in, `None` at top level
    pub table: Option<String>,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub hint: Option<KeyHint>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}'", self.key)?;
        if let Some(table) = &self.table {
            write!(f, " in [{}]", table)?;
        }
        write!(f, " at {}", self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        match &self.hint {
            Some(KeyHint::Typo(key)) => write!(f, " (did you mean '{}'?)", key),
            Some(KeyHint::WrongTable(table)) => write!(f, " (it belongs in [{}])", table),
            None => Ok(()),
        }
    }
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` when running on defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|path_str| unknown_key_warning(path, &content, path_str))
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration: explicit file, project file, user file, defaults.
///
/// Environment overrides are applied on top of whichever layer was found.
/// A missing explicit file or a malformed file is an error.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> DeployResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(DeployError::InvalidConfig {
                    file: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
            Some(path.to_path_buf())
        }
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let mut loaded = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => {
            tracing::debug!("no configuration file found, using defaults");
            LoadedConfig::default()
        }
    };

    loaded.config = with_env_overrides(loaded.config);
    loaded.config.validate()?;
    Ok(loaded)
}

/// Apply environment variable overrides (STATIC_DEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup (for testing)
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(root) = lookup("STATIC_DEPLOY_LOCAL_ROOT").filter(|v| !v.is_empty()) {
        config.static_files.local_root = PathBuf::from(root);
    }

    if let Some(root) = lookup("STATIC_DEPLOY_REMOTE_ROOT").filter(|v| !v.is_empty()) {
        config.static_files.remote_root = root;
    }

    if let Some(role) = lookup("STATIC_DEPLOY_ROLE").filter(|v| !v.is_empty()) {
        config.static_files.role = role;
    }

    if let Some(command) = lookup("STATIC_DEPLOY_COLLECT_COMMAND").filter(|v| !v.is_empty()) {
        config.static_files.collect_command = command;
    }

    if let Some(user) = lookup("STATIC_DEPLOY_USER").filter(|v| !v.is_empty()) {
        config.ssh.user = Some(user);
    }

    if let Some(raw) = lookup("STATIC_DEPLOY_PORT") {
        let validator = EnvVarValidator::new("STATIC_DEPLOY_PORT", "a port between 1 and 65535");
        if let Some(port) = validator.parse(&raw, |s| s.parse::<u16>().ok().filter(|p| *p != 0)) {
            config.ssh.port = port;
        }
    }

    config
}

/// `$XDG_CONFIG_HOME/static-deploy/config.toml` (or the platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("static-deploy").join("config.toml"))
}

/// Keys accepted in each table; `None` is the top level
const KNOWN_KEYS: &[(Option<&str>, &[&str])] = &[
    (None, &["static", "rsync", "ssh", "roles"]),
    (
        Some("static"),
        &[
            "local_root",
            "remote_root",
            "collect_command",
            "role",
            "exclude",
            "contents_only",
        ],
    ),
    (
        Some("rsync"),
        &["program", "default_opts", "extra_opts", "ssh_opts"],
    ),
    (Some("ssh"), &["user", "port", "key_filenames"]),
];

fn unknown_key_warning(file: &Path, content: &str, ignored_path: &str) -> ConfigWarning {
    let (table, key) = match ignored_path.rsplit_once('.') {
        Some((table, key)) => (Some(table), key),
        None => (None, ignored_path),
    };

    ConfigWarning {
        key: key.to_string(),
        table: table.map(str::to_string),
        file: file.to_path_buf(),
        line: find_line_number(content, table, key),
        hint: key_hint(table, key),
    }
}

fn key_hint(table: Option<&str>, key: &str) -> Option<KeyHint> {
    let home = KNOWN_KEYS
        .iter()
        .find(|(t, keys)| t.is_some() && *t != table && keys.iter().any(|k| *k == key))
        .and_then(|(t, _)| t.map(str::to_string));
    if let Some(home) = home {
        return Some(KeyHint::WrongTable(home));
    }

    let same_table: Vec<&str> = KNOWN_KEYS
        .iter()
        .filter(|(t, _)| *t == table)
        .flat_map(|(_, keys)| keys.iter().copied())
        .filter(|k| *k != key)
        .collect();
    closest(key, &same_table).map(|k| KeyHint::Typo(k.to_string()))
}

/// Line of `key = ...` inside `[table]`, or of the `[key]` header for an
/// unknown top-level table
fn find_line_number(content: &str, table: Option<&str>, key: &str) -> Option<usize> {
    let mut current: Option<&str> = None;
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(header) = table_header(trimmed) {
            if table.is_none() && header == key {
                return Some(i + 1);
            }
            current = Some(header);
            continue;
        }
        if current == table && assigns_key(trimmed, key) {
            return Some(i + 1);
        }
    }
    None
}

fn table_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?;
    let end = inner.find(']')?;
    Some(inner[..end].trim_matches(|c: char| c == '[' || c == ' '))
}

fn assigns_key(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .map(|rest| rest.trim_start().starts_with('='))
        .unwrap_or(false)
}
