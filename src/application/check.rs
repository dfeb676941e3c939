//! Check Use Case
//!
//! Diagnoses whether `deploy_static` can run: configuration, required
//! programs on `PATH`, and host selection.

use std::path::PathBuf;

use crate::config::LoadedConfig;
use crate::domain::entities::DEPLOY_STATIC;
use crate::domain::services::{select_hosts, HostSelection};

/// Result of a single check
#[derive(Debug, Clone)]
pub struct CheckItem {
    /// Name of the check
    pub name: String,
    /// Status of the check
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warning => "warning",
            CheckStatus::Error => "error",
        }
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// All check items
    pub items: Vec<CheckItem>,
    /// Number of passed checks
    pub passed: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of errors
    pub errors: usize,
}

impl CheckResult {
    /// Check if all checks passed (no errors)
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    fn push(&mut self, name: &str, status: CheckStatus, message: impl Into<String>) {
        match status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(CheckItem {
            name: name.to_string(),
            status,
            message: message.into(),
        });
    }
}

/// Check Use Case
///
/// Program lookup is injected so tests do not depend on the host system.
pub struct CheckUseCase<F>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    find_program: F,
}

impl<F> CheckUseCase<F>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    pub fn new(find_program: F) -> Self {
        Self { find_program }
    }

    /// Execute all checks
    pub fn execute(&self, loaded: &LoadedConfig, selection: &HostSelection) -> CheckResult {
        let mut result = CheckResult::default();
        let config = &loaded.config;

        match &loaded.source {
            Some(path) => result.push(
                "config",
                CheckStatus::Pass,
                format!("loaded {}", path.display()),
            ),
            None => result.push(
                "config",
                CheckStatus::Warning,
                "no config file found, using built-in defaults",
            ),
        }
        for warning in &loaded.warnings {
            result.push("config", CheckStatus::Warning, warning.to_string());
        }

        for program in [config.rsync.program.as_str(), "ssh"] {
            match (self.find_program)(program) {
                Some(path) => result.push(program, CheckStatus::Pass, path.display().to_string()),
                None => result.push(
                    program,
                    CheckStatus::Error,
                    format!("'{}' not found on PATH", program),
                ),
            }
        }

        let task_roles = vec![config.static_files.role.clone()];
        match select_hosts(
            selection,
            &task_roles,
            &config.roles,
            &config.default_user(),
            config.ssh.port,
        ) {
            Ok(hosts) => {
                let noun = if hosts.len() == 1 { "host" } else { "hosts" };
                result.push(
                    "hosts",
                    CheckStatus::Pass,
                    format!("{} {} selected for {}", hosts.len(), noun, DEPLOY_STATIC.name),
                );
            }
            Err(err) => result.push("hosts", CheckStatus::Error, err.to_string()),
        }

        let local_root = &config.static_files.local_root;
        if local_root.is_dir() {
            result.push(
                "local_root",
                CheckStatus::Pass,
                format!("{} exists", local_root.display()),
            );
        } else {
            result.push(
                "local_root",
                CheckStatus::Warning,
                format!(
                    "{} does not exist yet; the collection step must create it",
                    local_root.display()
                ),
            );
        }

        result
    }
}
