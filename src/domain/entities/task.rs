//! Task Entity
//!
//! A named, role-restricted unit of work invocable from the CLI.

use crate::config::closest;
use crate::error::{DeployError, DeployResult};

/// A registered task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub name: &'static str,
    pub description: &'static str,
    /// Roles the task runs against unless overridden on the command line.
    /// `None` means the role comes from configuration (`static.role`).
    pub roles: Option<&'static [&'static str]>,
}

/// Collect static files locally, then mirror them to the static role
pub const DEPLOY_STATIC: Task = Task {
    name: "deploy_static",
    description: "Collect static files locally and mirror them to the static hosts",
    roles: None,
};

/// All registered tasks
pub const TASKS: &[Task] = &[DEPLOY_STATIC];

/// Look up a task by name; `-` and `_` are interchangeable
pub fn find_task(name: &str) -> DeployResult<Task> {
    let normalized = name.replace('-', "_");
    TASKS
        .iter()
        .find(|t| t.name == normalized)
        .copied()
        .ok_or_else(|| {
            let names: Vec<&str> = TASKS.iter().map(|t| t.name).collect();
            let suggestion = closest(&normalized, &names)
                .map(|s| format!(". Did you mean '{}'?", s))
                .unwrap_or_default();
            DeployError::UnknownTask {
                name: name.to_string(),
                suggestion,
            }
        })
}
