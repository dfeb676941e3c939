//! Host Selection
//!
//! Turns roles and explicit hosts into the ordered list of targets a task
//! runs against.

use std::collections::BTreeMap;

use crate::domain::value_objects::{Host, HostSpec};
use crate::error::{DeployError, DeployResult};

/// Where the host list comes from, highest priority first
#[derive(Debug, Clone, Default)]
pub struct HostSelection {
    /// `--hosts`: used as-is, roles ignored
    pub hosts: Vec<String>,
    /// `--roles`: replaces the task's roles
    pub roles: Vec<String>,
}

/// Resolve the hosts a task should run against.
///
/// Hosts from several roles are merged in role order; a host listed twice
/// runs once, at its first position.
pub fn select_hosts(
    selection: &HostSelection,
    task_roles: &[String],
    roledefs: &BTreeMap<String, Vec<String>>,
    default_user: &str,
    default_port: u16,
) -> DeployResult<Vec<Host>> {
    let (raw, roles): (Vec<&str>, Vec<&String>) = if !selection.hosts.is_empty() {
        (selection.hosts.iter().map(String::as_str).collect(), Vec::new())
    } else {
        let roles: Vec<&String> = if selection.roles.is_empty() {
            task_roles.iter().collect()
        } else {
            selection.roles.iter().collect()
        };

        let mut raw = Vec::new();
        for role in &roles {
            let hosts = roledefs.get(role.as_str()).ok_or_else(|| DeployError::UnknownRole {
                role: role.to_string(),
                known: known_roles(roledefs),
            })?;
            raw.extend(hosts.iter().map(String::as_str));
        }
        (raw, roles)
    };

    let mut selected: Vec<Host> = Vec::new();
    for entry in raw {
        let host = HostSpec::parse(entry)?.resolve(default_user, default_port);
        if !selected.contains(&host) {
            selected.push(host);
        }
    }

    if selected.is_empty() {
        let roles = if roles.is_empty() {
            "(none)".to_string()
        } else {
            roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", ")
        };
        return Err(DeployError::NoHosts { roles });
    }

    Ok(selected)
}

fn known_roles(roledefs: &BTreeMap<String, Vec<String>>) -> String {
    if roledefs.is_empty() {
        "none configured".to_string()
    } else {
        roledefs.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
