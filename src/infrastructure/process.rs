//! Process Runner
//!
//! Spawns external programs with the terminal's stdio so interactive
//! prompts (collection confirmation, ssh passwords) keep working.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandRunner, CommandSpec, CommandStatus};
use crate::error::{DeployError, DeployResult};

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    /// Send child stdout to our stderr, keeping stdout free for NDJSON
    stdout_to_stderr: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner for `--json` mode
    pub fn json() -> Self {
        Self {
            stdout_to_stderr: true,
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> DeployResult<CommandStatus> {
        tracing::debug!(command = %spec, "spawning");

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(std::io::stderr()));
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let status = cmd.status().map_err(|e| DeployError::SpawnFailed {
            program: spec.program.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(program = %spec.program, code = ?status.code(), "finished");
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

/// Locate a program the way the shell would
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    if program.contains('/') {
        let path = Path::new(program);
        return is_executable(path).then(|| path.to_path_buf());
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
