//! Command Runner Port
//!
//! Abstracts running external programs so the deploy sequence can be
//! exercised without a shell, rsync or a network.

use std::fmt;

use crate::error::DeployResult;

/// A program invocation; arguments are passed without shell interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// Renders the command line as it would be typed into a POSIX shell
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Quote a word for a POSIX shell, leaving plain words untouched
pub fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:@=,+%".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// How an external program finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn failed(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code for error reporting; signals map to -1
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(-1)
    }
}

/// Runs external programs
///
/// Implementations:
/// - `SystemRunner`: spawns real processes with inherited stdio
/// - test recorders that capture invocations
pub trait CommandRunner: Send + Sync {
    /// Run to completion. `Err` only when the program could not be started.
    fn run(&self, command: &CommandSpec) -> DeployResult<CommandStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_only_when_needed() {
        let cmd = CommandSpec::new("rsync")
            .arg("-pthrvz")
            .arg("--rsh")
            .arg("ssh -p 22")
            .arg("it's");
        assert_eq!(cmd.to_string(), "rsync -pthrvz --rsh 'ssh -p 22' 'it'\\''s'");
    }

    #[test]
    fn empty_argument_is_quoted() {
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn status_helpers() {
        assert!(CommandStatus::success().is_success());
        assert!(!CommandStatus::failed(2).is_success());
        assert_eq!(CommandStatus { code: None }.exit_code(), -1);
    }
}
