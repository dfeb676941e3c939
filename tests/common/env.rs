//! Test environment builder for isolated static-deploy testing.
//!
//! Provides `TestEnv` - a sandbox with a project directory (the working
//! directory of the CLI), an isolated HOME, and a `bin/` directory with fake
//! `rsync` and `ssh` scripts placed first on `PATH`. The fake rsync records
//! every invocation so tests can assert on the exact arguments.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const INVOCATION_END: &str = "--END--";

/// Result of running a static-deploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for the CLI (holds deploy.toml)
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    /// Fake programs and their logs
    pub tools_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// The `{LOCAL_ROOT}` fixture placeholder expands to this
    pub fn local_root(&self) -> PathBuf {
        self.project_path("static")
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path = format!(
            "{}:{}",
            self.tools_dir.path().join("bin").display(),
            std::env::var("PATH").unwrap_or_else(|_| "/usr/bin:/bin".to_string())
        );

        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("PATH", path)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("STATIC_DEPLOY_NO_COLOR", "1")
            .env("FAKE_RSYNC_LOG", self.rsync_log_path())
            .env_remove("RUST_LOG")
            .env_remove("FAKE_RSYNC_FAIL_ON");

        for key in [
            "STATIC_DEPLOY_LOCAL_ROOT",
            "STATIC_DEPLOY_REMOTE_ROOT",
            "STATIC_DEPLOY_ROLE",
            "STATIC_DEPLOY_COLLECT_COMMAND",
            "STATIC_DEPLOY_USER",
            "STATIC_DEPLOY_PORT",
        ] {
            cmd.env_remove(key);
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute static-deploy");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    fn rsync_log_path(&self) -> PathBuf {
        self.tools_dir.path().join("rsync.log")
    }

    /// Every rsync invocation, as its argument list, in call order
    pub fn rsync_calls(&self) -> Vec<Vec<String>> {
        let content = std::fs::read_to_string(self.rsync_log_path()).unwrap_or_default();
        let mut calls = Vec::new();
        let mut current = Vec::new();
        for line in content.lines() {
            if line == INVOCATION_END {
                calls.push(std::mem::take(&mut current));
            } else {
                current.push(line.to_string());
            }
        }
        calls
    }

    /// Lines the collection command appended to `collect.log`
    pub fn collect_runs(&self) -> usize {
        std::fs::read_to_string(self.project_path("collect.log"))
            .map(|c| c.lines().count())
            .unwrap_or(0)
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    project_config: Option<String>,
    home_config: Option<String>,
    create_local_root: bool,
}

impl TestEnvBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            project_config: None,
            home_config: None,
            create_local_root: false,
        }
    }

    /// Write `deploy.toml` in the project root (`{LOCAL_ROOT}` is expanded)
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// Write `~/.config/static-deploy/config.toml` (`{LOCAL_ROOT}` is expanded)
    pub fn with_home_config(mut self, toml: &str) -> Self {
        self.home_config = Some(toml.to_string());
        self
    }

    /// Create the local static root up front (for `--skip-collect`)
    pub fn with_local_root(mut self) -> Self {
        self.create_local_root = true;
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");
        let tools_dir = TempDir::new().expect("Failed to create tools temp dir");

        let local_root = project_root.path().join("static");
        let expand = |toml: &str| toml.replace("{LOCAL_ROOT}", &local_root.display().to_string());

        if let Some(config) = &self.project_config {
            std::fs::write(project_root.path().join("deploy.toml"), expand(config))
                .expect("Failed to write deploy.toml");
        }

        if let Some(config) = &self.home_config {
            let path = home_dir.path().join(".config/static-deploy/config.toml");
            std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
            std::fs::write(&path, expand(config)).expect("Failed to write home config");
        }

        if self.create_local_root {
            std::fs::create_dir_all(&local_root).expect("Failed to create local root");
            std::fs::write(local_root.join("app.css"), "body {}").expect("Failed to write asset");
        }

        let bin_dir = tools_dir.path().join("bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        write_script(&bin_dir.join("rsync"), FAKE_RSYNC);
        write_script(&bin_dir.join("ssh"), "#!/bin/sh\nexit 0\n");

        TestEnv {
            project_root,
            home_dir,
            tools_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_static-deploy")),
        }
    }
}

const FAKE_RSYNC: &str = r#"#!/bin/sh
for arg in "$@"; do
  printf '%s\n' "$arg" >> "$FAKE_RSYNC_LOG"
done
printf '%s\n' '--END--' >> "$FAKE_RSYNC_LOG"
if [ -n "$FAKE_RSYNC_FAIL_ON" ]; then
  case "$*" in
    *"$FAKE_RSYNC_FAIL_ON"*) echo "rsync: connection refused" >&2; exit 23 ;;
  esac
fi
exit 0
"#;

fn write_script(path: &Path, content: &str) {
    std::fs::write(path, content).expect("Failed to write fake program");
    let mut perms = std::fs::metadata(path)
        .expect("Failed to stat fake program")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to chmod fake program");
}
