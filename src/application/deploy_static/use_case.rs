//! Static Deploy Use Case
//!
//! Sequence:
//! 1. Select hosts (fails before anything runs)
//! 2. Run the collection command locally
//! 3. Verify the local static root exists
//! 4. Mirror the local root to each host in order, deleting extraneous files
//!
//! The first failing step aborts the run; there is no retry. A step that
//! fails because Ctrl-C reached the child too is reported as an interrupt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::DEPLOY_STATIC;
use crate::domain::ports::{CommandRunner, DeployEvent, DeployEventSink, NoopEventSink};
use crate::domain::services::{collect_command, rsync_command, select_hosts};
use crate::error::{DeployError, DeployResult};

use super::options::DeployStaticOptions;
use super::result::DeployReport;

/// Collect-then-mirror use case, parameterized by its process runner
pub struct DeployStaticUseCase<R: CommandRunner> {
    runner: R,
    events: Arc<dyn DeployEventSink>,
    interrupted: Arc<AtomicBool>,
}

impl<R: CommandRunner> DeployStaticUseCase<R> {
    pub fn new(runner: R, events: Arc<dyn DeployEventSink>) -> Self {
        Self {
            runner,
            events,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use case that reports nothing
    pub fn silent(runner: R) -> Self {
        Self::new(runner, Arc::new(NoopEventSink))
    }

    /// Flag polled between steps; set it (e.g. from a Ctrl-C handler) to stop
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = flag;
        self
    }

    /// Execute the deploy
    pub fn execute(
        &self,
        config: &Config,
        options: &DeployStaticOptions,
    ) -> DeployResult<DeployReport> {
        let result = self.run(config, options);
        if let Err(err) = &result {
            tracing::info!(error = %err, "deploy_static aborted");
            self.events.on_event(DeployEvent::Failed {
                error: err.to_string(),
            });
        }
        result
    }

    fn run(&self, config: &Config, options: &DeployStaticOptions) -> DeployResult<DeployReport> {
        let config = options.apply(config);
        config.validate()?;

        let task_roles: Vec<String> = match DEPLOY_STATIC.roles {
            Some(roles) => roles.iter().map(|r| r.to_string()).collect(),
            None => vec![config.static_files.role.clone()],
        };
        let hosts = select_hosts(
            &options.selection,
            &task_roles,
            &config.roles,
            &config.default_user(),
            config.ssh.port,
        )?;

        tracing::info!(hosts = hosts.len(), dry_run = options.dry_run, "deploy_static starting");
        self.events.on_event(DeployEvent::Started {
            task: DEPLOY_STATIC.name.to_string(),
            local_root: config.static_files.local_root.clone(),
            remote_root: config.static_files.remote_root.clone(),
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
            dry_run: options.dry_run,
        });

        let collected = if options.skip_collect {
            self.events.on_event(DeployEvent::CollectSkipped);
            false
        } else {
            self.collect(&config, options.dry_run)?;
            !options.dry_run
        };

        if !options.dry_run && !config.static_files.local_root.is_dir() {
            return Err(DeployError::LocalRootMissing {
                path: config.static_files.local_root.clone(),
            });
        }

        for (index, host) in hosts.iter().enumerate() {
            self.check_interrupted()?;

            let command = rsync_command(&config, host);
            self.events.on_event(DeployEvent::HostStarted {
                index,
                host: host.to_string(),
                command: command.to_string(),
            });

            if options.dry_run {
                continue;
            }

            let status = self.runner.run(&command)?;
            if !status.is_success() {
                self.check_interrupted()?;
                return Err(DeployError::SyncFailed {
                    host: host.to_string(),
                    code: status.exit_code(),
                });
            }

            tracing::info!(host = %host, "mirrored");
            self.events.on_event(DeployEvent::HostFinished {
                index,
                host: host.to_string(),
            });
        }

        self.events.on_event(DeployEvent::Completed {
            host_count: hosts.len(),
            dry_run: options.dry_run,
        });

        Ok(DeployReport {
            hosts,
            collected,
            dry_run: options.dry_run,
        })
    }

    fn collect(&self, config: &Config, dry_run: bool) -> DeployResult<()> {
        let command_line = &config.static_files.collect_command;
        self.events.on_event(DeployEvent::CollectStarted {
            command: command_line.clone(),
        });
        if dry_run {
            return Ok(());
        }

        self.check_interrupted()?;
        let status = self.runner.run(&collect_command(command_line))?;
        if !status.is_success() {
            self.check_interrupted()?;
            return Err(DeployError::CollectFailed {
                command: command_line.clone(),
                code: status.exit_code(),
            });
        }

        tracing::info!(command = %command_line, "collection finished");
        self.events.on_event(DeployEvent::CollectFinished);
        Ok(())
    }

    fn check_interrupted(&self) -> DeployResult<()> {
        if self.interrupted.load(Ordering::SeqCst) {
            Err(DeployError::Interrupted)
        } else {
            Ok(())
        }
    }
}
