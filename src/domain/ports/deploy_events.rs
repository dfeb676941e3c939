//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables console progress, JSON event streams, and silent runs.

use std::path::PathBuf;

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        task: String,
        local_root: PathBuf,
        remote_root: String,
        hosts: Vec<String>,
        dry_run: bool,
    },

    /// Collection command about to run (or planned, in dry-run)
    CollectStarted { command: String },

    /// Collection command succeeded
    CollectFinished,

    /// Collection skipped on request
    CollectSkipped,

    /// Mirroring to one host about to run (or planned, in dry-run)
    HostStarted {
        index: usize,
        host: String,
        command: String,
    },

    /// Mirroring to one host succeeded
    HostFinished { index: usize, host: String },

    /// Deploy completed
    Completed { host_count: usize, dry_run: bool },

    /// Deploy aborted
    Failed { error: String },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - ConsoleEventSink: human-readable progress on stdout
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
