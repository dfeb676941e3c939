//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(obj) = event.as_object_mut() {
            obj.insert("command".to_string(), "deploy_static".into());
            obj.insert("timestamp".to_string(), chrono::Utc::now().to_rfc3339().into());
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                task,
                local_root,
                remote_root,
                hosts,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "task": task,
                "local_root": local_root.display().to_string(),
                "remote_root": remote_root,
                "hosts": hosts,
                "dry_run": dry_run,
            }),

            DeployEvent::CollectStarted { command } => serde_json::json!({
                "event": "collect_start",
                "shell_command": command,
            }),

            DeployEvent::CollectFinished => serde_json::json!({
                "event": "collect_done",
            }),

            DeployEvent::CollectSkipped => serde_json::json!({
                "event": "collect_skipped",
            }),

            DeployEvent::HostStarted {
                index,
                host,
                command,
            } => serde_json::json!({
                "event": "host_start",
                "index": index,
                "host": host,
                "shell_command": command,
            }),

            DeployEvent::HostFinished { index, host } => serde_json::json!({
                "event": "host_done",
                "index": index,
                "host": host,
            }),

            DeployEvent::Completed {
                host_count,
                dry_run,
            } => serde_json::json!({
                "event": "complete",
                "status": "success",
                "hosts": host_count,
                "dry_run": dry_run,
            }),

            DeployEvent::Failed { error } => serde_json::json!({
                "event": "complete",
                "status": "failed",
                "message": error,
            }),
        };

        self.write_event(json);
    }
}
