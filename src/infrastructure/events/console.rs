//! Console Event Sink
//!
//! Human-readable deploy progress. Each external command is echoed before
//! it runs, prefixed with the host it concerns.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::ui::theme::{dim, Icon};

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    /// Console sink writing to stdout
    pub fn stdout(color: bool, unicode: bool) -> Self {
        Self::with_writer(io::stdout(), color, unicode)
    }

    /// Console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool, unicode: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                task,
                local_root,
                remote_root,
                hosts,
                dry_run,
            } => {
                self.line(format!("{} {}", Icon::Deploy.colored(self.color, self.unicode), task));
                self.line(format!("  Local:  {}", local_root.display()));
                self.line(format!("  Remote: {}", remote_root));
                self.line(format!("  Hosts:  {}", hosts.join(", ")));
                if dry_run {
                    self.line(dim("  Dry run: commands are shown, not executed", self.color));
                }
                self.line(String::new());
            }
            DeployEvent::CollectStarted { command } => {
                self.line(format!("[localhost] local: {}", command));
            }
            DeployEvent::CollectFinished => {}
            DeployEvent::CollectSkipped => {
                self.line(dim("[localhost] collection skipped", self.color));
            }
            DeployEvent::HostStarted { host, command, .. } => {
                self.line(format!("[{}] rsync_project: {}", host, command));
            }
            DeployEvent::HostFinished { host, .. } => {
                self.line(format!(
                    "{} {}",
                    Icon::Success.colored(self.color, self.unicode),
                    host
                ));
            }
            DeployEvent::Completed {
                host_count,
                dry_run,
            } => {
                let noun = if host_count == 1 { "host" } else { "hosts" };
                let verb = if dry_run { "Planned" } else { "Deployed to" };
                self.line(String::new());
                self.line(format!(
                    "{} {} {} {}",
                    Icon::Success.colored(self.color, self.unicode),
                    verb,
                    host_count,
                    noun
                ));
            }
            DeployEvent::Failed { .. } => {
                self.line(format!(
                    "{} Deploy aborted",
                    Icon::Error.colored(self.color, self.unicode)
                ));
            }
        }
    }
}
