//! Domain ports: the seams between the deploy sequence and the outside world

mod command_runner;
mod deploy_events;

pub use command_runner::{shell_quote, CommandRunner, CommandSpec, CommandStatus};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
