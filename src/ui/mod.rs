//! Terminal presentation helpers shared by the console event sink and the CLI

pub mod terminal;
pub mod theme;

pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use theme::Icon;
