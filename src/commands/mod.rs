//! Subcommand implementations for the `static-deploy` binary

pub mod check;
pub mod deploy_static;
pub mod hosts;
pub mod list;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use static_deploy::config::{self, LoadedConfig};
use static_deploy::ui::{detect_capabilities, Icon};

use crate::cli::{Cli, ColorWhen};

/// Output settings and config location shared by every subcommand
#[derive(Debug, Clone)]
pub struct Context {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    pub config_path: Option<PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Self {
        let caps = detect_capabilities();
        let color = match cli.color {
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Auto) | None => caps.supports_color,
        };
        Self {
            json: cli.json,
            color: color && !cli.json,
            unicode: caps.supports_unicode,
            config_path: cli.config.clone(),
        }
    }

    /// Resolve configuration for the current directory
    pub fn load_config(&self) -> Result<LoadedConfig> {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        let loaded = config::resolve(self.config_path.as_deref(), &cwd)
            .context("failed to load configuration")?;
        for warning in &loaded.warnings {
            tracing::warn!("{}", warning);
        }
        Ok(loaded)
    }
}

/// Print a fatal error: an `error` event in JSON mode, a line on stderr otherwise
pub fn print_error(err: &anyhow::Error, ctx: &Context) {
    if ctx.json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        println!("{}", output);
        return;
    }

    eprintln!("{} Error: {:#}", Icon::Error.colored(ctx.color, ctx.unicode), err);
}
