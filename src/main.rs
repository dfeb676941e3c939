//! static-deploy CLI
//!
//! Usage: static-deploy <COMMAND>
//!
//! Commands:
//!   deploy-static  Collect static files and mirror them to the static hosts
//!   run            Run a registered task by name
//!   list           List available tasks
//!   hosts          Show the hosts a deploy would run against
//!   check          Check configuration, required programs and hosts

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = commands::Context::from_cli(&cli);

    let result = match cli.command {
        Commands::DeployStatic(flags) => commands::deploy_static::cmd_deploy_static(&ctx, flags),
        Commands::Run { task, flags } => commands::run::cmd_run(&ctx, &task, flags),
        Commands::List => commands::list::cmd_list(&ctx),
        Commands::Hosts { targets } => commands::hosts::cmd_hosts(&ctx, &targets),
        Commands::Check { targets } => commands::check::cmd_check(&ctx, &targets),
    };

    if let Err(err) = result {
        commands::print_error(&err, &ctx);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
