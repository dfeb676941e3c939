//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --color, --verbose) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use static_deploy::domain::services::HostSelection;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// static-deploy - collect static assets and mirror them to role hosts
#[derive(Parser, Debug)]
#[command(name = "static-deploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./deploy.toml, then the user config)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Host selection flags shared by the commands that resolve hosts
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Run against these roles instead of the configured one
    #[arg(short = 'R', long, value_delimiter = ',', value_name = "ROLE")]
    pub roles: Vec<String>,

    /// Run against these hosts ([user@]host[:port]); roles are ignored
    #[arg(short = 'H', long, value_delimiter = ',', value_name = "HOST")]
    pub hosts: Vec<String>,
}

impl TargetArgs {
    pub fn selection(&self) -> HostSelection {
        HostSelection {
            hosts: self.hosts.clone(),
            roles: self.roles.clone(),
        }
    }
}

/// Flags of a `deploy_static` run
#[derive(Args, Debug, Clone, Default)]
pub struct DeployFlags {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Show the commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the collection step and sync what is already collected
    #[arg(long)]
    pub skip_collect: bool,

    /// Override the local static root
    #[arg(long, value_name = "PATH")]
    pub local_root: Option<PathBuf>,

    /// Override the remote static root
    #[arg(long, value_name = "PATH")]
    pub remote_root: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect static files locally and mirror them to the static hosts
    #[command(name = "deploy-static", visible_alias = "deploy_static")]
    DeployStatic(DeployFlags),

    /// Run a registered task by name
    Run {
        /// Task name (see `list`)
        task: String,

        #[command(flatten)]
        flags: DeployFlags,
    },

    /// List available tasks
    List,

    /// Show the hosts a deploy would run against
    Hosts {
        #[command(flatten)]
        targets: TargetArgs,
    },

    /// Check configuration, required programs and host selection
    Check {
        #[command(flatten)]
        targets: TargetArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn deploy_static_accepts_underscore_alias() {
        let cli = Cli::try_parse_from(["static-deploy", "deploy_static", "--dry-run"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::DeployStatic(DeployFlags { dry_run: true, .. })
        ));
    }

    #[test]
    fn roles_and_hosts_split_on_commas() {
        let cli = Cli::try_parse_from([
            "static-deploy",
            "deploy-static",
            "-R",
            "static,cdn",
            "--hosts",
            "web1,deploy@web2:2222",
        ])
        .unwrap();
        let Commands::DeployStatic(flags) = cli.command else {
            panic!("expected deploy-static");
        };
        assert_eq!(flags.targets.roles, vec!["static", "cdn"]);
        assert_eq!(flags.targets.hosts, vec!["web1", "deploy@web2:2222"]);
    }

    #[test]
    fn run_takes_task_name_and_deploy_flags() {
        let cli = Cli::try_parse_from(["static-deploy", "run", "deploy_static", "--skip-collect"])
            .unwrap();
        let Commands::Run { task, flags } = cli.command else {
            panic!("expected run");
        };
        assert_eq!(task, "deploy_static");
        assert!(flags.skip_collect);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["static-deploy", "list", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
