use anyhow::{bail, Result};
use static_deploy::domain::entities::{find_task, DEPLOY_STATIC};

use super::deploy_static::cmd_deploy_static;
use super::Context;
use crate::cli::DeployFlags;

pub fn cmd_run(ctx: &Context, name: &str, flags: DeployFlags) -> Result<()> {
    let task = find_task(name)?;
    tracing::debug!(task = task.name, "running task");

    if task == DEPLOY_STATIC {
        return cmd_deploy_static(ctx, flags);
    }
    bail!("task '{}' cannot be run from the command line", task.name)
}
