use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use static_deploy::application::{DeployStaticOptions, DeployStaticUseCase};
use static_deploy::domain::ports::DeployEventSink;
use static_deploy::infrastructure::{ConsoleEventSink, JsonEventSink, SystemRunner};

use super::Context;
use crate::cli::DeployFlags;

pub fn cmd_deploy_static(ctx: &Context, args: DeployFlags) -> Result<()> {
    let loaded = ctx.load_config()?;

    let sink: Arc<dyn DeployEventSink> = if ctx.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ctx.color, ctx.unicode))
    };
    let runner = if ctx.json {
        SystemRunner::json()
    } else {
        SystemRunner::new()
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    if let Err(err) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        tracing::warn!(error = %err, "could not install Ctrl-C handler");
    }

    let options = DeployStaticOptions {
        selection: args.targets.selection(),
        dry_run: args.dry_run,
        skip_collect: args.skip_collect,
        local_root: args.local_root,
        remote_root: args.remote_root,
    };

    let use_case = DeployStaticUseCase::new(runner, sink).with_interrupt_flag(interrupted);
    use_case
        .execute(&loaded.config, &options)
        .context("deploy_static failed")?;
    Ok(())
}
