use anyhow::{bail, Result};
use static_deploy::application::{CheckStatus, CheckUseCase};
use static_deploy::infrastructure::find_in_path;
use static_deploy::ui::Icon;

use super::Context;
use crate::cli::TargetArgs;

pub fn cmd_check(ctx: &Context, targets: &TargetArgs) -> Result<()> {
    let loaded = ctx.load_config()?;
    let result = CheckUseCase::new(find_in_path).execute(&loaded, &targets.selection());

    if ctx.json {
        for item in &result.items {
            println!(
                "{}",
                serde_json::json!({
                    "event": "check",
                    "command": "check",
                    "name": item.name,
                    "status": item.status.as_str(),
                    "message": item.message,
                })
            );
        }
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "check",
                "passed": result.passed,
                "warnings": result.warnings,
                "errors": result.errors,
            })
        );
    } else {
        println!("{} static-deploy check", Icon::Check.colored(ctx.color, ctx.unicode));
        println!();
        for item in &result.items {
            let icon = match item.status {
                CheckStatus::Pass => Icon::Success,
                CheckStatus::Warning => Icon::Warning,
                CheckStatus::Error => Icon::Error,
            };
            println!(
                "  {} {:<10} {}",
                icon.colored(ctx.color, ctx.unicode),
                item.name,
                item.message
            );
        }
        println!();
        println!(
            "{} passed, {} warnings, {} errors",
            result.passed, result.warnings, result.errors
        );
    }

    if !result.is_success() {
        bail!("{} check(s) failed", result.errors);
    }
    Ok(())
}
