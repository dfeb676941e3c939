use anyhow::Result;
use static_deploy::domain::services::select_hosts;

use super::Context;
use crate::cli::TargetArgs;

pub fn cmd_hosts(ctx: &Context, targets: &TargetArgs) -> Result<()> {
    let loaded = ctx.load_config()?;
    let config = &loaded.config;

    let hosts = select_hosts(
        &targets.selection(),
        &[config.static_files.role.clone()],
        &config.roles,
        &config.default_user(),
        config.ssh.port,
    )?;

    if ctx.json {
        let hosts: Vec<String> = hosts.iter().map(|h| h.to_string()).collect();
        println!(
            "{}",
            serde_json::json!({
                "event": "hosts",
                "command": "hosts",
                "hosts": hosts,
            })
        );
        return Ok(());
    }

    for host in &hosts {
        println!("{}", host);
    }
    Ok(())
}
