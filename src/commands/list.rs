use anyhow::Result;
use static_deploy::domain::entities::TASKS;

use super::Context;

pub fn cmd_list(ctx: &Context) -> Result<()> {
    let loaded = ctx.load_config()?;
    let default_role = &loaded.config.static_files.role;

    if ctx.json {
        for task in TASKS {
            let roles: Vec<String> = match task.roles {
                Some(roles) => roles.iter().map(|r| r.to_string()).collect(),
                None => vec![default_role.clone()],
            };
            println!(
                "{}",
                serde_json::json!({
                    "event": "task",
                    "command": "list",
                    "name": task.name,
                    "description": task.description,
                    "roles": roles,
                })
            );
        }
        return Ok(());
    }

    println!("Available tasks:");
    println!();
    let width = TASKS.iter().map(|t| t.name.len()).max().unwrap_or(0);
    for task in TASKS {
        let roles = match task.roles {
            Some(roles) => roles.join(", "),
            None => default_role.clone(),
        };
        println!(
            "    {:width$}  {} [roles: {}]",
            task.name,
            task.description,
            roles,
            width = width
        );
    }
    Ok(())
}
