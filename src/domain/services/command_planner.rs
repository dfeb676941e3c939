//! Command Planning
//!
//! Builds the two external invocations of a static deploy: the local
//! collection command and the per-host rsync mirror.

use std::path::Path;

use crate::config::Config;
use crate::domain::ports::CommandSpec;
use crate::domain::value_objects::Host;

/// Collection runs through the shell so configured command lines may use
/// pipes, `&&` and environment expansion.
pub fn collect_command(command_line: &str) -> CommandSpec {
    CommandSpec::new("/bin/sh").arg("-c").arg(command_line)
}

/// rsync source argument; a trailing slash makes rsync copy the contents
pub fn rsync_source(local_root: &Path, contents_only: bool) -> String {
    let source = local_root.display().to_string();
    if contents_only && !source.ends_with('/') {
        format!("{}/", source)
    } else {
        source
    }
}

/// `rsync <default> --delete [--exclude p].. <extra>.. --rsh "ssh .." <src> <dest>`
///
/// `--delete` is always present: the remote root mirrors the local one.
pub fn rsync_command(config: &Config, host: &Host) -> CommandSpec {
    let static_files = &config.static_files;
    let rsync = &config.rsync;

    let mut rsh = vec!["ssh".to_string()];
    for key in &config.ssh.key_filenames {
        rsh.push("-i".to_string());
        rsh.push(key.display().to_string());
    }
    rsh.push("-p".to_string());
    rsh.push(host.port.to_string());
    if !rsync.ssh_opts.trim().is_empty() {
        rsh.push(rsync.ssh_opts.trim().to_string());
    }

    let mut cmd = CommandSpec::new(rsync.program.as_str())
        .args(rsync.default_opts.split_whitespace())
        .arg("--delete");
    for pattern in &static_files.exclude {
        cmd = cmd.arg("--exclude").arg(pattern.as_str());
    }

    cmd.args(rsync.extra_opts.iter().map(String::as_str))
        .arg("--rsh")
        .arg(rsh.join(" "))
        .arg(rsync_source(&static_files.local_root, static_files.contents_only))
        .arg(host.destination(&static_files.remote_root))
}
