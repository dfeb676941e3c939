use std::process::Command;

#[test]
fn test_help_lists_deploy_static() {
    let bin = env!("CARGO_BIN_EXE_static-deploy");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("deploy-static"),
        "help output should list the deploy-static command; got:\n{}",
        stdout
    );
}

#[test]
fn test_deploy_static_help_mentions_dry_run() {
    let bin = env!("CARGO_BIN_EXE_static-deploy");

    let output = Command::new(bin)
        .args(["deploy-static", "--help"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--dry-run"), "got:\n{}", stdout);
    assert!(stdout.contains("--skip-collect"), "got:\n{}", stdout);
}
