// Runs the built binary for the flags that exit before any menu is shown.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn console_app(dir: &TempDir, arg: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_console-app"))
        .arg(arg)
        .current_dir(dir.path())
        .output()
        .expect("failed to spawn console-app")
}

#[test]
fn version_prints_bare_version_and_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = console_app(&dir, "--version");

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1.0.0\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn short_version_flag_matches_long() {
    let dir = TempDir::new().unwrap();
    let output = console_app(&dir, "-V");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1.0.0\n");
}

#[test]
fn help_lists_subcommands_and_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = console_app(&dir, "--help");

    assert_eq!(output.status.code(), Some(0));
    let help = String::from_utf8_lossy(&output.stdout);
    for sub in ["files", "calc", "system"] {
        assert!(help.contains(sub), "help is missing '{}':\n{}", sub, help);
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
