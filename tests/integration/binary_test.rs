//! Tests that run the compiled `routestore` binary.

use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn run_routestore(args: &[&str], stdin: &str, config_dir: &Path) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_routestore"))
        .args(args)
        .env("ROUTE_STORE_CONFIG", config_dir.join("config.toml"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start routestore");

    // The child may exit before reading everything (e.g. on a config error).
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait on routestore");
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_exit_command_ends_with_code_zero() {
    let dir = tempdir().unwrap();
    let (code, stdout, _) = run_routestore(
        &["--quiet"],
        "addroute Clementi BuonaVista 12\nexit\ngetdistance Clementi BuonaVista\n",
        dir.path(),
    );

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Route from Clementi to BuonaVista with distance 12km added\n"
    );
}

#[test]
fn test_end_of_input_ends_with_code_zero() {
    let dir = tempdir().unwrap();
    let (code, stdout, _) = run_routestore(&["--quiet"], "getdistance A B\n", dir.path());

    assert_eq!(code, 0);
    assert_eq!(stdout, "No route exists from A to B!\n");
}

#[test]
fn test_prompts_by_default() {
    let dir = tempdir().unwrap();
    let (code, stdout, _) = run_routestore(&[], "exit\n", dir.path());

    assert_eq!(code, 0);
    assert_eq!(stdout, "Welcome to SimpleRouteStore!\nEnter command:");
}

#[test]
fn test_config_file_changes_console_text() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[console]\nprompt = \"> \"\nshow_welcome = false\n",
    )
    .unwrap();

    let (code, stdout, _) = run_routestore(&[], "bogus\nexit\n", dir.path());

    assert_eq!(code, 0);
    assert_eq!(stdout, "> invalid command format :bogus\n> ");
}

#[test]
fn test_broken_config_fails() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[console").unwrap();

    let (code, stdout, stderr) = run_routestore(&[], "exit\n", dir.path());

    assert_eq!(code, 1);
    assert_eq!(stdout, "");
    assert!(stderr.contains("Configuration Error"), "stderr: {stderr}");
}

#[test]
fn test_script_file() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("routes.txt");
    std::fs::write(&script, "addroute A B 5\ngetdistance b a\n").unwrap();

    let (code, stdout, _) = run_routestore(
        &["--quiet", "--script", script.to_str().unwrap()],
        "",
        dir.path(),
    );

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Route from A to B with distance 5km added\nDistance from b to a is 5\n"
    );
}

#[test]
fn test_missing_script_fails() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("absent.txt");

    let (code, _, stderr) = run_routestore(
        &["--script", script.to_str().unwrap()],
        "",
        dir.path(),
    );

    assert_eq!(code, 1);
    assert!(stderr.contains("absent.txt"), "stderr: {stderr}");
}
