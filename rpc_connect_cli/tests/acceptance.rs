//! Acceptance test: runs the application as a subprocess and asserts its
//! output for given argument combinations matches what is expected.

#![forbid(unsafe_code)]

use abscissa_core::testing::prelude::*;
use once_cell::sync::Lazy;
use std::{fs, path::PathBuf};

/// Executes your application binary via `cargo run`.
pub static RUNNER: Lazy<CmdRunner> = Lazy::new(CmdRunner::default);

/// Writes a config file whose storage lives next to it, optionally seeding
/// a saved address. Returns the config path.
fn test_config(saved: Option<&str>) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rpc_connect_cli_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();

    let storage = dir.join("storage.toml");
    if let Some(address) = saved {
        fs::write(&storage, format!("[entries]\nRPC_ADDRESS = \"{}\"\n", address)).unwrap();
    }

    let config = dir.join("config.toml");
    fs::write(
        &config,
        format!("storage_path = \"{}\"\n", storage.display()),
    )
    .unwrap();

    config
}

#[test]
fn show_address_prints_saved_address() {
    let config = test_config(Some("https://rpc.cosmos.network:443"));
    let mut runner = RUNNER.clone();
    let mut cmd = runner
        .args(&["-c", config.to_str().unwrap(), "show-address"])
        .capture_stdout()
        .run();

    cmd.stdout().expect_line("https://rpc.cosmos.network:443");
    cmd.wait().unwrap().expect_success();
}

#[test]
fn show_address_without_saved_address() {
    let config = test_config(None);
    let mut runner = RUNNER.clone();
    let mut cmd = runner
        .args(&["-c", config.to_str().unwrap(), "show-address"])
        .capture_stdout()
        .run();

    cmd.stdout()
        .expect_line("no saved RPC address, run the connect command first");
    cmd.wait().unwrap().expect_success();
}

#[test]
fn connect_with_empty_address_fails() {
    let config = test_config(None);
    let mut runner = RUNNER.clone();
    let cmd = runner
        .args(&["-c", config.to_str().unwrap(), "connect", ""])
        .run();

    cmd.wait().unwrap().expect_code(1);

    // nothing was saved
    let storage = config.parent().unwrap().join("storage.toml");
    assert!(!storage.exists());
}

#[test]
fn connect_to_unreachable_node_fails() {
    let config = test_config(Some("https://rpc.cosmos.network:443"));
    let mut runner = RUNNER.clone();
    let cmd = runner
        .args(&["-c", config.to_str().unwrap(), "connect", "http://127.0.0.1:1"])
        .run();

    cmd.wait().unwrap().expect_code(1);

    // the previous address is untouched
    let storage = fs::read_to_string(config.parent().unwrap().join("storage.toml")).unwrap();
    assert!(storage.contains("https://rpc.cosmos.network:443"));
}

#[test]
fn connect_storage_flag_overrides_config() {
    let config = test_config(Some("https://rpc.cosmos.network:443"));
    let bad_storage = config.parent().unwrap().join("bad.json");
    let mut runner = RUNNER.clone();
    let mut cmd = runner
        .args(&[
            "-c",
            config.to_str().unwrap(),
            "connect",
            "--storage",
            bad_storage.to_str().unwrap(),
            "",
        ])
        .capture_stderr()
        .run();

    // the configured store is valid, so this error can only come from the flag
    cmd.stderr().expect_regex("Can't open key/value store");
    cmd.wait().unwrap().expect_code(1);
    assert!(!bad_storage.exists());
}
