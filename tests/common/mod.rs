//! Integration test helpers for cargo-localver.
//!
//! These tests verify end-to-end behavior by creating real Cargo workspaces
//! and release ledgers on disk and driving the binary through its
//! command-line interface.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a workspace with two members: `crate-a` inherits its version from
/// the workspace, `crate-b` declares its own.
#[allow(unused)]
pub fn create_release_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();

    fs::write(
        temp.path().join("Cargo.toml"),
        r#"[workspace]
members = ["crate-a", "crate-b"]
resolver = "2"

[workspace.package]
version = "1.3.0"
edition = "2021"

[workspace.dependencies]
serde = { version = "1" }
"#,
    )
    .unwrap();

    let crate_a = temp.path().join("crate-a");
    fs::create_dir(&crate_a).unwrap();
    fs::write(
        crate_a.join("Cargo.toml"),
        r#"[package]
name = "crate-a"
version.workspace = true
edition.workspace = true
"#,
    )
    .unwrap();

    let crate_b = temp.path().join("crate-b");
    fs::create_dir(&crate_b).unwrap();
    fs::write(
        crate_b.join("Cargo.toml"),
        r#"[package]
name = "crate-b"
version = "1.3.0"
edition = "2021"
"#,
    )
    .unwrap();

    temp
}

/// Writes a release ledger next to the workspace and returns its path.
#[allow(unused)]
pub fn write_ledger(workspace_root: &Path, contents: &str) -> std::path::PathBuf {
    let path = workspace_root.join(".release-please-manifest.json");
    fs::write(&path, contents).unwrap();
    path
}

/// Helper to run a cargo-localver subcommand in `workspace_root`.
#[allow(unused)]
pub fn run_localver(workspace_root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("cargo-localver");
    cmd.arg("localver").args(args).current_dir(workspace_root);
    cmd.assert()
}
