mod common;

use std::fs;

use common::*;
use predicates::prelude::*;

#[test]
fn sync_stamps_workspace_and_literal_members() {
    let temp = create_release_workspace();
    let root = temp.path();
    write_ledger(root, r#"{"my-component": "1.4.0"}"#);

    run_localver(
        root,
        &[
            "sync",
            "--component",
            "my-component",
            "--stamp",
            "202401010000",
        ],
    )
    .success()
    .stdout(predicate::str::contains("1.4.0-local.202401010000"));

    let workspace = fs::read_to_string(root.join("Cargo.toml")).unwrap();
    assert!(workspace.contains("version = \"1.4.0-local.202401010000\""));
    // Unrelated lines survive byte-for-byte.
    assert!(workspace.contains("serde = { version = \"1\" }"));
    assert!(workspace.contains("edition = \"2021\""));

    // crate-a inherits; its manifest is untouched.
    let member_a = fs::read_to_string(root.join("crate-a/Cargo.toml")).unwrap();
    assert!(member_a.contains("version.workspace = true"));
    assert!(!member_a.contains("-local."));

    // crate-b declares its own version; it is synced.
    let member_b = fs::read_to_string(root.join("crate-b/Cargo.toml")).unwrap();
    assert!(member_b.contains("version = \"1.4.0-local.202401010000\""));
}

#[test]
fn sync_rejects_invalid_stamp() {
    let temp = create_release_workspace();
    let root = temp.path();
    write_ledger(root, r#"{"my-component": "1.4.0"}"#);

    run_localver(
        root,
        &["sync", "--component", "my-component", "--stamp", "2024"],
    )
    .failure()
    .stderr(predicate::str::contains("invalid stamp"));
}

#[test]
fn sync_fails_when_ledger_is_missing() {
    let temp = create_release_workspace();
    let root = temp.path();

    run_localver(
        root,
        &[
            "sync",
            "--component",
            "my-component",
            "--stamp",
            "202401010000",
        ],
    )
    .failure()
    .stderr(predicate::str::contains("release ledger not found"));
}

#[test]
fn sync_fails_on_unknown_component_listing_keys() {
    let temp = create_release_workspace();
    let root = temp.path();
    write_ledger(root, r#"{"other": "1.0.0"}"#);

    run_localver(
        root,
        &[
            "sync",
            "--component",
            "my-component",
            "--stamp",
            "202401010000",
        ],
    )
    .failure()
    .stderr(predicate::str::contains("component 'my-component' not found"))
    .stderr(predicate::str::contains("other"));
}

#[test]
fn sync_refuses_version_above_released_baseline() {
    let temp = create_release_workspace();
    let root = temp.path();
    // Workspace is at 1.3.0 but the ledger says the release is behind it.
    write_ledger(root, r#"{"my-component": "1.2.0"}"#);

    run_localver(
        root,
        &[
            "sync",
            "--component",
            "my-component",
            "--stamp",
            "202401010000",
        ],
    )
    .failure()
    .stderr(predicate::str::contains("is higher than released version"));

    // Nothing was modified.
    let workspace = fs::read_to_string(root.join("Cargo.toml")).unwrap();
    assert!(workspace.contains("version = \"1.3.0\""));
}

#[test]
fn sync_aborts_before_writing_when_a_member_is_missing() {
    let temp = create_release_workspace();
    let root = temp.path();
    write_ledger(root, r#"{"my-component": "1.4.0"}"#);
    fs::remove_dir_all(root.join("crate-b")).unwrap();

    run_localver(
        root,
        &[
            "sync",
            "--component",
            "my-component",
            "--stamp",
            "202401010000",
        ],
    )
    .failure()
    .stderr(predicate::str::contains("member manifest not found"));

    // Validate-all-before-writing: nothing was modified, including the
    // workspace manifest itself.
    let workspace = fs::read_to_string(root.join("Cargo.toml")).unwrap();
    assert!(workspace.contains("version = \"1.3.0\""));
    assert!(!workspace.contains("-local."));
}

#[test]
fn sync_is_repeatable_with_a_fresh_stamp() {
    let temp = create_release_workspace();
    let root = temp.path();
    write_ledger(root, r#"{"my-component": "1.4.0"}"#);

    let args = |stamp| {
        [
            "sync",
            "--component",
            "my-component",
            "--stamp",
            stamp,
        ]
    };

    run_localver(root, &args("202401010000")).success();
    run_localver(root, &args("202401020000"))
        .success()
        .stdout(predicate::str::contains("1.4.0-local.202401020000"));

    let workspace = fs::read_to_string(root.join("Cargo.toml")).unwrap();
    assert!(workspace.contains("version = \"1.4.0-local.202401020000\""));
}
