//! `cargo localver sync` — sync workspace versions to the release ledger.
//!
//! Reads the released baseline for a component from the release ledger,
//! composes `<base>-local.<stamp>`, writes it into `[workspace.package]`, and
//! then into each member's `[package]` section. Members inheriting their
//! version from the workspace are left untouched.
//!
//! All member manifests are resolved and existence-checked before the first
//! write, so a missing member aborts the run with zero files modified. A
//! failure while editing member N still leaves members 1..N-1 updated; each
//! file write is atomic but the batch is not transactional.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::cargo::member_manifests;
use crate::error::{LocalverError, Result};
use crate::ledger::released_version;
use crate::ops::replace_version_in_section;
use crate::version::{Bump, Semver, base, compose_local, validate_stamp};

#[derive(Parser, Debug, Clone)]
pub struct SyncArgs {
    /// Path to the release ledger JSON
    #[arg(
        long,
        value_name = "PATH",
        default_value = ".release-please-manifest.json"
    )]
    pub ledger: PathBuf,

    /// Component key in the release ledger
    #[arg(long, value_name = "KEY")]
    pub component: String,

    /// Path to the workspace Cargo.toml
    #[arg(long, value_name = "PATH", default_value = "Cargo.toml")]
    pub workspace_manifest: PathBuf,

    /// Build stamp (YYYYMMDDHHMM)
    #[arg(long, value_name = "STAMP")]
    pub stamp: String,
}

pub fn execute(args: SyncArgs) -> Result<()> {
    validate_stamp(&args.stamp)?;

    if !args.workspace_manifest.exists() {
        return Err(LocalverError::ManifestMissing(args.workspace_manifest));
    }

    let released = released_version(&args.ledger, &args.component)?;
    let release_base: Semver = base(&released)?.parse()?;
    let new_version = compose_local(release_base, &args.stamp, Bump::None);

    log::info!(
        "released baseline for '{}': {released} (base {release_base})",
        args.component
    );

    // Resolve every member before the first write, so a missing member
    // aborts with zero files modified.
    let manifests = member_manifests(&args.workspace_manifest)?;

    // Workspace-level default version; inheritance is never legal here.
    replace_version_in_section(
        &args.workspace_manifest,
        "[workspace.package]",
        false,
        release_base,
        &new_version,
    )?;

    let mut updated = 1usize;
    for manifest in &manifests {
        let outcome =
            replace_version_in_section(manifest, "[package]", true, release_base, &new_version)?;
        if outcome.changed {
            updated += 1;
        }
    }

    eprintln!(
        "{} {} manifest{} set to {}",
        "✓".green().bold(),
        updated,
        if updated == 1 { "" } else { "s" },
        new_version.green()
    );
    println!("{new_version}");

    Ok(())
}
