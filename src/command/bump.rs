//! `cargo localver bump` — bump the workspace version in place.
//!
//! Unlike `sync`, this skips the release ledger entirely: the base is the
//! *current* `[workspace.package]` version with any existing `-local.<stamp>`
//! suffix stripped. The selected segment is bumped and the result is
//! restamped.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{LocalverError, Result};
use crate::ops::{find_version_in_section, replace_version_in_section};
use crate::version::{Bump, Semver, compose_local, strip_local_suffix, validate_stamp};

const WORKSPACE_PACKAGE: &str = "[workspace.package]";

#[derive(Parser, Debug, Clone)]
pub struct BumpArgs {
    /// Path to the workspace Cargo.toml
    #[arg(long, value_name = "PATH")]
    pub manifest: PathBuf,

    /// Build stamp (YYYYMMDDHHMM)
    #[arg(long, value_name = "STAMP")]
    pub stamp: String,

    /// Semver base segment to bump before applying -local.<stamp>
    #[arg(long, value_name = "SEGMENT", default_value = "none", value_parser = parse_bump)]
    pub bump: Bump,
}

fn parse_bump(s: &str) -> std::result::Result<Bump, String> {
    s.parse().map_err(|e: LocalverError| e.to_string())
}

pub fn execute(args: BumpArgs) -> Result<()> {
    validate_stamp(&args.stamp)?;

    if !args.manifest.exists() {
        return Err(LocalverError::ManifestMissing(args.manifest));
    }

    let text = fs::read_to_string(&args.manifest)?;
    let current = find_version_in_section(&text, WORKSPACE_PACKAGE).ok_or_else(|| {
        LocalverError::VersionFieldNotFound {
            section: WORKSPACE_PACKAGE.to_string(),
            manifest: args.manifest.clone(),
        }
    })?;

    let current_base: Semver = strip_local_suffix(&current).parse()?;
    let new_version = compose_local(current_base, &args.stamp, args.bump);

    // The bumped base is the ceiling: the current base can never exceed it,
    // so the ceiling check cannot fire on a well-formed manifest.
    replace_version_in_section(
        &args.manifest,
        WORKSPACE_PACKAGE,
        false,
        args.bump.apply(current_base),
        &new_version,
    )?;

    log::info!("bumped {current} -> {new_version} ({})", args.bump);
    println!("{new_version}");

    Ok(())
}
