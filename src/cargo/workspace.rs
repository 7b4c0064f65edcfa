//! Workspace member resolution.
//!
//! Reads the `workspace.members` array from the workspace `Cargo.toml` and
//! maps each declared member to its own manifest file. Reading uses a
//! structured TOML parse; rewriting stays line-oriented elsewhere.

use std::fs;
use std::path::{Path, PathBuf};

use toml_edit::DocumentMut;

use crate::error::{LocalverError, Result};

/// Returns the ordered member paths declared by the workspace manifest.
///
/// Fails with `MembersNotFound` when `workspace.members` is absent, not an
/// array, or empty, and with `InvalidMemberEntry` when an element is not a
/// non-empty string.
pub fn workspace_members(workspace_manifest: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(workspace_manifest)?;
    let doc: DocumentMut = text.parse()?;

    let members = doc
        .get("workspace")
        .and_then(|ws| ws.get("members"))
        .and_then(|m| m.as_array())
        .filter(|arr| !arr.is_empty())
        .ok_or_else(|| LocalverError::MembersNotFound(workspace_manifest.to_path_buf()))?;

    let mut out = Vec::with_capacity(members.len());
    for entry in members {
        match entry.as_str() {
            Some(member) if !member.is_empty() => out.push(member.to_string()),
            _ => {
                return Err(LocalverError::InvalidMemberEntry {
                    manifest: workspace_manifest.to_path_buf(),
                    entry: entry.to_string().trim().to_string(),
                });
            }
        }
    }

    Ok(out)
}

/// Resolves every workspace member to its `Cargo.toml`.
///
/// All member manifests are existence-checked up front, before any caller
/// writes anything: a missing member aborts the whole run with zero files
/// modified.
pub fn member_manifests(workspace_manifest: &Path) -> Result<Vec<PathBuf>> {
    let members = workspace_members(workspace_manifest)?;
    let workspace_dir = workspace_manifest.parent().unwrap_or_else(|| Path::new("."));

    let mut manifests = Vec::with_capacity(members.len());
    for member in &members {
        let manifest = workspace_dir.join(member).join("Cargo.toml");
        if !manifest.exists() {
            return Err(LocalverError::MemberManifestMissing(manifest));
        }
        manifests.push(manifest);
    }

    log::debug!(
        "{}: resolved {} member manifests",
        workspace_manifest.display(),
        manifests.len()
    );
    Ok(manifests)
}
