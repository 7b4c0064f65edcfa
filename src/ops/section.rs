//! Section-scoped version rewriting in Cargo manifests.
//!
//! The contract is "touch exactly one field, preserve everything else
//! byte-for-byte", so this module deliberately avoids a structured TOML
//! round trip. A manifest is modelled as a sequence of lines fed through a
//! small state machine (outside section / inside before match / inside after
//! match); only the first `version = "..."` assignment inside the target
//! section is ever rewritten, and every other line, including its original
//! terminator, passes through unchanged.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LocalverError, Result};
use crate::version::{Semver, base};

/// Marker in member manifests whose version is owned by the workspace.
const WORKSPACE_VERSION_MARKER: &str = "version.workspace = true";

static VERSION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Exact key, quoted literal, no escape support. Matched against the
    // trimmed line so surrounding whitespace is irrelevant.
    Regex::new(r#"^version\s*=\s*"([^"]+)"\s*$"#).expect("version line regex is valid")
});

/// Result of a section-scoped edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Whether the manifest was rewritten and persisted.
    pub changed: bool,
    /// The version string that was replaced, when one was.
    pub old_version: Option<String>,
}

/// Replaces the first `version = "..."` assignment inside `section_header`
/// with `new_version`, persisting the manifest atomically.
///
/// Behavior:
///
/// - The current version's base must not exceed `ceiling` (the released
///   baseline); a higher base fails with `VersionAboveCeiling` and leaves the
///   file untouched. Local builds must never claim a version the release
///   process has not reached.
/// - When `allow_workspace_version` is set and the section carries only
///   `version.workspace = true`, the version is owned by the workspace:
///   nothing is rewritten and the outcome reports `changed = false`.
/// - A section with neither form fails with `VersionFieldNotFound`.
///
/// Re-applying the same edit is not special-cased: a second call with an
/// equal `ceiling` succeeds and reports `changed = true` again.
pub fn replace_version_in_section(
    manifest: &Path,
    section_header: &str,
    allow_workspace_version: bool,
    ceiling: Semver,
    new_version: &str,
) -> Result<EditOutcome> {
    let text = fs::read_to_string(manifest)?;

    let mut out = String::with_capacity(text.len());
    let mut in_section = false;
    let mut replaced = false;
    let mut saw_workspace_version = false;
    let mut old_version: Option<String> = None;

    for line in text.split_inclusive('\n') {
        let stripped = line.trim();

        if stripped == section_header {
            in_section = true;
            out.push_str(line);
            continue;
        }

        if in_section && line.trim_start().starts_with('[') && stripped.ends_with(']') {
            in_section = false;
        }

        if in_section {
            if allow_workspace_version && stripped == WORKSPACE_VERSION_MARKER {
                saw_workspace_version = true;
                out.push_str(line);
                continue;
            }

            if !replaced
                && let Some(caps) = VERSION_LINE_RE.captures(stripped)
            {
                let current = caps[1].to_string();
                let current_base: Semver = base(&current)?.parse()?;
                if current_base > ceiling {
                    return Err(LocalverError::VersionAboveCeiling {
                        manifest: manifest.to_path_buf(),
                        current,
                        ceiling: ceiling.to_string(),
                    });
                }

                out.push_str(&format!("version = \"{new_version}\"\n"));
                old_version = Some(current);
                replaced = true;
                continue;
            }
        }

        out.push_str(line);
    }

    if saw_workspace_version {
        // The actual version is declared at the workspace level; the caller
        // validates that one separately. Nothing to rewrite here.
        log::debug!(
            "{}: version inherited from workspace, skipping",
            manifest.display()
        );
        return Ok(EditOutcome {
            changed: false,
            old_version: None,
        });
    }

    if !replaced {
        return Err(LocalverError::VersionFieldNotFound {
            section: section_header.to_string(),
            manifest: manifest.to_path_buf(),
        });
    }

    crate::fs::replace_file(manifest, &out)?;
    log::info!(
        "{}: {} -> {new_version}",
        manifest.display(),
        old_version.as_deref().unwrap_or("?")
    );

    Ok(EditOutcome {
        changed: true,
        old_version,
    })
}

/// Read-only scan for the first `version = "..."` assignment inside
/// `section_header`. Used by `bump` to obtain the current workspace version
/// before composing its replacement.
pub fn find_version_in_section(text: &str, section_header: &str) -> Option<String> {
    let mut in_section = false;

    for line in text.lines() {
        let stripped = line.trim();

        if stripped == section_header {
            in_section = true;
            continue;
        }

        if in_section && line.trim_start().starts_with('[') && stripped.ends_with(']') {
            return None;
        }

        if in_section && let Some(caps) = VERSION_LINE_RE.captures(stripped) {
            return Some(caps[1].to_string());
        }
    }

    None
}
