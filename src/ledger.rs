//! Release ledger lookups.
//!
//! The ledger is a flat JSON object mapping component keys to released
//! version strings, produced by the release automation. It is read-only from
//! this tool's perspective and supplies the baseline ("ceiling") version that
//! local builds are stamped against.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{LocalverError, Result};

/// Reads the released version for `component` from the ledger at `path`.
///
/// Besides the literal key, simple path-normalized variants are tried: the
/// key with any trailing slash stripped, with a trailing slash appended, and
/// with a leading `./` stripped. `ComponentNotFound` lists the known keys.
pub fn released_version(path: &Path, component: &str) -> Result<String> {
    if !path.exists() {
        return Err(LocalverError::LedgerMissing(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&text).map_err(|e| LocalverError::LedgerMalformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let map = data
        .as_object()
        .ok_or_else(|| LocalverError::LedgerMalformed {
            path: path.to_path_buf(),
            reason: "not a JSON object".to_string(),
        })?;

    let trimmed = component.trim_end_matches('/');
    let candidates = [
        component.to_string(),
        trimmed.to_string(),
        format!("{trimmed}/"),
        trimmed.trim_start_matches("./").to_string(),
    ];

    for key in &candidates {
        if let Some(value) = map.get(key) {
            return match value.as_str() {
                Some(version) if !version.is_empty() => Ok(version.to_string()),
                _ => Err(LocalverError::LedgerMalformed {
                    path: path.to_path_buf(),
                    reason: format!("invalid version for '{key}'"),
                }),
            };
        }
    }

    let mut known: Vec<&str> = map.keys().map(String::as_str).collect();
    known.sort_unstable();
    Err(LocalverError::ComponentNotFound {
        component: component.to_string(),
        path: path.to_path_buf(),
        known: known.join(", "),
    })
}
