//! Error types for cargo-localver.
//!
//! All operations return `Result<T>` which aliases `Result<T, LocalverError>`.
//! Every variant is fatal to the invoking command: a half-applied version sync
//! across a workspace is worse than an aborted one, so there are no retries
//! and no partial recovery.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from version sync and bump operations.
#[derive(Debug, Error)]
pub enum LocalverError {
    /// Input is not valid semver.
    #[error("version is not valid semver: {0}")]
    InvalidVersion(String),

    /// Build stamp is not exactly 12 digits.
    #[error("invalid stamp (expected YYYYMMDDHHMM): {0}")]
    InvalidStamp(String),

    /// Bump selector outside {none, patch, minor, major}.
    #[error("unknown bump segment: {0}")]
    UnknownBumpSegment(String),

    /// A manifest's current version exceeds the released baseline.
    ///
    /// Signals a release process inconsistency that must be fixed upstream.
    #[error("{manifest}: version {current} is higher than released version {ceiling}")]
    VersionAboveCeiling {
        manifest: PathBuf,
        current: String,
        ceiling: String,
    },

    /// The target section contains neither a version assignment nor (where
    /// allowed) a workspace inheritance marker.
    #[error("{section} version not found in {manifest}")]
    VersionFieldNotFound { section: String, manifest: PathBuf },

    /// A manifest path given on the command line does not exist.
    #[error("manifest not found: {0}")]
    ManifestMissing(PathBuf),

    /// `workspace.members` is absent, not an array, or empty.
    #[error("workspace members not found in {0}")]
    MembersNotFound(PathBuf),

    /// A `workspace.members` element is not a non-empty string.
    #[error("invalid workspace member entry in {manifest}: {entry}")]
    InvalidMemberEntry { manifest: PathBuf, entry: String },

    /// A declared member directory has no Cargo.toml.
    #[error("member manifest not found: {0}")]
    MemberManifestMissing(PathBuf),

    /// The release ledger file does not exist.
    #[error("release ledger not found: {0}")]
    LedgerMissing(PathBuf),

    /// The release ledger is not a flat string-to-string mapping.
    #[error("malformed release ledger {path}: {reason}")]
    LedgerMalformed { path: PathBuf, reason: String },

    /// Component key absent from the release ledger.
    #[error("component '{component}' not found in {path} (keys: {known})")]
    ComponentNotFound {
        component: String,
        path: PathBuf,
        known: String,
    },

    /// Source files exceed the configured line limit.
    #[error("found {files} Rust files over {max} lines")]
    LineLimitExceeded { files: usize, max: usize },

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse error while reading the workspace member list.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// HTTP request to the model registry failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cargo-localver operations.
pub type Result<T> = std::result::Result<T, LocalverError>;
