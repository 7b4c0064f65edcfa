//! Semver parsing and local version composition.
//!
//! Only the `MAJOR.MINOR.PATCH` base triple is kept after parsing; pre-release
//! and build metadata are accepted on input but never reconstructed. Local
//! versions append `-local.<stamp>` to a base, marking non-released builds.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LocalverError, Result};

static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<pre>[0-9A-Za-z.-]+))?(?:\+(?P<build>[0-9A-Za-z.-]+))?$",
    )
    .expect("semver regex is valid")
});

static STAMP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{12}$").expect("stamp regex is valid"));

/// A semver base triple. Pre-release and build suffixes are discarded at parse
/// time, so two versions differing only in suffix compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Semver {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl FromStr for Semver {
    type Err = LocalverError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = SEMVER_RE
            .captures(s)
            .ok_or_else(|| LocalverError::InvalidVersion(s.to_string()))?;

        // Segments match `0|[1-9]\d*`, so they parse as u64 unless absurdly
        // large; treat overflow as invalid input rather than panicking.
        let segment = |name: &str| -> Result<u64> {
            caps[name]
                .parse()
                .map_err(|_| LocalverError::InvalidVersion(s.to_string()))
        };

        Ok(Semver {
            major: segment("major")?,
            minor: segment("minor")?,
            patch: segment("patch")?,
        })
    }
}

impl fmt::Display for Semver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Returns the `MAJOR.MINOR.PATCH` portion of `version`, dropping any
/// pre-release or build suffix. Fails with `InvalidVersion` when the input is
/// not semver at all.
pub fn base(version: &str) -> Result<String> {
    Ok(version.parse::<Semver>()?.to_string())
}

/// Which segment of the base triple to increment before stamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bump {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl Bump {
    /// Applies the bump policy: lower segments reset to zero.
    pub fn apply(self, v: Semver) -> Semver {
        match self {
            Bump::None => v,
            Bump::Patch => Semver {
                patch: v.patch + 1,
                ..v
            },
            Bump::Minor => Semver {
                major: v.major,
                minor: v.minor + 1,
                patch: 0,
            },
            Bump::Major => Semver {
                major: v.major + 1,
                minor: 0,
                patch: 0,
            },
        }
    }
}

impl FromStr for Bump {
    type Err = LocalverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Bump::None),
            "patch" => Ok(Bump::Patch),
            "minor" => Ok(Bump::Minor),
            "major" => Ok(Bump::Major),
            other => Err(LocalverError::UnknownBumpSegment(other.to_string())),
        }
    }
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Bump::None => "none",
            Bump::Patch => "patch",
            Bump::Minor => "minor",
            Bump::Major => "major",
        };
        f.write_str(s)
    }
}

/// Composes a local version string from a released base, a build stamp, and a
/// bump segment.
///
/// Stamp validity (`validate_stamp`) is a caller precondition; composition
/// does not re-validate.
pub fn compose_local(base: Semver, stamp: &str, bump: Bump) -> String {
    format!("{}-local.{stamp}", bump.apply(base))
}

/// Checks that `stamp` is exactly 12 ASCII digits (a `YYYYMMDDHHMM` token).
pub fn validate_stamp(stamp: &str) -> Result<()> {
    if STAMP_RE.is_match(stamp) {
        Ok(())
    } else {
        Err(LocalverError::InvalidStamp(stamp.to_string()))
    }
}

/// Strips an existing `-local.<stamp>` suffix, if any, so an already-local
/// version can be re-parsed as plain semver before re-composition.
pub fn strip_local_suffix(version: &str) -> &str {
    match version.split_once("-local.") {
        Some((head, _)) => head,
        None => version,
    }
}
