use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

/// A parsed semantic version: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// The prerelease and build suffixes are kept as the joined strings exactly
/// as they appeared after the first `-` / `+`; the prerelease suffix is split
/// into dot-separated identifiers only at comparison time. Build metadata is
/// parsed for round-tripping but never participates in equality or ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
}

impl Version {
    /// A stable version with no prerelease or build suffix.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// True iff this version carries a prerelease suffix.
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// True iff this is a stable (release) version.
    pub fn is_stable(&self) -> bool {
        self.prerelease.is_none()
    }

    /// Bump the major version (resets minor + patch, drops any suffix).
    pub fn bump_major(&self) -> Self {
        Self::new(self.major + 1, 0, 0)
    }

    /// Bump the minor version (resets patch, drops any suffix).
    pub fn bump_minor(&self) -> Self {
        Self::new(self.major, self.minor + 1, 0)
    }

    /// Bump the patch version (drops any suffix).
    pub fn bump_patch(&self) -> Self {
        Self::new(self.major, self.minor, self.patch + 1)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Upgrade type
// ---------------------------------------------------------------------------

/// Coarse classification of the transition between two versions, used to
/// label suggested upgrades in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeType {
    /// The major component increased.
    Major,
    /// The minor component increased within the same major.
    Minor,
    /// Only the patch component increased.
    Patch,
    /// Same core version, different prerelease position.
    Prerelease,
    /// The proposed version is older than the current one.
    Downgrade,
    /// Equal precedence.
    Same,
}

impl fmt::Display for UpgradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "MAJOR"),
            Self::Minor => write!(f, "MINOR"),
            Self::Patch => write!(f, "PATCH"),
            Self::Prerelease => write!(f, "PRERELEASE"),
            Self::Downgrade => write!(f, "DOWNGRADE"),
            Self::Same => write!(f, "SAME"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors reported by the strict parser ([`Version::parse_strict`]).
///
/// The lossy parser ([`Version::parse`]) never fails and never produces
/// these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("expected MAJOR.MINOR.PATCH, got '{0}'")]
    MalformedCore(String),

    #[error("invalid numeric component '{0}'")]
    InvalidComponent(String),

    #[error("empty prerelease suffix")]
    EmptyPrerelease,

    #[error("empty build metadata")]
    EmptyBuild,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
