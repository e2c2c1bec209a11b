//! # vigil-semver
//!
//! Semantic-version parsing, precedence, and upgrade classification for the
//! Vigil vulnerability dashboard.
//!
//! ## Features
//!
//! - **Total parsing** – any string parses to a usable [`Version`];
//!   malformed fragments default to zero/empty instead of failing, and a
//!   strict parser is available for callers that must validate first.
//! - **SemVer 2.0.0 precedence** – core tuple first, then prerelease
//!   identifiers with the numeric-below-alphanumeric rule; build metadata
//!   never affects ordering or equality.
//! - **Relational helpers** – comparisons, stable sorting, and min/max over
//!   raw version strings.
//! - **Upgrade classification** – major/minor/patch/prerelease/downgrade
//!   labels plus a recommendation policy that keeps stable installs off
//!   prerelease builds.
//!
//! Every operation is a pure function of its inputs: the engine holds no
//! state and performs no I/O.

pub mod classify;
pub mod compare;
pub mod parse;
pub mod types;

// Re-export the primary public API.
pub use classify::{is_prerelease, is_stable, should_recommend_upgrade, upgrade_type};
pub use compare::{
    compare_versions, is_equal, is_greater_than, is_less_than, max_version, min_version,
    sort_versions,
};
pub use types::{UpgradeType, Version, VersionError};
