use std::cmp::Ordering;

use crate::types::{UpgradeType, Version};

// ---------------------------------------------------------------------------
// Prerelease classification
// ---------------------------------------------------------------------------

/// True iff the version string carries a prerelease suffix.
///
/// Build metadata is split off first, so a `-` inside `+build-5` does not
/// count as a prerelease marker.
pub fn is_prerelease(version: &str) -> bool {
    Version::parse(version).is_prerelease()
}

/// True iff the version string denotes a stable (release) version.
pub fn is_stable(version: &str) -> bool {
    !is_prerelease(version)
}

// ---------------------------------------------------------------------------
// Upgrade classification
// ---------------------------------------------------------------------------

/// Classify the transition from `current` to `next`.
///
/// Equal precedence is [`UpgradeType::Same`] and a lower `next` is
/// [`UpgradeType::Downgrade`]. For genuine upgrades, the first core
/// component that changed names the type; if the core versions match, the
/// difference can only live in the prerelease suffix.
pub fn upgrade_type(current: &str, next: &str) -> UpgradeType {
    let from = Version::parse(current);
    let to = Version::parse(next);

    match from.cmp(&to) {
        Ordering::Equal => UpgradeType::Same,
        Ordering::Greater => UpgradeType::Downgrade,
        Ordering::Less => {
            if to.major != from.major {
                UpgradeType::Major
            } else if to.minor != from.minor {
                UpgradeType::Minor
            } else if to.patch != from.patch {
                UpgradeType::Patch
            } else {
                UpgradeType::Prerelease
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Recommendation policy
// ---------------------------------------------------------------------------

/// Decide whether an "upgrade available" notification should recommend
/// moving from `current` to `next`.
///
/// A recommendation requires `next` to be strictly newer, and a stable
/// install is never pointed at a prerelease. Every other direction is
/// recommended: stable to stable, prerelease to stable, and prerelease to a
/// newer prerelease.
pub fn should_recommend_upgrade(current: &str, next: &str) -> bool {
    let from = Version::parse(current);
    let to = Version::parse(next);

    if to.cmp(&from) != Ordering::Greater {
        return false;
    }

    !(from.is_stable() && to.is_prerelease())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
