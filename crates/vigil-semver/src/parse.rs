use std::str::FromStr;

use tracing::trace;

use crate::types::{Version, VersionError};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Version {
    /// Parse a version string. Total: every input yields a version.
    ///
    /// Accepts an optional leading `v`/`V`, partial cores (`"1.2"` reads as
    /// `1.2.0`), and arbitrary garbage. Build metadata is split off at the
    /// first `+`, the prerelease suffix at the first `-` of what remains.
    /// Missing or malformed numeric components default to `0`; core
    /// components beyond the third are ignored.
    ///
    /// Callers that need to reject malformed input instead of absorbing it
    /// should use [`Version::parse_strict`].
    pub fn parse(input: &str) -> Self {
        let raw = input.trim();
        let raw = raw.strip_prefix(['v', 'V']).unwrap_or(raw);

        let (version_part, build) = match raw.split_once('+') {
            Some((v, b)) if !b.is_empty() => (v, Some(b.to_string())),
            Some((v, _)) => (v, None),
            None => (raw, None),
        };

        let (core, prerelease) = match version_part.split_once('-') {
            Some((v, p)) if !p.is_empty() => (v, Some(p.to_string())),
            Some((v, _)) => (v, None),
            None => (version_part, None),
        };

        let mut components = core.split('.');
        Self {
            major: numeric_component(components.next()),
            minor: numeric_component(components.next()),
            patch: numeric_component(components.next()),
            prerelease,
            build,
        }
    }

    /// Parse a version string, rejecting anything that is not a full
    /// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    ///
    /// Unlike [`Version::parse`] this takes no `v` prefix, requires exactly
    /// three numeric core components, and rejects empty suffixes.
    pub fn parse_strict(input: &str) -> Result<Self, VersionError> {
        let (version_part, build) = match input.split_once('+') {
            Some((_, b)) if b.is_empty() => return Err(VersionError::EmptyBuild),
            Some((v, b)) => (v, Some(b.to_string())),
            None => (input, None),
        };

        let (core, prerelease) = match version_part.split_once('-') {
            Some((_, p)) if p.is_empty() => return Err(VersionError::EmptyPrerelease),
            Some((v, p)) => (v, Some(p.to_string())),
            None => (version_part, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::MalformedCore(input.to_string()));
        }

        let component = |p: &str| {
            p.parse::<u64>()
                .map_err(|_| VersionError::InvalidComponent(p.to_string()))
        };

        Ok(Self {
            major: component(parts[0])?,
            minor: component(parts[1])?,
            patch: component(parts[2])?,
            prerelease,
            build,
        })
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse_strict(s)
    }
}

/// Lossy read of a single core component. Missing and empty read as 0;
/// anything non-numeric reads as 0 with a trace breadcrumb.
fn numeric_component(part: Option<&str>) -> u64 {
    let part = match part {
        Some(p) if !p.is_empty() => p,
        _ => return 0,
    };
    part.parse().unwrap_or_else(|_| {
        trace!(component = part, "defaulting malformed version component to 0");
        0
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let v = Version::parse("1.2.3");
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert_eq!(v.prerelease, None);
        assert_eq!(v.build, None);
    }

    #[test]
    fn test_parse_pre_release_versions() {
        let v = Version::parse("1.0.0-alpha");
        assert_eq!(v.prerelease, Some("alpha".to_string()));
        assert_eq!(v.build, None);

        let v = Version::parse("1.0.0-alpha.1");
        assert_eq!(v.prerelease, Some("alpha.1".to_string()));

        let v = Version::parse("1.0.0-0.3.7");
        assert_eq!(v.prerelease, Some("0.3.7".to_string()));

        let v = Version::parse("2.0.0-rc.1");
        assert_eq!(v.major, 2);
        assert_eq!(v.prerelease, Some("rc.1".to_string()));
    }

    #[test]
    fn test_parse_build_metadata() {
        let v = Version::parse("1.0.0+build.5");
        assert_eq!(v.build, Some("build.5".to_string()));
        assert_eq!(v.prerelease, None);

        let v = Version::parse("1.0.0+20130313144700");
        assert_eq!(v.build, Some("20130313144700".to_string()));
    }

    #[test]
    fn test_parse_pre_release_and_build_metadata() {
        let v = Version::parse("1.0.0-beta+exp.sha.5114f85");
        assert_eq!(v.prerelease, Some("beta".to_string()));
        assert_eq!(v.build, Some("exp.sha.5114f85".to_string()));

        let v = Version::parse("1.0.0-alpha.1+build.123");
        assert_eq!(v.prerelease, Some("alpha.1".to_string()));
        assert_eq!(v.build, Some("build.123".to_string()));
    }

    #[test]
    fn test_dash_inside_build_is_not_a_prerelease() {
        // The '+' split happens first, so a '-' in build metadata does not
        // turn the version into a prerelease.
        let v = Version::parse("1.2.3+build-5");
        assert_eq!(v.prerelease, None);
        assert_eq!(v.build, Some("build-5".to_string()));
    }

    #[test]
    fn test_parse_partial_versions() {
        let v = Version::parse("1.2");
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 0));

        let v = Version::parse("1");
        assert_eq!((v.major, v.minor, v.patch), (1, 0, 0));

        let v = Version::parse("");
        assert_eq!((v.major, v.minor, v.patch), (0, 0, 0));
        assert_eq!(v.prerelease, None);
        assert_eq!(v.build, None);
    }

    #[test]
    fn test_parse_v_prefix() {
        let v = Version::parse("v1.2");
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 0));

        let v = Version::parse("V2.0.0-rc.1");
        assert_eq!(v.major, 2);
        assert_eq!(v.prerelease, Some("rc.1".to_string()));

        let v = Version::parse("v");
        assert_eq!((v.major, v.minor, v.patch), (0, 0, 0));
    }

    #[test]
    fn test_parse_never_fails_on_garbage() {
        let v = Version::parse("abc");
        assert_eq!((v.major, v.minor, v.patch), (0, 0, 0));

        // Extra core segments are ignored.
        let v = Version::parse("1.2.3.4.5");
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));

        // Malformed components read as 0 without disturbing their neighbors.
        let v = Version::parse("1.x.3");
        assert_eq!((v.major, v.minor, v.patch), (1, 0, 3));

        let v = Version::parse("not-a-version");
        assert_eq!((v.major, v.minor, v.patch), (0, 0, 0));
        assert_eq!(v.prerelease, Some("a-version".to_string()));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let v = Version::parse("  1.2.3 ");
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
    }

    #[test]
    fn test_strict_accepts_full_versions() {
        assert!(Version::parse_strict("1.0.0-beta.1").is_ok());
        assert!(Version::parse_strict("2.0.0-rc.1").is_ok());
        assert!(Version::parse_strict("1.0.0+build.123").is_ok());

        let v: Version = "1.2.3-alpha.1+build.5".parse().unwrap();
        assert_eq!(v.prerelease, Some("alpha.1".to_string()));
        assert_eq!(v.build, Some("build.5".to_string()));
    }

    #[test]
    fn test_strict_rejects_malformed_versions() {
        assert!(Version::parse_strict("1.0").is_err());
        assert!(Version::parse_strict("1").is_err());
        assert!(Version::parse_strict("1.0.0.0").is_err());
        assert!(Version::parse_strict("a.b.c").is_err());
        assert!(Version::parse_strict("").is_err());
        assert!(Version::parse_strict("v1.0.0").is_err());
        assert_eq!(
            Version::parse_strict("1.0.0-"),
            Err(VersionError::EmptyPrerelease)
        );
        assert_eq!(Version::parse_strict("1.0.0+"), Err(VersionError::EmptyBuild));
    }

    #[test]
    fn test_strict_and_lossy_agree_on_canonical_input() {
        for s in ["0.0.0", "1.2.3", "1.0.0-alpha.1", "2.1.0+sha.5114f85"] {
            let strict = Version::parse_strict(s).unwrap();
            assert_eq!(strict, Version::parse(s));
            assert_eq!(strict.to_string(), s);
        }
    }
}
