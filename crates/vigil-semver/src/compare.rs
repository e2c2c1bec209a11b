use std::cmp::Ordering;

use crate::types::Version;

// ---------------------------------------------------------------------------
// Precedence
// ---------------------------------------------------------------------------

// Equality follows precedence so that Eq and Ord always agree: two versions
// are equal iff they compare equal, and build metadata never participates.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let core = self
            .major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch));

        if core != Ordering::Equal {
            return core;
        }

        // A release outranks any prerelease of the same core version.
        match (&self.prerelease, &other.prerelease) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(a), Some(b)) => compare_prerelease(a, b),
        }
    }
}

/// Compare two prerelease suffixes per SemVer 2.0.0 precedence.
///
/// Each suffix splits into dot-separated identifiers. All-digit identifiers
/// compare numerically and always rank below alphanumeric ones at the same
/// position; alphanumeric identifiers compare as plain ASCII strings. When
/// every shared position is equal, the shorter suffix ranks lower.
fn compare_prerelease(a: &str, b: &str) -> Ordering {
    let a_tokens: Vec<&str> = a.split('.').collect();
    let b_tokens: Vec<&str> = b.split('.').collect();

    for (a_tok, b_tok) in a_tokens.iter().zip(b_tokens.iter()) {
        let ord = match (a_tok.parse::<u64>(), b_tok.parse::<u64>()) {
            (Ok(a_n), Ok(b_n)) => a_n.cmp(&b_n),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a_tok.cmp(b_tok),
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }

    a_tokens.len().cmp(&b_tokens.len())
}

// ---------------------------------------------------------------------------
// Relational operations over raw strings
// ---------------------------------------------------------------------------

/// Compare two raw version strings per SemVer precedence.
///
/// Both inputs go through the lossy parser, so any pair of strings yields a
/// deterministic ordering.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    Version::parse(a).cmp(&Version::parse(b))
}

/// True iff `a` has strictly higher precedence than `b`.
pub fn is_greater_than(a: &str, b: &str) -> bool {
    compare_versions(a, b) == Ordering::Greater
}

/// True iff `a` has strictly lower precedence than `b`.
pub fn is_less_than(a: &str, b: &str) -> bool {
    compare_versions(a, b) == Ordering::Less
}

/// True iff `a` and `b` have equal precedence (build metadata ignored).
pub fn is_equal(a: &str, b: &str) -> bool {
    compare_versions(a, b) == Ordering::Equal
}

/// Sort version strings by precedence into a new vector.
///
/// The sort is stable: strings of equal precedence (e.g. differing only in
/// build metadata) keep their original relative order, in both directions.
/// The input is left untouched.
pub fn sort_versions<S: AsRef<str>>(versions: &[S], descending: bool) -> Vec<String> {
    let mut sorted: Vec<String> = versions.iter().map(|v| v.as_ref().to_owned()).collect();
    if descending {
        sorted.sort_by(|a, b| compare_versions(b, a));
    } else {
        sorted.sort_by(|a, b| compare_versions(a, b));
    }
    sorted
}

/// Return whichever input string denotes the higher-precedence version.
/// Ties resolve to `a`.
pub fn max_version<'a>(a: &'a str, b: &'a str) -> &'a str {
    if compare_versions(a, b) == Ordering::Less {
        b
    } else {
        a
    }
}

/// Return whichever input string denotes the lower-precedence version.
/// Ties resolve to `a`.
pub fn min_version<'a>(a: &'a str, b: &'a str) -> &'a str {
    if compare_versions(b, a) == Ordering::Less {
        b
    } else {
        a
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
