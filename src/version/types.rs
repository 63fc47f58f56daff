//! The comparable version value produced by parsing

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use semver::BuildMetadata;
use serde::{Serialize, Serializer};

use crate::version::error::VersionError;
use crate::version::parser;

/// A parsed version.
///
/// Ordering and equality consider `major`, `minor`, `patch` and `pre_release`
/// only. `metadata` and `original` are carried for display.
#[derive(Debug, Clone, Serialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Dot-separated identifiers; numeric ones may carry leading zeros
    pub pre_release: String,
    #[serde(serialize_with = "serialize_display")]
    pub metadata: BuildMetadata,
    /// The exact string the version was parsed from
    pub original: String,
}

impl Version {
    /// Builds a stable version whose `original` is its canonical form.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: String::new(),
            metadata: BuildMetadata::EMPTY,
            original: format!("{major}.{minor}.{patch}"),
        }
    }

    /// Parses a version, panicking if it is invalid.
    ///
    /// Only meant for trusted or constant inputs such as test fixtures.
    ///
    /// # Panics
    ///
    /// Panics when [`parser::parse`] rejects `version`.
    pub fn must_parse(version: &str) -> Self {
        parser::parse(version).unwrap_or_else(|e| panic!("invalid version '{version}': {e}"))
    }

    /// Returns true when the version has no pre-release part.
    pub fn is_stable(&self) -> bool {
        self.pre_release.is_empty()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_release(&self.pre_release, &other.pre_release))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

/// Canonical form: `MAJOR.MINOR.PATCH[-PRE][+META]`, without any `v` prefix.
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

/// Pre-release precedence: no pre-release ranks above any pre-release;
/// otherwise identifiers are compared left to right, numeric ones numerically
/// and below alphanumeric ones, and a strict prefix ranks lower. Identifiers
/// that are numerically equal (`007` vs `7`) fall back to the raw strings.
fn compare_pre_release(lhs: &str, rhs: &str) -> Ordering {
    match (lhs.is_empty(), rhs.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let mut lhs_ids = lhs.split('.');
    let mut rhs_ids = rhs.split('.');
    loop {
        match (lhs_ids.next(), rhs_ids.next()) {
            (Some(a), Some(b)) => match compare_identifier(a, b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return lhs.cmp(rhs),
        }
    }
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    let is_numeric = |id: &str| id.bytes().all(|c| c.is_ascii_digit());

    match (is_numeric(a), is_numeric(b)) {
        (true, true) => {
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
