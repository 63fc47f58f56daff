//! Parsing of version strings and image references into [`Version`] values

use std::sync::LazyLock;

use regex::{Captures, Regex};
use semver::BuildMetadata;

use crate::version::error::VersionError;
use crate::version::grammar;
use crate::version::types::Version;

/// Standard grammar, lenient like most container tooling: optional `v` prefix,
/// optional minor and patch. Leading zeros are accepted in every numeric part
/// (`semver::Version::parse` rejects them) since pipeline builds such as
/// `20.1-0042` land in PATCH or the pre-release after rewriting.
static STANDARD_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^v?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?",
        r"(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
        r"(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    ))
    .unwrap()
});

/// Parse a version string of either grammar.
///
/// The string must contain `MAJOR.MINOR.PATCH` once pipeline versions are
/// rewritten. The returned `original` is always the input as given.
///
/// Examples:
/// - "1.2.3" -> 1.2.3
/// - "v1.2.3" -> 1.2.3
/// - "20.1-9638" -> 20.1.9638
/// - "21.0-1571107855-1410-599b8254c7bb" -> 21.0.1571107855-1410-599b8254c7bb
pub fn parse(raw: &str) -> Result<Version, VersionError> {
    let normalized = grammar::normalize(raw);

    if normalized.splitn(3, '.').count() != 3 {
        return Err(VersionError::InvalidFormat);
    }

    let mut version = parse_semver(&normalized).map_err(|_| VersionError::invalid_semver(raw))?;
    version.original = raw.to_string();
    Ok(version)
}

/// Parse a version string of the standard grammar only.
///
/// Missing minor or patch components default to zero, so "1.2" parses as
/// 1.2.0. Pipeline versions are not rewritten.
pub fn parse_semver(raw: &str) -> Result<Version, VersionError> {
    let invalid = || VersionError::invalid_semver(raw);
    let caps = STANDARD_VERSION_RE.captures(raw).ok_or_else(invalid)?;

    let pre_release = caps.get(4).map_or_else(String::new, |m| m.as_str().to_string());
    let metadata = match caps.get(5) {
        Some(m) => BuildMetadata::new(m.as_str()).map_err(|_| invalid())?,
        None => BuildMetadata::EMPTY,
    };

    Ok(Version {
        major: numeric_component(&caps, 1).ok_or_else(invalid)?,
        minor: numeric_component(&caps, 2).ok_or_else(invalid)?,
        patch: numeric_component(&caps, 3).ok_or_else(invalid)?,
        pre_release,
        metadata,
        original: raw.to_string(),
    })
}

/// Absent components are zero; `None` only on overflow.
fn numeric_component(caps: &Captures<'_>, index: usize) -> Option<u64> {
    match caps.get(index) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

/// Split an image reference into its repository and parsed tag.
///
/// The reference is split on `:`; the first part is the repository and the
/// second part the tag. Anything after a further `:` is ignored.
///
/// Examples:
/// - "karolis/webhook-demo:1.4.5" -> ("karolis/webhook-demo", 1.4.5)
/// - "karolis/webhook-demo" -> `VersionTagMissing`
pub fn image_name_and_version(name: &str) -> Result<(String, Version), VersionError> {
    let Some((repository, rest)) = name.split_once(':') else {
        return Err(VersionError::VersionTagMissing);
    };
    let tag = rest.split_once(':').map_or(rest, |(tag, _)| tag);

    let version = parse(tag)?;
    Ok((repository.to_string(), version))
}

/// Parse the tag of an image reference.
pub fn version_from_image_reference(name: &str) -> Result<Version, VersionError> {
    image_name_and_version(name).map(|(_, version)| version)
}
