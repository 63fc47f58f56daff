//! Selection of upgrade candidates from a list of tags
//!
//! Tags are parsed with the standard grammar only. Tags that fail to parse are
//! skipped so that one malformed tag does not hide valid upgrades.

use tracing::debug;

use crate::version::error::VersionError;
use crate::version::parser::parse_semver;
use crate::version::types::Version;

/// Find the newest tag that is strictly greater than `current`.
///
/// When `match_pre_release` is set, only tags on the same pre-release channel
/// as `current` are considered.
///
/// # Returns
/// * `Ok(Some(tag))` - The newest tag, exactly as it appears in `tags`
/// * `Ok(None)` - No tag is newer than `current`
/// * `Err(VersionError)` - If `current` is not a valid version
pub fn find_newest<S: AsRef<str>>(
    current: &str,
    tags: &[S],
    match_pre_release: bool,
) -> Result<Option<String>, VersionError> {
    let current_version = parse_semver(current)?;

    if tags.is_empty() {
        return Ok(None);
    }

    let Some(newest) = parse_tags(tags)
        .filter(|v| !match_pre_release || v.pre_release == current_version.pre_release)
        .max()
    else {
        debug!("No versions available");
        return Ok(None);
    };

    if current_version < newest {
        debug!(
            current_version = %current_version,
            latest_available = %newest,
            "Latest available is newer than current"
        );
        Ok(Some(newest.original))
    } else {
        debug!(
            current_version = %current_version,
            latest_available = %newest,
            "Latest available is not newer than current"
        );
        Ok(None)
    }
}

/// Find the lowest stable tag.
///
/// Returns the canonical form of the version (e.g. "v1.0.0" yields "1.0.0"),
/// or an empty string when no stable tag parses.
pub fn find_lowest<S: AsRef<str>>(tags: &[S]) -> String {
    let lowest = parse_tags(tags).filter(Version::is_stable).min();

    match lowest {
        Some(version) => version.to_string(),
        None => {
            debug!("No versions available");
            String::new()
        }
    }
}

fn parse_tags<S: AsRef<str>>(tags: &[S]) -> impl Iterator<Item = Version> + '_ {
    tags.iter().filter_map(|tag| {
        let tag = tag.as_ref();
        parse_semver(tag)
            .inspect_err(|e| debug!(tag, error = %e, "Failed to parse tag"))
            .ok()
    })
}
