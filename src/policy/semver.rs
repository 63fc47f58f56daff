//! Semver-based update policy

use tracing::debug;

use crate::policy::UpdatePolicy;
use crate::policy::error::PolicyError;
use crate::policy::types::PolicyMode;
use crate::version::grammar;
use crate::version::parser::parse_semver;

/// Tag that always refers to the most recent image; it carries no version.
pub const LATEST_TAG: &str = "latest";

/// Decides upgrades by comparing semantic versions under a [`PolicyMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemverPolicy {
    mode: PolicyMode,
}

impl SemverPolicy {
    pub fn new(mode: PolicyMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PolicyMode {
        self.mode
    }

    /// Returns the mode name, e.g. "minor"
    pub fn name(&self) -> &'static str {
        self.mode.as_str()
    }

    /// Decide whether `current` should be replaced by `new`.
    ///
    /// Rules, in order:
    /// - a `latest` current tag always updates
    /// - versions on different pre-release channels never update, unless the
    ///   mode is `all` or `new` is a pipeline version
    /// - `new` must be strictly greater than `current`
    /// - `all`/`major` accept any such version, `minor` requires the same major,
    ///   `patch` requires the same major and minor, anything else rejects
    pub fn should_update(&self, current: &str, new: &str) -> Result<bool, PolicyError> {
        if current == LATEST_TAG {
            return Ok(true);
        }

        let current_normalized = grammar::normalize(current);
        let new_normalized = grammar::normalize(new);

        if new_normalized.splitn(3, '.').count() != 3 {
            return Err(PolicyError::NoMajorMinorPatchElementsFound);
        }

        let current_version =
            parse_semver(&current_normalized).map_err(PolicyError::CurrentVersion)?;
        let new_version = parse_semver(&new_normalized).map_err(PolicyError::NewVersion)?;

        // Pipeline versions carry build data in the pre-release slot, not a channel
        if current_version.pre_release != new_version.pre_release
            && self.mode != PolicyMode::All
            && !grammar::is_pipeline_version(new)
        {
            debug!(
                current,
                new,
                policy = %self.mode,
                "Pre-release channels differ, skipping update"
            );
            return Ok(false);
        }

        if current_version >= new_version {
            return Ok(false);
        }

        let should_update = match self.mode {
            PolicyMode::All | PolicyMode::Major => true,
            PolicyMode::Minor => new_version.major == current_version.major,
            PolicyMode::Patch => {
                new_version.major == current_version.major
                    && new_version.minor == current_version.minor
            }
            PolicyMode::None | PolicyMode::Unknown(_) => false,
        };
        Ok(should_update)
    }
}

impl UpdatePolicy for SemverPolicy {
    fn name(&self) -> &str {
        SemverPolicy::name(self)
    }

    fn should_update(&self, current: &str, new: &str) -> Result<bool, PolicyError> {
        SemverPolicy::should_update(self, current, new)
    }
}
