//! Update policies
//!
//! A policy looks at the currently deployed version and a candidate version and
//! decides whether the candidate should be rolled out.
//!
//! # Modules
//!
//! - [`semver`]: Semantic version policy (`all`, `major`, `minor`, `patch`, `none`)
//! - [`types`]: The [`PolicyMode`] enum
//! - [`error`]: Error types for policy evaluation

pub mod error;
pub mod semver;
pub mod types;

pub use error::PolicyError;
pub use semver::SemverPolicy;
pub use types::PolicyMode;

/// Trait for deciding whether a candidate version should replace the current one
pub trait UpdatePolicy: Send + Sync {
    /// Returns the policy name as it appears in configuration
    fn name(&self) -> &str;

    /// Returns true when `new` should replace `current`
    fn should_update(&self, current: &str, new: &str) -> Result<bool, PolicyError>;
}

/// Policy that never updates
#[derive(Debug, Clone, Copy, Default)]
pub struct NilPolicy;

impl UpdatePolicy for NilPolicy {
    fn name(&self) -> &str {
        "nil"
    }

    fn should_update(&self, _current: &str, _new: &str) -> Result<bool, PolicyError> {
        Ok(false)
    }
}

/// Policy that updates on every new tag, whatever its version
#[derive(Debug, Clone, Copy, Default)]
pub struct ForcePolicy;

impl UpdatePolicy for ForcePolicy {
    fn name(&self) -> &str {
        "force"
    }

    fn should_update(&self, _current: &str, _new: &str) -> Result<bool, PolicyError> {
        Ok(true)
    }
}

/// Build a policy from its configured name.
///
/// Names are trimmed and matched case-insensitively. An empty name yields
/// [`NilPolicy`].
///
/// Examples:
/// - "" -> NilPolicy
/// - "force" -> ForcePolicy
/// - "minor" -> SemverPolicy(minor)
pub fn policy_from_str(name: &str) -> Result<Box<dyn UpdatePolicy>, PolicyError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(Box::new(NilPolicy));
    }
    if name.eq_ignore_ascii_case("force") {
        return Ok(Box::new(ForcePolicy));
    }

    let mode: PolicyMode = name.parse()?;
    Ok(Box::new(SemverPolicy::new(mode)))
}
