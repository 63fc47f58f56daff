use thiserror::Error;

use crate::version::error::VersionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("No Major.Minor.Patch elements found")]
    NoMajorMinorPatchElementsFound,

    #[error("failed to parse current version: {0}")]
    CurrentVersion(#[source] VersionError),

    #[error("failed to parse new version: {0}")]
    NewVersion(#[source] VersionError),

    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),
}
