use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("version tag is missing")]
    VersionTagMissing,

    #[error("No Major.Minor.Patch elements found")]
    InvalidFormat,

    #[error("invalid semantic version: {version}")]
    InvalidSemVer { version: String },
}

impl VersionError {
    pub(crate) fn invalid_semver(version: &str) -> Self {
        VersionError::InvalidSemVer {
            version: version.to_string(),
        }
    }
}
