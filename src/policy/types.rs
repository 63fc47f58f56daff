//! Policy modes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::policy::error::PolicyError;

/// Granularity of version change an automatic upgrade may apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PolicyMode {
    /// Never update
    #[default]
    None,
    /// Any newer version, across pre-release channels
    All,
    /// Any newer version on the same channel
    Major,
    /// Newer minor or patch within the same major
    Minor,
    /// Newer patch within the same major.minor
    Patch,
    /// Unrecognized numeric code; never updates
    Unknown(i32),
}

impl PolicyMode {
    /// Maps the numeric codes used by stored configurations (0 = none .. 4 = patch).
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => PolicyMode::None,
            1 => PolicyMode::All,
            2 => PolicyMode::Major,
            3 => PolicyMode::Minor,
            4 => PolicyMode::Patch,
            other => PolicyMode::Unknown(other),
        }
    }

    /// Returns the string representation of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyMode::None => "none",
            PolicyMode::All => "all",
            PolicyMode::Major => "major",
            PolicyMode::Minor => "minor",
            PolicyMode::Patch => "patch",
            PolicyMode::Unknown(_) => "",
        }
    }
}

impl fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyMode {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(PolicyMode::None),
            "all" => Ok(PolicyMode::All),
            "major" => Ok(PolicyMode::Major),
            "minor" => Ok(PolicyMode::Minor),
            "patch" => Ok(PolicyMode::Patch),
            _ => Err(PolicyError::UnknownPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for PolicyMode {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PolicyMode> for String {
    fn from(mode: PolicyMode) -> Self {
        mode.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PolicyMode::None, "none")]
    #[case(PolicyMode::All, "all")]
    #[case(PolicyMode::Major, "major")]
    #[case(PolicyMode::Minor, "minor")]
    #[case(PolicyMode::Patch, "patch")]
    #[case(PolicyMode::Unknown(42), "")]
    fn display_uses_lowercase_name(#[case] mode: PolicyMode, #[case] expected: &str) {
        assert_eq!(mode.to_string(), expected);
    }

    #[rstest]
    #[case(0, PolicyMode::None)]
    #[case(1, PolicyMode::All)]
    #[case(2, PolicyMode::Major)]
    #[case(3, PolicyMode::Minor)]
    #[case(4, PolicyMode::Patch)]
    #[case(5, PolicyMode::Unknown(5))]
    #[case(-1, PolicyMode::Unknown(-1))]
    fn from_code_maps_known_codes(#[case] code: i32, #[case] expected: PolicyMode) {
        assert_eq!(PolicyMode::from_code(code), expected);
    }

    #[rstest]
    #[case("minor", PolicyMode::Minor)]
    #[case(" MAJOR ", PolicyMode::Major)]
    #[case("All", PolicyMode::All)]
    fn from_str_is_case_insensitive(#[case] input: &str, #[case] expected: PolicyMode) {
        assert_eq!(input.parse::<PolicyMode>().unwrap(), expected);
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        assert_eq!(
            "sometimes".parse::<PolicyMode>(),
            Err(PolicyError::UnknownPolicy("sometimes".to_string()))
        );
    }

    #[test]
    fn serde_uses_lowercase_strings() {
        assert_eq!(
            serde_json::to_value(PolicyMode::Patch).unwrap(),
            serde_json::json!("patch")
        );
        assert_eq!(
            serde_json::from_value::<PolicyMode>(serde_json::json!("minor")).unwrap(),
            PolicyMode::Minor
        );
        assert!(serde_json::from_value::<PolicyMode>(serde_json::json!("weekly")).is_err());
    }
}
