//! Detection of the two supported version grammars
//!
//! - Standard: `[v]MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]`
//! - Pipeline: `MAJOR.MINOR-[TIMESTAMP-]BUILD[-HASH]`, e.g. `20.1-9638` or
//!   `21.0-1571107855-1410-599b8254c7bb`
//!
//! Pipeline versions are folded into the standard shape by turning their first
//! `-` into `.`, so `21.0-1571107855-1410-599b8254c7bb` compares as
//! `21.0.1571107855-1410-599b8254c7bb`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static PIPELINE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+(?:-[0-9]{10})?-[0-9]+(?:-[0-9A-Za-z]+)?$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionGrammar {
    Standard,
    Pipeline,
}

impl VersionGrammar {
    /// Detects the grammar of `raw` by matching the whole string.
    pub fn detect(raw: &str) -> Self {
        if PIPELINE_VERSION_RE.is_match(raw) {
            VersionGrammar::Pipeline
        } else {
            VersionGrammar::Standard
        }
    }

    /// Rewrites `raw` into the standard shape.
    ///
    /// Standard versions are returned untouched.
    pub fn normalize(self, raw: &str) -> Cow<'_, str> {
        match self {
            VersionGrammar::Standard => Cow::Borrowed(raw),
            VersionGrammar::Pipeline => {
                let rewritten = raw.replacen('-', ".", 1);
                debug!(
                    pipeline_version = raw,
                    normalized = %rewritten,
                    "Rewrote pipeline version to semver shape"
                );
                Cow::Owned(rewritten)
            }
        }
    }
}

pub fn is_pipeline_version(raw: &str) -> bool {
    VersionGrammar::detect(raw) == VersionGrammar::Pipeline
}

/// Detects the grammar of `raw` and rewrites it into the standard shape.
pub fn normalize(raw: &str) -> Cow<'_, str> {
    VersionGrammar::detect(raw).normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("20.1-9638", VersionGrammar::Pipeline)]
    #[case("21.0-1571107855-1410-599b8254c7bb", VersionGrammar::Pipeline)]
    #[case("21.0-1571107855-1410", VersionGrammar::Pipeline)]
    #[case("20.1-9638-ca5f12c6", VersionGrammar::Pipeline)]
    #[case("1.2.3", VersionGrammar::Standard)]
    #[case("v20.1-9638", VersionGrammar::Standard)]
    #[case("20.1", VersionGrammar::Standard)]
    #[case("20.1-rc1", VersionGrammar::Standard)]
    #[case("20.1-9638-ca5f-12c6", VersionGrammar::Standard)]
    #[case("x20.1-9638", VersionGrammar::Standard)]
    #[case("1.2.3-1", VersionGrammar::Standard)]
    fn detect_matches_whole_string(#[case] raw: &str, #[case] expected: VersionGrammar) {
        assert_eq!(VersionGrammar::detect(raw), expected);
    }

    #[rstest]
    #[case("20.1-9638", "20.1.9638")]
    #[case(
        "21.0-1571107855-1410-599b8254c7bb",
        "21.0.1571107855-1410-599b8254c7bb"
    )]
    #[case("1.2.3-rc-1", "1.2.3-rc-1")]
    #[case("latest", "latest")]
    fn normalize_rewrites_only_the_first_dash(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn normalize_borrows_standard_versions() {
        assert!(matches!(normalize("1.2.3"), Cow::Borrowed("1.2.3")));
    }
}
