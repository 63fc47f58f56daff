use tag_policy::version::{
    Version, VersionError, find_lowest, find_newest, parse, version_from_image_reference,
};

#[test]
fn parse_old_pipeline_version_uses_build_as_patch() {
    let version = parse("20.1-9638").unwrap();

    assert_eq!(version, Version::new(20, 1, 9638));
    assert!(version.is_stable());
    assert_eq!(version.original, "20.1-9638");
}

#[test]
fn parse_new_pipeline_version_moves_build_and_hash_into_pre_release() {
    let version = parse("21.0-1571107855-1410-599b8254c7bb").unwrap();

    assert_eq!(version.major, 21);
    assert_eq!(version.minor, 0);
    assert_eq!(version.patch, 1571107855);
    assert_eq!(version.pre_release.as_str(), "1410-599b8254c7bb");
    assert_eq!(version.original, "21.0-1571107855-1410-599b8254c7bb");
}

#[test]
fn image_reference_yields_tag_version() {
    let version = version_from_image_reference("repo/img:1.4.5").unwrap();

    assert_eq!(version, Version::new(1, 4, 5));
    assert_eq!(version.original, "1.4.5");
}

#[test]
fn image_reference_without_tag_is_missing_tag() {
    assert_eq!(
        version_from_image_reference("repo/img"),
        Err(VersionError::VersionTagMissing)
    );
}

#[test]
fn image_reference_with_latest_tag_fails_to_parse() {
    let err = version_from_image_reference("repo/img:latest").unwrap_err();

    assert_ne!(err, VersionError::VersionTagMissing);
}

#[test]
fn find_lowest_returns_lowest_stable_version() {
    let empty: [&str; 0] = [];

    assert_eq!(find_lowest(&empty), "");
    assert_eq!(find_lowest(&["5.0.0", "1.0.0", "3.0.0"]), "1.0.0");
}

#[test]
fn find_newest_skips_malformed_tags() {
    let tags = [
        "latest",
        "1.1.0",
        "nightly-2024",
        "1.3.0",
        "v1.2.0",
        "1.3.0.1",
    ];

    assert_eq!(
        find_newest("1.0.0", &tags, true).unwrap(),
        Some("1.3.0".to_string())
    );
}

#[test]
fn find_newest_fails_only_on_invalid_current() {
    assert!(find_newest("latest", &["1.0.0"], true).is_err());
    assert_eq!(find_newest("1.0.0", &["latest"], true).unwrap(), None);
}
