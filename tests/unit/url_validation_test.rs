// Unit tests for the two request gates: the url-shape check and the
// id syntax check.

use proptest::prelude::*;

use repohub::core::AppError;
use repohub::registry::services::{parse_repository_id, validate_repository_url};

#[test]
fn test_github_http_prefix_is_accepted() {
    assert!(validate_repository_url(Some("http://github.com/user/repo")).is_ok());
}

#[test]
fn test_github_https_prefix_is_accepted() {
    assert!(validate_repository_url(Some("https://github.com/user/repo")).is_ok());
}

#[test]
fn test_other_schemes_are_rejected() {
    let result = validate_repository_url(Some("ftp://example.com"));
    assert!(matches!(result, Err(AppError::InvalidRepositoryUrl)));
}

#[test]
fn test_other_hosts_are_rejected() {
    let result = validate_repository_url(Some("https://gitlab.com/user/repo"));
    assert!(matches!(result, Err(AppError::InvalidRepositoryUrl)));
}

#[test]
fn test_prefix_alone_is_not_enough() {
    // The trailing slash is part of the required prefix
    let result = validate_repository_url(Some("https://github.com"));
    assert!(matches!(result, Err(AppError::InvalidRepositoryUrl)));
}

#[test]
fn test_absent_url_passes() {
    assert!(validate_repository_url(None).is_ok());
}

#[test]
fn test_empty_url_passes() {
    // An empty string bypasses the check, like an absent field
    assert!(validate_repository_url(Some("")).is_ok());
}

#[test]
fn test_well_formed_uuid_parses() {
    let id = parse_repository_id("550e8400-e29b-41d4-a716-446655440000").unwrap();
    assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
}

#[test]
fn test_nil_uuid_is_syntactically_valid() {
    assert!(parse_repository_id("00000000-0000-0000-0000-000000000000").is_ok());
}

#[test]
fn test_malformed_uuid_is_rejected() {
    let result = parse_repository_id("not-a-uuid");
    assert!(matches!(result, Err(AppError::InvalidUuid)));
}

proptest! {
    #[test]
    fn prop_any_github_path_is_accepted(path in "[A-Za-z0-9._/-]{0,40}") {
        let http = format!("http://github.com/{}", path);
        let https = format!("https://github.com/{}", path);
        prop_assert!(validate_repository_url(Some(http.as_str())).is_ok());
        prop_assert!(validate_repository_url(Some(https.as_str())).is_ok());
    }

    #[test]
    fn prop_non_github_urls_are_rejected(host in "[a-z]{1,12}\\.(org|net|dev)", path in "[a-z0-9/]{0,20}") {
        let url = format!("https://{}/{}", host, path);
        prop_assert!(matches!(
            validate_repository_url(Some(url.as_str())),
            Err(AppError::InvalidRepositoryUrl)
        ));
    }

    #[test]
    fn prop_random_strings_never_parse_as_ids_unless_uuid(s in "[a-z ]{1,20}") {
        prop_assert!(matches!(
            parse_repository_id(&s),
            Err(AppError::InvalidUuid)
        ));
    }
}
