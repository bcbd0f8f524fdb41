//! Tests for the derived configuration helpers.

use camino::Utf8PathBuf;
use rstest::rstest;

use crate::ShowcaseConfig;
use crate::error::ShowcaseError;

#[rstest]
fn require_user_defaults_to_portfolio_owner() {
    let config = ShowcaseConfig {
        user: None,
        ..ShowcaseConfig::default()
    };

    let user = config.require_user().expect("default user should be valid");

    assert_eq!(user.as_str(), "AgnesMillie");
}

#[rstest]
fn require_user_rejects_blank_login() {
    let config = ShowcaseConfig {
        user: Some("   ".to_owned()),
        ..ShowcaseConfig::default()
    };

    assert_eq!(config.require_user(), Err(ShowcaseError::InvalidUser));
}

#[rstest]
#[case::unset(None, vec!["agnesmillie-portfolio", "AgnesMillie"])]
#[case::trimmed(Some(" one , two ,, "), vec!["one", "two"])]
#[case::explicitly_empty(Some(""), vec![])]
fn excluded_names_parse_comma_list(#[case] exclude: Option<&str>, #[case] expected: Vec<&str>) {
    let config = ShowcaseConfig {
        exclude: exclude.map(ToOwned::to_owned),
        ..ShowcaseConfig::default()
    };

    assert_eq!(config.excluded_names(), expected);
}

#[rstest]
fn api_base_url_defaults_to_public_api() {
    let url = ShowcaseConfig::default()
        .api_base_url()
        .expect("default base should parse");

    assert_eq!(url.as_str(), "https://api.github.com/");
}

#[rstest]
fn api_base_url_rejects_garbage() {
    let config = ShowcaseConfig {
        api_base: Some("not a url".to_owned()),
        ..ShowcaseConfig::default()
    };

    assert!(matches!(
        config.api_base_url(),
        Err(ShowcaseError::InvalidUrl(_))
    ));
}

#[rstest]
fn path_helpers_apply_defaults_and_overrides() {
    let defaults = ShowcaseConfig::default();
    assert_eq!(defaults.translations_dir(), Utf8PathBuf::from("lang"));
    assert_eq!(
        defaults.preferences_path(),
        Utf8PathBuf::from(".showcase-preferences.json")
    );
    assert_eq!(defaults.output_path(), None);

    let custom = ShowcaseConfig {
        translations_dir: Some("i18n".to_owned()),
        preferences_path: Some("prefs.json".to_owned()),
        output: Some("out/index.html".to_owned()),
        ..ShowcaseConfig::default()
    };
    assert_eq!(custom.translations_dir(), Utf8PathBuf::from("i18n"));
    assert_eq!(custom.preferences_path(), Utf8PathBuf::from("prefs.json"));
    assert_eq!(
        custom.output_path(),
        Some(Utf8PathBuf::from("out/index.html"))
    );
}
