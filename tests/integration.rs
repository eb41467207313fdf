//! End-to-end tests against the shipped fixtures
//!
//! Exercises the full pipeline the way a suite does: load an environment
//! configuration, resolve a mapped test case, and fill the registration
//! form through the recording driver.

use std::path::{Path, PathBuf};

use uitest::driver::DriverCall;
use uitest::{
    Config, DataCache, Error, MockDriver, RegistrationPage, TestDataResolver,
};

fn manifest_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn load_config(env: &str) -> Config {
    Config::load(env, &manifest_path("config")).expect("shipped config should load")
}

fn resolver() -> TestDataResolver {
    TestDataResolver::new(manifest_path("testdata")).expect("shipped test mapping should load")
}

#[test]
fn dev_config_overlays_the_defaults() {
    let config = load_config("dev");
    assert_eq!(config.environment, "dev");
    // Overlay wins
    assert_eq!(config.application.base_url, "http://dev.demo-shop.local:8080");
    assert_eq!(config.database.host.as_deref(), Some("dev-db.demo-shop.local"));
    // Defaults survive where the overlay is silent
    assert_eq!(config.browser.timeout_ms, 30_000);
    assert!(!config.browser.headless);
    assert_eq!(config.application.name.as_deref(), Some("demo-shop"));
}

#[test]
fn staging_config_tightens_the_browser_settings() {
    let config = load_config("staging");
    assert!(config.browser.headless);
    assert_eq!(config.browser.timeout_ms, 60_000);
    assert!(config.api.verify_ssl);
}

#[test]
fn unknown_environment_is_rejected() {
    let err = Config::load("production", &manifest_path("config")).unwrap_err();
    assert!(matches!(err, Error::UnknownEnvironment { name, .. } if name == "production"));
}

#[test]
fn all_mapped_test_cases_resolve() {
    let resolver = resolver();
    let mut cache = DataCache::new();
    for test_id in resolver.test_ids() {
        resolver
            .resolve(&mut cache, test_id)
            .unwrap_or_else(|e| panic!("test id '{test_id}' should resolve: {e}"));
    }
    // All three registration cases share one data file
    assert_eq!(cache.file_loads(), 1);
}

#[tokio::test]
async fn valid_user_dataset_fills_the_whole_registration_form() {
    let config = load_config("dev");
    let resolver = resolver();
    let mut cache = DataCache::new();
    let record = resolver
        .resolve(&mut cache, "registration_valid_user")
        .unwrap();

    let mut page = RegistrationPage::new(MockDriver::new(), &config);
    page.open_registration(&config.application.base_url)
        .await
        .unwrap();
    page.fill_registration_form(&record).await.unwrap();
    page.submit().await.unwrap();

    let calls = page.into_driver().take_calls();
    assert_eq!(
        calls.first(),
        Some(&DriverCall::Open { url: "http://dev.demo-shop.local:8080/register".into() })
    );
    assert!(calls.contains(&DriverCall::Fill {
        locator: "#email".into(),
        text: "john.doe@example.com".into(),
    }));
    assert!(calls.contains(&DriverCall::SetChecked {
        locator: "input[name=\"gender\"][value=\"male\"]".into(),
        checked: true,
    }));
    assert!(calls.contains(&DriverCall::Select {
        locator: "#country".into(),
        option: "US".into(),
    }));
    // newsletter is false in the dataset, so the checkbox is unchecked
    assert!(calls.contains(&DriverCall::SetChecked {
        locator: "#newsletter".into(),
        checked: false,
    }));
    assert!(calls.contains(&DriverCall::AttachFiles {
        locator: "#resume".into(),
        paths: vec![PathBuf::from("testdata/files/resume.txt")],
    }));
    assert_eq!(
        calls.last(),
        Some(&DriverCall::Click { locator: "button[type=\"submit\"]".into() })
    );
}

#[tokio::test]
async fn minimal_user_dataset_leaves_unmapped_fields_untouched() {
    let config = load_config("dev");
    let resolver = resolver();
    let mut cache = DataCache::new();
    let record = resolver
        .resolve(&mut cache, "registration_minimal_user")
        .unwrap();

    let mut page = RegistrationPage::new(MockDriver::new(), &config);
    page.fill_registration_form(&record).await.unwrap();

    let calls = page.into_driver().take_calls();
    // Six fields in the dataset: five textboxes (clear + fill) plus terms
    assert_eq!(calls.len(), 5 * 2 + 1);
    assert!(!calls
        .iter()
        .any(|c| matches!(c, DriverCall::Select { .. } | DriverCall::AttachFiles { .. })));
}

#[tokio::test]
async fn upload_fixture_referenced_by_the_dataset_exists() {
    let resolver = resolver();
    let mut cache = DataCache::new();
    let record = resolver
        .resolve(&mut cache, "registration_valid_user")
        .unwrap();

    let paths = record.get("resume").unwrap().as_paths("resume").unwrap();
    for path in paths {
        assert!(manifest_path(path.to_str().unwrap()).exists(), "missing fixture {path:?}");
    }
}
