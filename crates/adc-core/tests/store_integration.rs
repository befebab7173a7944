//! Integration tests for the credential store
//!
//! Drives the public API end to end over the JSON fixtures: add keys to a
//! fresh store, list them next to the default user account, resolve names,
//! work out the active credential and remove keys again.

use adc_core::{
    ActiveCredentialResolver, AdcError, AdcResult, CredentialSource, CredentialStore,
    NameResolver, StoreConfig,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fresh_config(home: &TempDir) -> StoreConfig {
    StoreConfig::new(
        home.path().join(".config/adc/credentials"),
        home.path()
            .join(".config/gcloud/application_default_credentials.json"),
    )
    .with_env_var("ADC_INTEGRATION_UNUSED")
}

fn install_default_credential(config: &StoreConfig) {
    let path = config.default_credential_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::copy(fixture("user_credential_001.json"), path).unwrap();
}

#[test]
fn test_store_lifecycle() -> AdcResult<()> {
    let home = tempdir().unwrap();
    let config = fresh_config(&home);
    let store = CredentialStore::new(config.clone());

    // 1. Fresh store, nothing installed
    store.ensure_initialized()?;
    assert!(store.list()?.is_empty());

    // 2. Add two keys and the machine's user account
    let first = store.add(&fixture("service_account_001.json"))?;
    let second = store.add(&fixture("service_account_002.json"))?;
    install_default_credential(&config);

    let records = store.list()?;
    let names: Vec<String> = records.iter().map(|r| r.canonical_name()).collect();
    assert_eq!(names, vec!["0123456789abcdef", "fedcba9876543210", "user"]);

    // 3. Raw material survives byte for byte
    let original = fs::read(fixture("service_account_001.json")).unwrap();
    assert_eq!(records[0].raw_material(), original.as_slice());
    assert_eq!(records[0], first);
    assert_eq!(records[1], second);

    // 4. Prefixes
    let found = NameResolver::resolve_by_prefix(&records, "fed")?.unwrap();
    assert_eq!(found.account(), "deployer@adc-fixtures.iam.gserviceaccount.com");
    assert!(NameResolver::resolve_by_prefix(&records, "nope")?.is_none());
    assert!(matches!(
        NameResolver::resolve_by_prefix(&records, ""),
        Err(AdcError::AmbiguousName { .. })
    ));

    // 5. Remove one key, the user account stays untouchable
    store.remove(&first)?;
    let user = store.find("u")?.unwrap();
    assert!(matches!(
        store.remove(&user),
        Err(AdcError::ImmutableCredential { .. })
    ));
    let names: Vec<String> = store.list()?.iter().map(|r| r.canonical_name()).collect();
    assert_eq!(names, vec!["fedcba9876543210", "user"]);

    Ok(())
}

#[test]
fn test_active_credential_precedence() -> AdcResult<()> {
    let home = tempdir().unwrap();
    let config = fresh_config(&home);
    let resolver = ActiveCredentialResolver::new(config.clone());

    // Nothing anywhere
    assert!(resolver.resolve(None)?.is_none());

    // Default file only
    install_default_credential(&config);
    let active = resolver.resolve_with_source(None)?.unwrap();
    assert_eq!(active.record.canonical_name(), "user");
    assert!(matches!(active.source, CredentialSource::DefaultFile { .. }));

    // Override to a file that is not in any store
    let override_path = fixture("service_account_002.json");
    let active = resolver
        .resolve_with_source(override_path.to_str())?
        .unwrap();
    assert_eq!(active.record.canonical_name(), "fedcba9876543210");
    assert!(matches!(active.source, CredentialSource::Environment { .. }));

    // Dangling override falls back
    let dangling = home.path().join("gone.json");
    let active = resolver.resolve(dangling.to_str())?.unwrap();
    assert!(active.is_user_account());

    Ok(())
}

#[test]
fn test_active_credential_is_marked_in_listing() -> AdcResult<()> {
    let home = tempdir().unwrap();
    let config = fresh_config(&home);
    let store = CredentialStore::new(config.clone());
    store.ensure_initialized()?;
    store.add(&fixture("service_account_001.json"))?;
    store.add(&fixture("service_account_002.json"))?;

    // The override points at the original fixture, the listing at the copy;
    // records compare equal regardless of where they were loaded from.
    let active = ActiveCredentialResolver::new(config)
        .resolve(fixture("service_account_002.json").to_str())?
        .unwrap();
    let marked: Vec<String> = store
        .list()?
        .into_iter()
        .filter(|r| *r == active)
        .map(|r| r.canonical_name())
        .collect();
    assert_eq!(marked, vec!["fedcba9876543210"]);

    Ok(())
}

#[test]
fn test_malformed_fixture_cannot_be_added() {
    let home = tempdir().unwrap();
    let store = CredentialStore::new(fresh_config(&home));
    store.ensure_initialized().unwrap();

    let err = store.add(&fixture("malformed.json")).unwrap_err();
    assert!(matches!(err, AdcError::MalformedCredential { .. }));
    assert!(store.list().unwrap().is_empty());
}
