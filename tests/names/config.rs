//! Configuration files

use std::sync::Arc;

use serde_json::json;

use namedb::{Error, NameConfig, Names, CONFIG_FILE_NAME};

use crate::common::{address, mine};

#[test]
fn default_file_disables_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    NameConfig::write_default(&path).unwrap();

    let names = Names::from_config_file(&path, Arc::new(address)).unwrap();
    mine(&names, 1, "d/a", "v", 1);

    // The feature check runs before the bad option is looked at.
    let options = json!({"nameEncoding": 7}).as_object().cloned();
    let err = names.name_history("d/a", options).unwrap_err();
    assert_eq!(
        err,
        Error::FeatureDisabled {
            feature: "-namehistory".into()
        }
    );
}

#[test]
fn configured_encodings_are_the_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    NameConfig {
        value_encoding: namedb::NameEncoding::Hex,
        default_scan_count: 1,
        ..NameConfig::default()
    }
    .write_to_file(&path)
    .unwrap();

    let names = Names::from_config_file(&path, Arc::new(address)).unwrap();
    mine(&names, 1, "d/a", "hi", 1);
    mine(&names, 2, "d/b", "yo", 2);

    let page = names.name_scan(None, None, None).unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].value.as_deref(), Some("6869"));

    // Unknown encodings fall back to the configured default.
    let options = json!({"valueEncoding": "base64"}).as_object().cloned();
    let info = names.name_show("d/b", options).unwrap();
    assert_eq!(info.value.as_deref(), Some("796f"));
}

#[test]
fn broken_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "name_history = \"yes\"").unwrap();

    let err = Names::from_config_file(&path, Arc::new(address)).err().unwrap();
    assert!(matches!(err, Error::Serialization { .. }));
}
