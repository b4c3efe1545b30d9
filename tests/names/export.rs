//! File exports

use serde_json::{json, Value};

use namedb::Error;

use crate::common::{mine, names};

fn read(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn export_writes_matching_names() {
    let names = names();
    mine(&names, 1, "d/a", "v", 1);
    mine(&names, 2, "x/b", "v", 2);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.json");

    let options = json!({"count": -1}).as_object().cloned();
    let message = names.name_export("^d/", &path, options).unwrap();
    assert_eq!(message, "Found 1 names with \"^d/\" regexp");
    assert_eq!(read(&path), json!(["d/a"]));
}

#[test]
fn export_count_stops_early() {
    let names = names();
    for (i, name) in ["d/a", "d/b", "d/c"].iter().enumerate() {
        mine(&names, i as u32 + 1, name, "v", i as u8 + 1);
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.json");

    let options = json!({"count": 2}).as_object().cloned();
    names.name_export("^d/", &path, options).unwrap();
    assert_eq!(read(&path), json!(["d/a", "d/b"]));

    let options = json!({"count": 0}).as_object().cloned();
    let message = names.name_export("^d/", &path, options).unwrap();
    assert_eq!(message, "Found 0 names with \"^d/\" regexp");
    assert_eq!(read(&path), json!([]));
}

#[test]
fn export_with_history_adds_block_times() {
    let names = names();
    mine(&names, 10, "d/a", "v1", 1);
    mine(&names, 12, "d/a", "v2", 2);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.json");

    let options = json!({"withHistory": true}).as_object().cloned();
    names.name_export("", &path, options).unwrap();

    let exported = read(&path);
    assert_eq!(exported[0]["value"], "v2");
    assert_eq!(exported[0]["last_updated"], 1_600_000_012i64);
    assert_eq!(exported[0]["history"][0]["value"], "v1");
    assert_eq!(exported[0]["history"][0]["time"], 1_600_000_010i64);
}

#[test]
fn export_with_history_needs_indexed_transactions() {
    let names = names();
    mine(&names, 1, "d/a", "v", 1);
    names.tx_index().remove(&namedb::TxId::from_bytes([1; 32]));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.json");

    let options = json!({"withHistory": true}).as_object().cloned();
    let err = names.name_export("^d/", &path, options).unwrap_err();
    assert!(matches!(err, Error::DependencyUnavailable { .. }));
}

#[test]
fn export_into_missing_directory_fails() {
    let names = names();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/names.json");
    let err = names.name_export("^d/", &path, None).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
