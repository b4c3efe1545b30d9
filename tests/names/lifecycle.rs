//! Show and history across updates

use std::sync::Arc;

use namedb::{
    Error, FixedExpiration, MemoryMempool, MemoryRegistry, MemoryTxIndex, Name, NameConfig,
    NameQueries, Names, Node,
};
use serde_json::json;

use crate::common::{address, init_tracing, record};

/// Registry at height 105 where names live for 10 blocks.
fn short_lived() -> Names {
    init_tracing();
    let queries = NameQueries::new(
        NameConfig {
            name_history: true,
            ..NameConfig::default()
        },
        Arc::new(FixedExpiration(10)),
        Arc::new(address),
    );
    Names::new(Node::new(
        queries,
        Arc::new(MemoryRegistry::new(true)),
        Arc::new(MemoryMempool::new()),
        Arc::new(MemoryTxIndex::new()),
    ))
}

#[test]
fn show_reports_expiration_relative_to_tip() {
    let names = short_lived();
    names
        .registry()
        .apply_block(100, vec![(Name::from("d/example"), record("v1", 100, 1))]);
    names.registry().set_height(105);

    let info = names.name_show("d/example", None).unwrap();
    assert_eq!(info.name.as_deref(), Some("d/example"));
    assert_eq!(info.value.as_deref(), Some("v1"));
    assert_eq!(info.height, Some(100));
    assert_eq!(info.expires_in, Some(5));
    assert_eq!(info.expired, Some(false));

    // Expiration is recomputed on every call.
    names.registry().set_height(110);
    let info = names.name_show("d/example", None).unwrap();
    assert_eq!(info.expires_in, Some(0));
    assert_eq!(info.expired, Some(true));
}

#[test]
fn history_lists_prior_versions_first() {
    let names = short_lived();
    names
        .registry()
        .apply_block(100, vec![(Name::from("d/example"), record("v1", 100, 1))]);
    names
        .registry()
        .apply_block(103, vec![(Name::from("d/example"), record("v2", 103, 2))]);
    names.registry().set_height(105);

    let current = names.name_show("d/example", None).unwrap();
    assert_eq!(current.value.as_deref(), Some("v2"));

    let history = names.name_history("d/example", None).unwrap();
    let values: Vec<_> = history.iter().filter_map(|i| i.value.as_deref()).collect();
    assert_eq!(values, vec!["v1", "v2"]);
    assert_eq!(history[0].expires_in, Some(5));
    assert_eq!(history[1], current);
}

#[test]
fn show_rejects_undecodable_and_missing_names() {
    let names = short_lived();

    let err = names.name_show("d/missing", None).unwrap_err();
    assert_eq!(err.to_string(), "name not found: 'd/missing'");

    let options = json!({"nameEncoding": "hex"}).as_object().cloned();
    let err = names.name_show("not hex", options).unwrap_err();
    assert!(matches!(err, Error::InvalidEncoding { .. }));
}

#[test]
fn show_honours_value_encoding() {
    let names = short_lived();
    names
        .registry()
        .apply_block(1, vec![(Name::from("d/a"), record("hi", 1, 1))]);

    let options = json!({"valueEncoding": "hex"}).as_object().cloned();
    let info = names.name_show("d/a", options).unwrap();
    assert_eq!(info.value.as_deref(), Some("6869"));
    assert_eq!(
        serde_json::to_value(&info).unwrap()["value_encoding"],
        "hex"
    );
}

#[test]
fn checkdb_on_fresh_registry() {
    let names = short_lived();
    assert!(names.name_checkdb().unwrap());
}
