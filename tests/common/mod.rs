//! Shared test utilities for integration test suites.

#![allow(dead_code)]

use std::sync::Arc;

use namedb::{Name, NameConfig, NameRecord, NameValue, Names, OutPoint, Script, TxId};

/// Install a test-writer subscriber once per binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Address of a script: `N` followed by its bytes as decimal.
pub fn address(script: &Script) -> Option<String> {
    if script.is_empty() {
        return None;
    }
    let digits: Vec<String> = script.as_bytes().iter().map(u8::to_string).collect();
    Some(format!("N{}", digits.join(".")))
}

/// In-memory node with name history enabled.
pub fn names() -> Names {
    init_tracing();
    Names::in_memory(
        NameConfig {
            name_history: true,
            ..NameConfig::default()
        },
        Arc::new(address),
    )
}

/// Record of an update in transaction `[tx; 32]`.
pub fn record(value: &str, height: u32, tx: u8) -> NameRecord {
    NameRecord::new(
        NameValue::from(value),
        OutPoint::new(TxId::from_bytes([tx; 32]), 0),
        Script::new(vec![tx]),
        height,
    )
}

/// Apply one block with a single update and index its block time.
pub fn mine(names: &Names, height: u32, name: &str, value: &str, tx: u8) {
    names
        .registry()
        .apply_block(height, vec![(Name::from(name), record(value, height, tx))]);
    names
        .tx_index()
        .insert_confirmed(TxId::from_bytes([tx; 32]), 1_600_000_000 + i64::from(height));
}
