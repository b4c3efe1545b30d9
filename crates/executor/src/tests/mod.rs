//! Test modules for the executor crate.


use std::sync::Arc;

use namedb_core::{FixedExpiration, Name, NameRecord, NameValue, OutPoint, Script, TxId};
use namedb_engine::{NameConfig, NameQueries};
use namedb_storage::{JsonTxCodec, MemoryMempool, MemoryRegistry, MemoryTxIndex};

use crate::bridge::Node;
use crate::Executor;

/// Address of a script: `N` followed by its first byte.
pub fn address(script: &Script) -> Option<String> {
    script.as_bytes().first().map(|b| format!("N{b}"))
}

/// Queries with history enabled and names expiring after 30 blocks.
pub fn create_test_queries() -> NameQueries {
    NameQueries::new(
        NameConfig {
            name_history: true,
            ..NameConfig::default()
        },
        Arc::new(FixedExpiration(30)),
        Arc::new(address),
    )
}

pub fn record(value: &str, height: u32, tx: u8) -> NameRecord {
    NameRecord::new(
        NameValue::from(value),
        OutPoint::new(TxId::from_bytes([tx; 32]), 0),
        Script::new(vec![tx]),
        height,
    )
}

/// Node at height 20 holding `d/a`, `d/b` (updated twice) and `x/c`.
pub fn create_test_node() -> Node {
    let registry = Arc::new(MemoryRegistry::new(true));
    registry.apply_block(5, vec![(Name::from("d/b"), record("old", 5, 1))]);
    registry.apply_block(
        10,
        vec![
            (Name::from("d/a"), record("alpha", 10, 2)),
            (Name::from("d/b"), record("new", 10, 3)),
            (Name::from("x/c"), record("gamma", 10, 4)),
        ],
    );
    registry.set_height(20);

    let tx_index = Arc::new(MemoryTxIndex::new());
    for (tx, time) in [(1u8, 1000i64), (2, 2000), (3, 2000), (4, 2000)] {
        tx_index.insert_confirmed(TxId::from_bytes([tx; 32]), time);
    }

    Node::new(
        create_test_queries(),
        registry,
        Arc::new(MemoryMempool::new()),
        tx_index,
    )
    .with_raw_codec(Arc::new(JsonTxCodec))
}

pub fn create_test_executor() -> Executor {
    Executor::new(create_test_node())
}
