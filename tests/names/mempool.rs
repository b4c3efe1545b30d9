//! Pending operations and raw transactions

use std::sync::Arc;

use serde_json::json;

use namedb::{
    Error, JsonTxCodec, MemoryMempool, MemoryRegistry, MemoryTxIndex, Name, NameConfig, NameOp,
    NameQueries, NameValue, NamecoinExpiration, Names, Node, RawTxCodec, Script, Transaction,
    TxId, TxOut,
};

use crate::common::{address, init_tracing, names};

fn name_tx(byte: u8, outputs: Vec<TxOut>) -> Transaction {
    let mut tx = Transaction::new(TxId::from_bytes([byte; 32]), vec![], outputs);
    tx.set_name_tx();
    tx
}

fn update(name: &str, value: &str) -> TxOut {
    TxOut::with_name_op(
        1,
        Script::new(vec![4]),
        NameOp::Update {
            name: Name::from(name),
            value: NameValue::from(value),
        },
    )
}

#[test]
fn pending_tracks_the_mempool() {
    let names = names();
    let tx = name_tx(1, vec![TxOut::plain(9, Script::new(vec![1])), update("d/a", "next")]);
    let txid = tx.txid;
    names.mempool().add(tx);
    names.mempool().add(name_tx(
        2,
        vec![TxOut::with_name_op(
            1,
            Script::new(vec![5]),
            NameOp::New { hash: vec![0; 32] },
        )],
    ));

    let pending = names.name_pending(None, None).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].name.as_deref(), Some("d/a"));
    assert_eq!(pending[0].vout, 1);
    assert_eq!(pending[0].address, "N4");
    assert_eq!(pending[0].op.as_deref(), Some("name_update"));
    assert_eq!(pending[0].expires_in, None);

    names.mempool().remove(&txid);
    assert!(names.name_pending(Some("d/a"), None).unwrap().is_empty());
}

fn with_codec() -> Names {
    init_tracing();
    let queries = NameQueries::new(
        NameConfig::default(),
        Arc::new(NamecoinExpiration),
        Arc::new(address),
    );
    Names::new(
        Node::new(
            queries,
            Arc::new(MemoryRegistry::new(false)),
            Arc::new(MemoryMempool::new()),
            Arc::new(MemoryTxIndex::new()),
        )
        .with_raw_codec(Arc::new(JsonTxCodec)),
    )
}

#[test]
fn raw_transaction_name_new_then_firstupdate() {
    let names = with_codec();
    let unsigned = Transaction::new(
        TxId::from_bytes([3; 32]),
        vec![],
        vec![TxOut::plain(100, Script::new(vec![3]))],
    );

    let new = names
        .name_raw_transaction(
            &JsonTxCodec.encode_hex(&unsigned).unwrap(),
            0,
            json!({"op": "name_new", "name": "d/fresh"}),
        )
        .unwrap();
    let rand = new.rand.unwrap();
    let tx = JsonTxCodec.decode_hex(&new.hex).unwrap();
    assert!(matches!(tx.outputs[0].name_op, Some(NameOp::New { .. })));

    let first = names
        .name_raw_transaction(
            &JsonTxCodec.encode_hex(&unsigned).unwrap(),
            0,
            json!({"op": "name_firstupdate", "name": "d/fresh", "value": "{}", "rand": rand}),
        )
        .unwrap();
    assert_eq!(first.rand, None);
    let tx = JsonTxCodec.decode_hex(&first.hex).unwrap();
    assert_eq!(
        tx.outputs[0].name_op.as_ref().and_then(NameOp::value),
        Some(&NameValue::from("{}"))
    );
}

#[test]
fn raw_transaction_rejects_bad_vout() {
    let names = with_codec();
    let unsigned = Transaction::new(TxId::from_bytes([3; 32]), vec![], vec![]);
    let err = names
        .name_raw_transaction(
            &JsonTxCodec.encode_hex(&unsigned).unwrap(),
            0,
            json!({"op": "name_update", "name": "d/a", "value": "v"}),
        )
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidParameter {
            reason: "vout is out of range".into()
        }
    );
}
