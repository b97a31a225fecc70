//! # Name Scanning Scenario (qc-18)
//!
//! End-to-end scan/filter behaviour through the RPC handler, on a regtest
//! chain (names expire after 30 blocks):
//!
//! - height 217: register `a`, `aa`, `b`
//! - height 232: register `c`, update `a`
//! - tip at 251

use std::sync::Arc;

use qc_18_name_index::{
    InMemoryNameStore, NameBlock, NameIndexConfig, NameIndexService, NameRpcHandler, SyncFlag,
};
use serde_json::{json, Value};

// =============================================================================
// TEST HELPERS
// =============================================================================

type Rpc = NameRpcHandler<NameIndexService<InMemoryNameStore, SyncFlag>>;

fn build_chain(store: &InMemoryNameStore, to: u64) {
    for height in store.tip() + 1..=to {
        let block = match height {
            217 => NameBlock::empty(height)
                .register("a", "value a", [0xA1; 32])
                .register("aa", "value aa", [0xA2; 32])
                .register("b", "value b", [0xB1; 32]),
            232 => NameBlock::empty(height)
                .register("c", "value c", [0xC1; 32])
                .update("a", "value a2", [0xA3; 32]),
            _ => NameBlock::empty(height),
        };
        store.connect_block(&block).unwrap();
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn setup(synced: bool) -> (Rpc, Arc<InMemoryNameStore>, SyncFlag) {
    init_tracing();
    let config = NameIndexConfig::regtest();
    let store = Arc::new(InMemoryNameStore::at_height(&config, 216));
    build_chain(&store, 251);
    let sync = SyncFlag::new(synced);
    let service = NameIndexService::new(config, Arc::clone(&store), sync.clone());
    (NameRpcHandler::new(service), store, sync)
}

fn names(result: &Value) -> Vec<String> {
    result
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}

fn field_i64(result: &Value, field: &str) -> Vec<i64> {
    result
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e[field].as_i64().unwrap())
        .collect()
}

// =============================================================================
// SCAN
// =============================================================================

#[test]
fn test_scan_all_in_length_then_byte_order() {
    let (rpc, _, _) = setup(true);
    let result = rpc.handle("name_scan", &json!([])).unwrap();
    assert_eq!(names(&result), vec!["a", "b", "c", "aa"]);
    assert_eq!(field_i64(&result, "expires_in"), vec![11, -4, 11, -4]);
    assert_eq!(field_i64(&result, "height"), vec![232, 217, 232, 217]);

    let expired: Vec<bool> = result
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["expired"].as_bool().unwrap())
        .collect();
    assert_eq!(expired, vec![false, true, false, true]);
}

#[test]
fn test_scan_entry_fields() {
    let (rpc, _, _) = setup(true);
    let result = rpc.handle("name_scan", &json!(["a", 1])).unwrap();
    let entry = &result[0];
    assert_eq!(entry["name"], "a");
    assert_eq!(entry["value"], "value a2");
    assert_eq!(entry["txid"], "a3".repeat(32));
    assert_eq!(entry["vout"], 0);
}

#[test]
fn test_scan_from_start_key() {
    let (rpc, _, _) = setup(true);
    let result = rpc.handle("name_scan", &json!(["b"])).unwrap();
    assert_eq!(names(&result), vec!["b", "c", "aa"]);
    let result = rpc.handle("name_scan", &json!(["b", 2])).unwrap();
    assert_eq!(names(&result), vec!["b", "c"]);
}

#[test]
fn test_scan_zero_and_negative_count_are_empty() {
    let (rpc, _, _) = setup(true);
    assert_eq!(rpc.handle("name_scan", &json!(["", 0])).unwrap(), json!([]));
    assert_eq!(rpc.handle("name_scan", &json!(["", -1])).unwrap(), json!([]));
}

#[test]
fn test_scan_past_every_key_is_empty() {
    let (rpc, _, _) = setup(true);
    assert_eq!(rpc.handle("name_scan", &json!(["zzz"])).unwrap(), json!([]));
}

// =============================================================================
// FILTER
// =============================================================================

#[test]
fn test_filter_by_recency() {
    let (rpc, _, _) = setup(true);
    let result = rpc.handle("name_filter", &json!(["", 30])).unwrap();
    assert_eq!(names(&result), vec!["a", "c"]);
    let result = rpc.handle("name_filter", &json!(["", 10])).unwrap();
    assert_eq!(result, json!([]));
}

#[test]
fn test_filter_by_pattern() {
    let (rpc, _, _) = setup(true);
    let result = rpc.handle("name_filter", &json!(["[ac]"])).unwrap();
    assert_eq!(names(&result), vec!["a", "c", "aa"]);
}

#[test]
fn test_filter_pages() {
    let (rpc, _, _) = setup(true);
    let page = |from: i64, nb: i64| {
        names(&rpc.handle("name_filter", &json!(["", 0, from, nb])).unwrap())
    };
    assert_eq!(page(0, 1), vec!["a"]);
    assert_eq!(page(1, 4), vec!["b", "c", "aa"]);
    assert!(page(4, 4).is_empty());
    assert_eq!(page(0, 0), vec!["a", "b", "c", "aa"]);
}

#[test]
fn test_filter_stats() {
    let (rpc, _, _) = setup(true);
    let result = rpc
        .handle("name_filter", &json!(["", 30, 0, 0, "stat"]))
        .unwrap();
    assert_eq!(result, json!({"blocks": 251, "count": 2}));

    // Pagination never changes the count.
    let result = rpc
        .handle("name_filter", &json!(["", 30, 1, 1, "stat"]))
        .unwrap();
    assert_eq!(result, json!({"blocks": 251, "count": 2}));
}

#[test]
fn test_filter_stats_on_empty_match() {
    let (rpc, _, _) = setup(true);
    let result = rpc
        .handle("name_filter", &json!(["^nomatch$", 0, 0, 0, "stat"]))
        .unwrap();
    assert_eq!(result, json!({"blocks": 251, "count": 0}));
}

#[test]
fn test_filter_rejects_bad_arguments() {
    let (rpc, _, _) = setup(true);
    let err = rpc
        .handle("name_filter", &json!(["", 0, 0, 0, "string"]))
        .unwrap_err();
    assert_eq!(err.code, -8);
    let err = rpc.handle("name_filter", &json!(["[ac"])).unwrap_err();
    assert_eq!(err.code, -8);
    let err = rpc.handle("name_filter", &json!(["", 0, -1, 0])).unwrap_err();
    assert_eq!(err.code, -8);
    let err = rpc.handle("name_filter", &json!(["", 0, 0, -1])).unwrap_err();
    assert_eq!(err.code, -8);
}

// =============================================================================
// LOOKUPS
// =============================================================================

#[test]
fn test_show_and_history() {
    let (rpc, _, _) = setup(true);
    let shown = rpc.handle("name_show", &json!(["a"])).unwrap();
    assert_eq!(shown["value"], "value a2");
    assert_eq!(shown["expires_in"], 11);

    let history = rpc.handle("name_history", &json!(["a"])).unwrap();
    assert_eq!(field_i64(&history, "height"), vec![217, 232]);
    assert_eq!(history[0]["value"], "value a");
    assert_eq!(history[0]["expires_in"], -4);
    assert_eq!(history[0]["expired"], true);
    assert_eq!(history[1]["value"], "value a2");

    let err = rpc.handle("name_show", &json!(["d"])).unwrap_err();
    assert_eq!(err.code, -4);
}

// =============================================================================
// AVAILABILITY
// =============================================================================

#[test]
fn test_not_ready_until_synced() {
    let (rpc, _, sync) = setup(false);
    let calls = [
        ("name_show", json!(["a"])),
        ("name_history", json!(["a"])),
        ("name_scan", json!([])),
        ("name_filter", json!([])),
    ];
    for (method, params) in &calls {
        let err = rpc.handle(method, params).unwrap_err();
        assert_eq!(err.code, -10, "{} must be gated", method);
    }

    let malformed = [
        ("name_filter", json!(["", 0, 0, 0, "string"])),
        ("name_filter", json!(["[ac"])),
        ("name_filter", json!([null, null, -1])),
        ("name_scan", json!([5])),
        ("name_show", json!([])),
    ];
    for (method, params) in &malformed {
        let err = rpc.handle(method, params).unwrap_err();
        assert_eq!(err.code, -10, "{} {} while syncing", method, params);
    }

    sync.set_synced(true);
    for (method, params) in &calls {
        assert!(rpc.handle(method, params).is_ok(), "{} after sync", method);
    }
    for (method, params) in &malformed {
        let err = rpc.handle(method, params).unwrap_err();
        assert_eq!(err.code, -8, "{} {} after sync", method, params);
    }
}

#[test]
fn test_expiry_advances_with_the_chain() {
    let (rpc, store, _) = setup(true);
    build_chain(&store, 262);
    let result = rpc.handle("name_scan", &json!(["a", 1])).unwrap();
    assert_eq!(field_i64(&result, "expires_in"), vec![0]);
    assert_eq!(result[0]["expired"], true);
}
