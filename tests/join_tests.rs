//! Dataset store and join engine tests: ingestion validation,
//! projection, duplicate-key policies, and join correctness.

mod fixtures;

use cleanroom_core::config::{DuplicateKeyPolicy, EngineConfig};
use cleanroom_core::Error;
use cleanroom_relation::{join, DatasetStore};
use fixtures::{range_fixture, side_a_row, side_a_row_with_identifiers, side_b_row};
use serde_json::json;

#[test]
fn load_rejects_missing_required_field() {
    let cfg = EngineConfig::default();
    let mut row = side_a_row("user_1", true, "camp_a", "X");
    row.as_object_mut().unwrap().remove("clicked");

    let err = DatasetStore::load(&cfg, &[row], &[]).unwrap_err();
    match err {
        Error::Schema(msg) => {
            assert!(msg.contains("side A row 0"), "got: {}", msg);
            assert!(msg.contains("clicked"), "got: {}", msg);
        }
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn load_rejects_mistyped_field() {
    let cfg = EngineConfig::default();
    let mut row = side_b_row("user_1", true, 10.0);
    row["purchased"] = json!("yes");

    let err = DatasetStore::load(&cfg, &[], &[row]).unwrap_err();
    assert!(matches!(err, Error::Schema(_)));
}

#[test]
fn load_rejects_malformed_key() {
    let cfg = EngineConfig::default();
    let mut row = side_a_row("user_1", true, "camp_a", "X");
    row["key"] = json!("not-a-digest");

    assert!(DatasetStore::load(&cfg, &[row], &[]).is_err());
}

#[test]
fn load_rejects_negative_purchase_value() {
    let cfg = EngineConfig::default();
    let row = side_b_row("user_1", true, -5.0);
    let err = DatasetStore::load(&cfg, &[], &[row]).unwrap_err();
    match err {
        Error::Schema(msg) => assert!(msg.contains("non-negative"), "got: {}", msg),
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn load_enforces_row_cap() {
    let cfg = EngineConfig {
        max_rows_per_side: 2,
        ..EngineConfig::default()
    };
    let (side_a, _) = range_fixture(0..3, 0..0);
    assert!(DatasetStore::load(&cfg, &side_a, &[]).is_err());
}

#[test]
fn load_drops_extra_identifier_fields() {
    let cfg = EngineConfig::default();
    let rows = vec![side_a_row_with_identifiers("user_1", true, "camp_a", "X")];
    let store = DatasetStore::load(&cfg, &rows, &[]).expect("load should succeed");

    // The stored record carries only the permitted fields; the raw
    // identifier columns from the upload row are unreachable.
    assert_eq!(store.side_a().len(), 1);
    assert!(store.side_a()[0].clicked);
    assert_eq!(store.side_a()[0].region, "X");
}

#[test]
fn duplicate_keys_reject_by_default() {
    let cfg = EngineConfig::default();
    let rows = vec![
        side_a_row("user_1", true, "camp_a", "X"),
        side_a_row("user_1", false, "camp_b", "Y"),
    ];
    let err = DatasetStore::load(&cfg, &rows, &[]).unwrap_err();
    match err {
        Error::Schema(msg) => assert!(msg.contains("duplicate key"), "got: {}", msg),
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn duplicate_keys_first_wins_keeps_first_record() {
    let cfg = EngineConfig {
        duplicate_keys: DuplicateKeyPolicy::FirstWins,
        ..EngineConfig::default()
    };
    let rows = vec![
        side_a_row("user_1", true, "camp_a", "X"),
        side_a_row("user_1", false, "camp_b", "Y"),
    ];
    let store = DatasetStore::load(&cfg, &rows, &[]).expect("load should succeed");
    assert_eq!(store.side_a().len(), 1);
    assert!(store.side_a()[0].clicked);
    assert_eq!(store.side_a()[0].region, "X");
}

#[test]
fn join_count_equals_key_intersection() {
    let cfg = EngineConfig::default();
    // Side A: users 1..=30, side B: users 5..=34. Intersection: 5..=30.
    let (side_a, side_b) = range_fixture(1..31, 5..35);
    let store = DatasetStore::load(&cfg, &side_a, &side_b).expect("load should succeed");

    let relation = join(&store);
    assert_eq!(relation.len(), 26);
}

#[test]
fn join_is_empty_when_keys_are_disjoint() {
    let cfg = EngineConfig::default();
    let (side_a, side_b) = range_fixture(0..10, 100..110);
    let store = DatasetStore::load(&cfg, &side_a, &side_b).expect("load should succeed");

    assert!(join(&store).is_empty());
}

#[test]
fn join_is_deterministic() {
    let cfg = EngineConfig::default();
    let (side_a, side_b) = range_fixture(1..50, 25..75);
    let store = DatasetStore::load(&cfg, &side_a, &side_b).expect("load should succeed");

    let first = join(&store);
    let second = join(&store);
    assert_eq!(first.records(), second.records());
}

#[test]
fn joined_records_combine_both_sides() {
    let cfg = EngineConfig::default();
    let side_a = vec![side_a_row("user_1", true, "camp_a", "X")];
    let side_b = vec![side_b_row("user_1", true, 42.5)];
    let store = DatasetStore::load(&cfg, &side_a, &side_b).expect("load should succeed");

    let relation = join(&store);
    assert_eq!(relation.len(), 1);
    let record = &relation.records()[0];
    assert!(record.clicked);
    assert_eq!(record.campaign_id, "camp_a");
    assert_eq!(record.region, "X");
    assert!(record.purchased);
    assert_eq!(record.purchase_value, 42.5);
}
