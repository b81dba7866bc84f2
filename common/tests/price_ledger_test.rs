//! Price ledger scenarios: draft parsing, commit-replaces-by-name, and the
//! serialized form written to localStorage.

use whisky_goggles_common::{parse_price, upsert_price, PriceRecord};

#[test]
fn test_commit_then_recommit_same_name() {
    let mut ledger = Vec::new();

    let first = parse_price("49.99").expect("valid draft");
    upsert_price(&mut ledger, "Buffalo Trace", first, 1000.0);

    let second = parse_price("45.00").expect("valid draft");
    upsert_price(&mut ledger, "Buffalo Trace", second, 2000.0);

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].price, 45.00);
}

#[test]
fn test_commit_does_not_touch_other_timestamps() {
    let mut ledger = vec![
        PriceRecord {
            name: "Ardbeg 10".to_string(),
            price: 54.99,
            timestamp: 100.0,
        },
        PriceRecord {
            name: "Lagavulin 16".to_string(),
            price: 99.99,
            timestamp: 200.0,
        },
    ];

    upsert_price(&mut ledger, "Ardbeg 10", 52.00, 300.0);

    assert_eq!(ledger.len(), 2);
    let lagavulin = ledger
        .iter()
        .find(|r| r.name == "Lagavulin 16")
        .expect("record kept");
    assert_eq!(lagavulin.timestamp, 200.0);
    let ardbeg = ledger
        .iter()
        .find(|r| r.name == "Ardbeg 10")
        .expect("record kept");
    assert_eq!(ardbeg.price, 52.00);
    assert_eq!(ardbeg.timestamp, 300.0);
}

#[test]
fn test_unparseable_draft_never_commits() {
    // the UI disables the save button when parse_price returns None
    assert_eq!(parse_price("free"), None);
    assert_eq!(parse_price("-5"), None);
    assert_eq!(parse_price("0.00"), None);
}

#[test]
fn test_ledger_storage_roundtrip() {
    let mut ledger = Vec::new();
    upsert_price(&mut ledger, "Buffalo Trace", 49.99, 1717000000000.0);
    upsert_price(&mut ledger, "Ardbeg 10", 54.99, 1717000001000.0);

    let stored = serde_json::to_string(&ledger).expect("serialize failed");
    let restored: Vec<PriceRecord> = serde_json::from_str(&stored).expect("deserialize failed");

    assert_eq!(restored, ledger);
}

#[test]
fn test_corrupted_storage_payload_fails_to_parse() {
    // the persistence adapter treats this as an empty ledger
    let corrupted = r#"[{"name": "Buffalo Trace", "price": "not a number"}]"#;
    assert!(serde_json::from_str::<Vec<PriceRecord>>(corrupted).is_err());
}
