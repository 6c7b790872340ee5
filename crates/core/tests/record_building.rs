//! Public-API tests for the schema engine.

use paygate_core::{EntitySchema, FieldSpec, Money, RawParams, Value};

fn params(pairs: &[(&str, &str)]) -> RawParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn settlement_schema() -> EntitySchema {
    EntitySchema::new(
        "settlement",
        vec![
            FieldSpec::constant("type", "settlement"),
            FieldSpec::text("settlement_id").mandatory(),
            FieldSpec::timestamp("settled_at").mandatory(),
            FieldSpec::money("gross_total", "gross", "currency").mandatory(),
            FieldSpec::money("fee_total", "fee", "currency"),
            FieldSpec::enumeration("status", &["open", "settled", "reversed"]).mandatory(),
        ],
    )
}

#[test]
fn full_record_builds_from_raw_text() {
    let raw = params(&[
        ("settlement_id", "S-100"),
        ("settled_at", "09:15:00 Mar 2, 2021 PST"),
        ("gross", "250.00"),
        ("fee", "7.55"),
        ("currency", "EUR"),
        ("status", "settled"),
    ]);
    let record = settlement_schema().build(&raw).unwrap();

    assert_eq!(record.get_money("gross_total"), Some(&Money::new(25000, "EUR")));
    assert_eq!(record.get_money("fee_total"), Some(&Money::new(755, "EUR")));
    assert_eq!(record.get_str("status"), Some("settled"));
    assert!(matches!(record.get("settled_at"), Some(Value::Timestamp(_))));
}

#[test]
fn every_defect_is_reported_in_one_error() {
    let raw = params(&[
        ("settled_at", "yesterday"),
        ("gross", "lots"),
        ("currency", "EUR"),
        ("status", "pending"),
    ]);
    let err = settlement_schema().build(&raw).unwrap_err();

    assert_eq!(err.kind, "settlement");
    assert!(err.names_field("settlement_id"));
    assert!(err.names_field("settled_at"));
    assert!(err.names_field("gross_total"));
    assert!(err.names_field("status"));
    assert_eq!(err.violations.len(), 4);
}

#[test]
fn optional_money_is_skipped_when_absent() {
    let raw = params(&[
        ("settlement_id", "S-100"),
        ("settled_at", "09:15:00 Mar 2, 2021 PST"),
        ("gross", "250.00"),
        ("currency", "EUR"),
        ("status", "open"),
    ]);
    let record = settlement_schema().build(&raw).unwrap();
    assert_eq!(record.get("fee_total"), None);
}
