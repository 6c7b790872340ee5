//! End-to-end tests for the raw-params -> typed-record pipeline.

use paygate_core::{Money, RawParams, Value};
use paygate_ipn::from_params;

fn params(pairs: &[(&str, &str)]) -> RawParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn order_created_params() -> RawParams {
    params(&[
        ("txn_type", "web_accept"),
        ("payment_status", "Pending"),
        ("pending_reason", "order"),
        ("txn_id", "T1"),
        ("payment_date", "13:45:00 Jan 5, 2021 PST"),
        ("mc_gross", "10.00"),
        ("mc_currency", "USD"),
        ("payer_id", "P1"),
        ("receiver_id", "R1"),
        ("receiver_email", "a@b.com"),
    ])
}

#[test]
fn order_created_end_to_end() {
    let record = from_params(&order_created_params()).unwrap();

    assert_eq!(record.kind(), "order_created");
    assert_eq!(record.get_str("type"), Some("order_created"));
    assert_eq!(record.get_str("order_id"), Some("T1"));
    assert!(matches!(record.get("order_date"), Some(Value::Timestamp(_))));
    assert_eq!(record.get_money("order_total"), Some(&Money::new(1000, "USD")));
    assert_eq!(record.get_str("payer_id"), Some("P1"));
    // Provider keys were renamed away, not duplicated.
    assert_eq!(record.get("txn_id"), None);
    assert_eq!(record.get("payment_date"), None);
}

#[test]
fn omitted_mandatory_field_names_exactly_that_field() {
    let mut raw = order_created_params();
    raw.remove("payer_id");

    let err = from_params(&raw).unwrap_err();
    assert_eq!(err.kind, "order_created");
    assert!(err.names_field("payer_id"));
    assert_eq!(err.violations.len(), 1);
}

#[test]
fn transform_is_idempotent() {
    let raw = order_created_params();
    assert_eq!(from_params(&raw).unwrap(), from_params(&raw).unwrap());
}

#[test]
fn authorization_created_end_to_end() {
    let record = from_params(&params(&[
        ("txn_type", "web_accept"),
        ("payment_status", "Pending"),
        ("pending_reason", "authorization"),
        ("txn_id", "A9"),
        ("parent_txn_id", "T1"),
        ("payment_date", "13:45:00 Jan 5, 2021 PST"),
        ("auth_exp", "13:45:00 Jan 8, 2021 PST"),
        ("auth_amount", "10.00"),
        ("mc_gross", "10.00"),
        ("mc_currency", "USD"),
        ("payer_id", "P1"),
        ("receiver_id", "R1"),
        ("receiver_email", "a@b.com"),
    ]))
    .unwrap();

    assert_eq!(record.kind(), "authorization_created");
    assert_eq!(record.get_str("authorization_id"), Some("A9"));
    assert_eq!(record.get_str("order_id"), Some("T1"));
    assert!(matches!(
        record.get("authorization_expires_date"),
        Some(Value::Timestamp(_))
    ));
    assert_eq!(
        record.get_money("authorization_total"),
        Some(&Money::new(1000, "USD"))
    );
    assert_eq!(record.get_money("order_total"), Some(&Money::new(1000, "USD")));
}

fn payment_completed_params() -> RawParams {
    params(&[
        ("txn_type", "web_accept"),
        ("payment_status", "Completed"),
        ("pending_reason", ""),
        ("txn_id", "PAY-1"),
        ("auth_id", "A9"),
        ("payment_date", "10:00:00 Feb 1, 2021 PST"),
        ("auth_exp", "10:00:00 Feb 4, 2021 PST"),
        ("auth_amount", "10.00"),
        ("mc_gross", "10.00"),
        ("mc_fee", "0.59"),
        ("mc_currency", "USD"),
        ("payer_id", "P1"),
        ("receiver_id", "R1"),
        ("receiver_email", "a@b.com"),
    ])
}

#[test]
fn payment_completed_end_to_end() {
    let record = from_params(&payment_completed_params()).unwrap();

    assert_eq!(record.kind(), "payment_completed");
    assert_eq!(record.get_str("payment_id"), Some("PAY-1"));
    assert_eq!(record.get_str("authorization_id"), Some("A9"));
    assert_eq!(record.get_money("payment_total"), Some(&Money::new(1000, "USD")));
    assert_eq!(record.get_money("fee_total"), Some(&Money::new(59, "USD")));
    assert_eq!(
        record.get_money("authorization_total"),
        Some(&Money::new(1000, "USD"))
    );
}

#[test]
fn missing_fee_input_fails_the_whole_record() {
    let mut raw = payment_completed_params();
    raw.remove("mc_fee");

    let err = from_params(&raw).unwrap_err();
    assert_eq!(err.kind, "payment_completed");
    assert!(err.names_field("fee_total"));
}

#[test]
fn payment_refunded_end_to_end() {
    let record = from_params(&params(&[
        ("txn_type", "web_accept"),
        ("payment_status", "Refunded"),
        ("pending_reason", ""),
        ("txn_id", "REF-1"),
        ("parent_txn_id", "PAY-1"),
        ("auth_id", "A9"),
        ("payment_date", "16:20:00 Feb 10, 2021 PST"),
        ("auth_exp", "16:20:00 Feb 13, 2021 PST"),
        ("auth_amount", "10.00"),
        ("mc_gross", "-10.00"),
        ("mc_fee", "-0.30"),
        ("mc_currency", "USD"),
        ("payer_id", "P1"),
        ("receiver_id", "R1"),
        ("receiver_email", "a@b.com"),
    ]))
    .unwrap();

    assert_eq!(record.kind(), "payment_refunded");
    assert_eq!(record.get_str("refunding_id"), Some("REF-1"));
    assert_eq!(record.get_str("payment_id"), Some("PAY-1"));
    assert!(matches!(record.get("refunded_date"), Some(Value::Timestamp(_))));
    assert_eq!(record.get_money("payment_total"), Some(&Money::new(-1000, "USD")));
    assert_eq!(record.get_money("fee_total"), Some(&Money::new(-30, "USD")));
}

#[test]
fn billing_agreement_cancelled_end_to_end() {
    let record = from_params(&params(&[
        ("txn_type", "mp_cancel"),
        ("payment_status", ""),
        ("pending_reason", ""),
        ("mp_id", "B-1"),
        ("mp_desc", "marketplace payments"),
        ("payer_id", "P1"),
        ("reason_code", "mp_cancel"),
    ]))
    .unwrap();

    assert_eq!(record.kind(), "billing_agreement_cancelled");
    assert_eq!(record.get_str("billing_agreement_id"), Some("B-1"));
    assert_eq!(record.get_str("description"), Some("marketplace payments"));
    assert_eq!(record.get_str("payer_id"), Some("P1"));
}

#[test]
fn record_json_output_shape() {
    let json = from_params(&order_created_params()).unwrap().to_json();
    assert_eq!(json["type"], "order_created");
    assert_eq!(json["order_id"], "T1");
    assert_eq!(json["order_total"]["amount"], 1000);
    assert_eq!(json["order_total"]["currency"], "USD");
}
