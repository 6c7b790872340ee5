//! Notification normalization.
//!
//! Renames raw provider field names to canonical schema field names for
//! the classified kind, then dispatches to the schema builder. The money
//! fields each schema derives from paired amount/currency inputs keep
//! their provider source keys (`mc_gross`, `mc_fee`, `auth_amount`,
//! `mc_currency`), which pass through renaming untouched.

use paygate_core::{RawParams, TypedRecord, ValidationError};

use crate::classify::{classify, EventKind};
use crate::schemas::registry;

const ORDER_CREATED_RENAMES: &[(&str, &str)] = &[
    ("txn_id", "order_id"),
    ("payment_date", "order_date"),
];

const AUTHORIZATION_CREATED_RENAMES: &[(&str, &str)] = &[
    ("txn_id", "authorization_id"),
    ("parent_txn_id", "order_id"),
    ("payment_date", "authorization_date"),
    ("auth_exp", "authorization_expires_date"),
];

const PAYMENT_COMPLETED_RENAMES: &[(&str, &str)] = &[
    ("txn_id", "payment_id"),
    ("auth_id", "authorization_id"),
    ("auth_exp", "authorization_expires_date"),
];

const PAYMENT_REFUNDED_RENAMES: &[(&str, &str)] = &[
    ("txn_id", "refunding_id"),
    ("auth_id", "authorization_id"),
    ("parent_txn_id", "payment_id"),
    ("auth_exp", "authorization_expires_date"),
    ("payment_date", "refunded_date"),
];

const BILLING_AGREEMENT_CANCELLED_RENAMES: &[(&str, &str)] = &[
    ("mp_id", "billing_agreement_id"),
    ("mp_desc", "description"),
];

fn renames_for(kind: EventKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        EventKind::OrderCreated => ORDER_CREATED_RENAMES,
        EventKind::AuthorizationCreated => AUTHORIZATION_CREATED_RENAMES,
        EventKind::PaymentCompleted => PAYMENT_COMPLETED_RENAMES,
        EventKind::PaymentRefunded => PAYMENT_REFUNDED_RENAMES,
        EventKind::BillingAgreementCancelled => BILLING_AGREEMENT_CANCELLED_RENAMES,
        EventKind::Unknown => &[],
    }
}

/// Rename the listed keys, keeping every unlisted key unchanged.
fn rename_keys(renames: &[(&str, &str)], params: &RawParams) -> RawParams {
    params
        .iter()
        .map(|(key, value)| {
            let renamed = renames
                .iter()
                .find(|(from, _)| *from == key.as_str())
                .map(|(_, to)| (*to).to_owned())
                .unwrap_or_else(|| key.clone());
            (renamed, value.clone())
        })
        .collect()
}

fn signal<'a>(params: &'a RawParams, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

/// Classify, normalize, and build a typed record from raw provider
/// parameters.
///
/// The full inbound pipeline: raw map -> classifier -> rename ->
/// schema builder. For [`EventKind::Unknown`] no renaming or validation
/// occurs; the result is a minimal record carrying only the kind tag.
pub fn from_params(params: &RawParams) -> Result<TypedRecord, ValidationError> {
    let kind = classify(
        signal(params, "txn_type"),
        signal(params, "payment_status"),
        signal(params, "pending_reason"),
    );

    let schema = match registry().schema_for(kind) {
        Some(schema) => schema,
        None => return Ok(TypedRecord::tag_only(EventKind::Unknown.as_str())),
    };

    let renamed = rename_keys(renames_for(kind), params);
    schema.build(&renamed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RawParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn rename_keeps_unlisted_keys() {
        let renamed = rename_keys(
            ORDER_CREATED_RENAMES,
            &params(&[("txn_id", "T1"), ("mc_gross", "10.00")]),
        );
        assert_eq!(renamed.get("order_id").map(String::as_str), Some("T1"));
        assert_eq!(renamed.get("mc_gross").map(String::as_str), Some("10.00"));
        assert!(!renamed.contains_key("txn_id"));
    }

    #[test]
    fn unknown_input_yields_bare_kind_tag() {
        let record = from_params(&params(&[
            ("txn_type", "web_accept"),
            ("payment_status", "Denied"),
            ("pending_reason", ""),
        ]))
        .unwrap();
        assert_eq!(record.kind(), "unknown");
        assert_eq!(record.fields().count(), 0);
    }

    #[test]
    fn missing_signal_fields_classify_as_unknown() {
        let record = from_params(&RawParams::new()).unwrap();
        assert_eq!(record.kind(), "unknown");
    }
}
