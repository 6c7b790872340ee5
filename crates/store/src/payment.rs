//! Payment entry entity.
//!
//! The persisted view of an order's payment lifecycle: ids and dates
//! accumulate as the order moves through authorization, completion, and
//! commission charging. All monetary columns share one currency; each is
//! composed atomically from its decimal text plus the shared `currency`
//! input.

use std::sync::OnceLock;

use paygate_core::{EntitySchema, FieldSpec, Value};

const COMMISSION_STATUSES: &[&str] = &["not_charged", "in_progress", "charged", "errored"];

fn payment() -> EntitySchema {
    EntitySchema::new(
        "paypal_payment",
        vec![
            FieldSpec::int("community_id").mandatory(),
            FieldSpec::int("transaction_id").mandatory(),
            FieldSpec::text("payer_id").mandatory(),
            FieldSpec::text("receiver_id").mandatory(),
            FieldSpec::text("merchant_id").mandatory(),
            FieldSpec::text("order_id").mandatory(),
            FieldSpec::timestamp("order_date").mandatory(),
            FieldSpec::money("order_total", "order_total", "currency").mandatory(),
            FieldSpec::text("authorization_id"),
            FieldSpec::timestamp("authorization_date"),
            FieldSpec::timestamp("authorization_expires_date"),
            FieldSpec::money("authorization_total", "authorization_total", "currency"),
            FieldSpec::text("payment_id"),
            FieldSpec::timestamp("payment_date"),
            FieldSpec::money("payment_total", "payment_total", "currency"),
            FieldSpec::money("fee_total", "fee_total", "currency"),
            FieldSpec::text("payment_status").mandatory(),
            FieldSpec::text("pending_reason"),
            FieldSpec::text("commission_payment_id"),
            FieldSpec::timestamp("commission_payment_date"),
            FieldSpec::enumeration("commission_status", COMMISSION_STATUSES)
                .mandatory()
                .default(Value::Enum("not_charged".to_owned())),
            FieldSpec::text("commission_pending_reason"),
            FieldSpec::money("commission_total", "commission_total", "currency"),
            FieldSpec::money("commission_fee_total", "commission_fee_total", "currency"),
        ],
    )
}

/// Process-wide payment entry schema, built once.
pub fn payment_schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(payment)
}
