//! Per-kind notification schemas.
//!
//! One [`EntitySchema`] per recognized event kind, declared from explicit
//! field lists and held in a process-wide registry: built once on first
//! use, read-only afterward, safe for unsynchronized concurrent access.

use std::sync::OnceLock;

use paygate_core::{EntitySchema, FieldSpec};

use crate::classify::EventKind;

// All timestamp fields below use the provider's fixed
// `HH:MM:SS Mon D, YYYY TZ` layout handled by the core coercion.

fn order_created() -> EntitySchema {
    EntitySchema::new(
        EventKind::OrderCreated.as_str(),
        vec![
            FieldSpec::constant("type", "order_created"),
            FieldSpec::timestamp("order_date"),
            FieldSpec::text("order_id").mandatory(),
            FieldSpec::text("payer_email"),
            FieldSpec::text("payer_id").mandatory(),
            FieldSpec::text("receiver_email").mandatory(),
            FieldSpec::text("receiver_id").mandatory(),
            FieldSpec::text("payment_status").mandatory(),
            FieldSpec::text("pending_reason"),
            FieldSpec::text("receipt_id"),
            FieldSpec::money("order_total", "mc_gross", "mc_currency").mandatory(),
        ],
    )
}

fn authorization_created() -> EntitySchema {
    EntitySchema::new(
        EventKind::AuthorizationCreated.as_str(),
        vec![
            FieldSpec::constant("type", "authorization_created"),
            FieldSpec::timestamp("authorization_date").mandatory(),
            FieldSpec::timestamp("authorization_expires_date").mandatory(),
            FieldSpec::text("order_id").mandatory(),
            FieldSpec::text("authorization_id").mandatory(),
            FieldSpec::text("payer_email"),
            FieldSpec::text("payer_id").mandatory(),
            FieldSpec::text("receiver_email").mandatory(),
            FieldSpec::text("receiver_id").mandatory(),
            FieldSpec::text("payment_status").mandatory(),
            FieldSpec::text("pending_reason"),
            FieldSpec::text("receipt_id"),
            FieldSpec::money("order_total", "mc_gross", "mc_currency").mandatory(),
            FieldSpec::money("authorization_total", "auth_amount", "mc_currency").mandatory(),
        ],
    )
}

fn payment_completed() -> EntitySchema {
    EntitySchema::new(
        EventKind::PaymentCompleted.as_str(),
        vec![
            FieldSpec::constant("type", "payment_completed"),
            FieldSpec::timestamp("payment_date").mandatory(),
            FieldSpec::text("payment_id").mandatory(),
            FieldSpec::timestamp("authorization_expires_date").mandatory(),
            FieldSpec::text("authorization_id").mandatory(),
            FieldSpec::text("payer_email"),
            FieldSpec::text("payer_id").mandatory(),
            FieldSpec::text("receiver_email").mandatory(),
            FieldSpec::text("receiver_id").mandatory(),
            FieldSpec::text("payment_status").mandatory(),
            FieldSpec::text("pending_reason"),
            FieldSpec::text("receipt_id"),
            FieldSpec::money("authorization_total", "auth_amount", "mc_currency").mandatory(),
            FieldSpec::money("payment_total", "mc_gross", "mc_currency").mandatory(),
            FieldSpec::money("fee_total", "mc_fee", "mc_currency").mandatory(),
        ],
    )
}

fn payment_refunded() -> EntitySchema {
    EntitySchema::new(
        EventKind::PaymentRefunded.as_str(),
        vec![
            FieldSpec::constant("type", "payment_refunded"),
            FieldSpec::text("refunding_id").mandatory(),
            FieldSpec::timestamp("refunded_date").mandatory(),
            FieldSpec::text("payment_id").mandatory(),
            FieldSpec::timestamp("authorization_expires_date").mandatory(),
            FieldSpec::text("authorization_id").mandatory(),
            FieldSpec::text("payer_email"),
            FieldSpec::text("payer_id").mandatory(),
            FieldSpec::text("receiver_email").mandatory(),
            FieldSpec::text("receiver_id").mandatory(),
            FieldSpec::text("payment_status").mandatory(),
            FieldSpec::text("pending_reason"),
            FieldSpec::text("receipt_id"),
            FieldSpec::money("authorization_total", "auth_amount", "mc_currency").mandatory(),
            FieldSpec::money("payment_total", "mc_gross", "mc_currency").mandatory(),
            FieldSpec::money("fee_total", "mc_fee", "mc_currency").mandatory(),
        ],
    )
}

fn billing_agreement_cancelled() -> EntitySchema {
    EntitySchema::new(
        EventKind::BillingAgreementCancelled.as_str(),
        vec![
            FieldSpec::constant("type", "billing_agreement_cancelled"),
            FieldSpec::text("payer_email"),
            FieldSpec::text("payer_id").mandatory(),
            FieldSpec::text("billing_agreement_id").mandatory(),
            FieldSpec::text("description"),
            FieldSpec::text("reason_code"),
        ],
    )
}

/// Read-only registry of the per-kind notification schemas.
pub struct SchemaRegistry {
    order_created: EntitySchema,
    authorization_created: EntitySchema,
    payment_completed: EntitySchema,
    payment_refunded: EntitySchema,
    billing_agreement_cancelled: EntitySchema,
}

impl SchemaRegistry {
    fn new() -> Self {
        SchemaRegistry {
            order_created: order_created(),
            authorization_created: authorization_created(),
            payment_completed: payment_completed(),
            payment_refunded: payment_refunded(),
            billing_agreement_cancelled: billing_agreement_cancelled(),
        }
    }

    /// Schema for a recognized kind; `None` for [`EventKind::Unknown`],
    /// which carries no schema.
    pub fn schema_for(&self, kind: EventKind) -> Option<&EntitySchema> {
        match kind {
            EventKind::OrderCreated => Some(&self.order_created),
            EventKind::AuthorizationCreated => Some(&self.authorization_created),
            EventKind::PaymentCompleted => Some(&self.payment_completed),
            EventKind::PaymentRefunded => Some(&self.payment_refunded),
            EventKind::BillingAgreementCancelled => Some(&self.billing_agreement_cancelled),
            EventKind::Unknown => None,
        }
    }
}

/// The process-wide schema registry.
pub fn registry() -> &'static SchemaRegistry {
    static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SchemaRegistry::new)
}
