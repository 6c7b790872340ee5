//! Provider account entity and derived verification state.
//!
//! The two state fields on an account (`order_permission_state`,
//! `billing_agreement_state`) are read-only derived values: recomputed
//! from the related permission/agreement records on every read, and
//! unconditionally stripped from caller-supplied input on every write.
//! Callers can never override computed truth.

use std::fmt;
use std::sync::OnceLock;

use paygate_core::{EntitySchema, FieldSpec, RawParams, TypedRecord, ValidationError};

/// Field names callers are never allowed to set directly.
pub const COMPUTED_ACCOUNT_FIELDS: &[&str] = &["order_permission_state", "billing_agreement_state"];

const ACCOUNT_STATES: &[&str] = &["not_verified", "verified"];

/// Derived verification state of a permission or billing agreement.
///
/// Absence of a related record is represented as `None` at the edges,
/// never as a third enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    NotVerified,
    Verified,
}

impl AccountState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountState::NotVerified => "not_verified",
            AccountState::Verified => "verified",
        }
    }
}

impl fmt::Display for AccountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A related order-permission record, as persisted by the storage
/// collaborator.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct OrderPermission {
    pub paypal_username_to: String,
    pub request_token: String,
    pub verification_code: Option<String>,
    pub scope: Option<String>,
}

/// A related billing-agreement record.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct BillingAgreement {
    pub token: Option<String>,
}

fn account() -> EntitySchema {
    EntitySchema::new(
        "paypal_account",
        vec![
            FieldSpec::boolean("active").default(paygate_core::Value::Bool(false)),
            FieldSpec::int("community_id").mandatory(),
            // Optional for administrative accounts.
            FieldSpec::text("person_id"),
            FieldSpec::text("email"),
            FieldSpec::text("payer_id"),
            FieldSpec::enumeration("order_permission_state", ACCOUNT_STATES).nullable(),
            FieldSpec::enumeration("billing_agreement_state", ACCOUNT_STATES).nullable(),
        ],
    )
}

fn order_permission_create() -> EntitySchema {
    EntitySchema::new(
        "order_permission_create",
        vec![
            FieldSpec::text("paypal_username_to").mandatory(),
            FieldSpec::text("request_token").mandatory(),
        ],
    )
}

fn order_permission_update() -> EntitySchema {
    EntitySchema::new(
        "order_permission_update",
        vec![
            FieldSpec::text("verification_code"),
            FieldSpec::text("scope").mandatory(),
        ],
    )
}

/// Process-wide account schema, built once.
pub fn account_schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(account)
}

pub fn order_permission_create_schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(order_permission_create)
}

pub fn order_permission_update_schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(order_permission_update)
}

/// Derive the order-permission verification state from the related
/// record: verified when a non-empty verification code is present,
/// not-verified when the record exists without one, absent otherwise.
pub fn order_permission_state(permission: Option<&OrderPermission>) -> Option<AccountState> {
    permission.map(|p| match &p.verification_code {
        Some(code) if !code.trim().is_empty() => AccountState::Verified,
        _ => AccountState::NotVerified,
    })
}

/// Billing-agreement analog, keyed on presence of the agreement token.
pub fn billing_agreement_state(agreement: Option<&BillingAgreement>) -> Option<AccountState> {
    agreement.map(|a| match &a.token {
        Some(token) if !token.trim().is_empty() => AccountState::Verified,
        _ => AccountState::NotVerified,
    })
}

/// Strip the computed state fields from caller-supplied input.
///
/// Applied on every write path before building, so the persisted account
/// never carries a caller-chosen verification state.
pub fn filter_computed(raw: &RawParams) -> RawParams {
    raw.iter()
        .filter(|(key, _)| !COMPUTED_ACCOUNT_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Build an account record for a write path: computed fields stripped
/// first, then validated against the account schema.
pub fn build_account_for_write(raw: &RawParams) -> Result<TypedRecord, ValidationError> {
    account_schema().build(&filter_computed(raw))
}

/// Build an account record for a read path: derived states recomputed
/// from the related records and merged over whatever the caller sent.
pub fn build_account_with_state(
    raw: &RawParams,
    permission: Option<&OrderPermission>,
    agreement: Option<&BillingAgreement>,
) -> Result<TypedRecord, ValidationError> {
    let mut merged = filter_computed(raw);
    if let Some(state) = order_permission_state(permission) {
        merged.insert("order_permission_state".to_owned(), state.as_str().to_owned());
    }
    if let Some(state) = billing_agreement_state(agreement) {
        merged.insert("billing_agreement_state".to_owned(), state.as_str().to_owned());
    }
    account_schema().build(&merged)
}
