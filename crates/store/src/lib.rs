//! paygate-store: account, permission, and payment entity schemas.
//!
//! Sits alongside the notification pipeline: the persistence
//! collaborator supplies raw maps and related records, and gets back
//! validated typed records with the account's verification states
//! recomputed from related records on read and stripped from caller
//! input on write. No storage access happens in this crate.

pub mod account;
pub mod merchant;
pub mod payment;

pub use account::{
    account_schema, billing_agreement_state, build_account_for_write, build_account_with_state,
    filter_computed, order_permission_create_schema, order_permission_state,
    order_permission_update_schema, AccountState, BillingAgreement, OrderPermission,
    COMPUTED_ACCOUNT_FIELDS,
};
pub use merchant::{
    ApiCredentials, CreateBillingAgreement, CreateBillingAgreementResponse, Endpoint,
    FailureResponse, RequestError, RequestPermissions, RequestPermissionsResponse,
    SetupBillingAgreement, SetupBillingAgreementResponse, PERMISSION_SCOPE,
};
pub use payment::payment_schema;
