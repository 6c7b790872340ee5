//! paygate-ipn: inbound payment-notification classification and
//! normalization.
//!
//! Turns untyped key/value notification parameters from the payment
//! provider into strictly validated typed records:
//!
//! 1. [`classify`] determines the semantic [`EventKind`] from three raw
//!    signal fields (pure, never fails; `Unknown` is a terminal result).
//! 2. [`from_params`] renames provider field names to canonical schema
//!    names for that kind and dispatches to the schema builder.
//!
//! The transform is referentially transparent: the same raw map always
//! yields a structurally identical record. Deduplication of redelivered
//! notifications belongs to the persistence collaborator, not here.

pub mod classify;
pub mod normalize;
pub mod schemas;

pub use classify::{classify, EventKind};
pub use normalize::from_params;
pub use schemas::{registry, SchemaRegistry};
