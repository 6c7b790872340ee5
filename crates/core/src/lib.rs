//! paygate-core: schema-driven record building for payment notifications.
//!
//! Provides the generic validation engine shared by every typed record in
//! the system: ordered field declarations ([`FieldSpec`]) grouped into an
//! [`EntitySchema`], executed once against an untyped string map to
//! produce an immutable [`TypedRecord`] or a structured
//! [`ValidationError`] naming every offending field.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`EntitySchema::build`] -- validate and coerce a raw map
//! - [`FieldSpec`] -- per-field declaration constructors
//! - [`Money`] / [`to_money`] -- exact minor-unit monetary values
//! - [`to_timestamp`] -- fixed-layout notification timestamps
//! - [`ValidationError`] / [`CoercionError`] -- recoverable failures
//!
//! Every operation here is a synchronous pure function over immutable
//! input; there is no internal mutable state and no I/O, so concurrent
//! use needs no synchronization.

pub mod coerce;
pub mod error;
pub mod money;
pub mod schema;
pub mod value;

// ── Convenience re-exports: key types ────────────────────────────────

pub use coerce::{to_bool, to_int, to_timestamp};
pub use error::{CoercionError, ValidationError, Violation};
pub use money::{to_money, CurrencyMismatch, Money};
pub use schema::{EntitySchema, FieldKind, FieldSpec, Presence, RawParams, TypedRecord};
pub use value::Value;
