//! Error types for coercion and schema building.
//!
//! All errors are recoverable values returned to the caller. Nothing in
//! this crate logs, retries, or aborts the process; the calling
//! collaborator owns that policy.

use serde::{Deserialize, Serialize};
use std::fmt;

// ──────────────────────────────────────────────
// Coercion errors
// ──────────────────────────────────────────────

/// Errors from turning raw text into a typed value.
///
/// A coercion failure is a hard failure for the whole record: a
/// partially-typed record is never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    /// Amount text is not a parsable fixed-point decimal.
    BadAmount { text: String },
    /// Monetary amount was supplied without a currency code.
    MissingCurrency,
    /// Amount does not fit in an i64 count of minor units.
    AmountOverflow { text: String },
    /// Timestamp text does not match the fixed notification layout.
    BadTimestamp { text: String },
    /// Trailing time zone abbreviation is not one the provider emits.
    UnknownTimeZone { zone: String },
    /// Text is not a parsable integer.
    BadInt { text: String },
    /// Text is not a recognized boolean spelling.
    BadBool { text: String },
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionError::BadAmount { text } => {
                write!(f, "amount '{}' is not a valid decimal", text)
            }
            CoercionError::MissingCurrency => {
                write!(f, "monetary amount is missing its currency code")
            }
            CoercionError::AmountOverflow { text } => {
                write!(f, "amount '{}' overflows minor-unit range", text)
            }
            CoercionError::BadTimestamp { text } => {
                write!(f, "timestamp '{}' does not match 'HH:MM:SS Mon D, YYYY TZ'", text)
            }
            CoercionError::UnknownTimeZone { zone } => {
                write!(f, "unknown time zone abbreviation '{}'", zone)
            }
            CoercionError::BadInt { text } => {
                write!(f, "'{}' is not a valid integer", text)
            }
            CoercionError::BadBool { text } => {
                write!(f, "'{}' is not a valid boolean", text)
            }
        }
    }
}

impl std::error::Error for CoercionError {}

// ──────────────────────────────────────────────
// Validation errors
// ──────────────────────────────────────────────

/// A single field-level constraint violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub reason: String,
}

impl Violation {
    pub fn new(field: &str, reason: impl Into<String>) -> Self {
        Violation {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}

/// One or more constraint violations found while building a record.
///
/// Violations are collected across the whole schema rather than
/// short-circuiting at the first offender, so a caller sees every defect
/// in a payload at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The record kind whose schema was violated.
    pub kind: String,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(kind: &str, violations: Vec<Violation>) -> Self {
        ValidationError {
            kind: kind.to_owned(),
            violations,
        }
    }

    /// True when a violation names the given field.
    pub fn names_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Serialize to the `{field, reason}` list output format.
    pub fn to_json(&self) -> serde_json::Value {
        let violations: Vec<serde_json::Value> = self
            .violations
            .iter()
            .map(|v| {
                serde_json::json!({
                    "field": v.field,
                    "reason": v.reason,
                })
            })
            .collect();
        serde_json::json!({
            "kind": self.kind,
            "violations": violations,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} record:", self.kind)?;
        for v in &self.violations {
            write!(f, " [{}: {}]", v.field, v.reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_violation() {
        let err = ValidationError::new(
            "order_created",
            vec![
                Violation::new("payer_id", "mandatory field is missing or blank"),
                Violation::new("order_total", "monetary amount is missing its currency code"),
            ],
        );
        assert!(err.names_field("payer_id"));
        assert!(err.names_field("order_total"));
        assert!(!err.names_field("receiver_id"));
        let shown = err.to_string();
        assert!(shown.contains("payer_id"));
        assert!(shown.contains("order_total"));
    }

    #[test]
    fn validation_error_json_shape() {
        let err = ValidationError::new(
            "order_created",
            vec![Violation::new("payer_id", "missing")],
        );
        let json = err.to_json();
        assert_eq!(json["kind"], "order_created");
        assert_eq!(json["violations"][0]["field"], "payer_id");
        assert_eq!(json["violations"][0]["reason"], "missing");
    }
}
