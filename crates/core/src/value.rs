//! Coerced field values held by typed records.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::money::Money;

/// A validated, coerced field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i64),
    Bool(bool),
    Timestamp(OffsetDateTime),
    Money(Money),
    Enum(String),
}

impl Value {
    /// Returns a human-readable type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "Text",
            Value::Int(_) => "Int",
            Value::Bool(_) => "Bool",
            Value::Timestamp(_) => "Timestamp",
            Value::Money(_) => "Money",
            Value::Enum(_) => "Enum",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Enum(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<OffsetDateTime> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_money(&self) -> Option<&Money> {
        match self {
            Value::Money(m) => Some(m),
            _ => None,
        }
    }

    /// True when the value is blank in the mandatory-presence sense:
    /// empty or whitespace-only text. Non-text values are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Text(s) | Value::Enum(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Convert to JSON for output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Text(s) => serde_json::json!(s),
            Value::Int(i) => serde_json::json!(i),
            Value::Bool(b) => serde_json::json!(b),
            Value::Timestamp(t) => match t.format(&Rfc3339) {
                Ok(formatted) => serde_json::json!(formatted),
                Err(_) => serde_json::Value::Null,
            },
            Value::Money(m) => serde_json::json!({
                "amount": m.amount(),
                "currency": m.currency(),
            }),
            Value::Enum(s) => serde_json::json!(s),
        }
    }
}
