//! Schema-driven record building.
//!
//! An [`EntitySchema`] is an ordered list of [`FieldSpec`]s declared once
//! per record kind. [`EntitySchema::build`] validates and coerces a raw
//! string map into an immutable [`TypedRecord`], or fails with a
//! [`ValidationError`] naming every offending field. Records are never
//! partially constructed.

use std::collections::BTreeMap;

use crate::coerce::{to_bool, to_int, to_timestamp};
use crate::error::{ValidationError, Violation};
use crate::money::to_money;
use crate::value::Value;

/// Raw field map as supplied by the transport collaborator.
pub type RawParams = BTreeMap<String, String>;

/// Presence requirement for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Mandatory,
    Optional,
}

/// Semantic kind of a field, driving its coercion and constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int,
    Bool,
    /// Fixed-layout notification timestamp.
    Timestamp,
    /// Monetary value composed atomically from two companion raw inputs:
    /// a decimal amount text and a currency code. Never built from one
    /// without the other.
    Money {
        amount_from: &'static str,
        currency_from: &'static str,
    },
    /// Value restricted to a declared set. `nullable` allows the field
    /// to be absent entirely; it never admits out-of-set values.
    Enum {
        values: &'static [&'static str],
        nullable: bool,
    },
    /// Fixed tag value, assigned regardless of input.
    Const(&'static str),
}

/// Declaration of a single record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: &'static str,
    kind: FieldKind,
    presence: Presence,
    default: Option<Value>,
}

impl FieldSpec {
    fn new(name: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            name,
            kind,
            presence: Presence::Optional,
            default: None,
        }
    }

    pub fn text(name: &'static str) -> Self {
        FieldSpec::new(name, FieldKind::Text)
    }

    pub fn int(name: &'static str) -> Self {
        FieldSpec::new(name, FieldKind::Int)
    }

    pub fn boolean(name: &'static str) -> Self {
        FieldSpec::new(name, FieldKind::Bool)
    }

    pub fn timestamp(name: &'static str) -> Self {
        FieldSpec::new(name, FieldKind::Timestamp)
    }

    /// A money field composed from the named companion raw inputs.
    pub fn money(
        name: &'static str,
        amount_from: &'static str,
        currency_from: &'static str,
    ) -> Self {
        FieldSpec::new(
            name,
            FieldKind::Money {
                amount_from,
                currency_from,
            },
        )
    }

    pub fn enumeration(name: &'static str, values: &'static [&'static str]) -> Self {
        FieldSpec::new(
            name,
            FieldKind::Enum {
                values,
                nullable: false,
            },
        )
    }

    pub fn constant(name: &'static str, value: &'static str) -> Self {
        FieldSpec::new(name, FieldKind::Const(value))
    }

    pub fn mandatory(mut self) -> Self {
        self.presence = Presence::Mandatory;
        self
    }

    /// Allow an enum field to be absent entirely.
    pub fn nullable(mut self) -> Self {
        if let FieldKind::Enum { values, .. } = self.kind {
            self.kind = FieldKind::Enum {
                values,
                nullable: true,
            };
        }
        self
    }

    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// An immutable ordered field declaration for one record kind.
///
/// Schemas are declared once at process start and never mutated, so they
/// are safe for unsynchronized concurrent reads.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    kind: &'static str,
    fields: Vec<FieldSpec>,
}

impl EntitySchema {
    pub fn new(kind: &'static str, fields: Vec<FieldSpec>) -> Self {
        EntitySchema { kind, fields }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validate and coerce a raw field map into a typed record.
    ///
    /// Violations are collected across every field of the schema and
    /// returned together; a record is returned only when the violation
    /// set is empty.
    pub fn build(&self, raw: &RawParams) -> Result<TypedRecord, ValidationError> {
        let mut fields = BTreeMap::new();
        let mut violations = Vec::new();

        for field in &self.fields {
            let built = match &field.kind {
                FieldKind::Const(value) => {
                    // Constants always win, ignoring input entirely.
                    fields.insert(field.name.to_owned(), Value::Text((*value).to_owned()));
                    Ok(())
                }
                FieldKind::Money {
                    amount_from,
                    currency_from,
                } => build_money_field(field, amount_from, currency_from, raw, &mut fields),
                FieldKind::Text => build_plain_field(field, raw, &mut fields, |text| {
                    Ok(Value::Text(text.to_owned()))
                }),
                FieldKind::Int => build_plain_field(field, raw, &mut fields, |text| {
                    to_int(text).map(Value::Int).map_err(|e| e.to_string())
                }),
                FieldKind::Bool => build_plain_field(field, raw, &mut fields, |text| {
                    to_bool(text).map(Value::Bool).map_err(|e| e.to_string())
                }),
                FieldKind::Timestamp => build_plain_field(field, raw, &mut fields, |text| {
                    to_timestamp(text)
                        .map(Value::Timestamp)
                        .map_err(|e| e.to_string())
                }),
                FieldKind::Enum { values, .. } => build_plain_field(field, raw, &mut fields, |text| {
                    if values.contains(&text) {
                        Ok(Value::Enum(text.to_owned()))
                    } else {
                        Err(format!("value '{}' is not one of {:?}", text, values))
                    }
                }),
            };
            if let Err(violation) = built {
                violations.push(violation);
            }
        }

        if violations.is_empty() {
            Ok(TypedRecord {
                kind: self.kind,
                fields,
            })
        } else {
            Err(ValidationError::new(self.kind, violations))
        }
    }
}

/// Coerce a money field from its paired companion inputs.
///
/// Ok(()) covers both a successfully built value and a legitimately
/// absent optional one.
fn build_money_field(
    field: &FieldSpec,
    amount_from: &str,
    currency_from: &str,
    raw: &RawParams,
    fields: &mut BTreeMap<String, Value>,
) -> Result<(), Violation> {
    let amount = non_blank(raw, amount_from);
    let currency = non_blank(raw, currency_from);

    match (amount, currency) {
        (Some(amount), Some(currency)) => match to_money(amount, currency) {
            Ok(money) => {
                fields.insert(field.name.to_owned(), Value::Money(money));
                Ok(())
            }
            Err(err) => Err(Violation::new(field.name, err.to_string())),
        },
        (Some(_), None) => Err(Violation::new(
            field.name,
            format!("amount '{}' has no companion currency '{}'", amount_from, currency_from),
        )),
        (None, _) if field.presence == Presence::Mandatory => Err(Violation::new(
            field.name,
            format!("mandatory money field is missing amount input '{}'", amount_from),
        )),
        (None, _) => Ok(()),
    }
}

/// Coerce a non-money, non-constant field from its own raw input,
/// using the kind-specific `coerce` supplied by the dispatch.
fn build_plain_field(
    field: &FieldSpec,
    raw: &RawParams,
    fields: &mut BTreeMap<String, Value>,
    coerce: impl Fn(&str) -> Result<Value, String>,
) -> Result<(), Violation> {
    // An empty or whitespace-only input is treated exactly like an
    // absent one; "not provided" and "explicitly blank" are
    // indistinguishable to mandatory checks.
    let raw_value = non_blank(raw, field.name);

    let value = match raw_value {
        Some(text) => Some(coerce(text).map_err(|reason| Violation::new(field.name, reason))?),
        None => field.default.clone(),
    };

    match value {
        Some(value) if !value.is_blank() => {
            fields.insert(field.name.to_owned(), value);
            Ok(())
        }
        _ if field.presence == Presence::Mandatory => Err(Violation::new(
            field.name,
            "mandatory field is missing or blank",
        )),
        _ => Ok(()),
    }
}

fn non_blank<'a>(raw: &'a RawParams, key: &str) -> Option<&'a str> {
    raw.get(key).map(String::as_str).filter(|s| !s.trim().is_empty())
}

/// An immutable validated record, tagged with its kind.
///
/// Produced only by a successful [`EntitySchema::build`] call (or as a
/// bare kind tag for unclassified input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedRecord {
    kind: &'static str,
    fields: BTreeMap<String, Value>,
}

impl TypedRecord {
    /// A minimal record carrying only its kind tag. Used for input that
    /// classifies to no recognized semantics.
    pub fn tag_only(kind: &'static str) -> Self {
        TypedRecord {
            kind,
            fields: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    pub fn get_money(&self, field: &str) -> Option<&crate::money::Money> {
        self.fields.get(field).and_then(Value::as_money)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to JSON output format, including the kind discriminant.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("type".to_owned(), serde_json::json!(self.kind));
        for (name, value) in &self.fields {
            map.insert(name.clone(), value.to_json());
        }
        serde_json::Value::Object(map)
    }
}
