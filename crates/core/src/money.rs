//! Exact minor-unit monetary values.
//!
//! All monetary text is parsed through `rust_decimal::Decimal` -- never
//! `f64` -- and stored as an integer count of minor units (cents for USD)
//! plus an ISO 4217 currency code.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoercionError;

/// An exact monetary value: integer minor units plus an ISO 4217 code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    amount: i64,
    currency: String,
}

impl Money {
    pub fn new(amount: i64, currency: &str) -> Self {
        Money {
            amount,
            currency: currency.to_owned(),
        }
    }

    /// Amount in minor units of `currency`.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Add two amounts of the same currency.
    ///
    /// Mixed-currency arithmetic is a caller bug, reported as a value
    /// rather than silently coerced.
    pub fn checked_add(&self, other: &Money) -> Result<Money, CurrencyMismatch> {
        if self.currency != other.currency {
            return Err(CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(Money {
            amount: self.amount + other.amount,
            currency: self.currency.clone(),
        })
    }

    /// Compare two amounts of the same currency.
    pub fn checked_cmp(&self, other: &Money) -> Result<std::cmp::Ordering, CurrencyMismatch> {
        if self.currency != other.currency {
            return Err(CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Two `Money` values of different currencies were combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyMismatch {
    pub left: String,
    pub right: String,
}

impl fmt::Display for CurrencyMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "currency mismatch: {} vs {}", self.left, self.right)
    }
}

impl std::error::Error for CurrencyMismatch {}

/// Minor-unit exponent for an ISO 4217 currency code.
///
/// 2 for the major fiat currencies; the zero-decimal and mill currencies
/// the provider supports are listed explicitly.
fn currency_exponent(code: &str) -> u32 {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        "BHD" | "KWD" | "OMR" | "TND" => 3,
        _ => 2,
    }
}

/// Combine a numeric text amount and a currency code into a `Money`.
///
/// The amount is parsed as a fixed-point decimal and scaled into minor
/// units by the currency's exponent, rounding half-even at the minor-unit
/// boundary. Fails when the text is not numeric or the currency is blank.
pub fn to_money(amount_text: &str, currency_code: &str) -> Result<Money, CoercionError> {
    let code = currency_code.trim();
    if code.is_empty() {
        return Err(CoercionError::MissingCurrency);
    }

    let amount = amount_text
        .trim()
        .parse::<Decimal>()
        .map_err(|_| CoercionError::BadAmount {
            text: amount_text.to_owned(),
        })?;

    let scale = Decimal::from(10i64.pow(currency_exponent(code)));
    let minor = amount
        .checked_mul(scale)
        .ok_or_else(|| CoercionError::AmountOverflow {
            text: amount_text.to_owned(),
        })?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .ok_or_else(|| CoercionError::AmountOverflow {
            text: amount_text.to_owned(),
        })?;

    Ok(Money::new(minor, code))
}
