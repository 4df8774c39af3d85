//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Rounding is HALF_UP (midpoint away from zero).

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::NumericError;

/// Limit or execution price. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn try_new(value: Decimal) -> Result<Self, NumericError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(NumericError::NegativePrice(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Absolute distance between two prices.
    pub fn abs_diff(&self, other: &Price) -> Decimal {
        (self.0 - other.0).abs()
    }
}

impl FromStr for Price {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s).map_err(|e| NumericError::Parse(e.to_string()))?;
        Self::try_new(value)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = NumericError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Traded or resting volume. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Quantity(Decimal);

impl Quantity {
    pub fn try_new(value: Decimal) -> Result<Self, NumericError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(NumericError::NegativeQuantity(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Sum of two quantities, or `Overflow` past the decimal range.
    pub fn checked_add(self, other: Quantity) -> Result<Quantity, NumericError> {
        self.0
            .checked_add(other.0)
            .map(Quantity)
            .ok_or_else(|| NumericError::Overflow(format!("{} + {}", self.0, other.0)))
    }
}

impl FromStr for Quantity {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s).map_err(|e| NumericError::Parse(e.to_string()))?;
        Self::try_new(value)
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = NumericError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Quantity> for Decimal {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Volume-weighted average price: `Σ(price·volume) / Σ(volume)`.
///
/// Returns `Ok(None)` for empty or mismatched inputs and when the total
/// volume is zero. Sums that leave the decimal range are an `Overflow`.
pub fn vwap(prices: &[Price], volumes: &[Quantity]) -> Result<Option<Decimal>, NumericError> {
    if prices.is_empty() || prices.len() != volumes.len() {
        return Ok(None);
    }

    let mut notional = Decimal::ZERO;
    let mut total_volume = Quantity::zero();
    for (price, volume) in prices.iter().zip(volumes) {
        let value = price
            .as_decimal()
            .checked_mul(volume.as_decimal())
            .ok_or_else(|| NumericError::Overflow(format!("{price} * {volume}")))?;
        notional = notional
            .checked_add(value)
            .ok_or_else(|| NumericError::Overflow(format!("{notional} + {value}")))?;
        total_volume = total_volume.checked_add(*volume)?;
    }

    if total_volume.is_zero() {
        return Ok(None);
    }
    notional
        .checked_div(total_volume.as_decimal())
        .map(Some)
        .ok_or_else(|| NumericError::Overflow(format!("{notional} / {total_volume}")))
}

/// Round to `dp` decimal places, midpoint away from zero.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
