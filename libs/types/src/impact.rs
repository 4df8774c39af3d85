//! Market-order impact summaries
//!
//! An impact collects every fill produced by one taker order as it walks
//! through one or more resting maker orders.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use crate::trade::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary of all fills generated by a single taker order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impact {
    /// Taker order shared by every fill in the group
    pub order_id: OrderId,
    pub min_price: Price,
    pub max_price: Price,
    /// Volume-weighted average price, rounded half-up to the configured
    /// decimal places. Fill prices are kept unrounded, so `vwap` can differ
    /// from `min_price` even for a single fill (100.125 gives 100.13 at two
    /// places).
    pub vwap: Decimal,
    /// Number of fills
    pub hits: u64,
    pub volume: Quantity,
    /// Unix nanos of the first fill
    pub start_time: i64,
    /// Unix nanos of the last fill
    pub end_time: i64,
    /// Direction of the chronologically last fill
    pub direction: Side,
}
