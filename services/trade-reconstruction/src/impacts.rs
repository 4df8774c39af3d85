//! Impact aggregation
//!
//! Groups fills by taker order: one market (or marketable limit) order can
//! walk through several resting makers and leave several trades behind.
//! Each group is summarized into a single `Impact`.

use std::collections::BTreeMap;

use tracing::debug;

use lob_types::errors::ReconstructionError;
use lob_types::ids::OrderId;
use lob_types::impact::Impact;
use lob_types::numeric::{round_half_up, vwap, Price, Quantity};
use lob_types::trade::Trade;

/// Summarizes trades into one impact per taker order.
#[derive(Debug, Clone)]
pub struct ImpactAggregator {
    vwap_decimal_places: u32,
}

impl ImpactAggregator {
    pub fn new(vwap_decimal_places: u32) -> Self {
        Self {
            vwap_decimal_places,
        }
    }

    /// One impact per distinct `taker_order_id`, ascending by that id.
    ///
    /// Volume or notional sums past the decimal range fail with
    /// `ReconstructionError::Numeric`.
    pub fn aggregate(&self, trades: &[Trade]) -> Result<Vec<Impact>, ReconstructionError> {
        // BTreeMap keeps group order deterministic.
        let mut groups: BTreeMap<OrderId, Vec<&Trade>> = BTreeMap::new();
        for trade in trades {
            groups.entry(trade.taker_order_id).or_default().push(trade);
        }

        let mut impacts = Vec::with_capacity(groups.len());
        for (order_id, fills) in groups {
            if let Some(impact) = self.summarize(order_id, &fills)? {
                impacts.push(impact);
            }
        }

        debug!(
            trades = trades.len(),
            impacts = impacts.len(),
            "Impacts aggregated"
        );
        Ok(impacts)
    }

    fn summarize(
        &self,
        order_id: OrderId,
        fills: &[&Trade],
    ) -> Result<Option<Impact>, ReconstructionError> {
        let Some(first) = fills.first() else {
            return Ok(None);
        };

        let mut min_price = first.price;
        let mut max_price = first.price;
        let mut start_time = first.timestamp;
        let mut end_time = first.timestamp;
        let mut last = *first;
        let mut volume = Quantity::zero();
        let mut prices: Vec<Price> = Vec::with_capacity(fills.len());
        let mut volumes: Vec<Quantity> = Vec::with_capacity(fills.len());

        for &fill in fills {
            min_price = min_price.min(fill.price);
            max_price = max_price.max(fill.price);
            start_time = start_time.min(fill.timestamp);
            // Ties go to the later fill in trade-table order.
            if fill.timestamp >= last.timestamp {
                last = fill;
            }
            end_time = end_time.max(fill.timestamp);
            volume = volume.checked_add(fill.volume)?;
            prices.push(fill.price);
            volumes.push(fill.volume);
        }

        // All-zero volume has no weighting; fall back to the best price.
        let raw_vwap = vwap(&prices, &volumes)?.unwrap_or_else(|| min_price.as_decimal());

        Ok(Some(Impact {
            order_id,
            min_price,
            max_price,
            vwap: round_half_up(raw_vwap, self.vwap_decimal_places),
            hits: fills.len() as u64,
            volume,
            start_time,
            end_time,
            direction: last.direction,
        }))
    }
}

impl Default for ImpactAggregator {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Order impacts chronologically by first fill (stable).
pub fn sort_by_start_time(impacts: &mut [Impact]) {
    impacts.sort_by_key(|impact| impact.start_time);
}
