//! Trade matcher
//!
//! Turns aligned bid/ask pairs into canonical trades:
//! - maker is the side with the strictly earlier exchange timestamp, and
//!   on a tie the side with the lower order id
//! - trades execute at the maker's price
//! - the trade timestamp is the earliest local observation of either side
//! - output is ordered by timestamp, then optionally anomaly-corrected

use std::cmp::Ordering;

use tracing::{debug, error};

use lob_types::errors::ReconstructionError;
use lob_types::event::{BookSide, Event};
use lob_types::trade::Trade;

use crate::config::ReconstructionConfig;
use crate::correction::{correct_anomalies, CorrectionOutcome};
use crate::event_table::EventTable;
use crate::pairing::{pair_matched_events, MatchedPair};

/// Decide which side of a matched pair was resting in the book.
pub fn resolve_maker(bid: &Event, ask: &Event) -> BookSide {
    match bid.exchange_timestamp.cmp(&ask.exchange_timestamp) {
        Ordering::Less => BookSide::Bid,
        Ordering::Greater => BookSide::Ask,
        Ordering::Equal => {
            if bid.order_id < ask.order_id {
                BookSide::Bid
            } else {
                BookSide::Ask
            }
        }
    }
}

/// Produces the trade table from an event table.
#[derive(Debug, Clone, Default)]
pub struct TradeMatcher {
    config: ReconstructionConfig,
}

impl TradeMatcher {
    pub fn new(config: ReconstructionConfig) -> Self {
        Self { config }
    }

    /// Pair, build and order trades without the correction pass.
    pub fn match_trades(&self, table: &EventTable) -> Result<Vec<Trade>, ReconstructionError> {
        let pairs = pair_matched_events(table)?;

        let mut trades = pairs
            .iter()
            .map(|pair| self.build_trade(pair, table))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable: equal timestamps keep pairing order (bid event id).
        trades.sort_by_key(|t| t.timestamp);

        debug!(trades = trades.len(), "Trades built and ordered");
        Ok(trades)
    }

    /// Full matcher run: build trades, then correct anomalies if enabled.
    pub fn run(&self, table: &EventTable) -> Result<CorrectionOutcome, ReconstructionError> {
        let trades = self.match_trades(table)?;
        if !self.config.correct_anomalies {
            return Ok(CorrectionOutcome::untouched(trades));
        }
        correct_anomalies(trades, table, self.config.anomaly_threshold)
    }

    fn build_trade(
        &self,
        pair: &MatchedPair<'_>,
        table: &EventTable,
    ) -> Result<Trade, ReconstructionError> {
        let MatchedPair { bid, ask } = *pair;

        if self.config.validate_volumes && bid.fill_volume != ask.fill_volume {
            error!(
                bid_event_id = %bid.event_id,
                ask_event_id = %ask.event_id,
                bid_volume = %bid.fill_volume,
                ask_volume = %ask.fill_volume,
                "Matched fill volumes differ"
            );
            return Err(ReconstructionError::VolumeMismatch {
                bid_event_id: bid.event_id,
                ask_event_id: ask.event_id,
                bid_volume: bid.fill_volume.to_string(),
                ask_volume: ask.fill_volume.to_string(),
            });
        }

        let (maker, taker) = match resolve_maker(bid, ask) {
            BookSide::Bid => (bid, ask),
            BookSide::Ask => (ask, bid),
        };

        Ok(Trade {
            timestamp: bid.local_timestamp.min(ask.local_timestamp),
            price: maker.price,
            volume: bid.fill_volume,
            direction: taker.direction.taker_side(),
            maker_event_id: maker.event_id,
            taker_event_id: taker.event_id,
            maker_order_id: table.order_id_of(maker.event_id)?,
            taker_order_id: table.order_id_of(taker.event_id)?,
        })
    }
}
