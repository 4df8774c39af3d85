//! Run diagnostics
//!
//! Non-fatal findings of a reconstruction run are returned to the caller
//! as data instead of going to a global warning stream. Consumers decide
//! how to surface them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lob_types::ids::{EventId, RunId};
use lob_types::numeric::Price;

/// One maker/taker swap performed by the anomaly-correction pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRecord {
    /// Index in the timestamp-ordered trade table
    pub position: usize,
    /// Price of the (possibly corrected) predecessor at the time of the check
    pub previous_price: Price,
    pub original_price: Price,
    pub corrected_price: Price,
    /// Absolute jump that triggered the swap
    pub jump: Decimal,
    pub original_maker_event_id: EventId,
    pub original_taker_event_id: EventId,
}

/// Summary of a full reconstruction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructionReport {
    pub run_id: RunId,
    /// UTC date of the first trade, if any trade was produced
    pub trading_date: Option<NaiveDate>,
    pub events: usize,
    pub matched_events: usize,
    pub unmatched_events: usize,
    pub trades: usize,
    /// Positions whose price jump exceeded the threshold before correction
    pub flagged: Vec<usize>,
    pub corrections: Vec<CorrectionRecord>,
    pub impacts: usize,
}

impl ReconstructionReport {
    pub fn correction_count(&self) -> usize {
        self.corrections.len()
    }

    pub fn has_corrections(&self) -> bool {
        !self.corrections.is_empty()
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        let date = self
            .trading_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "run {} ({}): {} events, {} trades, {} impacts, {} of {} flagged trades corrected",
            self.run_id,
            date,
            self.events,
            self.trades,
            self.impacts,
            self.corrections.len(),
            self.flagged.len(),
        )
    }
}
