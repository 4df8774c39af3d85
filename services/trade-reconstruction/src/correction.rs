//! Maker/taker anomaly correction
//!
//! Exchanges do not always resolve matches strictly in order-id sequence,
//! so the equal-timestamp tie-break occasionally picks the wrong maker.
//! The symptom is a price that jumps away from its predecessor by more
//! than a threshold. Flagged trades are re-checked left to right against
//! the current state of their predecessor; trades whose jump persists get
//! maker and taker swapped, taking the recorded price of the former taker.
//!
//! The re-check cascades: when trade `i-1` was itself corrected, trade `i`
//! is compared against the corrected price, which can cancel its flag.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use lob_types::errors::ReconstructionError;
use lob_types::timestamp::trading_date;
use lob_types::trade::Trade;

use crate::diagnostics::CorrectionRecord;
use crate::event_table::EventTable;

/// Result of the correction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionOutcome {
    /// Trades in the input order, with corrections applied
    pub trades: Vec<Trade>,
    /// Positions flagged on the uncorrected sequence
    pub flagged: Vec<usize>,
    /// `corrected[i]` is true when trade `i` was swapped
    pub corrected: Vec<bool>,
    pub records: Vec<CorrectionRecord>,
}

impl CorrectionOutcome {
    /// Outcome of a skipped pass: nothing flagged, nothing changed.
    pub fn untouched(trades: Vec<Trade>) -> Self {
        let corrected = vec![false; trades.len()];
        Self {
            trades,
            flagged: Vec::new(),
            corrected,
            records: Vec::new(),
        }
    }
}

/// Positions whose price differs from the predecessor by more than `threshold`.
pub fn flag_price_jumps(trades: &[Trade], threshold: Decimal) -> Vec<usize> {
    trades
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1].price.abs_diff(&pair[0].price) > threshold)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Run the correction pass over timestamp-ordered trades.
pub fn correct_anomalies(
    trades: Vec<Trade>,
    table: &EventTable,
    threshold: Decimal,
) -> Result<CorrectionOutcome, ReconstructionError> {
    let flagged = flag_price_jumps(&trades, threshold);
    if flagged.is_empty() {
        return Ok(CorrectionOutcome::untouched(trades));
    }

    debug!(flagged = flagged.len(), %threshold, "Price jumps flagged");

    let mut corrected = vec![false; trades.len()];
    let mut records = Vec::new();
    let mut output: Vec<Trade> = Vec::with_capacity(trades.len());
    let mut pending = flagged.iter().copied().peekable();

    for (position, trade) in trades.into_iter().enumerate() {
        if pending.next_if_eq(&position).is_none() {
            output.push(trade);
            continue;
        }

        // Flagged positions start at 1, so the predecessor is already in output.
        let previous_price = output[position - 1].price;
        let jump = trade.price.abs_diff(&previous_price);
        if jump <= threshold {
            output.push(trade);
            continue;
        }

        let corrected_price = table.price_of(trade.taker_event_id)?;
        records.push(CorrectionRecord {
            position,
            previous_price,
            original_price: trade.price,
            corrected_price,
            jump,
            original_maker_event_id: trade.maker_event_id,
            original_taker_event_id: trade.taker_event_id,
        });
        corrected[position] = true;
        output.push(trade.swap_roles(corrected_price));
    }

    if !records.is_empty() {
        let date = output
            .first()
            .map(|t| trading_date(t.timestamp).to_string())
            .unwrap_or_default();
        warn!(
            date = %date,
            corrections = records.len(),
            flagged = flagged.len(),
            "Corrected maker/taker misclassification"
        );
    }

    Ok(CorrectionOutcome {
        trades: output,
        flagged,
        corrected,
        records,
    })
}
