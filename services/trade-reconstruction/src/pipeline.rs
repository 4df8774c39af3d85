//! End-to-end reconstruction run
//!
//! EventTable → TradeMatcher (pairing, maker resolution, ordering,
//! anomaly correction) → ImpactAggregator. Deterministic: the same events
//! and config always produce the same trades and impacts.

use std::time::Instant;

use tracing::{debug, info};

use lob_types::errors::ReconstructionError;
use lob_types::event::Event;
use lob_types::ids::RunId;
use lob_types::impact::Impact;
use lob_types::timestamp::trading_date;
use lob_types::trade::Trade;

use crate::config::{ConfigError, ReconstructionConfig};
use crate::diagnostics::ReconstructionReport;
use crate::event_table::EventTable;
use crate::impacts::ImpactAggregator;
use crate::matcher::TradeMatcher;

/// Errors that abort a reconstruction run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reconstruction error: {0}")]
    Reconstruction(#[from] ReconstructionError),
}

/// Outputs of one run.
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// Ordered ascending by timestamp
    pub trades: Vec<Trade>,
    /// One per taker order, ascending by order id
    pub impacts: Vec<Impact>,
    pub report: ReconstructionReport,
}

/// Reconstruct trades and impacts from annotated events.
pub fn reconstruct(
    events: Vec<Event>,
    config: &ReconstructionConfig,
) -> Result<Reconstruction, PipelineError> {
    let table = EventTable::new(events)?;
    reconstruct_table(&table, config)
}

/// Same as [`reconstruct`] for an already indexed table.
pub fn reconstruct_table(
    table: &EventTable,
    config: &ReconstructionConfig,
) -> Result<Reconstruction, PipelineError> {
    config.validate()?;

    let start = Instant::now();
    let run_id = RunId::new();

    info!(
        %run_id,
        events = table.len(),
        threshold = %config.anomaly_threshold,
        correct_anomalies = config.correct_anomalies,
        "Starting trade reconstruction"
    );

    debug!(
        %run_id,
        unmatched = table.unmatched_count(),
        "Unmatched events excluded"
    );

    let outcome = TradeMatcher::new(config.clone()).run(table)?;
    let impacts = ImpactAggregator::new(config.vwap_decimal_places).aggregate(&outcome.trades)?;

    let report = ReconstructionReport {
        run_id,
        trading_date: outcome.trades.first().map(|t| trading_date(t.timestamp)),
        events: table.len(),
        matched_events: table.matched_count(),
        unmatched_events: table.unmatched_count(),
        trades: outcome.trades.len(),
        flagged: outcome.flagged,
        corrections: outcome.records,
        impacts: impacts.len(),
    };

    info!(
        %run_id,
        trades = report.trades,
        impacts = report.impacts,
        corrections = report.correction_count(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Trade reconstruction completed"
    );

    Ok(Reconstruction {
        trades: outcome.trades,
        impacts,
        report,
    })
}
