//! Error types for trade reconstruction
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

use crate::ids::EventId;

/// Top-level reconstruction error
///
/// Every variant is fatal for the batch: the input table violates an
/// invariant the pairing relies on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconstructionError {
    #[error("matched side counts differ: {bids} bids, {asks} asks")]
    PairCountMismatch { bids: usize, asks: usize },

    #[error(
        "pairing broken at position {position}: bid event {bid_event_id} vs ask matching_event {ask_matching_event}"
    )]
    PairingMismatch {
        position: usize,
        bid_event_id: EventId,
        ask_matching_event: EventId,
    },

    #[error(
        "asymmetric match at position {position}: bid event {bid_event_id} points at {bid_matching_event}, paired ask is {ask_event_id}"
    )]
    AsymmetricMatch {
        position: usize,
        bid_event_id: EventId,
        bid_matching_event: EventId,
        ask_event_id: EventId,
    },

    #[error(
        "fill volume mismatch between bid event {bid_event_id} ({bid_volume}) and ask event {ask_event_id} ({ask_volume})"
    )]
    VolumeMismatch {
        bid_event_id: EventId,
        ask_event_id: EventId,
        bid_volume: String,
        ask_volume: String,
    },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: EventId },

    #[error("Duplicate event id: {event_id}")]
    DuplicateEventId { event_id: EventId },

    #[error("Numeric error: {0}")]
    Numeric(#[from] NumericError),
}

/// Price/quantity construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("Invalid price: negative value {0}")]
    NegativePrice(String),

    #[error("Invalid quantity: negative value {0}")]
    NegativeQuantity(String),

    #[error("Invalid decimal: {0}")]
    Parse(String),

    #[error("Decimal overflow: {0}")]
    Overflow(String),
}
