//! Positional pairing of matched bid and ask events
//!
//! Matched bids are sorted by their own `event_id` and matched asks by
//! the `matching_event` they point at. When the upstream matching is a
//! bijection, position `i` of both lists is the same matched pair. That
//! alignment is verified in both directions for every position; any break
//! is fatal.

use tracing::{debug, error};

use lob_types::errors::ReconstructionError;
use lob_types::event::Event;

use crate::event_table::EventTable;

/// One matched bid/ask pair, borrowed from the event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair<'a> {
    pub bid: &'a Event,
    pub ask: &'a Event,
}

/// Partition, sort and align matched events into pairs.
pub fn pair_matched_events(table: &EventTable) -> Result<Vec<MatchedPair<'_>>, ReconstructionError> {
    let mut bids = table.matched_bids();
    let mut asks = table.matched_asks();

    bids.sort_by_key(|(_, bid)| bid.event_id);
    asks.sort_by_key(|(link, _)| *link);

    if bids.len() != asks.len() {
        error!(
            bids = bids.len(),
            asks = asks.len(),
            "Matched side counts differ"
        );
        return Err(ReconstructionError::PairCountMismatch {
            bids: bids.len(),
            asks: asks.len(),
        });
    }

    let mut pairs = Vec::with_capacity(bids.len());
    for (position, ((bid_link, bid), (ask_link, ask))) in bids.into_iter().zip(asks).enumerate() {
        if bid.event_id != ask_link {
            error!(
                position,
                bid_event_id = %bid.event_id,
                ask_event_id = %ask.event_id,
                ask_matching_event = %ask_link,
                "Matched event pairing broken"
            );
            return Err(ReconstructionError::PairingMismatch {
                position,
                bid_event_id: bid.event_id,
                ask_matching_event: ask_link,
            });
        }
        if bid_link != ask.event_id {
            error!(
                position,
                bid_event_id = %bid.event_id,
                bid_matching_event = %bid_link,
                ask_event_id = %ask.event_id,
                "Bid does not point back at its paired ask"
            );
            return Err(ReconstructionError::AsymmetricMatch {
                position,
                bid_event_id: bid.event_id,
                bid_matching_event: bid_link,
                ask_event_id: ask.event_id,
            });
        }
        pairs.push(MatchedPair { bid, ask });
    }

    debug!(pairs = pairs.len(), "Matched events paired");
    Ok(pairs)
}
