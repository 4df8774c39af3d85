//! Immutable, keyed event table
//!
//! Owns the annotated input events and indexes them by `event_id` so every
//! join the matcher needs (order id, recorded price) is an explicit lookup
//! with a defined not-found error.

use std::collections::HashMap;

use lob_types::errors::ReconstructionError;
use lob_types::event::Event;
use lob_types::ids::{EventId, OrderId};
use lob_types::numeric::Price;

#[derive(Debug, Clone)]
pub struct EventTable {
    events: Vec<Event>,
    index: HashMap<EventId, usize>,
}

impl EventTable {
    /// Build the table, rejecting repeated event ids.
    pub fn new(events: Vec<Event>) -> Result<Self, ReconstructionError> {
        let mut index = HashMap::with_capacity(events.len());
        for (position, event) in events.iter().enumerate() {
            if index.insert(event.event_id, position).is_some() {
                return Err(ReconstructionError::DuplicateEventId {
                    event_id: event.event_id,
                });
            }
        }
        Ok(Self { events, index })
    }

    pub fn get(&self, event_id: EventId) -> Result<&Event, ReconstructionError> {
        self.index
            .get(&event_id)
            .map(|&position| &self.events[position])
            .ok_or(ReconstructionError::EventNotFound { event_id })
    }

    pub fn order_id_of(&self, event_id: EventId) -> Result<OrderId, ReconstructionError> {
        self.get(event_id).map(|event| event.order_id)
    }

    /// Recorded limit price of an event.
    pub fn price_of(&self, event_id: EventId) -> Result<Price, ReconstructionError> {
        self.get(event_id).map(|event| event.price)
    }

    /// Matched bid events keyed by their `matching_event`, in table order.
    pub fn matched_bids(&self) -> Vec<(EventId, &Event)> {
        self.matched_where(Event::is_bid)
    }

    /// Matched ask events keyed by their `matching_event`, in table order.
    pub fn matched_asks(&self) -> Vec<(EventId, &Event)> {
        self.matched_where(Event::is_ask)
    }

    fn matched_where(&self, on_side: fn(&Event) -> bool) -> Vec<(EventId, &Event)> {
        self.events
            .iter()
            .filter(|e| on_side(e))
            .filter_map(|e| e.matching_event.map(|link| (link, e)))
            .collect()
    }

    pub fn matched_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_matched()).count()
    }

    /// Resting or cancelled events that never matched.
    pub fn unmatched_count(&self) -> usize {
        self.events.len() - self.matched_count()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
