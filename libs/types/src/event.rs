//! Order-book event types
//!
//! An `Event` is one observed change in the book, already annotated with
//! the opposite-side event it matched against (if any). Events are input
//! to reconstruction and are never mutated.

use crate::ids::{EventId, OrderId};
use crate::numeric::{Price, Quantity};
use crate::trade::Side;
use serde::{Deserialize, Serialize};

/// Book side of the order behind an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookSide {
    /// Buy order resting on (or entering) the bid side
    Bid,
    /// Sell order resting on (or entering) the ask side
    Ask,
}

impl BookSide {
    pub fn opposite(&self) -> Self {
        match self {
            BookSide::Bid => BookSide::Ask,
            BookSide::Ask => BookSide::Bid,
        }
    }

    /// Aggressor side of a trade whose taker sits on this book side.
    pub fn taker_side(&self) -> Side {
        match self {
            BookSide::Bid => Side::Buy,
            BookSide::Ask => Side::Sell,
        }
    }
}

/// One observed order-book event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: EventId,
    pub order_id: OrderId,
    pub direction: BookSide,
    pub price: Price,
    /// Volume consumed by this event
    pub fill_volume: Quantity,
    /// Unix nanos, first observation by the local recorder
    pub local_timestamp: i64,
    /// Unix nanos, as reported by the exchange
    pub exchange_timestamp: i64,
    /// Opposite-side event this one was matched with
    pub matching_event: Option<EventId>,
}

impl Event {
    pub fn is_matched(&self) -> bool {
        self.matching_event.is_some()
    }

    pub fn is_bid(&self) -> bool {
        matches!(self.direction, BookSide::Bid)
    }

    pub fn is_ask(&self) -> bool {
        matches!(self.direction, BookSide::Ask)
    }
}
