//! Reconstructed trade types
//!
//! A `Trade` is one matched bid/ask pair with resolved maker and taker
//! roles. Trades execute at the maker's limit price.

use crate::ids::{EventId, OrderId};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Aggressor (taker) side of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buyer was the taker
    Buy,
    /// Seller was the taker
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// One executed fill between a resting maker and an incoming taker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Unix nanos, earliest local observation of either side
    pub timestamp: i64,
    /// Maker's limit price
    pub price: Price,
    pub volume: Quantity,
    /// Taker side
    pub direction: Side,

    pub maker_event_id: EventId,
    pub taker_event_id: EventId,
    pub maker_order_id: OrderId,
    pub taker_order_id: OrderId,
}

impl Trade {
    /// Same fill with maker and taker exchanged.
    ///
    /// `price` must be the recorded price of the former taker event, which
    /// becomes the maker.
    pub fn swap_roles(&self, price: Price) -> Self {
        Self {
            timestamp: self.timestamp,
            price,
            volume: self.volume,
            direction: self.direction.opposite(),
            maker_event_id: self.taker_event_id,
            taker_event_id: self.maker_event_id,
            maker_order_id: self.taker_order_id,
            taker_order_id: self.maker_order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trade() -> Trade {
        Trade {
            timestamp: 1708123456789000000,
            price: Price::from_u64(100),
            volume: "0.5".parse().unwrap(),
            direction: Side::Sell,
            maker_event_id: EventId::new(1),
            taker_event_id: EventId::new(2),
            maker_order_id: OrderId::new(10),
            taker_order_id: OrderId::new(11),
        }
    }

    #[test]
    fn test_swap_roles() {
        let trade = sample_trade();
        let swapped = trade.swap_roles(Price::from_u64(115));

        assert_eq!(swapped.price, Price::from_u64(115));
        assert_eq!(swapped.direction, Side::Buy);
        assert_eq!(swapped.maker_event_id, EventId::new(2));
        assert_eq!(swapped.taker_event_id, EventId::new(1));
        assert_eq!(swapped.maker_order_id, OrderId::new(11));
        assert_eq!(swapped.taker_order_id, OrderId::new(10));
        assert_eq!(swapped.timestamp, trade.timestamp);
        assert_eq!(swapped.volume, trade.volume);
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"sell\"");
    }
}
