//! Output fingerprints
//!
//! SHA-256 over a canonical text rendering of the trade and impact tables.
//! Two runs over the same events must produce identical fingerprints.

use sha2::{Digest, Sha256};

use lob_types::impact::Impact;
use lob_types::trade::{Side, Trade};

fn side_tag(side: Side) -> &'static [u8] {
    match side {
        Side::Buy => b"B",
        Side::Sell => b"S",
    }
}

/// Fingerprint of a trade table, order-sensitive.
pub fn trades_checksum(trades: &[Trade]) -> String {
    let mut hasher = Sha256::new();

    for trade in trades {
        hasher.update(trade.timestamp.to_string().as_bytes());
        hasher.update(b":");
        // normalize() so 100 and 100.00 hash alike
        hasher.update(trade.price.as_decimal().normalize().to_string().as_bytes());
        hasher.update(b":");
        hasher.update(trade.volume.as_decimal().normalize().to_string().as_bytes());
        hasher.update(b":");
        hasher.update(side_tag(trade.direction));
        hasher.update(b":");
        hasher.update(trade.maker_event_id.to_string().as_bytes());
        hasher.update(b">");
        hasher.update(trade.taker_event_id.to_string().as_bytes());
        hasher.update(b":");
        hasher.update(trade.maker_order_id.to_string().as_bytes());
        hasher.update(b">");
        hasher.update(trade.taker_order_id.to_string().as_bytes());
        hasher.update(b"|");
    }

    format!("{:x}", hasher.finalize())
}

/// Fingerprint of an impact table, order-sensitive.
pub fn impacts_checksum(impacts: &[Impact]) -> String {
    let mut hasher = Sha256::new();

    for impact in impacts {
        hasher.update(impact.order_id.to_string().as_bytes());
        hasher.update(b":");
        hasher.update(impact.min_price.as_decimal().normalize().to_string().as_bytes());
        hasher.update(b"-");
        hasher.update(impact.max_price.as_decimal().normalize().to_string().as_bytes());
        hasher.update(b":");
        hasher.update(impact.vwap.normalize().to_string().as_bytes());
        hasher.update(b":");
        hasher.update(impact.hits.to_string().as_bytes());
        hasher.update(b":");
        hasher.update(impact.volume.as_decimal().normalize().to_string().as_bytes());
        hasher.update(b":");
        hasher.update(impact.start_time.to_string().as_bytes());
        hasher.update(b"-");
        hasher.update(impact.end_time.to_string().as_bytes());
        hasher.update(b":");
        hasher.update(side_tag(impact.direction));
        hasher.update(b"|");
    }

    format!("{:x}", hasher.finalize())
}
