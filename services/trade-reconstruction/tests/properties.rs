//! Property-based tests for trade reconstruction
//!
//! Random matched pairs (plus unmatched noise) are generated as events and
//! run through the full pipeline.

use std::collections::HashMap;

use lob_types::event::{BookSide, Event};
use lob_types::ids::{EventId, OrderId};
use lob_types::numeric::{Price, Quantity};
use proptest::prelude::*;
use trade_reconstruction::checksum::{impacts_checksum, trades_checksum};
use trade_reconstruction::matcher::resolve_maker;
use trade_reconstruction::{reconstruct, ReconstructionConfig};

const T: i64 = 1708123456789000000;

/// (bid local, ask local, bid exchange, ask exchange, bid order, ask order,
///  bid price, ask price, volume)
type PairSpec = (i64, i64, i64, i64, u64, u64, u64, u64, u64);

fn pair_spec() -> impl Strategy<Value = PairSpec> {
    (
        0i64..1_000,
        0i64..1_000,
        // Narrow exchange-clock range so ties are common.
        0i64..5,
        0i64..5,
        0u64..500,
        0u64..500,
        90u64..130,
        90u64..130,
        0u64..10,
    )
}

/// Matched pairs become events 2k+1 (bid) and 2k+2 (ask); unmatched
/// events follow. Order ids are made distinct by parity.
fn build_events(specs: &[PairSpec], unmatched: usize) -> Vec<Event> {
    let mut events = Vec::with_capacity(specs.len() * 2 + unmatched);

    for (k, spec) in specs.iter().enumerate() {
        let (bid_local, ask_local, bid_ex, ask_ex, bid_order, ask_order, bid_px, ask_px, vol) =
            *spec;
        let bid_id = 2 * k as u64 + 1;
        let ask_id = bid_id + 1;

        events.push(Event {
            event_id: EventId::new(bid_id),
            order_id: OrderId::new(bid_order * 2),
            direction: BookSide::Bid,
            price: Price::from_u64(bid_px),
            fill_volume: Quantity::from_u64(vol),
            local_timestamp: T + bid_local,
            exchange_timestamp: T + bid_ex,
            matching_event: Some(EventId::new(ask_id)),
        });
        events.push(Event {
            event_id: EventId::new(ask_id),
            order_id: OrderId::new(ask_order * 2 + 1),
            direction: BookSide::Ask,
            price: Price::from_u64(ask_px),
            fill_volume: Quantity::from_u64(vol),
            local_timestamp: T + ask_local,
            exchange_timestamp: T + ask_ex,
            matching_event: Some(EventId::new(bid_id)),
        });
    }

    let base = 2 * specs.len() as u64;
    for n in 0..unmatched as u64 {
        events.push(Event {
            event_id: EventId::new(base + n + 1),
            order_id: OrderId::new(10_000 + n),
            direction: if n % 2 == 0 { BookSide::Bid } else { BookSide::Ask },
            price: Price::from_u64(100),
            fill_volume: Quantity::zero(),
            local_timestamp: T + n as i64,
            exchange_timestamp: T + n as i64,
            matching_event: None,
        });
    }

    events
}

fn scenario() -> impl Strategy<Value = (usize, Vec<Event>, Vec<Event>)> {
    (prop::collection::vec(pair_spec(), 0..40), 0usize..10).prop_flat_map(|(specs, unmatched)| {
        let events = build_events(&specs, unmatched);
        (Just(specs.len()), Just(events.clone()), Just(events).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn prop_one_trade_per_matched_pair((pairs, events, _) in scenario()) {
        let result = reconstruct(events, &ReconstructionConfig::default()).unwrap();
        prop_assert_eq!(result.trades.len(), pairs);
        prop_assert_eq!(result.report.matched_events, pairs * 2);
    }

    #[test]
    fn prop_timestamps_non_decreasing((_, events, _) in scenario()) {
        let result = reconstruct(events, &ReconstructionConfig::default()).unwrap();
        for window in result.trades.windows(2) {
            prop_assert!(window[0].timestamp <= window[1].timestamp);
        }
    }

    #[test]
    fn prop_one_side_each((_, events, _) in scenario()) {
        let sides: HashMap<EventId, BookSide> =
            events.iter().map(|e| (e.event_id, e.direction)).collect();
        let result = reconstruct(events, &ReconstructionConfig::default()).unwrap();

        for trade in &result.trades {
            let maker = sides[&trade.maker_event_id];
            let taker = sides[&trade.taker_event_id];
            prop_assert_eq!(maker.opposite(), taker);
            prop_assert_eq!(trade.direction, taker.taker_side());
        }
    }

    #[test]
    fn prop_hits_cover_all_trades((_, events, _) in scenario()) {
        let result = reconstruct(events, &ReconstructionConfig::default()).unwrap();
        let hits: u64 = result.impacts.iter().map(|i| i.hits).sum();
        prop_assert_eq!(hits as usize, result.trades.len());

        for impact in result.impacts.iter().filter(|i| i.hits == 1) {
            prop_assert_eq!(impact.min_price, impact.max_price);
            if !impact.volume.is_zero() {
                prop_assert_eq!(impact.vwap, impact.min_price.as_decimal());
            }
        }
    }

    #[test]
    fn prop_row_order_irrelevant((_, events, shuffled) in scenario()) {
        let config = ReconstructionConfig::default();
        let a = reconstruct(events, &config).unwrap();
        let b = reconstruct(shuffled, &config).unwrap();

        prop_assert_eq!(trades_checksum(&a.trades), trades_checksum(&b.trades));
        prop_assert_eq!(impacts_checksum(&a.impacts), impacts_checksum(&b.impacts));
        prop_assert_eq!(a.report.corrections, b.report.corrections);
    }

    #[test]
    fn prop_uncorrected_maker_follows_tie_break((_, events, _) in scenario()) {
        let by_id: HashMap<EventId, Event> =
            events.iter().map(|e| (e.event_id, e.clone())).collect();
        let config = ReconstructionConfig::default().without_correction();
        let result = reconstruct(events, &config).unwrap();

        for trade in &result.trades {
            let maker = &by_id[&trade.maker_event_id];
            let taker = &by_id[&trade.taker_event_id];
            let (bid, ask) = if maker.direction == BookSide::Bid {
                (maker, taker)
            } else {
                (taker, maker)
            };
            prop_assert_eq!(resolve_maker(bid, ask), maker.direction);
            prop_assert_eq!(trade.price, maker.price);
            if maker.exchange_timestamp == taker.exchange_timestamp {
                prop_assert!(maker.order_id < taker.order_id);
            } else {
                prop_assert!(maker.exchange_timestamp < taker.exchange_timestamp);
            }
        }
    }

    #[test]
    fn prop_corrections_only_on_flagged((_, events, _) in scenario()) {
        let result = reconstruct(events, &ReconstructionConfig::default()).unwrap();
        for record in &result.report.corrections {
            prop_assert!(result.report.flagged.contains(&record.position));
            prop_assert!(record.jump > rust_decimal::Decimal::from(10));
            prop_assert_eq!(result.trades[record.position].price, record.corrected_price);
        }
    }
}
