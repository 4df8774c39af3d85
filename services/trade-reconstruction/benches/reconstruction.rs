use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lob_types::event::{BookSide, Event};
use lob_types::ids::{EventId, OrderId};
use lob_types::numeric::{Price, Quantity};
use trade_reconstruction::event_table::EventTable;
use trade_reconstruction::impacts::ImpactAggregator;
use trade_reconstruction::matcher::TradeMatcher;
use trade_reconstruction::{reconstruct, ReconstructionConfig};

const T: i64 = 1708123456789000000;

/// One trading session: `pairs` matched pairs plus as many unmatched events.
/// Every fifth taker order sweeps two levels; every 97th pair jumps in price.
fn setup_events(pairs: u64) -> Vec<Event> {
    let mut events = Vec::with_capacity((pairs * 3) as usize);
    for k in 0..pairs {
        let bid_id = 2 * k + 1;
        let ask_id = bid_id + 1;
        let ts = T + (k as i64) * 1_000;
        let price = if k % 97 == 0 { 130 } else { 100 + k % 3 };
        let taker_order = if k % 5 == 1 { 2 * k - 1 } else { 2 * k + 1 };

        events.push(Event {
            event_id: EventId::new(bid_id),
            order_id: OrderId::new(2 * k),
            direction: BookSide::Bid,
            price: Price::from_u64(price),
            fill_volume: Quantity::from_u64(1 + k % 4),
            local_timestamp: ts,
            exchange_timestamp: ts,
            matching_event: Some(EventId::new(ask_id)),
        });
        events.push(Event {
            event_id: EventId::new(ask_id),
            order_id: OrderId::new(taker_order),
            direction: BookSide::Ask,
            price: Price::from_u64(price - 1),
            fill_volume: Quantity::from_u64(1 + k % 4),
            local_timestamp: ts + 10,
            exchange_timestamp: ts + 10,
            matching_event: Some(EventId::new(bid_id)),
        });
    }
    for n in 0..pairs {
        events.push(Event {
            event_id: EventId::new(2 * pairs + n + 1),
            order_id: OrderId::new(10 * pairs + n),
            direction: BookSide::Bid,
            price: Price::from_u64(95),
            fill_volume: Quantity::zero(),
            local_timestamp: T + (n as i64) * 1_000 + 500,
            exchange_timestamp: T + (n as i64) * 1_000 + 500,
            matching_event: None,
        });
    }
    events
}

fn bench_reconstruction(c: &mut Criterion) {
    let events = setup_events(100_000);
    let config = ReconstructionConfig::default();

    c.bench_function("reconstruct 100k pairs", |b| {
        b.iter_batched(
            || events.clone(),
            |events| reconstruct(black_box(events), &config),
            BatchSize::LargeInput,
        )
    });

    let table = match EventTable::new(events) {
        Ok(table) => table,
        Err(e) => panic!("bench setup: {e}"),
    };
    let matcher = TradeMatcher::new(config.clone());
    c.bench_function("match trades 100k pairs", |b| {
        b.iter(|| matcher.run(black_box(&table)))
    });

    let trades = match matcher.run(&table) {
        Ok(outcome) => outcome.trades,
        Err(e) => panic!("bench setup: {e}"),
    };
    let aggregator = ImpactAggregator::new(config.vwap_decimal_places);
    c.bench_function("aggregate impacts 100k trades", |b| {
        b.iter(|| aggregator.aggregate(black_box(&trades)))
    });
}

criterion_group!(benches, bench_reconstruction);
criterion_main!(benches);
