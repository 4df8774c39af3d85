//! Timestamp helpers
//!
//! All timestamps in this workspace are Unix nanoseconds (`i64`), both the
//! local observation clock and the exchange clock.

use chrono::{DateTime, NaiveDate, Utc};

pub const NANOS_PER_MILLI: i64 = 1_000_000;

/// UTC calendar date of a Unix-nanos timestamp.
pub fn trading_date(timestamp_nanos: i64) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_nanos(timestamp_nanos).date_naive()
}
