//! Types library for limit-order-book trade reconstruction
//!
//! This library provides the data model shared by every reconstruction
//! stage: the annotated input events, the trades derived from them, and
//! the per-order impact summaries.
//!
//! # Modules
//! - `ids`: Identifiers (EventId, OrderId, RunId)
//! - `numeric`: Fixed-point decimal types (Price, Quantity) and VWAP
//! - `timestamp`: Unix-nanos helpers
//! - `event`: Annotated order-book events
//! - `trade`: Reconstructed trades
//! - `impact`: Market-order impact summaries
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod timestamp;
pub mod event;
pub mod trade;
pub mod impact;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::timestamp::*;
    pub use crate::event::*;
    pub use crate::trade::*;
    pub use crate::impact::*;
    pub use crate::errors::*;
}
