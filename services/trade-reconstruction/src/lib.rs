//! Trade Reconstruction Service
//!
//! Consumes limit-order-book events already annotated with their matching
//! opposite-side event and produces:
//! - Canonical trade records with maker/taker roles, price and direction
//! - A heuristic repair of maker/taker misclassification
//! - One impact summary per market (taker) order
//!
//! Every stage is a deterministic batch transform with no state across
//! calls.
//!
//! # Architecture
//!
//! ```text
//!  Annotated events
//!        │
//!  ┌─────▼──────┐
//!  │ EventTable │  ← keyed lookups, matched partitions
//!  └─────┬──────┘
//!  ┌─────▼──────┐
//!  │  Pairing   │  ← positional alignment + bijection check
//!  └─────┬──────┘
//!  ┌─────▼──────┐
//!  │  Matcher   │  ← maker resolution, trade fields, ordering
//!  └─────┬──────┘
//!  ┌─────▼──────┐
//!  │ Correction │  ← price-jump maker/taker repair
//!  └─────┬──────┘
//!  ┌─────▼──────┐
//!  │  Impacts   │  ← per taker order summaries
//!  └────────────┘
//! ```

pub mod checksum;
pub mod config;
pub mod correction;
pub mod diagnostics;
pub mod event_table;
pub mod impacts;
pub mod matcher;
pub mod pairing;
pub mod pipeline;

pub use config::ReconstructionConfig;
pub use pipeline::{reconstruct, reconstruct_table, PipelineError, Reconstruction};

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
