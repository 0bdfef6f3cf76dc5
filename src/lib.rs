//! samplekit: history-aware pseudo-random index selection.
//!
//! [`HistorySampler`](policy::history::HistorySampler) produces values in
//! `[0, bound)` while disfavoring the last few values it returned, using
//! bounded rejection sampling over a sliding window. The typical consumer is a
//! game picking its next piece; anything wanting "shuffled but not memoryless"
//! selection fits.
//!
//! ```
//! use samplekit::prelude::*;
//!
//! let mut next_piece = SamplerBuilder::new(7).seed(1).try_build_history()?;
//! let piece = next_piece.next_value();
//! assert!(piece < 7);
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Features
//!
//! - `metrics`: draw/rejection/fallback counters and a Prometheus text exporter
//! - `concurrency`: `ConcurrentHistorySampler`, a locked wrapper for sharing
//! - `tracing`: structured events through the `tracing` crate

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;
pub mod source;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
