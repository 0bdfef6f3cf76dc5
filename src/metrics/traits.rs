//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* into small traits so
//! sampling logic never depends on a monitoring backend.
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │   SamplerMetricsRecorder     │   written by samplers on every call
//!   │  call/draw/rejection/        │
//!   │  fallback/eviction/clear     │
//!   └──────────────┬───────────────┘
//!                  │
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters for history-aware sampling.
pub trait SamplerMetricsRecorder {
    /// One `next_value` call started.
    fn record_call(&mut self);
    /// One value drawn from the underlying source.
    fn record_draw(&mut self);
    /// A drawn candidate was found in the history window and rejected.
    fn record_rejection(&mut self);
    /// The retry budget ran out and the last candidate was accepted anyway.
    fn record_fallback(&mut self);
    /// A value was evicted from the history window.
    fn record_eviction(&mut self);
    /// The history window was cleared.
    fn record_clear(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
