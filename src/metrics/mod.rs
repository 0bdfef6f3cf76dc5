//! Sampler metrics (feature `metrics`).
//!
//! Samplers record into [`metrics_impl::SamplerMetrics`]; consumers read a
//! [`snapshot::SamplerMetricsSnapshot`] and may publish it through
//! [`exporter::PrometheusTextExporter`].

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
