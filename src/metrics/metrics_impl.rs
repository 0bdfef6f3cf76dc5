use crate::metrics::traits::{MetricsReset, SamplerMetricsRecorder};

#[derive(Debug, Default, Clone)]
pub struct SamplerMetrics {
    pub calls: u64,
    pub draws: u64,
    pub rejections: u64,
    pub fallbacks: u64,
    pub evictions: u64,
    pub clears: u64,
}

impl SamplerMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SamplerMetricsRecorder for SamplerMetrics {
    fn record_call(&mut self) {
        self.calls += 1;
    }
    fn record_draw(&mut self) {
        self.draws += 1;
    }
    fn record_rejection(&mut self) {
        self.rejections += 1;
    }
    fn record_fallback(&mut self) {
        self.fallbacks += 1;
    }
    fn record_eviction(&mut self) {
        self.evictions += 1;
    }
    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl MetricsReset for SamplerMetrics {
    fn reset_metrics(&mut self) {
        *self = Self::default();
    }
}
