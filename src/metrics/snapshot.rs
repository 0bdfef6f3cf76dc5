/// Point-in-time view of a sampler's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SamplerMetricsSnapshot {
    pub calls: u64,
    pub draws: u64,
    pub rejections: u64,
    pub fallbacks: u64, // calls that accepted a value still in history
    pub evictions: u64,
    pub clears: u64,

    // gauges captured at snapshot time
    pub history_len: usize,
    pub history_capacity: usize,
    pub bound: usize,
}

impl SamplerMetricsSnapshot {
    /// Mean source draws per call; 0.0 before the first call.
    pub fn draws_per_call(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.draws as f64 / self.calls as f64
        }
    }

    /// Fraction of calls that ended on the fallback path.
    pub fn fallback_rate(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.fallbacks as f64 / self.calls as f64
        }
    }
}
