pub use crate::builder::{Sampler, SamplerBuilder, SamplerPolicy};
pub use crate::ds::RecentWindow;
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::SamplerMetricsSnapshot;
#[cfg(feature = "concurrency")]
pub use crate::policy::history::ConcurrentHistorySampler;
pub use crate::policy::history::{DEFAULT_HISTORY_CAPACITY, DEFAULT_RETRY_LIMIT, HistorySampler};
pub use crate::policy::uniform::UniformSampler;
pub use crate::source::{RngSource, ScriptedSource, UniformSource, XorShift64};
pub use crate::traits::IndexSampler;
