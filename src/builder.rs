//! Unified sampler builder.
//!
//! Rust has no default arguments, so the optional construction parameters of
//! a history sampler (window size, retry budget, seeded history, seed) are set
//! through [`SamplerBuilder`]. Anything left unset takes its documented
//! default.
//!
//! ## Example
//!
//! ```rust
//! use samplekit::builder::{SamplerBuilder, SamplerPolicy};
//!
//! let mut sampler = SamplerBuilder::new(7)
//!     .history_capacity(4)
//!     .retry_limit(6)
//!     .initial_history([0, 1])
//!     .seed(42)
//!     .try_build(SamplerPolicy::History)?;
//!
//! assert!(sampler.next_value() < 7);
//! # Ok::<(), samplekit::error::ConfigError>(())
//! ```

use crate::ds::RecentWindow;
use crate::error::ConfigError;
use crate::policy::history::{DEFAULT_HISTORY_CAPACITY, DEFAULT_RETRY_LIMIT, HistorySampler};
use crate::policy::uniform::UniformSampler;
use crate::source::{RngSource, UniformSource};
use crate::traits::IndexSampler;

/// Available selection policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerPolicy {
    /// Memoryless uniform sampling; history settings are ignored.
    Uniform,
    /// Rejection sampling against recent history.
    History,
}

/// Unified sampler wrapper that provides a consistent API regardless of policy.
#[derive(Debug, Clone)]
pub struct Sampler {
    inner: SamplerInner,
}

#[derive(Debug, Clone)]
enum SamplerInner {
    Uniform(UniformSampler),
    History(HistorySampler),
}

impl Sampler {
    /// Produces the next value in `[0, bound)`.
    pub fn next_value(&mut self) -> usize {
        match &mut self.inner {
            SamplerInner::Uniform(uniform) => uniform.next_value(),
            SamplerInner::History(history) => history.next_value(),
        }
    }

    /// Exclusive upper limit of produced values.
    pub fn bound(&self) -> usize {
        match &self.inner {
            SamplerInner::Uniform(uniform) => uniform.bound(),
            SamplerInner::History(history) => history.bound(),
        }
    }

    /// Policy this sampler was built with.
    pub fn policy(&self) -> SamplerPolicy {
        match &self.inner {
            SamplerInner::Uniform(_) => SamplerPolicy::Uniform,
            SamplerInner::History(_) => SamplerPolicy::History,
        }
    }

    /// Recent values for the history policy; `None` for uniform.
    pub fn history(&self) -> Option<&RecentWindow> {
        match &self.inner {
            SamplerInner::Uniform(_) => None,
            SamplerInner::History(history) => Some(history.history()),
        }
    }

    /// Forgets recent values; no-op for uniform.
    pub fn clear_history(&mut self) {
        if let SamplerInner::History(history) = &mut self.inner {
            history.clear_history();
        }
    }
}

impl IndexSampler for Sampler {
    fn next_index(&mut self) -> usize {
        self.next_value()
    }

    fn bound(&self) -> usize {
        Sampler::bound(self)
    }
}

/// Builder for creating sampler instances.
#[derive(Debug, Clone)]
pub struct SamplerBuilder {
    bound: usize,
    history_capacity: usize,
    retry_limit: usize,
    initial_history: Vec<usize>,
    seed: Option<u64>,
}

impl SamplerBuilder {
    /// Starts a builder for values in `[0, bound)`.
    ///
    /// `bound` is validated when building, not here.
    pub fn new(bound: usize) -> Self {
        Self {
            bound,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            retry_limit: DEFAULT_RETRY_LIMIT,
            initial_history: Vec::new(),
            seed: None,
        }
    }

    /// Number of recent values to avoid (default 4). Zero disables avoidance.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Draws per call before a recent value is accepted (default 4). Zero
    /// disables avoidance.
    pub fn retry_limit(mut self, retries: usize) -> Self {
        self.retry_limit = retries;
        self
    }

    /// Oldest-first values to pre-seed the history with.
    pub fn initial_history<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.initial_history = values.into_iter().collect();
        self
    }

    /// Seeds the generator for reproducible sequences. Without a seed the
    /// generator is seeded from operating-system entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn make_source(&self) -> RngSource {
        match self.seed {
            Some(seed) => RngSource::seed_from_u64(seed),
            None => RngSource::from_os_rng(),
        }
    }

    /// Builds a [`HistorySampler`] backed by the default generator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `bound` is 0 or a seeded history value is
    /// out of range.
    pub fn try_build_history(self) -> Result<HistorySampler, ConfigError> {
        let source = self.make_source();
        self.try_build_history_with_source(source)
    }

    /// Builds a [`HistorySampler`] drawing from `source`. Any configured seed
    /// is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use samplekit::builder::SamplerBuilder;
    /// use samplekit::source::XorShift64;
    ///
    /// let sampler = SamplerBuilder::new(7)
    ///     .history_capacity(2)
    ///     .try_build_history_with_source(XorShift64::new(9))?;
    /// assert_eq!(sampler.history_capacity(), 2);
    /// # Ok::<(), samplekit::error::ConfigError>(())
    /// ```
    pub fn try_build_history_with_source<S: UniformSource>(
        self,
        source: S,
    ) -> Result<HistorySampler<S>, ConfigError> {
        HistorySampler::with_source(
            self.bound,
            self.history_capacity,
            self.retry_limit,
            self.initial_history,
            source,
        )
    }

    /// Builds a sampler with the specified policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `bound` is 0, or for the history policy if a
    /// seeded history value is out of range.
    pub fn try_build(self, policy: SamplerPolicy) -> Result<Sampler, ConfigError> {
        let inner = match policy {
            SamplerPolicy::Uniform => {
                SamplerInner::Uniform(UniformSampler::with_source(self.bound, self.make_source())?)
            },
            SamplerPolicy::History => SamplerInner::History(self.try_build_history()?),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(?policy, "sampler built");

        Ok(Sampler { inner })
    }
}
