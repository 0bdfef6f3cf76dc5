//! Memoryless uniform sampler.
//!
//! Every call is an independent draw from `[0, bound)`, so immediate repeats
//! happen with probability `1 / bound`. Used as the baseline that
//! [`HistorySampler`](crate::policy::history::HistorySampler) is measured
//! against, and as the choice when repeats are acceptable.
//!
//! ## Example Usage
//!
//! ```
//! use samplekit::policy::uniform::UniformSampler;
//!
//! let mut dice = UniformSampler::with_seed(6, 3)?;
//! let roll = dice.next_value() + 1;
//! assert!((1..=6).contains(&roll));
//! # Ok::<(), samplekit::error::ConfigError>(())
//! ```

use crate::error::ConfigError;
use crate::policy::check_bound;
use crate::source::{RngSource, UniformSource};
use crate::traits::IndexSampler;

/// Plain uniform sampler over `[0, bound)` owning its random source.
#[derive(Debug, Clone)]
pub struct UniformSampler<S = RngSource> {
    source: S,
    bound: usize,
}

impl UniformSampler<RngSource> {
    /// Creates a sampler seeded from operating-system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `bound` is 0.
    pub fn new(bound: usize) -> Result<Self, ConfigError> {
        Self::with_source(bound, RngSource::from_os_rng())
    }

    /// Creates a deterministic sampler.
    pub fn with_seed(bound: usize, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(bound, RngSource::seed_from_u64(seed))
    }
}

impl<S: UniformSource> UniformSampler<S> {
    /// Creates a sampler drawing from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `bound` is 0.
    pub fn with_source(bound: usize, source: S) -> Result<Self, ConfigError> {
        check_bound(bound)?;
        Ok(Self { source, bound })
    }

    /// Draws the next value in `[0, bound)`.
    #[inline]
    pub fn next_value(&mut self) -> usize {
        self.source.next_below(self.bound)
    }
}

impl<S> UniformSampler<S> {
    /// Exclusive upper limit of produced values.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Consumes the sampler, returning its random source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: UniformSource> IndexSampler for UniformSampler<S> {
    #[inline]
    fn next_index(&mut self) -> usize {
        self.next_value()
    }

    #[inline]
    fn bound(&self) -> usize {
        self.bound
    }
}
