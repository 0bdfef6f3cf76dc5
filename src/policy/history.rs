//! History-aware index sampler.
//!
//! Draws indices in `[0, bound)` while disfavoring values produced recently.
//! Each call runs bounded rejection sampling against a sliding window of the
//! last `history_capacity` results: a candidate already in the window is
//! redrawn, up to `retry_limit` draws, after which the last candidate is
//! accepted regardless. This is the classic arcade "history" piece
//! randomizer: shuffled-feeling, but not memoryless and not a bag.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                      HistorySampler<S> Layout                               │
//! │                                                                             │
//! │   source: S (UniformSource)        history: RecentWindow (oldest first)     │
//! │   bound, retry_limit               capacity fixed at construction           │
//! │                                                                             │
//! │   next_value()                                                              │
//! │   ────────────                                                              │
//! │                                                                             │
//! │   attempt = 0                                                               │
//! │   loop:                                                                     │
//! │     candidate = source.next_below(bound)                                    │
//! │     candidate ∉ history ─────────────────────────► accept                   │
//! │     attempt += 1                                                            │
//! │     attempt == retry_limit ──────────────────────► accept (fallback)        │
//! │                                                                             │
//! │   history.record(accepted)   evicts oldest while len > capacity             │
//! │                                                                             │
//! │   Example: bound=7, history=[0,1,2,3], draws 2, 2, 5                        │
//! │     2 ∈ history → retry                                                     │
//! │     2 ∈ history → retry                                                     │
//! │     5 ∉ history → accept, history = [1,2,3,5]                               │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degenerate Configurations
//!
//! | Configuration          | Behavior                                         |
//! |------------------------|--------------------------------------------------|
//! | `history_capacity = 0` | window always empty, plain uniform sampling      |
//! | `retry_limit = 0`      | one unconditional draw, plain uniform sampling   |
//! | `bound = 1`            | always 0; retries exhaust once history holds 0   |
//!
//! None of these are errors. Only `bound = 0` (an empty range) is rejected.
//!
//! ## Guarantees
//!
//! - Every returned value lies in `[0, bound)`.
//! - Each call draws at most `max(retry_limit, 1)` values from the source.
//! - History never exceeds `history_capacity`; eviction is strictly FIFO.
//! - Membership is by exact value anywhere in the window, not by position.
//!
//! ## Example Usage
//!
//! ```
//! use samplekit::policy::history::HistorySampler;
//!
//! // Seven tetromino shapes, default window of 4 and 4 retries
//! let mut pieces = HistorySampler::with_seed(7, 2024)?;
//!
//! for _ in 0..100 {
//!     let shape = pieces.next_value();
//!     assert!(shape < 7);
//! }
//! assert_eq!(pieces.history().len(), 4);
//! # Ok::<(), samplekit::error::ConfigError>(())
//! ```
//!
//! ## Thread Safety
//!
//! - [`HistorySampler`]: not synchronized; `&mut self` for every draw
//! - `ConcurrentHistorySampler`: one `parking_lot::Mutex` around a sampler
//!   (requires the `concurrency` feature)

use std::iter::FusedIterator;

#[cfg(feature = "concurrency")]
use parking_lot::Mutex;

use crate::ds::RecentWindow;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::SamplerMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::SamplerMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsReset, MetricsSnapshotProvider, SamplerMetricsRecorder};
use crate::policy::check_bound;
use crate::source::{RngSource, UniformSource};
use crate::traits::IndexSampler;

/// Window size used when none is given.
pub const DEFAULT_HISTORY_CAPACITY: usize = 4;

/// Retry budget used when none is given.
pub const DEFAULT_RETRY_LIMIT: usize = 4;

/// Rejection sampler that avoids values held in a recent-history window.
///
/// # Type Parameters
///
/// - `S`: the exclusively owned [`UniformSource`]; defaults to a
///   [`SmallRng`](rand::rngs::SmallRng)-backed [`RngSource`]
///
/// # Example
///
/// ```
/// use samplekit::policy::history::HistorySampler;
/// use samplekit::source::ScriptedSource;
///
/// // Source stubbed to draw 2 first, then 5
/// let mut sampler =
///     HistorySampler::with_source(7, 4, 4, [0, 1, 2, 3], ScriptedSource::new([2, 5]))?;
///
/// assert_eq!(sampler.next_value(), 5); // 2 was recent, redrawn
/// assert_eq!(sampler.history().to_vec(), vec![1, 2, 3, 5]);
/// # Ok::<(), samplekit::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HistorySampler<S = RngSource> {
    source: S,
    history: RecentWindow,
    bound: usize,
    retry_limit: usize,
    #[cfg(feature = "metrics")]
    metrics: SamplerMetrics,
}

impl HistorySampler<RngSource> {
    /// Creates a sampler over `[0, bound)` with the default window and retry
    /// budget, seeded from operating-system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `bound` is 0.
    pub fn new(bound: usize) -> Result<Self, ConfigError> {
        Self::with_source(
            bound,
            DEFAULT_HISTORY_CAPACITY,
            DEFAULT_RETRY_LIMIT,
            std::iter::empty(),
            RngSource::from_os_rng(),
        )
    }

    /// Like [`new`](Self::new) but deterministic: equal seeds give equal
    /// sequences.
    ///
    /// # Example
    ///
    /// ```
    /// use samplekit::policy::history::HistorySampler;
    ///
    /// let mut a = HistorySampler::with_seed(7, 99).unwrap();
    /// let mut b = HistorySampler::with_seed(7, 99).unwrap();
    /// let xs: Vec<_> = a.samples().take(20).collect();
    /// let ys: Vec<_> = b.samples().take(20).collect();
    /// assert_eq!(xs, ys);
    /// ```
    pub fn with_seed(bound: usize, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(
            bound,
            DEFAULT_HISTORY_CAPACITY,
            DEFAULT_RETRY_LIMIT,
            std::iter::empty(),
            RngSource::seed_from_u64(seed),
        )
    }
}

impl<S: UniformSource> HistorySampler<S> {
    /// Creates a sampler with every parameter explicit.
    ///
    /// `initial_history` is oldest-first; if it is longer than
    /// `history_capacity` only its most recent `history_capacity` values are
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `bound` is 0 or any `initial_history` value
    /// is not below `bound`.
    ///
    /// The second case is stricter than the classic history randomizer, which
    /// only treats an empty range (`bound < 1`) as invalid configuration. A
    /// seeded value outside `[0, bound)` could never be drawn and would break
    /// the "every history value is in range" invariant, so it is refused here
    /// rather than silently kept.
    pub fn with_source<I>(
        bound: usize,
        history_capacity: usize,
        retry_limit: usize,
        initial_history: I,
        source: S,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = usize>,
    {
        check_bound(bound)?;

        let mut history = RecentWindow::with_capacity(history_capacity);
        for value in initial_history {
            if value >= bound {
                return Err(ConfigError::new(format!(
                    "initial history value {value} is outside [0, {bound})"
                )));
            }
            history.record(value);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            bound,
            history_capacity,
            retry_limit,
            seeded = history.len(),
            "history sampler created"
        );

        Ok(Self {
            source,
            history,
            bound,
            retry_limit,
            #[cfg(feature = "metrics")]
            metrics: SamplerMetrics::default(),
        })
    }

    /// Produces the next value in `[0, bound)` and records it in history.
    ///
    /// Never fails. Draws at most `max(retry_limit, 1)` values from the
    /// source.
    ///
    /// # Example
    ///
    /// ```
    /// use samplekit::policy::history::HistorySampler;
    /// use samplekit::source::ScriptedSource;
    ///
    /// // Every draw is 2, which is already in history: the retries run out
    /// // and the last candidate is accepted anyway.
    /// let mut sampler =
    ///     HistorySampler::with_source(7, 4, 4, [0, 1, 2, 3], ScriptedSource::new([2]))?;
    ///
    /// assert_eq!(sampler.next_value(), 2);
    /// assert_eq!(sampler.history().to_vec(), vec![1, 2, 3, 2]);
    /// assert_eq!(sampler.source().draws(), 4);
    /// # Ok::<(), samplekit::error::ConfigError>(())
    /// ```
    pub fn next_value(&mut self) -> usize {
        #[cfg(feature = "metrics")]
        self.metrics.record_call();

        let value = if self.retry_limit == 0 {
            self.draw()
        } else {
            self.draw_avoiding_history()
        };
        self.remember(value);
        value
    }

    /// Returns an endless iterator of [`next_value`](Self::next_value)
    /// results.
    pub fn samples(&mut self) -> Samples<'_, S> {
        Samples { sampler: self }
    }

    fn draw(&mut self) -> usize {
        #[cfg(feature = "metrics")]
        self.metrics.record_draw();

        let candidate = self.source.next_below(self.bound);
        debug_assert!(candidate < self.bound, "source broke its bound contract");
        candidate
    }

    fn draw_avoiding_history(&mut self) -> usize {
        let mut attempt = 0;
        loop {
            let candidate = self.draw();
            if !self.history.contains(candidate) {
                #[cfg(feature = "tracing")]
                tracing::trace!(value = candidate, rejected = attempt, "accepted fresh value");
                return candidate;
            }

            attempt += 1;
            #[cfg(feature = "metrics")]
            self.metrics.record_rejection();

            if attempt >= self.retry_limit {
                #[cfg(feature = "metrics")]
                self.metrics.record_fallback();
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    value = candidate,
                    retry_limit = self.retry_limit,
                    "retries exhausted, accepting recent value"
                );
                return candidate;
            }
        }
    }

    fn remember(&mut self, value: usize) {
        if self.history.record(value).is_some() {
            #[cfg(feature = "metrics")]
            self.metrics.record_eviction();
        }

        #[cfg(debug_assertions)]
        self.history.debug_validate_invariants();
    }
}

impl<S> HistorySampler<S> {
    /// Exclusive upper limit of produced values.
    #[inline]
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Maximum number of recent values remembered.
    #[inline]
    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }

    /// Maximum draws per call before accepting a recent value.
    #[inline]
    pub fn retry_limit(&self) -> usize {
        self.retry_limit
    }

    /// Recent values, oldest first.
    #[inline]
    pub fn history(&self) -> &RecentWindow {
        &self.history
    }

    /// Forgets all recent values, e.g. when a new game starts.
    pub fn clear_history(&mut self) {
        self.history.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Returns the owned random source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the owned random source mutably.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the sampler, returning its random source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Verifies the capacity and range invariants of the history window.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.bound == 0 {
            return Err(InvariantError::new("bound is zero"));
        }
        if self.history.len() > self.history.capacity() {
            return Err(InvariantError::new(format!(
                "history holds {} values but capacity is {}",
                self.history.len(),
                self.history.capacity()
            )));
        }
        if let Some(value) = self.history.iter().find(|&v| v >= self.bound) {
            return Err(InvariantError::new(format!(
                "history value {value} is outside [0, {})",
                self.bound
            )));
        }
        Ok(())
    }
}

impl<S: UniformSource> IndexSampler for HistorySampler<S> {
    #[inline]
    fn next_index(&mut self) -> usize {
        self.next_value()
    }

    #[inline]
    fn bound(&self) -> usize {
        self.bound
    }
}

#[cfg(feature = "metrics")]
impl<S> HistorySampler<S> {
    /// Returns a snapshot of sampler metrics.
    pub fn metrics_snapshot(&self) -> SamplerMetricsSnapshot {
        SamplerMetricsSnapshot {
            calls: self.metrics.calls,
            draws: self.metrics.draws,
            rejections: self.metrics.rejections,
            fallbacks: self.metrics.fallbacks,
            evictions: self.metrics.evictions,
            clears: self.metrics.clears,
            history_len: self.history.len(),
            history_capacity: self.history.capacity(),
            bound: self.bound,
        }
    }
}

#[cfg(feature = "metrics")]
impl<S> MetricsSnapshotProvider<SamplerMetricsSnapshot> for HistorySampler<S> {
    fn snapshot(&self) -> SamplerMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<S> MetricsReset for HistorySampler<S> {
    fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

// ---------------------------------------------------------------------------
// Samples iterator
// ---------------------------------------------------------------------------

/// Endless iterator over a [`HistorySampler`]'s output.
///
/// Created by [`HistorySampler::samples`]. Never returns `None`.
#[derive(Debug)]
pub struct Samples<'a, S> {
    sampler: &'a mut HistorySampler<S>,
}

impl<S: UniformSource> Iterator for Samples<'_, S> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.sampler.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<S: UniformSource> FusedIterator for Samples<'_, S> {}

// ---------------------------------------------------------------------------
// ConcurrentHistorySampler
// ---------------------------------------------------------------------------

/// Thread-safe wrapper around [`HistorySampler`] using a `parking_lot::Mutex`.
///
/// Every draw takes the lock exclusively, so concurrent callers observe one
/// serialized sequence and the history window stays consistent.
#[cfg(feature = "concurrency")]
#[derive(Debug)]
pub struct ConcurrentHistorySampler<S = RngSource> {
    inner: Mutex<HistorySampler<S>>,
}

#[cfg(feature = "concurrency")]
impl<S: UniformSource> ConcurrentHistorySampler<S> {
    /// Wraps an existing sampler.
    pub fn new(sampler: HistorySampler<S>) -> Self {
        Self {
            inner: Mutex::new(sampler),
        }
    }

    /// Produces the next value, blocking while another thread draws.
    pub fn next_value(&self) -> usize {
        self.inner.lock().next_value()
    }

    /// Produces the next value unless another thread holds the lock.
    pub fn try_next_value(&self) -> Option<usize> {
        let mut sampler = self.inner.try_lock()?;
        Some(sampler.next_value())
    }

    /// Produces `n` consecutive values under a single lock acquisition.
    pub fn next_values(&self, n: usize) -> Vec<usize> {
        let mut sampler = self.inner.lock();
        sampler.samples().take(n).collect()
    }

    /// Returns the exclusive upper limit of produced values.
    pub fn bound(&self) -> usize {
        self.inner.lock().bound()
    }

    /// Copies the current history, oldest first.
    pub fn history_snapshot(&self) -> Vec<usize> {
        self.inner.lock().history().to_vec()
    }

    /// Forgets all recent values.
    pub fn clear_history(&self) {
        self.inner.lock().clear_history();
    }

    /// Verifies invariants under the lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.lock().check_invariants()
    }

    /// Returns the wrapped sampler.
    pub fn into_inner(self) -> HistorySampler<S> {
        self.inner.into_inner()
    }
}

#[cfg(feature = "concurrency")]
impl<S: UniformSource> From<HistorySampler<S>> for ConcurrentHistorySampler<S> {
    fn from(sampler: HistorySampler<S>) -> Self {
        Self::new(sampler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ScriptedSource, XorShift64};

    fn scripted(
        bound: usize,
        capacity: usize,
        retries: usize,
        initial: &[usize],
        script: &[usize],
    ) -> HistorySampler<ScriptedSource> {
        HistorySampler::with_source(
            bound,
            capacity,
            retries,
            initial.iter().copied(),
            ScriptedSource::new(script.iter().copied()),
        )
        .unwrap()
    }

    // ==============================================
    // Construction
    // ==============================================

    mod construction {
        use super::*;

        #[test]
        fn defaults_match_constants() {
            let sampler = HistorySampler::new(7).unwrap();
            assert_eq!(sampler.bound(), 7);
            assert_eq!(sampler.history_capacity(), DEFAULT_HISTORY_CAPACITY);
            assert_eq!(sampler.retry_limit(), DEFAULT_RETRY_LIMIT);
            assert!(sampler.history().is_empty());
        }

        #[test]
        fn zero_bound_is_rejected() {
            let err = HistorySampler::new(0).unwrap_err();
            assert!(err.message().contains("bound"));
            assert!(HistorySampler::with_seed(0, 1).is_err());
            assert!(
                HistorySampler::with_source(0, 0, 0, std::iter::empty(), XorShift64::new(1))
                    .is_err()
            );
        }

        #[test]
        fn degenerate_parameters_are_accepted() {
            let sampler =
                HistorySampler::with_source(1, 0, 0, std::iter::empty(), XorShift64::new(1));
            assert!(sampler.is_ok());
        }

        #[test]
        fn long_initial_history_keeps_most_recent() {
            let sampler = scripted(7, 4, 4, &[6, 5, 0, 1, 2, 3], &[]);
            assert_eq!(sampler.history().to_vec(), vec![0, 1, 2, 3]);
        }

        #[test]
        fn initial_history_out_of_range_is_rejected() {
            let err = HistorySampler::with_source(3, 4, 4, [0, 3], ScriptedSource::new([0]))
                .unwrap_err();
            assert!(err.message().contains("outside"));
        }

        #[test]
        fn initial_history_with_zero_capacity_is_dropped() {
            let sampler = scripted(5, 0, 4, &[1, 2], &[]);
            assert!(sampler.history().is_empty());
        }
    }

    // ==============================================
    // Rejection sampling
    // ==============================================

    mod next_value {
        use super::*;

        #[test]
        fn exhausted_retries_accept_last_candidate() {
            let mut sampler = scripted(7, 4, 4, &[0, 1, 2, 3], &[2]);
            assert_eq!(sampler.next_value(), 2);
            assert_eq!(sampler.history().to_vec(), vec![1, 2, 3, 2]);
            assert_eq!(sampler.source().draws(), 4);
        }

        #[test]
        fn fresh_first_draw_is_accepted_immediately() {
            let mut sampler = scripted(7, 4, 4, &[0, 1, 2, 3], &[5]);
            assert_eq!(sampler.next_value(), 5);
            assert_eq!(sampler.history().to_vec(), vec![1, 2, 3, 5]);
            assert_eq!(sampler.source().draws(), 1);
        }

        #[test]
        fn fresh_value_after_rejections() {
            let mut sampler = scripted(7, 4, 4, &[0, 1, 2, 3], &[3, 0, 6]);
            assert_eq!(sampler.next_value(), 6);
            assert_eq!(sampler.source().draws(), 3);
        }

        #[test]
        fn fallback_takes_last_not_first_candidate() {
            let mut sampler = scripted(7, 4, 3, &[0, 1, 2, 3], &[0, 1, 2, 6]);
            assert_eq!(sampler.next_value(), 2);
            assert_eq!(sampler.source().draws(), 3);
        }

        #[test]
        fn zero_capacity_is_plain_uniform() {
            let mut sampler = scripted(3, 0, 4, &[], &[1, 1, 1]);
            for _ in 0..3 {
                assert_eq!(sampler.next_value(), 1);
                assert!(sampler.history().is_empty());
            }
            assert_eq!(sampler.source().draws(), 3);
        }

        #[test]
        fn zero_retries_accepts_first_draw() {
            let mut sampler = scripted(7, 4, 0, &[0, 1, 2, 3], &[2]);
            assert_eq!(sampler.next_value(), 2);
            assert_eq!(sampler.source().draws(), 1);
            assert_eq!(sampler.history().to_vec(), vec![1, 2, 3, 2]);
        }

        #[test]
        fn bound_one_always_returns_zero() {
            let mut sampler =
                HistorySampler::with_source(1, 4, 4, std::iter::empty(), ScriptedSource::new([0]))
                    .unwrap();
            assert_eq!(sampler.next_value(), 0);
            // first call: empty history, accepted on first draw
            assert_eq!(sampler.source().draws(), 1);

            sampler.source_mut().reset_draws();
            assert_eq!(sampler.next_value(), 0);
            // 0 is now recent: retries exhaust
            assert_eq!(sampler.source().draws(), 4);
        }

        #[test]
        fn partially_filled_history_grows_then_slides() {
            let mut sampler = scripted(10, 3, 4, &[], &[1, 2, 3, 4]);
            let out: Vec<_> = sampler.samples().take(4).collect();
            assert_eq!(out, vec![1, 2, 3, 4]);
            assert_eq!(sampler.history().to_vec(), vec![2, 3, 4]);
        }

        #[test]
        fn membership_is_positional_agnostic() {
            // 0 is the oldest entry and still blocks
            let mut sampler = scripted(7, 4, 2, &[0, 1, 2, 3], &[0, 4]);
            assert_eq!(sampler.next_value(), 4);
        }

        #[test]
        fn clear_history_reenables_recent_values() {
            let mut sampler = scripted(7, 4, 4, &[0, 1, 2, 3], &[2]);
            sampler.clear_history();
            assert_eq!(sampler.next_value(), 2);
            assert_eq!(sampler.source().draws(), 1);
        }

        #[test]
        fn into_source_returns_owned_source() {
            let mut sampler = scripted(7, 4, 4, &[], &[5]);
            sampler.next_value();
            let source = sampler.into_source();
            assert_eq!(source.draws(), 1);
        }

        #[test]
        fn index_sampler_trait_delegates() {
            let mut sampler = scripted(7, 4, 4, &[], &[6]);
            let dyn_sampler: &mut dyn IndexSampler = &mut sampler;
            assert_eq!(dyn_sampler.bound(), 7);
            assert_eq!(dyn_sampler.next_index(), 6);
            assert_eq!(sampler.history().to_vec(), vec![6]);
        }
    }

    // ==============================================
    // Invariants
    // ==============================================

    mod invariants {
        use super::*;

        #[test]
        fn hold_after_many_calls() {
            let mut sampler = HistorySampler::with_seed(7, 5).unwrap();
            for _ in 0..1_000 {
                sampler.next_value();
                sampler.check_invariants().unwrap();
                sampler.history().debug_validate_invariants();
            }
        }

        #[test]
        fn hold_for_zero_capacity() {
            let mut sampler =
                HistorySampler::with_source(2, 0, 4, std::iter::empty(), XorShift64::new(9))
                    .unwrap();
            for _ in 0..100 {
                sampler.next_value();
                assert!(sampler.check_invariants().is_ok());
            }
        }
    }

    // ==============================================
    // Metrics
    // ==============================================

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn fallback_path_is_counted() {
            let mut sampler = scripted(7, 4, 4, &[0, 1, 2, 3], &[2]);
            sampler.next_value();

            let snap = sampler.metrics_snapshot();
            assert_eq!(snap.calls, 1);
            assert_eq!(snap.draws, 4);
            assert_eq!(snap.rejections, 4);
            assert_eq!(snap.fallbacks, 1);
            assert_eq!(snap.evictions, 1);
            assert_eq!(snap.history_len, 4);
            assert_eq!(snap.history_capacity, 4);
            assert_eq!(snap.bound, 7);
        }

        #[test]
        fn fresh_path_is_counted() {
            let mut sampler = scripted(7, 4, 4, &[0, 1, 2, 3], &[3, 5]);
            sampler.next_value();

            let snap = sampler.snapshot();
            assert_eq!(snap.draws, 2);
            assert_eq!(snap.rejections, 1);
            assert_eq!(snap.fallbacks, 0);
        }

        #[test]
        fn zero_capacity_counts_immediate_eviction() {
            let mut sampler = scripted(3, 0, 4, &[], &[1]);
            sampler.next_value();
            assert_eq!(sampler.metrics_snapshot().evictions, 1);
        }

        #[test]
        fn reset_and_clear() {
            let mut sampler = scripted(7, 4, 4, &[0], &[5]);
            sampler.next_value();
            sampler.clear_history();
            assert_eq!(sampler.metrics_snapshot().clears, 1);

            sampler.reset_metrics();
            let snap = sampler.metrics_snapshot();
            assert_eq!(snap.calls, 0);
            assert_eq!(snap.clears, 0);
            assert_eq!(snap.history_len, 0);
        }
    }

    // ==============================================
    // ConcurrentHistorySampler
    // ==============================================

    #[cfg(feature = "concurrency")]
    mod concurrent {
        use super::*;

        #[test]
        fn wraps_and_unwraps() {
            let sampler = scripted(7, 4, 4, &[0, 1, 2, 3], &[5]);
            let shared = ConcurrentHistorySampler::from(sampler);
            assert_eq!(shared.bound(), 7);
            assert_eq!(shared.next_value(), 5);
            assert_eq!(shared.history_snapshot(), vec![1, 2, 3, 5]);

            let inner = shared.into_inner();
            assert_eq!(inner.source().draws(), 1);
        }

        #[test]
        fn try_next_value_succeeds_uncontended() {
            let shared = ConcurrentHistorySampler::new(HistorySampler::with_seed(7, 1).unwrap());
            assert!(shared.try_next_value().is_some_and(|v| v < 7));
        }

        #[test]
        fn next_values_batches_under_one_lock() {
            let shared = ConcurrentHistorySampler::new(scripted(10, 2, 4, &[], &[1, 2, 3]));
            assert_eq!(shared.next_values(3), vec![1, 2, 3]);
            assert_eq!(shared.history_snapshot(), vec![2, 3]);
            shared.clear_history();
            assert!(shared.history_snapshot().is_empty());
            assert!(shared.check_invariants().is_ok());
        }
    }
}
