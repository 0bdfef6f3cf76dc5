//! # Sampler Traits
//!
//! A single interface shared by every sampler in the crate, so callers such as
//! a piece spawner can be written once and handed any selection policy.
//!
//! ```text
//!                ┌─────────────────────────────────────────┐
//!                │             IndexSampler                │
//!                │                                         │
//!                │  next_index(&mut) → usize  in [0,bound) │
//!                │  bound(&) → usize                       │
//!                └──────────────────┬──────────────────────┘
//!                                   │
//!          ┌────────────────────────┼────────────────────────┐
//!          ▼                        ▼                        ▼
//!   ┌──────────────┐        ┌───────────────┐        ┌──────────────┐
//!   │UniformSampler│        │HistorySampler │        │   Sampler    │
//!   │ memoryless   │        │ disfavors     │        │ builder-made │
//!   │ baseline     │        │ recent values │        │ either one   │
//!   └──────────────┘        └───────────────┘        └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use samplekit::policy::history::HistorySampler;
//! use samplekit::policy::uniform::UniformSampler;
//! use samplekit::traits::IndexSampler;
//!
//! fn deal<S: IndexSampler>(sampler: &mut S, n: usize) -> Vec<usize> {
//!     (0..n).map(|_| sampler.next_index()).collect()
//! }
//!
//! let mut plain = UniformSampler::with_seed(7, 1).unwrap();
//! let mut spread = HistorySampler::with_seed(7, 1).unwrap();
//! assert_eq!(deal(&mut plain, 10).len(), 10);
//! assert!(deal(&mut spread, 10).iter().all(|&i| i < 7));
//! ```

/// Produces indices in `[0, bound)`.
pub trait IndexSampler {
    /// Returns the next index. Never fails.
    fn next_index(&mut self) -> usize;

    /// Exclusive upper limit of produced indices (always >= 1).
    fn bound(&self) -> usize;
}

impl<T: IndexSampler + ?Sized> IndexSampler for &mut T {
    fn next_index(&mut self) -> usize {
        (**self).next_index()
    }

    fn bound(&self) -> usize {
        (**self).bound()
    }
}

impl<T: IndexSampler + ?Sized> IndexSampler for Box<T> {
    fn next_index(&mut self) -> usize {
        (**self).next_index()
    }

    fn bound(&self) -> usize {
        (**self).bound()
    }
}
