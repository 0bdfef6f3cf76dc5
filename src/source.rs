//! Uniform random sources.
//!
//! Samplers never reach for a global generator. Each one exclusively owns a
//! [`UniformSource`]: anything that can produce a uniform integer in
//! `[0, bound)` on demand. Swapping the source changes where randomness comes
//! from without touching sampling logic.
//!
//! ## Key Components
//!
//! - [`UniformSource`]: the capability samplers depend on
//! - [`RngSource`]: adapter over any [`rand::Rng`] (seedable or OS-seeded)
//! - [`XorShift64`]: small dependency-free generator, Miri-friendly
//! - [`ScriptedSource`]: replays a fixed script; for tests and replays
//!
//! ## Example Usage
//!
//! ```
//! use samplekit::source::{RngSource, ScriptedSource, UniformSource};
//!
//! let mut seeded = RngSource::seed_from_u64(7);
//! assert!(seeded.next_below(10) < 10);
//!
//! let mut scripted = ScriptedSource::new([2, 5]);
//! assert_eq!(scripted.next_below(7), 2);
//! assert_eq!(scripted.next_below(7), 5);
//! assert_eq!(scripted.next_below(7), 2); // script repeats
//! assert_eq!(scripted.draws(), 3);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Produces uniformly distributed integers in `[0, bound)`.
///
/// Implementations must return a value strictly below `bound` whenever
/// `bound >= 1`. Callers never pass `bound == 0`.
pub trait UniformSource {
    /// Draws the next value in `[0, bound)`.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

// ---------------------------------------------------------------------------
// RngSource
// ---------------------------------------------------------------------------

/// Adapter turning any [`rand::Rng`] into a [`UniformSource`].
///
/// The default type parameter is [`SmallRng`], a fast non-cryptographic
/// generator. Wrap a cryptographic generator when predictability matters.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use samplekit::source::{RngSource, UniformSource};
///
/// let mut source = RngSource::new(StdRng::seed_from_u64(1));
/// assert!(source.next_below(3) < 3);
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<SmallRng> {
    /// Deterministic source: the same seed yields the same sequence.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Source seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

// ---------------------------------------------------------------------------
// XorShift64
// ---------------------------------------------------------------------------

/// XorShift64 generator (13/7/17 triple).
///
/// No system entropy, no allocation. Reduction is by modulo, so values carry
/// a bias of at most `bound / 2^64`, negligible for piece-sized ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a generator; a zero seed is replaced so the state never sticks
    /// at zero.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }

    /// Advances the generator and returns the raw 64-bit output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl UniformSource for XorShift64 {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

// ---------------------------------------------------------------------------
// ScriptedSource
// ---------------------------------------------------------------------------

/// Replays a fixed script of values, cycling when it runs out.
///
/// Each scripted value is reduced modulo the requested bound so the source
/// contract holds for any script. An empty script always yields 0. The number
/// of draws served is tracked, which makes the per-call draw budget of a
/// sampler observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSource {
    script: Vec<usize>,
    pos: usize,
    draws: u64,
}

impl ScriptedSource {
    /// Creates a source replaying `script` in order.
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            script: script.into_iter().collect(),
            pos: 0,
            draws: 0,
        }
    }

    /// Total values handed out so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Resets the draw counter without rewinding the script.
    pub fn reset_draws(&mut self) {
        self.draws = 0;
    }
}

impl UniformSource for ScriptedSource {
    fn next_below(&mut self, bound: usize) -> usize {
        self.draws += 1;
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.pos];
        self.pos = (self.pos + 1) % self.script.len();
        value % bound
    }
}
