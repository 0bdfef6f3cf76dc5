//! Error types for the samplekit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when sampler construction parameters are
//!   invalid (an empty value range, or a seeded history value outside it).
//! - [`InvariantError`]: Returned by `check_invariants` methods when internal
//!   state no longer satisfies the sampler's guarantees.
//!
//! ## Example Usage
//!
//! ```
//! use samplekit::error::ConfigError;
//! use samplekit::policy::history::HistorySampler;
//!
//! // Sampling from [0, 7) is fine
//! let sampler = HistorySampler::with_seed(7, 42);
//! assert!(sampler.is_ok());
//!
//! // An empty range cannot be sampled from
//! let bad: Result<_, ConfigError> = HistorySampler::with_seed(0, 42);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when sampler configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`HistorySampler::new`](crate::policy::history::HistorySampler::new) and
/// the builder's `try_build*` methods. Carries a human-readable description of
/// which parameter failed validation.
///
/// # Example
///
/// ```
/// use samplekit::policy::history::HistorySampler;
///
/// let err = HistorySampler::with_seed(0, 1).unwrap_err();
/// assert!(err.to_string().contains("bound"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sampler configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal sampler invariants are violated.
///
/// Produced by
/// [`HistorySampler::check_invariants`](crate::policy::history::HistorySampler::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
