//! Fixed-capacity sliding window of recently produced values.
//!
//! Stores the last `capacity` values in a ring buffer sized at construction.
//! Recording is O(1) and evicts the oldest value once the window is full;
//! membership tests are a linear scan over at most `capacity` slots, which for
//! the small windows samplers use (typically 4) beats any hashed index.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                      RecentWindow (capacity = 4) Layout                     │
//! │                                                                             │
//! │   data: Box<[usize]>          cursor: next write position                   │
//! │   len: valid entries          (wraps around when full)                      │
//! │                                                                             │
//! │   After recording: 0, 1, 2, 3, 5                                            │
//! │                                                                             │
//! │   Index:     0     1     2     3                                            │
//! │            ┌─────┬─────┬─────┬─────┐                                        │
//! │   data:    │  5  │  1  │  2  │  3  │                                        │
//! │            └─────┴─────┴─────┴─────┘                                        │
//! │              ▲     ▲                                                        │
//! │              │     └── oldest = data[(cursor + cap - len) % cap]            │
//! │           cursor = 1 (next write goes here)                                 │
//! │                                                                             │
//! │   Oldest-first view:  [1, 2, 3, 5]                                          │
//! │                                                                             │
//! │   record(6):                                                                │
//! │     1. evicted = data[cursor]    → 1 (window was full)                      │
//! │     2. data[cursor] = 6          → data[1] = 6                              │
//! │     3. cursor = (cursor + 1) % 4 → cursor = 2                               │
//! │     Oldest-first view:  [2, 3, 5, 6]                                        │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation             | Description                         | Complexity |
//! |-----------------------|-------------------------------------|------------|
//! | [`record`]            | Append, evicting the oldest if full | O(1)       |
//! | [`contains`]          | Exact-value membership              | O(cap)     |
//! | [`oldest`]            | Next value to be evicted            | O(1)       |
//! | [`most_recent`]       | Last recorded value                 | O(1)       |
//! | [`kth_most_recent`]   | k-th most recent value              | O(1)       |
//! | [`iter`]              | Iterate oldest-first                | O(cap)     |
//!
//! [`record`]: RecentWindow::record
//! [`contains`]: RecentWindow::contains
//! [`oldest`]: RecentWindow::oldest
//! [`most_recent`]: RecentWindow::most_recent
//! [`kth_most_recent`]: RecentWindow::kth_most_recent
//! [`iter`]: RecentWindow::iter
//!
//! ## Example Usage
//!
//! ```
//! use samplekit::ds::RecentWindow;
//!
//! let mut window = RecentWindow::from_recent(4, [0, 1, 2, 3]);
//! assert!(window.contains(2));
//!
//! // Full: the oldest value (0) is evicted
//! assert_eq!(window.record(5), Some(0));
//! assert_eq!(window.to_vec(), vec![1, 2, 3, 5]);
//! ```
//!
//! ## Thread Safety
//!
//! `RecentWindow` is not thread-safe. It is owned by a sampler and protected
//! by whatever synchronization guards the sampler.
//!
//! ## Implementation Notes
//!
//! - Backing storage is allocated once; recording never reallocates
//! - Zero capacity is valid: every recorded value is evicted immediately
//! - `debug_validate_invariants()` available in debug/test builds

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

/// Fixed-capacity FIFO window over the most recently recorded values.
///
/// Values are kept in insertion order; once `capacity` values are held, each
/// new value evicts the oldest one.
///
/// # Example
///
/// ```
/// use samplekit::ds::RecentWindow;
///
/// let mut window = RecentWindow::with_capacity(2);
/// assert_eq!(window.record(10), None);
/// assert_eq!(window.record(20), None);
/// assert_eq!(window.record(30), Some(10));
///
/// assert_eq!(window.oldest(), Some(20));
/// assert_eq!(window.most_recent(), Some(30));
/// ```
#[derive(Clone)]
pub struct RecentWindow {
    data: Box<[usize]>,
    len: usize,
    cursor: usize,
}

impl RecentWindow {
    /// Creates an empty window retaining at most `capacity` values.
    ///
    /// # Example
    ///
    /// ```
    /// use samplekit::ds::RecentWindow;
    ///
    /// let window = RecentWindow::with_capacity(4);
    /// assert!(window.is_empty());
    /// assert_eq!(window.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
            cursor: 0,
        }
    }

    /// Creates a window pre-seeded from an oldest-first sequence.
    ///
    /// If `values` holds more than `capacity` items only the most recent
    /// `capacity` are kept, in their original order.
    ///
    /// # Example
    ///
    /// ```
    /// use samplekit::ds::RecentWindow;
    ///
    /// let window = RecentWindow::from_recent(3, [1, 2, 3, 4, 5]);
    /// assert_eq!(window.to_vec(), vec![3, 4, 5]);
    /// ```
    pub fn from_recent<I>(capacity: usize, values: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut window = Self::with_capacity(capacity);
        for value in values {
            window.record(value);
        }
        window
    }

    /// Returns the maximum number of values retained.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of values currently held (<= `capacity`).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no values are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next [`record`](Self::record) will evict.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends `value`, evicting and returning the oldest value if the window
    /// was full.
    ///
    /// With zero capacity nothing is retained and `value` itself is returned
    /// as the evicted entry.
    ///
    /// # Example
    ///
    /// ```
    /// use samplekit::ds::RecentWindow;
    ///
    /// let mut window = RecentWindow::with_capacity(0);
    /// assert_eq!(window.record(7), Some(7));
    /// assert!(window.is_empty());
    /// ```
    pub fn record(&mut self, value: usize) -> Option<usize> {
        let cap = self.capacity();
        if cap == 0 {
            return Some(value);
        }
        let evicted = if self.len == cap {
            Some(self.data[self.cursor])
        } else {
            self.len += 1;
            None
        };
        self.data[self.cursor] = value;
        self.cursor = (self.cursor + 1) % cap;
        evicted
    }

    /// Returns `true` if `value` is anywhere in the window.
    ///
    /// Position does not matter; only exact-value membership.
    #[inline]
    pub fn contains(&self, value: usize) -> bool {
        self.iter().any(|held| held == value)
    }

    /// Returns the oldest value, i.e. the next one to be evicted.
    pub fn oldest(&self) -> Option<usize> {
        self.kth_most_recent(self.len)
    }

    /// Returns the most recently recorded value.
    pub fn most_recent(&self) -> Option<usize> {
        self.kth_most_recent(1)
    }

    /// Returns the k-th most recent value (`k = 1` is most recent).
    ///
    /// Returns `None` if `k` is 0 or exceeds [`len`](Self::len).
    ///
    /// # Example
    ///
    /// ```
    /// use samplekit::ds::RecentWindow;
    ///
    /// let window = RecentWindow::from_recent(4, [10, 20, 30]);
    /// assert_eq!(window.kth_most_recent(1), Some(30));
    /// assert_eq!(window.kth_most_recent(3), Some(10));
    /// assert_eq!(window.kth_most_recent(0), None);
    /// assert_eq!(window.kth_most_recent(4), None);
    /// ```
    pub fn kth_most_recent(&self, k: usize) -> Option<usize> {
        let cap = self.capacity();
        if k == 0 || k > self.len {
            return None;
        }
        Some(self.data[(self.cursor + cap - k) % cap])
    }

    /// Returns the value at position `index` counted from the oldest entry.
    pub fn get(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.kth_most_recent(self.len - index)
    }

    /// Returns an iterator over held values, oldest first.
    ///
    /// # Example
    ///
    /// ```
    /// use samplekit::ds::RecentWindow;
    ///
    /// let window = RecentWindow::from_recent(3, [4, 5, 6, 7]);
    /// let values: Vec<_> = window.iter().collect();
    /// assert_eq!(values, vec![5, 6, 7]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            window: self,
            front: 0,
            back: self.len,
        }
    }

    /// Returns held values oldest-first.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Removes every value; capacity is unchanged.
    pub fn clear(&mut self) {
        self.len = 0;
        self.cursor = 0;
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.capacity() * std::mem::size_of::<usize>()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let cap = self.capacity();
        assert!(self.len <= cap);
        if cap == 0 {
            assert_eq!(self.len, 0);
            assert_eq!(self.cursor, 0);
        } else {
            assert!(self.cursor < cap);
        }
    }
}

impl fmt::Debug for RecentWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecentWindow")
            .field("capacity", &self.capacity())
            .field("values", &self.to_vec())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// PartialEq, Eq, Hash: logical content only, stale slots are ignored
// ---------------------------------------------------------------------------

impl PartialEq for RecentWindow {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.iter().eq(other.iter())
    }
}

impl Eq for RecentWindow {}

impl Hash for RecentWindow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity().hash(state);
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// ---------------------------------------------------------------------------
// Iterator
// ---------------------------------------------------------------------------

/// Borrowed iterator over a [`RecentWindow`], oldest to most recent.
///
/// Created by [`RecentWindow::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    window: &'a RecentWindow,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.window.get(self.front)?;
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.window.get(self.back)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RecentWindow {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
