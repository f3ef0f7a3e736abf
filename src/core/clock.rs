//! Millisecond timestamps.
//!
//! Time never originates inside the engine: the embedding application
//! passes a `Timestamp` into every time-sensitive operation. Transition
//! logic therefore runs and tests without simulating time - a test picks
//! arbitrary numbers and advances them by hand.

use serde::{Deserialize, Serialize};

/// A point in time, in milliseconds from an arbitrary epoch.
///
/// Only differences between timestamps are meaningful; the engine never
/// assumes a particular epoch.
///
/// ```
/// use concentor::core::Timestamp;
///
/// let start = Timestamp::new(1_000);
/// let later = start.offset(2_500);
///
/// assert_eq!(later.millis_since(start), 2_500);
/// assert_eq!(start.millis_since(later), 0); // saturates, never underflows
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create a timestamp from raw milliseconds.
    #[must_use]
    pub const fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Get the raw millisecond value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// A timestamp `millis` later than this one.
    #[must_use]
    pub const fn offset(self, millis: u64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    /// Milliseconds elapsed since `earlier`, saturating at zero.
    #[must_use]
    pub const fn millis_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl From<u64> for Timestamp {
    fn from(millis: u64) -> Self {
        Self(millis)
    }
}
