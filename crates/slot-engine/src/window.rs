//! Half-open time interval algebra.
//!
//! A [`TimeWindow`] is the primitive every other module works in. Both bounds are
//! UTC instants; comparisons never look at a timezone.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::{Result, SlotError};

/// An interval `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window, rejecting zero-length and inverted intervals.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidWindow` when `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(SlotError::InvalidWindow {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// True when `other` lies entirely inside `self`. Shared endpoints count,
    /// so a window contains itself.
    pub fn contains(&self, other: &TimeWindow) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// True when the two windows share some instant. Adjacent windows (one ends
    /// exactly when the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }
}
