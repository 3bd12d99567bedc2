//! Half-open time intervals and the overlap algebra built on them.
//!
//! Every occupied stretch of the day is a `[start, end)` interval: the
//! start minute belongs to the interval, the end minute to whatever comes
//! next. Two intervals that merely touch at an endpoint share no minute
//! and never conflict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::WallClock;
use crate::error::ScheduleError;

/// A half-open interval `[start, end)` within one day.
///
/// Construction guarantees `start < end`; intervals never wrap midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: WallClock,
    end: WallClock,
}

impl TimeRange {
    /// Builds a range, rejecting empty and reversed ones.
    pub fn new(start: WallClock, end: WallClock) -> Result<Self, ScheduleError> {
        if start >= end {
            return Err(ScheduleError::EmptyRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Internal constructor for callers that already hold `start < end`.
    pub(crate) fn between(start: WallClock, end: WallClock) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    pub fn start(&self) -> WallClock {
        self.start
    }

    pub fn end(&self) -> WallClock {
        self.end
    }

    /// Whole minutes covered by the range.
    pub fn duration_min(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// True when the ranges share at least one minute.
    ///
    /// Touching endpoints do not count: `[a, b)` and `[b, c)` are disjoint.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// End-exclusive membership: the end minute belongs to the next range,
    /// never to this one.
    pub fn contains(&self, point: WallClock) -> bool {
        self.start <= point && point < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
