use std::cmp::Ordering;
use std::fmt::{self, Display};

/// Represent a range from [start, end) on the real line.
///
/// No `start <= end` invariant is enforced: callers are responsible for
/// well-formed input, and the difference algorithms have undefined output for
/// inverted intervals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    #[inline]
    pub const fn new(start: f64, end: f64) -> Self {
        Interval { start, end }
    }

    /// Length of the interval, `end - start`.
    #[inline]
    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    /// True when the interval covers no length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check if the interval overlaps `[start, end)`
    #[inline]
    pub fn overlap(&self, start: f64, end: f64) -> bool {
        self.start < end && self.end > start
    }

    /// Compute the length of the intersection between two intervals
    #[inline]
    pub fn intersect(&self, other: &Interval) -> f64 {
        (self.end.min(other.end) - self.start.max(other.start)).max(0.0)
    }

    /// Total order on start coordinates (`f64::total_cmp`).
    #[inline]
    pub fn cmp_start(&self, other: &Interval) -> Ordering {
        self.start.total_cmp(&other.start)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Interval { start, end }
    }
}

impl From<Interval> for (f64, f64) {
    fn from(value: Interval) -> Self {
        (value.start, value.end)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.start, self.end)
    }
}
