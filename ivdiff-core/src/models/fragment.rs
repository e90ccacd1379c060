use std::cmp::Ordering;

use crate::models::Interval;

/// An output interval plus the row of the minuend interval it was cut from.
///
/// `origin` always refers to the caller's row order (before any sorting), so
/// it can index the minuend's metadata table directly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    pub interval: Interval,
    pub origin: usize,
}

impl Fragment {
    #[inline]
    pub const fn new(start: f64, end: f64, origin: usize) -> Self {
        Fragment {
            interval: Interval::new(start, end),
            origin,
        }
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.interval.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.interval.end
    }

    #[inline]
    pub fn len(&self) -> f64 {
        self.interval.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.interval.is_empty()
    }

    /// Order by start, then end, then origin. Used to compare result sets.
    pub fn total_cmp(&self, other: &Fragment) -> Ordering {
        self.interval
            .cmp_start(&other.interval)
            .then_with(|| self.interval.end.total_cmp(&other.interval.end))
            .then_with(|| self.origin.cmp(&other.origin))
    }
}
