//! Overlap pruning for one-dimensional interval sets.
//!
//! Before a difference is computed, every minuend interval that cannot touch
//! any subtrahend interval is split off and passed through untouched. The test
//! is two binary searches per interval against the subtrahend's sorted starts
//! and sorted ends (the BITS counting scheme), so the pruning step costs
//! O(n log m).
//!
//! ```rust
//! use ivdiff_core::models::Interval;
//! use ivdiff_overlap::{OverlapIndex, filter_overlapping};
//!
//! let a = vec![Interval::new(100.0, 200.0), Interval::new(1100.0, 1200.0)];
//! let b = vec![Interval::new(80.0, 120.0), Interval::new(580.0, 620.0)];
//!
//! let index = OverlapIndex::build(&b);
//! assert_eq!(index.count(100.0, 200.0), 1);
//!
//! let (overlapping, disjoint) = filter_overlapping(&a, &b);
//! assert_eq!(overlapping, vec![Interval::new(100.0, 200.0)]);
//! assert_eq!(disjoint, vec![Interval::new(1100.0, 1200.0)]);
//! ```

/// Sorted-endpoint index used for overlap counting.
///
/// See [`OverlapIndex`] for details.
pub mod index;

/// Partitioning of one interval set by overlap with another.
///
/// See [`partition`] for details.
pub mod filter;

// re-exports
pub use self::filter::{Partition, filter_overlapping, partition};
pub use self::index::OverlapIndex;
