//! Interval set difference for one-dimensional intervals.
//!
//! Given a minuend `A` and a subtrahend `B`, each a collection of intervals
//! that do not overlap within their own collection, [`difference`] returns the
//! parts of `A` not covered by any interval of `B`. Every output fragment
//! keeps the metadata row of the `A` interval it was cut from.
//!
//! Two implementations sit behind the [`DifferenceAlgorithm`] trait:
//!
//! - [`SweepDifference`]: a single sweep over sorted start/end events,
//!   O((n + m) log(n + m)). This is the default.
//! - [`NaiveDifference`]: clips each interval of `A` against the bounds one
//!   at a time. Kept as the reference the sweep is tested against.
//!
//! Before either runs, intervals of `B` touching no interval of `A` are
//! dropped and intervals of `A` touching no interval of `B` are passed
//! straight through (see [`ivdiff_overlap::partition`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use ivdiff_core::models::{Interval, IntervalCollection};
//! use ivdiff_ops::IntervalDifference;
//!
//! let a = IntervalCollection::from(vec![(0.0, 10.0), (20.0, 30.0), (40.0, 50.0)]);
//! let b = IntervalCollection::from(vec![(5.0, 45.0)]);
//!
//! let result = a.difference(&b, 0.0).unwrap();
//! assert_eq!(
//!     result.intervals(),
//!     &[Interval::new(0.0, 5.0), Interval::new(45.0, 50.0)]
//! );
//! ```
//!
//! Neither operand is checked for self-overlap unless
//! [`DifferenceOptions::validate`] is set; overlapping input gives unspecified
//! (but memory safe) output.

pub mod engine;
pub mod errors;
pub mod naive;
pub mod options;
pub mod projector;
pub mod sweep;
pub mod traits;
pub mod validate;

// re-exports
pub use self::engine::{IntervalDifference, difference, difference_fragments};
pub use self::errors::{DifferenceError, Group};
pub use self::naive::{NaiveDifference, Overlap};
pub use self::options::{Algorithm, DifferenceOptions};
pub use self::projector::MetadataProjector;
pub use self::sweep::{Atom, SweepDifference, atomize};
pub use self::traits::DifferenceAlgorithm;
pub use self::validate::{is_within_group_disjoint, validate_within_group};
