//! Core models for one-dimensional interval difference.
//!
//! This crate holds the value types shared by the rest of the workspace:
//!
//! - [`Interval`]: a `(start, end)` pair of real coordinates
//! - [`IntervalCollection`]: an ordered sequence of intervals with an optional,
//!   row-aligned [`MetadataTable`]
//! - [`Fragment`]: an output interval tagged with the row of the interval it was cut from
//!
//! plus the stable start-coordinate [`sort`] every algorithm relies on and
//! tab-separated file I/O.
//!
//! ```rust
//! use ivdiff_core::models::{Interval, IntervalCollection};
//!
//! let labels = IntervalCollection::from(vec![(600.0, 700.0), (100.0, 200.0)]);
//! let sorted = labels.sorted();
//! assert_eq!(sorted.intervals()[0], Interval::new(100.0, 200.0));
//! ```

pub mod errors;
pub mod io;
pub mod models;
pub mod sort;
pub mod utils;

// re-exports
pub use self::errors::IntervalError;
pub use self::models::{Fragment, Interval, IntervalCollection, MetadataTable};
