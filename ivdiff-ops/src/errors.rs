use std::fmt::{self, Display};

use thiserror::Error;

use ivdiff_core::errors::IntervalError;

/// Which operand of a difference an interval belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// The intervals being subtracted from (A).
    Minuend,
    /// The intervals being subtracted (B).
    Subtrahend,
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Minuend => write!(f, "minuend"),
            Group::Subtrahend => write!(f, "subtrahend"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DifferenceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "{group} intervals overlap: interval {index} starts at {start} before interval {previous} ends at {prev_end}"
    )]
    Overlapping {
        group: Group,
        previous: usize,
        index: usize,
        prev_end: f64,
        start: f64,
    },

    #[error(transparent)]
    Interval(#[from] IntervalError),
}
