use ivdiff_core::models::Interval;
use ivdiff_core::sort::sort_by_start;

use crate::errors::{DifferenceError, Group};

///
/// Check that no two intervals of one group overlap.
///
/// Intervals are considered in start order; each must start at or after the
/// end of the one before it. Touching intervals are allowed. The error names
/// the offending pair by their positions in `intervals`.
///
pub fn validate_within_group(intervals: &[Interval], group: Group) -> Result<(), DifferenceError> {
    let order = sort_by_start(intervals);
    for pair in order.windows(2) {
        let (previous, index) = (pair[0], pair[1]);
        let prev_end = intervals[previous].end;
        let start = intervals[index].start;
        if start < prev_end {
            return Err(DifferenceError::Overlapping {
                group,
                previous,
                index,
                prev_end,
                start,
            });
        }
    }
    Ok(())
}

/// True when no two intervals overlap each other.
pub fn is_within_group_disjoint(intervals: &[Interval]) -> bool {
    validate_within_group(intervals, Group::Minuend).is_ok()
}
