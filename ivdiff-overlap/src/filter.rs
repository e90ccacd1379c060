use ivdiff_core::models::Interval;

use crate::index::OverlapIndex;

/// Positions of `a` split by whether they can intersect `b`.
///
/// Both lists are in ascending position order, so applying them to a sorted
/// `a` yields sorted subsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub overlapping: Vec<usize>,
    pub disjoint: Vec<usize>,
}

impl Partition {
    pub fn is_all_disjoint(&self) -> bool {
        self.overlapping.is_empty()
    }
}

/// Split the positions of `a` into those with at least one possibly
/// intersecting interval in `b` and those with none.
///
/// An interval of `a` is disjoint when the number of `b` intervals starting
/// before its end equals the number of `b` intervals ending before its start.
/// Neither input has to be sorted.
pub fn partition(a: &[Interval], b: &[Interval]) -> Partition {
    let index = OverlapIndex::build(b);
    let mut result = Partition::default();
    for (pos, interval) in a.iter().enumerate() {
        if index.overlaps(interval.start, interval.end) {
            result.overlapping.push(pos);
        } else {
            result.disjoint.push(pos);
        }
    }

    log::debug!(
        "overlap partition: {} overlapping, {} disjoint (against {} intervals)",
        result.overlapping.len(),
        result.disjoint.len(),
        index.len()
    );
    result
}

/// Partition `a` into `(a_overlapping, a_disjoint)` by overlap with `b`,
/// preserving the order of `a`.
pub fn filter_overlapping(a: &[Interval], b: &[Interval]) -> (Vec<Interval>, Vec<Interval>) {
    let split = partition(a, b);
    let take = |positions: &[usize]| -> Vec<Interval> {
        positions.iter().map(|&pos| a[pos]).collect()
    };
    (take(&split.overlapping), take(&split.disjoint))
}
