//! Stable ordering of intervals by start coordinate.
//!
//! Every algorithm in the workspace orders its inputs through
//! [`sort_by_start`], so intervals sharing a start coordinate always keep their
//! original relative order and fragment-to-origin attribution cannot depend on
//! which algorithm ran.

use crate::models::Interval;

///
/// Permutation that orders `intervals` by ascending start.
///
/// Ties keep their input order (the sort is stable). Coordinates are compared
/// with `f64::total_cmp`, so the order is total even for NaN input.
///
pub fn sort_by_start(intervals: &[Interval]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by(|&a, &b| intervals[a].cmp_start(&intervals[b]));
    order
}

///
/// Gather `items` by `order`.
///
pub fn apply_order<T: Clone>(items: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&idx| items[idx].clone()).collect()
}

///
/// Check whether `intervals` are already ordered by start.
///
pub fn is_sorted_by_start(intervals: &[Interval]) -> bool {
    intervals
        .windows(2)
        .all(|pair| pair[0].cmp_start(&pair[1]).is_le())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn intervals(raw: &[(f64, f64)]) -> Vec<Interval> {
        raw.iter().copied().map(Interval::from).collect()
    }

    #[rstest]
    fn test_sort_intervals_by_start() {
        let input = intervals(&[(600.0, 700.0), (1100.0, 1200.0), (100.0, 200.0), (2000.0, 2200.0)]);
        let order = sort_by_start(&input);
        assert_eq!(order, vec![2, 0, 1, 3]);
        assert_eq!(
            apply_order(&input, &order),
            intervals(&[(100.0, 200.0), (600.0, 700.0), (1100.0, 1200.0), (2000.0, 2200.0)])
        );
    }

    #[rstest]
    fn test_equal_starts_keep_input_order() {
        let input = intervals(&[(50.0, 60.0), (10.0, 10.0), (10.0, 30.0), (10.0, 20.0)]);
        assert_eq!(sort_by_start(&input), vec![1, 2, 3, 0]);
    }

    #[rstest]
    fn test_is_sorted_by_start() {
        assert!(is_sorted_by_start(&intervals(&[(0.0, 1.0), (0.0, 2.0), (3.0, 4.0)])));
        assert!(!is_sorted_by_start(&intervals(&[(3.0, 4.0), (0.0, 1.0)])));
        assert!(is_sorted_by_start(&[]));
    }
}
