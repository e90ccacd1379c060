//! Locating the first disagreement between two difference results.

use serde::Serialize;

use ivdiff_core::models::{Interval, IntervalCollection};

/// How far around the differing window the operands are searched for context.
pub const CONTEXT_DELTA: f64 = 300.0;

const WINDOW_BEFORE: usize = 2;
const WINDOW_AFTER: usize = 3;

///
/// Where and how two results disagree.
///
/// The windows hold the results' intervals from two before to two after the
/// first differing row. The context holds every operand interval reaching
/// within [`CONTEXT_DELTA`] of the windows' span.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    /// First row at which the results differ, in coordinates or metadata.
    pub index: usize,
    pub naive_len: usize,
    pub sweep_len: usize,
    pub naive_window: Vec<Interval>,
    pub sweep_window: Vec<Interval>,
    pub a_context: Vec<Interval>,
    pub b_context: Vec<Interval>,
}

fn window(intervals: &[Interval], index: usize) -> Vec<Interval> {
    let lo = index.saturating_sub(WINDOW_BEFORE).min(intervals.len());
    let hi = (index + WINDOW_AFTER).min(intervals.len());
    intervals[lo..hi].to_vec()
}

fn near(intervals: &[Interval], lo: f64, hi: f64) -> Vec<Interval> {
    intervals
        .iter()
        .filter(|iv| iv.end > lo - CONTEXT_DELTA && iv.start < hi + CONTEXT_DELTA)
        .copied()
        .collect()
}

///
/// Compare the naive and sweep results of one sample.
///
/// Returns `None` when both hold the same intervals with the same metadata.
///
pub fn find_mismatch(
    naive: &IntervalCollection,
    sweep: &IntervalCollection,
    a: &IntervalCollection,
    b: &IntervalCollection,
) -> Option<Mismatch> {
    if naive == sweep {
        return None;
    }

    let shared = naive.len().min(sweep.len());
    let index = (0..shared)
        .find(|&idx| naive.record(idx) != sweep.record(idx))
        .unwrap_or(shared);

    let naive_window = window(naive.intervals(), index);
    let sweep_window = window(sweep.intervals(), index);

    let both = || naive_window.iter().chain(&sweep_window);
    let lo = both().map(|iv| iv.start).fold(f64::INFINITY, f64::min);
    let hi = both().map(|iv| iv.end).fold(f64::NEG_INFINITY, f64::max);

    Some(Mismatch {
        index,
        naive_len: naive.len(),
        sweep_len: sweep.len(),
        a_context: near(a.intervals(), lo, hi),
        b_context: near(b.intervals(), lo, hi),
        naive_window,
        sweep_window,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use ivdiff_core::models::MetadataTable;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn collection(raw: &[(f64, f64)]) -> IntervalCollection {
        IntervalCollection::from(raw.to_vec())
    }

    #[rstest]
    fn test_equal_results() {
        let result = collection(&[(0.0, 1.0)]);
        assert_eq!(find_mismatch(&result, &result, &result, &result), None);
    }

    #[rstest]
    fn test_first_difference_and_context() {
        let naive = collection(&[
            (0.0, 10.0),
            (20.0, 30.0),
            (40.0, 50.0),
            (60.0, 70.0),
            (80.0, 90.0),
            (1000.0, 1010.0),
        ]);
        let sweep = collection(&[
            (0.0, 10.0),
            (20.0, 30.0),
            (40.0, 45.0),
            (60.0, 70.0),
            (80.0, 90.0),
            (1000.0, 1010.0),
        ]);
        let a = collection(&[(0.0, 90.0), (1000.0, 1010.0)]);
        let b = collection(&[(45.0, 50.0), (2000.0, 2010.0)]);

        let mismatch = find_mismatch(&naive, &sweep, &a, &b).unwrap();
        assert_eq!(mismatch.index, 2);
        assert_eq!(mismatch.naive_window.len(), 5);
        assert_eq!(mismatch.sweep_window[2], Interval::new(40.0, 45.0));
        // the windows span 0..90, so the far intervals are left out
        assert_eq!(mismatch.a_context, vec![Interval::new(0.0, 90.0)]);
        assert_eq!(mismatch.b_context, vec![Interval::new(45.0, 50.0)]);
    }

    #[rstest]
    fn test_length_difference() {
        let naive = collection(&[(0.0, 10.0), (20.0, 30.0)]);
        let sweep = collection(&[(0.0, 10.0)]);
        let mismatch = find_mismatch(&naive, &sweep, &naive, &sweep).unwrap();
        assert_eq!(mismatch.index, 1);
        assert_eq!(mismatch.naive_window, naive.intervals());
        assert_eq!(mismatch.sweep_window, sweep.intervals());
    }

    #[rstest]
    fn test_metadata_difference() {
        let tagged = |tag: &str| {
            let mut table = MetadataTable::new(["tags"]);
            table.push_row(vec![tag.to_string()]).unwrap();
            IntervalCollection::with_metadata(vec![Interval::new(0.0, 1.0)], table).unwrap()
        };
        let mismatch = find_mismatch(&tagged("q"), &tagged("w"), &tagged("q"), &tagged("w")).unwrap();
        assert_eq!(mismatch.index, 0);
    }
}
