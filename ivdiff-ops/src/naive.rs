use ivdiff_core::models::{Fragment, Interval};

use crate::traits::DifferenceAlgorithm;

/// How a bound sits relative to the part of a label still being clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// ```text
    /// L :          (----)
    /// B : (----)
    /// ```
    Before,
    /// ```text
    /// L : (----)
    /// B :          (----)
    /// ```
    After,
    /// ```text
    /// L :     (----)
    /// B :  (----------)
    /// ```
    Covers,
    /// ```text
    /// L :       (------)
    /// B :   (------)
    /// ```
    ClipsStart,
    /// ```text
    /// L :   (-----------)
    /// B :      (----)
    /// ```
    Splits,
    /// ```text
    /// L :   (------)
    /// B :       (------)
    /// ```
    ClipsEnd,
}

impl Overlap {
    /// Classify `bound` against the label span `label_start .. label_end`.
    ///
    /// The checks run in declaration order and the first match wins. `None`
    /// is only possible for a malformed bound whose start lies after its end.
    pub fn classify(label_start: f64, label_end: f64, bound: &Interval) -> Option<Overlap> {
        let (bound_start, bound_end) = (bound.start, bound.end);
        if bound_end <= label_start {
            Some(Overlap::Before)
        } else if label_end < bound_start {
            Some(Overlap::After)
        } else if bound_start <= label_start && label_end <= bound_end {
            Some(Overlap::Covers)
        } else if bound_start <= label_start && bound_end <= label_end {
            Some(Overlap::ClipsStart)
        } else if label_start <= bound_start && bound_end < label_end {
            Some(Overlap::Splits)
        } else if label_start <= bound_start && label_end <= bound_end {
            Some(Overlap::ClipsEnd)
        } else {
            None
        }
    }
}

///
/// Reference difference: every label is clipped by scanning the bounds in
/// order of start.
///
/// Quadratic in the worst case. It is kept as the oracle the sweep is checked
/// against, not for production use.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDifference;

impl NaiveDifference {
    /// Clip one label, appending its surviving pieces to `out`.
    fn clip(label: &Fragment, bounds: &[Interval], min_len: f64, out: &mut Vec<Fragment>) {
        let mut label_start = label.start();
        let mut label_end = label.end();

        for bound in bounds {
            match Overlap::classify(label_start, label_end, bound) {
                Some(Overlap::Before) | None => continue,
                Some(Overlap::After) => break,
                Some(Overlap::Covers) => return,
                Some(Overlap::ClipsStart) => {
                    label_start = bound.end;
                }
                Some(Overlap::Splits) => {
                    if bound.start - label_start > min_len {
                        out.push(Fragment::new(label_start, bound.start, label.origin));
                    }
                    label_start = bound.end;
                }
                Some(Overlap::ClipsEnd) => {
                    label_end = bound.start;
                    break;
                }
            }
        }

        if label_end - label_start > min_len {
            out.push(Fragment::new(label_start, label_end, label.origin));
        }
    }
}

impl DifferenceAlgorithm for NaiveDifference {
    fn fragments(&self, labels: &[Fragment], bounds: &[Interval], min_len: f64) -> Vec<Fragment> {
        let mut result = Vec::new();
        // bounds ending at or before a label's start cannot touch any later label either
        let mut cursor = 0;
        for label in labels {
            while cursor < bounds.len() && bounds[cursor].end <= label.start() {
                cursor += 1;
            }
            Self::clip(label, &bounds[cursor..], min_len, &mut result);
        }
        result
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn labels(raw: &[(f64, f64)]) -> Vec<Fragment> {
        raw.iter()
            .enumerate()
            .map(|(idx, &(start, end))| Fragment::new(start, end, idx))
            .collect()
    }

    fn bounds(raw: &[(f64, f64)]) -> Vec<Interval> {
        raw.iter().copied().map(Interval::from).collect()
    }

    #[rstest]
    #[case((0.0, 50.0), Overlap::Before)]
    #[case((0.0, 100.0), Overlap::Before)]
    #[case((250.0, 300.0), Overlap::After)]
    #[case((50.0, 250.0), Overlap::Covers)]
    #[case((100.0, 200.0), Overlap::Covers)]
    #[case((50.0, 150.0), Overlap::ClipsStart)]
    #[case((120.0, 180.0), Overlap::Splits)]
    #[case((150.0, 250.0), Overlap::ClipsEnd)]
    #[case((200.0, 300.0), Overlap::ClipsEnd)]
    fn test_classify(#[case] bound: (f64, f64), #[case] expected: Overlap) {
        let bound = Interval::from(bound);
        assert_eq!(Overlap::classify(100.0, 200.0, &bound), Some(expected));
    }

    #[rstest]
    fn test_label_split_twice() {
        let result = NaiveDifference.fragments(
            &labels(&[(100.0, 200.0)]),
            &bounds(&[(120.0, 140.0), (160.0, 180.0)]),
            0.0,
        );
        assert_eq!(
            result,
            vec![
                Fragment::new(100.0, 120.0, 0),
                Fragment::new(140.0, 160.0, 0),
                Fragment::new(180.0, 200.0, 0),
            ]
        );
    }

    #[rstest]
    fn test_bound_spanning_several_labels() {
        let result = NaiveDifference.fragments(
            &labels(&[(0.0, 10.0), (20.0, 30.0), (40.0, 50.0)]),
            &bounds(&[(5.0, 45.0)]),
            0.0,
        );
        assert_eq!(
            result,
            vec![Fragment::new(0.0, 5.0, 0), Fragment::new(45.0, 50.0, 2)]
        );
    }

    #[rstest]
    fn test_min_len_drops_short_pieces() {
        let result = NaiveDifference.fragments(
            &labels(&[(100.0, 200.0)]),
            &bounds(&[(105.0, 150.0)]),
            5.0,
        );
        assert_eq!(result, vec![Fragment::new(150.0, 200.0, 0)]);
    }

    #[rstest]
    fn test_zero_length_bound_splits_label() {
        let result =
            NaiveDifference.fragments(&labels(&[(0.0, 10.0)]), &bounds(&[(4.0, 4.0)]), 0.0);
        assert_eq!(
            result,
            vec![Fragment::new(0.0, 4.0, 0), Fragment::new(4.0, 10.0, 0)]
        );
    }

    #[rstest]
    fn test_touching_bounds_leave_label_alone() {
        let result = NaiveDifference.fragments(
            &labels(&[(100.0, 200.0)]),
            &bounds(&[(50.0, 100.0), (200.0, 250.0)]),
            0.0,
        );
        assert_eq!(result, vec![Fragment::new(100.0, 200.0, 0)]);
    }

    #[rstest]
    fn test_no_bounds_keeps_everything() {
        let input = labels(&[(0.0, 1.0), (2.0, 3.0)]);
        assert_eq!(NaiveDifference.fragments(&input, &[], 0.0), input);
    }
}
