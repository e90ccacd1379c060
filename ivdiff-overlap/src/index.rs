use ivdiff_core::models::Interval;

/// Sorted start and end coordinates of an interval set.
///
/// Starts and ends are sorted independently, as in the BITS scheme
/// (<https://arxiv.org/pdf/1208.3407.pdf>), which keeps the counts correct even
/// when the indexed intervals overlap each other.
///
/// # Examples
///
/// ```
/// use ivdiff_core::models::Interval;
/// use ivdiff_overlap::OverlapIndex;
///
/// let bounds = vec![Interval::new(150.0, 580.0), Interval::new(720.0, 890.0)];
/// let index = OverlapIndex::build(&bounds);
///
/// assert_eq!(index.count(100.0, 800.0), 2);
/// assert!(!index.overlaps(600.0, 700.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OverlapIndex {
    /// Sorted list of start positions
    starts: Vec<f64>,
    /// Sorted list of end positions
    ends: Vec<f64>,
}

impl OverlapIndex {
    pub fn build(intervals: &[Interval]) -> Self {
        let (mut starts, mut ends): (Vec<f64>, Vec<f64>) =
            intervals.iter().map(|x| (x.start, x.end)).unzip();
        starts.sort_by(f64::total_cmp);
        ends.sort_by(f64::total_cmp);
        OverlapIndex { starts, ends }
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Binary search for the insertion position of a key in a sorted slice.
    ///
    /// Returns the first index where `elems[index] >= key`, `0` if the key
    /// belongs at the beginning and `elems.len()` if it belongs at the end.
    #[inline]
    pub fn bsearch_seq(key: f64, elems: &[f64]) -> usize {
        if elems.is_empty() || elems[0].total_cmp(&key).is_ge() {
            return 0;
        } else if elems[elems.len() - 1].total_cmp(&key).is_lt() {
            return elems.len();
        }

        let mut cursor = 0;
        let mut length = elems.len();
        while length > 1 {
            let half = length >> 1;
            length -= half;
            cursor += usize::from(elems[cursor + half - 1].total_cmp(&key).is_lt()) * half;
        }
        cursor
    }

    /// Count the indexed intervals that can intersect `start .. end`.
    ///
    /// This is the number of intervals starting before `end` minus the number
    /// ending before `start`. An indexed interval that ends exactly at `start`
    /// is counted; one that starts exactly at `end` is not.
    #[inline]
    pub fn count(&self, start: f64, end: f64) -> usize {
        let ended_before = Self::bsearch_seq(start, &self.ends);
        let started_before = Self::bsearch_seq(end, &self.starts);
        started_before.saturating_sub(ended_before)
    }

    /// True when [`count`](Self::count) is nonzero.
    #[inline]
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        self.count(start, end) > 0
    }
}
