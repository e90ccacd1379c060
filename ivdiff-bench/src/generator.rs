use rand::Rng;
use serde::{Deserialize, Serialize};

use ivdiff_core::models::{Interval, IntervalCollection, MetadataTable};

use crate::errors::BenchError;

/// Parameters of [`generate_random_intervals`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Start of the first interval.
    pub start: f64,
    /// Scale of the random part of each gap and length.
    pub max_len: f64,
    /// Fixed part of each gap and length.
    pub min_len: f64,
    /// Decimal places every gap and length is rounded to.
    pub precision: u32,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        GeneratorParams {
            start: 0.0,
            max_len: 100.0,
            min_len: 10.0,
            precision: 2,
        }
    }
}

impl GeneratorParams {
    pub fn new(start: f64, max_len: f64) -> Self {
        GeneratorParams {
            start,
            max_len,
            ..Default::default()
        }
    }

    pub fn check(&self) -> Result<(), BenchError> {
        let finite = self.start.is_finite() && self.max_len.is_finite() && self.min_len.is_finite();
        if !finite || self.max_len < 0.0 || self.min_len < 0.0 {
            return Err(BenchError::InvalidConfig(format!(
                "generator needs finite, non-negative lengths (start {}, max_len {}, min_len {})",
                self.start, self.max_len, self.min_len
            )));
        }
        if self.precision > 15 {
            return Err(BenchError::InvalidConfig(format!(
                "precision of {} decimals is beyond f64",
                self.precision
            )));
        }
        Ok(())
    }
}

/// Round half to even, as numeric libraries usually do.
fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round_ties_even() / scale
}

///
/// Generate `n` sorted, non-overlapping random intervals.
///
/// Gaps and lengths alternate, each drawn as `min_len + max_len * U[0, 1)` and
/// rounded to `precision` decimals. The first interval starts at `start`.
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use ivdiff_bench::{GeneratorParams, generate_random_intervals};
///
/// let mut rng = StdRng::seed_from_u64(1234);
/// let intervals = generate_random_intervals(5, &GeneratorParams::new(100.0, 100.0), &mut rng);
/// assert_eq!(intervals.len(), 5);
/// assert_eq!(intervals[0].start, 100.0);
/// ```
pub fn generate_random_intervals<R: Rng>(
    n: usize,
    params: &GeneratorParams,
    rng: &mut R,
) -> Vec<Interval> {
    if n == 0 {
        return Vec::new();
    }

    let mut cursor = params.start;
    let mut intervals = Vec::with_capacity(n);
    for idx in 0..n {
        if idx > 0 {
            cursor += round_to(params.min_len + params.max_len * rng.random::<f64>(), params.precision);
        }
        let start = cursor;
        cursor += round_to(params.min_len + params.max_len * rng.random::<f64>(), params.precision);
        intervals.push(Interval::new(start, cursor));
    }
    intervals
}

///
/// Like [`generate_random_intervals`], optionally with a `tags` column of
/// random lowercase letters.
///
pub fn generate_collection<R: Rng>(
    n: usize,
    params: &GeneratorParams,
    with_tags: bool,
    rng: &mut R,
) -> Result<IntervalCollection, BenchError> {
    let intervals = generate_random_intervals(n, params, rng);
    if !with_tags {
        return Ok(IntervalCollection::new(intervals));
    }

    let mut table = MetadataTable::new(["tags"]);
    for _ in 0..intervals.len() {
        let tag = char::from(b'a' + rng.random_range(0..26u8));
        table.push_row(vec![tag.to_string()])?;
    }
    Ok(IntervalCollection::with_metadata(intervals, table)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ivdiff_ops::is_within_group_disjoint;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::*;

    #[rstest]
    fn test_generate_is_sorted_and_disjoint() {
        let mut rng = StdRng::seed_from_u64(1234);
        let params = GeneratorParams::new(100.0, 100.0);
        let intervals = generate_random_intervals(500, &params, &mut rng);

        assert_eq!(intervals.len(), 500);
        assert_eq!(intervals[0].start, 100.0);
        assert!(is_within_group_disjoint(&intervals));
        for pair in intervals.windows(2) {
            let gap = pair[1].start - pair[0].end;
            assert!(gap >= 10.0 - 1e-9 && gap <= 110.0 + 1e-9);
        }
        for interval in &intervals {
            assert!(interval.len() >= 10.0 - 1e-9 && interval.len() <= 110.0 + 1e-9);
        }
    }

    #[rstest]
    fn test_generate_same_seed_same_output() {
        let params = GeneratorParams::default();
        let first = generate_random_intervals(50, &params, &mut StdRng::seed_from_u64(7));
        let second = generate_random_intervals(50, &params, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_generate_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_random_intervals(0, &GeneratorParams::default(), &mut rng).is_empty());
    }

    #[rstest]
    fn test_generate_fixed_lengths_without_randomness() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = GeneratorParams {
            start: 5.0,
            max_len: 0.0,
            min_len: 10.0,
            precision: 0,
        };
        assert_eq!(
            generate_random_intervals(3, &params, &mut rng),
            vec![
                Interval::new(5.0, 15.0),
                Interval::new(25.0, 35.0),
                Interval::new(45.0, 55.0),
            ]
        );
    }

    #[rstest]
    #[case(0.125, 2, 0.12)]
    #[case(0.135, 0, 0.0)]
    #[case(2.5, 0, 2.0)]
    #[case(3.5, 0, 4.0)]
    fn test_round_to(#[case] value: f64, #[case] precision: u32, #[case] expected: f64) {
        assert_eq!(round_to(value, precision), expected);
    }

    #[rstest]
    fn test_generate_collection_tags() {
        let mut rng = StdRng::seed_from_u64(3);
        let collection = generate_collection(20, &GeneratorParams::default(), true, &mut rng).unwrap();
        let table = collection.metadata().unwrap();
        assert_eq!(table.len(), 20);
        for row in 0..20 {
            let tag = table.get(row, "tags").unwrap();
            assert!(tag.len() == 1 && tag.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[rstest]
    fn test_params_check() {
        assert!(GeneratorParams::default().check().is_ok());
        let bad = GeneratorParams {
            max_len: -1.0,
            ..Default::default()
        };
        assert!(matches!(bad.check(), Err(BenchError::InvalidConfig(_))));
    }
}
