use proptest::prelude::*;

use ivdiff_core::models::{Interval, IntervalCollection, MetadataTable};
use ivdiff_ops::{Algorithm, DifferenceOptions, difference, difference_fragments};

///
/// Random group of intervals that do not overlap each other, in shuffled
/// order. Coordinates are multiples of 0.25, so every sum is exact.
///
fn arb_group(max_size: usize, min_step: u32) -> impl Strategy<Value = Vec<Interval>> {
    (
        0u32..400,
        prop::collection::vec((0u32..80, min_step..80), 0..max_size),
    )
        .prop_map(|(offset, steps)| {
            let mut cursor = offset as f64 / 4.0;
            steps
                .into_iter()
                .map(|(gap, len)| {
                    let start = cursor + gap as f64 / 4.0;
                    let end = start + len as f64 / 4.0;
                    cursor = end;
                    Interval::new(start, end)
                })
                .collect::<Vec<Interval>>()
        })
        .prop_shuffle()
}

fn tagged(intervals: Vec<Interval>) -> IntervalCollection {
    let mut table = MetadataTable::new(["tags"]);
    for idx in 0..intervals.len() {
        table.push_row(vec![format!("t{}", idx)]).unwrap();
    }
    IntervalCollection::with_metadata(intervals, table).unwrap()
}

fn with(algorithm: Algorithm, min_len: f64) -> DifferenceOptions {
    DifferenceOptions::new()
        .with_algorithm(algorithm)
        .with_min_len(min_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn sweep_matches_naive(
        a in arb_group(40, 1),
        b in arb_group(40, 0),
        min_len in 0u32..40,
    ) {
        let min_len = min_len as f64 / 4.0;
        let a = tagged(a);
        let b = IntervalCollection::new(b);

        let naive = difference(&a, &b, &with(Algorithm::Naive, min_len)).unwrap();
        let sweep = difference(&a, &b, &with(Algorithm::Sweep, min_len)).unwrap();
        prop_assert_eq!(naive, sweep);
    }

    #[test]
    fn sweep_matches_naive_fragments(a in arb_group(40, 1), b in arb_group(40, 0)) {
        let naive = difference_fragments(&a, &b, &with(Algorithm::Naive, 0.0)).unwrap();
        let sweep = difference_fragments(&a, &b, &with(Algorithm::Sweep, 0.0)).unwrap();
        prop_assert_eq!(naive, sweep);
    }

    #[test]
    fn subtracting_itself_leaves_nothing(a in arb_group(40, 1)) {
        let a = tagged(a);
        for algorithm in Algorithm::ALL {
            let result = difference(&a, &a, &with(algorithm, 0.0)).unwrap();
            prop_assert!(result.is_empty());
            prop_assert_eq!(result.metadata().map(MetadataTable::width), Some(1));
        }
    }

    #[test]
    fn subtracting_nothing_is_identity(a in arb_group(40, 0)) {
        let a = tagged(a);
        let result = difference(&a, &IntervalCollection::default(), &DifferenceOptions::default()).unwrap();
        prop_assert_eq!(result, a);
    }

    #[test]
    fn nothing_minus_anything_is_empty(b in arb_group(40, 0)) {
        let b = IntervalCollection::new(b);
        let result = difference(&IntervalCollection::default(), &b, &DifferenceOptions::default()).unwrap();
        prop_assert!(result.is_empty());
    }

    #[test]
    fn result_is_covered_by_a_and_avoids_b(
        a in arb_group(40, 1),
        b in arb_group(40, 0),
    ) {
        let fragments = difference_fragments(&a, &b, &DifferenceOptions::default()).unwrap();

        let total: f64 = fragments.iter().map(|f| f.len()).sum();
        let a_total: f64 = a.iter().map(Interval::len).sum();
        prop_assert!(total <= a_total);

        for fragment in &fragments {
            let origin = a[fragment.origin];
            prop_assert!(origin.start <= fragment.start() && fragment.end() <= origin.end);
            for bound in &b {
                prop_assert_eq!(fragment.interval.intersect(bound), 0.0);
            }
        }
    }

    #[test]
    fn fragments_are_longer_than_min_len(
        a in arb_group(40, 1),
        b in arb_group(40, 0),
        min_len in 0u32..40,
    ) {
        let min_len = min_len as f64 / 4.0;
        for algorithm in Algorithm::ALL {
            let fragments = difference_fragments(&a, &b, &with(algorithm, min_len)).unwrap();
            // without bounds the minuend comes back untouched
            if !b.is_empty() {
                prop_assert!(fragments.iter().all(|f| f.len() > min_len));
                prop_assert!(fragments.windows(2).all(|pair| pair[0].start() <= pair[1].start()));
            }
        }
    }
}
