use ivdiff_core::models::{Fragment, Interval, IntervalCollection};
use ivdiff_core::sort::{apply_order, sort_by_start};
use ivdiff_overlap::partition;

use crate::errors::{DifferenceError, Group};
use crate::options::DifferenceOptions;
use crate::projector::MetadataProjector;
use crate::validate::validate_within_group;

fn prepare(a: &[Interval], b: &[Interval], options: &DifferenceOptions) -> Result<(), DifferenceError> {
    options.check()?;
    if options.validate {
        validate_within_group(a, Group::Minuend)?;
        validate_within_group(b, Group::Subtrahend)?;
    }
    Ok(())
}

/// Fragments of `a` left after removing `b`, with `a` already sorted.
fn subtract(labels: &[Fragment], b: &[Interval], options: &DifferenceOptions) -> Vec<Fragment> {
    let label_intervals: Vec<Interval> = labels.iter().map(|l| l.interval).collect();
    let b_sorted = apply_order(b, &sort_by_start(b));

    // bounds touching no label cannot clip anything
    let bounds: Vec<Interval> = partition(&b_sorted, &label_intervals)
        .overlapping
        .into_iter()
        .map(|pos| b_sorted[pos])
        .collect();
    let split = partition(&label_intervals, &bounds);

    let overlapping: Vec<Fragment> = split.overlapping.iter().map(|&pos| labels[pos]).collect();
    let algorithm = options.algorithm.implementation();
    let mut fragments = algorithm.fragments(&overlapping, &bounds, options.min_len);

    fragments.extend(
        split
            .disjoint
            .iter()
            .map(|&pos| labels[pos])
            .filter(|label| label.len() > options.min_len),
    );
    fragments.sort_by(Fragment::total_cmp);
    fragments
}

fn fragments_unchecked(a: &[Interval], b: &[Interval], options: &DifferenceOptions) -> Vec<Fragment> {
    let labels: Vec<Fragment> = a
        .iter()
        .enumerate()
        .map(|(origin, interval)| Fragment {
            interval: *interval,
            origin,
        })
        .collect();
    if a.is_empty() || b.is_empty() {
        return labels;
    }

    let order = sort_by_start(a);
    subtract(&apply_order(&labels, &order), b, options)
}

///
/// Compute `a \ b` as fragments tagged with their row in `a`.
///
/// An empty `b` gives every interval of `a` back in input order. Otherwise the
/// fragments are sorted by start and strictly longer than `options.min_len`.
///
pub fn difference_fragments(
    a: &[Interval],
    b: &[Interval],
    options: &DifferenceOptions,
) -> Result<Vec<Fragment>, DifferenceError> {
    prepare(a, b, options)?;
    Ok(fragments_unchecked(a, b, options))
}

///
/// Subtract `b` from `a`, carrying `a`'s metadata over to the result.
///
/// Both collections are sorted internally, so input order does not matter.
/// The output is sorted by start, with one metadata row per fragment copied
/// from the `a` interval it came from.
///
/// # Errors
/// - [`DifferenceError::InvalidInput`] for a negative or NaN `min_len`, or a
///   metadata table that does not match its intervals
/// - [`DifferenceError::Overlapping`] when `options.validate` is set and
///   either side overlaps itself
///
/// ```rust
/// use ivdiff_core::models::{Interval, IntervalCollection};
/// use ivdiff_ops::{difference, DifferenceOptions};
///
/// let a = IntervalCollection::from(vec![(100.0, 200.0)]);
/// let b = IntervalCollection::from(vec![(120.0, 140.0), (160.0, 180.0)]);
///
/// let result = difference(&a, &b, &DifferenceOptions::default()).unwrap();
/// assert_eq!(
///     result.intervals(),
///     &[
///         Interval::new(100.0, 120.0),
///         Interval::new(140.0, 160.0),
///         Interval::new(180.0, 200.0),
///     ]
/// );
/// ```
pub fn difference(
    a: &IntervalCollection,
    b: &IntervalCollection,
    options: &DifferenceOptions,
) -> Result<IntervalCollection, DifferenceError> {
    a.check()?;
    b.check()?;
    prepare(a.intervals(), b.intervals(), options)?;

    if a.is_empty() {
        return Ok(a.empty_like());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let fragments = fragments_unchecked(a.intervals(), b.intervals(), options);
    MetadataProjector::new(a).collect(&fragments)
}

/// Set difference on interval collections.
pub trait IntervalDifference {
    /// Remove every part of `self` covered by `other`, keeping fragments
    /// longer than `min_len`. Uses the sweep.
    ///
    /// # Example
    /// ```text
    /// A: 100–200
    /// B: 120–140, 160–180
    /// difference(A, B): 100–120, 140–160, 180–200
    /// ```
    fn difference(
        &self,
        other: &IntervalCollection,
        min_len: f64,
    ) -> Result<IntervalCollection, DifferenceError>;

    /// [`difference`](Self::difference) with full control over the options.
    fn difference_with(
        &self,
        other: &IntervalCollection,
        options: &DifferenceOptions,
    ) -> Result<IntervalCollection, DifferenceError>;
}

impl IntervalDifference for IntervalCollection {
    fn difference(
        &self,
        other: &IntervalCollection,
        min_len: f64,
    ) -> Result<IntervalCollection, DifferenceError> {
        self.difference_with(other, &DifferenceOptions::new().with_min_len(min_len))
    }

    fn difference_with(
        &self,
        other: &IntervalCollection,
        options: &DifferenceOptions,
    ) -> Result<IntervalCollection, DifferenceError> {
        difference(self, other, options)
    }
}
