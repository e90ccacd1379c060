use ivdiff_core::models::{Fragment, Interval};

/// A strategy for subtracting sorted bounds from sorted labels.
///
/// Implementations receive labels as [`Fragment`]s so the caller's row of
/// each label travels with it; every output fragment carries the origin of
/// the label it was cut from. Both inputs are sorted by start and neither
/// overlaps itself. Output is in ascending start order and only holds
/// fragments strictly longer than `min_len`.
pub trait DifferenceAlgorithm: Send + Sync {
    fn fragments(&self, labels: &[Fragment], bounds: &[Interval], min_len: f64) -> Vec<Fragment>;

    fn name(&self) -> &'static str;
}
