//! Point-event sweep over several interval groups.
//!
//! Every interval `i` of group `g` becomes a start event `+(1 + i)` and an end
//! event `-(1 + i)` in column `g`. After a stable sort by coordinate the
//! running sum of a column is `1 + i` while interval `i` is open and zero
//! otherwise, provided the group does not overlap itself. The span between two
//! consecutive events is an atom, owned by the highest-numbered group that is
//! open over it.

use ivdiff_core::models::{Fragment, Interval};

use crate::traits::DifferenceAlgorithm;

const MINUEND: usize = 0;

/// A group's interval opening (`delta > 0`) or closing (`delta < 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEvent {
    pub coord: f64,
    pub group: usize,
    pub delta: i64,
}

/// The interval covering an atom after lower groups have been masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomOwner {
    pub group: usize,
    pub index: usize,
}

/// Span between two consecutive events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    pub interval: Interval,
    /// `None` for gaps covered by no group.
    pub owner: Option<AtomOwner>,
}

impl Atom {
    /// Index of the owning interval if the atom belongs to `group`.
    pub fn id(&self, group: usize) -> Option<usize> {
        self.owner
            .filter(|owner| owner.group == group)
            .map(|owner| owner.index)
    }

    pub fn is_gap(&self) -> bool {
        self.owner.is_none()
    }
}

/// Start and end events of all groups, ordered by coordinate.
///
/// Events are laid out as the starts then the ends of group 0, the starts then
/// the ends of group 1, and so on, before the stable sort. Events at the same
/// coordinate keep that layout order.
pub fn point_events(groups: &[&[Interval]]) -> Vec<PointEvent> {
    let total: usize = groups.iter().map(|g| g.len()).sum();
    let mut events = Vec::with_capacity(2 * total);
    for (group, intervals) in groups.iter().enumerate() {
        events.extend(intervals.iter().enumerate().map(|(idx, iv)| PointEvent {
            coord: iv.start,
            group,
            delta: 1 + idx as i64,
        }));
        events.extend(intervals.iter().enumerate().map(|(idx, iv)| PointEvent {
            coord: iv.end,
            group,
            delta: -(1 + idx as i64),
        }));
    }
    events.sort_by(|x, y| x.coord.total_cmp(&y.coord));
    events
}

/// The highest open group masks every lower one.
fn owner(sums: &[i64]) -> Option<AtomOwner> {
    let (group, &sum) = sums.iter().enumerate().rev().find(|(_, sum)| **sum != 0)?;
    // a negative sum only shows up when a group overlaps itself
    let index = usize::try_from(sum - 1).ok()?;
    Some(AtomOwner { group, index })
}

///
/// Cut the union of all groups into atoms.
///
/// # Arguments
/// - groups: interval groups, each sorted by start and free of self-overlap
/// - min_len: when given, atoms must be strictly longer than this
/// - drop_gaps: leave out atoms covered by no group
pub fn atomize(groups: &[&[Interval]], min_len: Option<f64>, drop_gaps: bool) -> Vec<Atom> {
    let events = point_events(groups);
    let mut sums = vec![0i64; groups.len()];
    let mut atoms = Vec::with_capacity(events.len().saturating_sub(1));

    for pair in events.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        sums[left.group] += left.delta;

        let atom = Atom {
            interval: Interval::new(left.coord, right.coord),
            owner: owner(&sums),
        };
        if drop_gaps && atom.is_gap() {
            continue;
        }
        if min_len.is_some_and(|min_len| atom.interval.len() <= min_len) {
            continue;
        }
        atoms.push(atom);
    }
    atoms
}

///
/// Production difference: a single sweep over the label and bound events.
///
/// Atoms owned by a label survive; anything under a bound is masked away.
/// Runs in O((n + m) log(n + m)).
///
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepDifference;

impl DifferenceAlgorithm for SweepDifference {
    fn fragments(&self, labels: &[Fragment], bounds: &[Interval], min_len: f64) -> Vec<Fragment> {
        let label_intervals: Vec<Interval> = labels.iter().map(|l| l.interval).collect();
        let atoms = atomize(&[label_intervals.as_slice(), bounds], Some(min_len), true);

        log::debug!(
            "sweep: {} labels, {} bounds, {} atoms",
            labels.len(),
            bounds.len(),
            atoms.len()
        );

        atoms
            .into_iter()
            .filter_map(|atom| {
                let label = labels.get(atom.id(MINUEND)?)?;
                Some(Fragment {
                    interval: atom.interval,
                    origin: label.origin,
                })
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "sweep"
    }
}
