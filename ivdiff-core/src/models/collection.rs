use std::fmt::{self, Display};

use crate::errors::IntervalError;
use crate::models::{Interval, MetadataTable};
use crate::sort::{apply_order, sort_by_start};

///
/// IntervalCollection struct, an ordered sequence of intervals with an
/// optional row-aligned metadata side-table.
///
/// Whenever metadata is present it holds exactly one row per interval; every
/// constructor that accepts metadata checks this.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalCollection {
    intervals: Vec<Interval>,
    metadata: Option<MetadataTable>,
}

impl IntervalCollection {
    pub fn new(intervals: Vec<Interval>) -> Self {
        IntervalCollection {
            intervals,
            metadata: None,
        }
    }

    ///
    /// Pair intervals with a metadata table.
    ///
    /// # Errors
    /// [`IntervalError::RowCountMismatch`] when the table does not have one row
    /// per interval.
    pub fn with_metadata(
        intervals: Vec<Interval>,
        metadata: MetadataTable,
    ) -> Result<Self, IntervalError> {
        let collection = IntervalCollection {
            intervals,
            metadata: Some(metadata),
        };
        collection.check()?;
        Ok(collection)
    }

    ///
    /// An empty collection that keeps this collection's declared columns.
    ///
    pub fn empty_like(&self) -> Self {
        IntervalCollection {
            intervals: Vec::new(),
            metadata: self.metadata.as_ref().map(MetadataTable::empty_like),
        }
    }

    ///
    /// Verify the metadata row count matches the number of intervals.
    ///
    pub fn check(&self) -> Result<(), IntervalError> {
        match &self.metadata {
            Some(table) if table.len() != self.intervals.len() => {
                Err(IntervalError::RowCountMismatch {
                    intervals: self.intervals.len(),
                    metadata: table.len(),
                })
            }
            _ => Ok(()),
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn metadata(&self) -> Option<&MetadataTable> {
        self.metadata.as_ref()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    ///
    /// Copy of this collection ordered by start, metadata rows moved along.
    /// Equal starts keep their input order.
    ///
    pub fn sorted(&self) -> Self {
        let order = sort_by_start(&self.intervals);
        IntervalCollection {
            intervals: apply_order(&self.intervals, &order),
            metadata: self.metadata.as_ref().map(|table| {
                // the row count was checked on construction, so indices are in range
                table
                    .select_rows(&order)
                    .unwrap_or_else(|_| table.empty_like())
            }),
        }
    }

    ///
    /// Sum of all interval lengths.
    ///
    pub fn total_length(&self) -> f64 {
        self.intervals.iter().map(Interval::len).sum()
    }

    ///
    /// Full record for row `idx`: the metadata row with this interval's
    /// coordinates spliced in, or just `start` and `end` without metadata.
    ///
    pub fn record(&self, idx: usize) -> Option<Vec<String>> {
        let interval = self.intervals.get(idx)?;
        match &self.metadata {
            Some(table) => table.record(idx, interval),
            None => Some(vec![interval.start.to_string(), interval.end.to_string()]),
        }
    }
}

impl From<Vec<Interval>> for IntervalCollection {
    fn from(intervals: Vec<Interval>) -> Self {
        IntervalCollection::new(intervals)
    }
}

impl From<Vec<(f64, f64)>> for IntervalCollection {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        IntervalCollection::new(pairs.into_iter().map(Interval::from).collect())
    }
}

impl FromIterator<Interval> for IntervalCollection {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        IntervalCollection::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a IntervalCollection {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl Display for IntervalCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntervalCollection with {} intervals.", self.len())
    }
}
