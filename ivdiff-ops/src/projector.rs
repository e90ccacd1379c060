use ivdiff_core::models::{Fragment, IntervalCollection, MetadataTable};

use crate::errors::DifferenceError;

///
/// Carries the minuend's metadata over to the fragments cut from it.
///
/// Each output row is a copy of the row named by the fragment's origin. The
/// header, and with it the column order, is the minuend's. Coordinates come
/// from the fragments themselves, never from the copied rows.
///
#[derive(Debug, Clone, Copy)]
pub struct MetadataProjector<'a> {
    source: &'a IntervalCollection,
}

impl<'a> MetadataProjector<'a> {
    pub fn new(source: &'a IntervalCollection) -> Self {
        MetadataProjector { source }
    }

    ///
    /// Select `origins` rows of `table`, in the given order.
    ///
    pub fn project(table: &MetadataTable, origins: &[usize]) -> Result<MetadataTable, DifferenceError> {
        if let Some(bad) = origins.iter().find(|&&origin| origin >= table.len()) {
            return Err(DifferenceError::InvalidInput(format!(
                "fragment origin {} is out of range for {} metadata rows",
                bad,
                table.len()
            )));
        }
        Ok(table.select_rows(origins)?)
    }

    ///
    /// Build the output collection for `fragments`, which must already be in
    /// their final order.
    ///
    pub fn collect(&self, fragments: &[Fragment]) -> Result<IntervalCollection, DifferenceError> {
        let intervals = fragments.iter().map(|f| f.interval).collect();
        match self.source.metadata() {
            Some(table) => {
                let origins: Vec<usize> = fragments.iter().map(|f| f.origin).collect();
                let rows = Self::project(table, &origins)?;
                Ok(IntervalCollection::with_metadata(intervals, rows)?)
            }
            None => {
                if let Some(bad) = fragments.iter().find(|f| f.origin >= self.source.len()) {
                    return Err(DifferenceError::InvalidInput(format!(
                        "fragment origin {} is out of range for {} intervals",
                        bad.origin,
                        self.source.len()
                    )));
                }
                Ok(IntervalCollection::new(intervals))
            }
        }
    }
}
