use crate::errors::IntervalError;
use crate::models::Interval;

/// Name of the interval start column.
pub const START_COLUMN: &str = "start";
/// Name of the interval end column.
pub const END_COLUMN: &str = "end";

///
/// Side-table of named string columns, row-aligned with an interval sequence.
///
/// The header keeps the caller's full column order, including the positions of
/// the `start` and `end` columns. Cells are only stored for the other
/// columns; interval coordinates are always taken from the intervals
/// themselves when a full record is rendered.
///
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataTable {
    header: Vec<String>,
    start_column: usize,
    end_column: usize,
    rows: Vec<Vec<String>>,
}

impl MetadataTable {
    ///
    /// Create an empty table with `start`, `end` followed by `columns`.
    ///
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut header = vec![START_COLUMN.to_string(), END_COLUMN.to_string()];
        header.extend(columns.into_iter().map(Into::into));
        MetadataTable {
            header,
            start_column: 0,
            end_column: 1,
            rows: Vec::new(),
        }
    }

    ///
    /// Create an empty table from a full header, which must name the `start`
    /// and `end` columns exactly once.
    ///
    pub fn with_header(header: Vec<String>) -> Result<Self, IntervalError> {
        let position = |name: &str| -> Result<usize, IntervalError> {
            let mut found = header.iter().enumerate().filter(|(_, h)| *h == name);
            match (found.next(), found.next()) {
                (Some((idx, _)), None) => Ok(idx),
                (None, _) => Err(IntervalError::MissingColumn(name.to_string())),
                (Some(_), Some(_)) => Err(IntervalError::InvalidInput(format!(
                    "column '{}' appears more than once in header",
                    name
                ))),
            }
        };
        let start_column = position(START_COLUMN)?;
        let end_column = position(END_COLUMN)?;

        Ok(MetadataTable {
            header,
            start_column,
            end_column,
            rows: Vec::new(),
        })
    }

    ///
    /// A table with the same header and no rows.
    ///
    pub fn empty_like(&self) -> Self {
        MetadataTable {
            header: self.header.clone(),
            start_column: self.start_column,
            end_column: self.end_column,
            rows: Vec::new(),
        }
    }

    ///
    /// Append a row of non-interval cells, in header order.
    ///
    pub fn push_row(&mut self, cells: Vec<String>) -> Result<(), IntervalError> {
        if cells.len() != self.width() {
            return Err(IntervalError::InvalidInput(format!(
                "row has {} cells, table has {} metadata columns",
                cells.len(),
                self.width()
            )));
        }
        self.rows.push(cells);
        Ok(())
    }

    /// The full header, interval columns included.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Names of the non-interval columns, in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.header
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != self.start_column && *idx != self.end_column)
            .map(|(_, name)| name.as_str())
    }

    /// Number of non-interval columns.
    pub fn width(&self) -> usize {
        self.header.len() - 2
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> Option<&[String]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    ///
    /// Get a single cell by row and column name.
    ///
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.columns().position(|c| c == column)?;
        self.rows.get(row).map(|cells| cells[col].as_str())
    }

    ///
    /// New table whose rows are `indices` taken from this one, in the given order.
    ///
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self, IntervalError> {
        let mut rows = Vec::with_capacity(indices.len());
        for &idx in indices {
            let row = self.rows.get(idx).ok_or_else(|| {
                IntervalError::InvalidInput(format!(
                    "row {} out of range for metadata with {} rows",
                    idx,
                    self.rows.len()
                ))
            })?;
            rows.push(row.clone());
        }

        Ok(MetadataTable {
            header: self.header.clone(),
            start_column: self.start_column,
            end_column: self.end_column,
            rows,
        })
    }

    ///
    /// Render row `idx` in full header order, with `interval`'s coordinates
    /// in the interval columns.
    ///
    pub fn record(&self, idx: usize, interval: &Interval) -> Option<Vec<String>> {
        let mut cells = self.rows.get(idx)?.iter();
        let record = (0..self.header.len())
            .map(|col| {
                if col == self.start_column {
                    interval.start.to_string()
                } else if col == self.end_column {
                    interval.end.to_string()
                } else {
                    cells.next().cloned().unwrap_or_default()
                }
            })
            .collect();
        Some(record)
    }
}
