//! Tab-separated interval files.
//!
//! A file holds one interval per line. The first non-comment line may be a
//! header naming the columns; it must contain `start` and `end`. Without a
//! header the first two columns are start and end and any further columns
//! are named `column_<n>` (1-based). Lines starting with `#` are skipped.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::errors::IntervalError;
use crate::models::{END_COLUMN, Interval, IntervalCollection, MetadataTable, START_COLUMN};
use crate::utils::get_dynamic_reader;

impl TryFrom<&Path> for IntervalCollection {
    type Error = anyhow::Error;

    ///
    /// Create a new [IntervalCollection] from a tsv file (optionally gzip'd).
    ///
    /// # Arguments:
    /// - value: path to the file on disk.
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;
        let collection = IntervalCollection::from_reader(reader)
            .map_err(|e| anyhow::anyhow!("{}: {}", value.display(), e))?;
        log::debug!(
            "loaded {} intervals from {}",
            collection.len(),
            value.display()
        );
        Ok(collection)
    }
}

impl TryFrom<&str> for IntervalCollection {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        IntervalCollection::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for IntervalCollection {
    type Error = anyhow::Error;

    fn try_from(value: PathBuf) -> Result<Self> {
        IntervalCollection::try_from(value.as_path())
    }
}

fn parse_coordinate(field: &str, line: usize, name: &str) -> Result<f64, IntervalError> {
    field.trim().parse::<f64>().map_err(|_| IntervalError::Parse {
        line,
        message: format!("can't parse {} position '{}'", name, field),
    })
}

impl IntervalCollection {
    ///
    /// Parse a collection from any buffered reader.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, IntervalError> {
        let mut intervals: Vec<Interval> = Vec::new();
        let mut table: Option<MetadataTable> = None;
        let mut first_line = true;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let string_line = line?;
            if string_line.trim().is_empty() || string_line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = string_line.split('\t').collect();

            if first_line {
                first_line = false;
                let is_header = parts.len() < 2
                    || parts[0].trim().parse::<f64>().is_err()
                    || parts[1].trim().parse::<f64>().is_err();
                if is_header {
                    let header = parts.iter().map(|p| p.trim().to_string()).collect();
                    table = Some(MetadataTable::with_header(header)?);
                    continue;
                }
                if parts.len() > 2 {
                    table = Some(MetadataTable::new(
                        (3..=parts.len()).map(|n| format!("column_{}", n)),
                    ));
                }
            }

            match table.as_mut() {
                Some(table) => {
                    if parts.len() != table.header().len() {
                        return Err(IntervalError::Parse {
                            line: line_no,
                            message: format!(
                                "expected {} columns, found {}",
                                table.header().len(),
                                parts.len()
                            ),
                        });
                    }
                    let mut start = 0.0;
                    let mut end = 0.0;
                    let mut cells = Vec::with_capacity(table.width());
                    for (name, field) in table.header().iter().zip(&parts) {
                        match name.as_str() {
                            START_COLUMN => start = parse_coordinate(field, line_no, "start")?,
                            END_COLUMN => end = parse_coordinate(field, line_no, "end")?,
                            _ => cells.push(field.to_string()),
                        }
                    }
                    table.push_row(cells)?;
                    intervals.push(Interval::new(start, end));
                }
                None => {
                    if parts.len() != 2 {
                        return Err(IntervalError::Parse {
                            line: line_no,
                            message: format!("expected 2 columns, found {}", parts.len()),
                        });
                    }
                    intervals.push(Interval::new(
                        parse_coordinate(parts[0], line_no, "start")?,
                        parse_coordinate(parts[1], line_no, "end")?,
                    ));
                }
            }
        }

        match table {
            Some(table) => IntervalCollection::with_metadata(intervals, table),
            None => Ok(IntervalCollection::new(intervals)),
        }
    }

    ///
    /// Write the collection as tsv. A header line is written when metadata is
    /// present; bare intervals are written as `start\tend` lines.
    ///
    pub fn write_tsv<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        if let Some(table) = self.metadata() {
            writeln!(writer, "{}", table.header().join("\t"))?;
        }
        for idx in 0..self.len() {
            if let Some(record) = self.record(idx) {
                writeln!(writer, "{}", record.join("\t"))?;
            }
        }
        Ok(())
    }

    ///
    /// Save the collection to disk as a tsv file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    pub fn to_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("{} already exists. Overwriting existing file", path.display());
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_tsv(&mut writer)?;
        writer.flush()
    }
}
