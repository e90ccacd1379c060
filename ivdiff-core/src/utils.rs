use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::models::Interval;
use crate::sort::{apply_order, sort_by_start};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Get a reader for a file path, or stdin when the path is `-`.
///
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// Concatenate interval groups and order the result by start.
///
pub fn concat_sorted(groups: &[&[Interval]]) -> Vec<Interval> {
    let all: Vec<Interval> = groups.iter().flat_map(|g| g.iter().copied()).collect();
    let order = sort_by_start(&all);
    apply_order(&all, &order)
}

///
/// Gaps between consecutive sorted, non-overlapping intervals, optionally
/// extended to `minimum` on the left and `maximum` on the right.
///
/// With no intervals the result is `[(minimum, maximum)]` when both bounds are
/// given, and empty otherwise.
///
pub fn complement(
    intervals: &[Interval],
    minimum: Option<f64>,
    maximum: Option<f64>,
) -> Vec<Interval> {
    let (Some(first), Some(last)) = (intervals.first(), intervals.last()) else {
        return match (minimum, maximum) {
            (Some(lo), Some(hi)) => vec![Interval::new(lo, hi)],
            _ => Vec::new(),
        };
    };

    let mut result = Vec::with_capacity(intervals.len() + 1);
    if let Some(lo) = minimum.filter(|lo| *lo < first.start) {
        result.push(Interval::new(lo, first.start));
    }
    result.extend(
        intervals
            .windows(2)
            .map(|pair| Interval::new(pair[0].end, pair[1].start)),
    );
    if let Some(hi) = maximum.filter(|hi| last.end < *hi) {
        result.push(Interval::new(last.end, hi));
    }
    result
}

///
/// Intervals between consecutive points, keeping only those longer than `min_len`.
///
pub fn intervals_from_points(points: &[f64], min_len: f64) -> Vec<Interval> {
    points
        .windows(2)
        .map(|pair| Interval::new(pair[0], pair[1]))
        .filter(|interval| interval.len() > min_len)
        .collect()
}
