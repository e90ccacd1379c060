use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::BenchError;
use crate::runner::BenchReport;

const LABEL_WIDTH: usize = 28;
const TIME_WIDTH: usize = 20;

fn format_row(cells: [String; 3]) -> String {
    format!(
        " {:<label$}| {:<time$}| {:<time$}",
        cells[0],
        cells[1],
        cells[2],
        label = LABEL_WIDTH,
        time = TIME_WIDTH
    )
}

fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(mean) => format!("{:.6}", mean),
        None => "-".to_string(),
    }
}

///
/// Fixed-width table of mean seconds per size for each algorithm.
///
pub fn render_table(report: &BenchReport) -> String {
    let mode = if report.metadata { "meta" } else { "bare" };
    let header = format_row([
        format!("[{}] Intervals ({} samples)", mode, report.samples),
        "Naive mean (s)".to_string(),
        "Sweep mean (s)".to_string(),
    ]);
    let rule = "-".repeat(header.len());

    let mut lines = vec![rule.clone(), header, rule];
    for timing in &report.timings {
        lines.push(format_row([
            timing.size.to_string(),
            format_mean(timing.naive_mean()),
            format_mean(Some(timing.sweep_mean())),
        ]));
    }
    lines.join("\n")
}

///
/// Write one CSV row per size with every sample's time: the sweep samples
/// first, then the naive ones. Skipped naive samples are left empty.
///
pub fn write_csv<W: Write>(report: &BenchReport, writer: W) -> Result<(), BenchError> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec!["n_intervals".to_string()];
    header.extend((0..report.samples).map(|i| format!("sweep_{}", i)));
    header.extend((0..report.samples).map(|i| format!("naive_{}", i)));
    writer.write_record(&header)?;

    for timing in &report.timings {
        let mut record = vec![timing.size.to_string()];
        record.extend(timing.sweep.iter().map(|t| t.to_string()));
        record.extend(
            timing
                .naive
                .iter()
                .map(|t| t.map(|t| t.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv_path<P: AsRef<Path>>(report: &BenchReport, path: P) -> Result<(), BenchError> {
    let file = File::create(path.as_ref())?;
    write_csv(report, file)
}

///
/// Dump the full report, mismatches included, as pretty JSON.
///
pub fn write_json_path<P: AsRef<Path>>(report: &BenchReport, path: P) -> Result<(), BenchError> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
