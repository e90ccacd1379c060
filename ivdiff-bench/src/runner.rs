use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use ivdiff_core::models::IntervalCollection;
use ivdiff_ops::{Algorithm, DifferenceOptions, difference};

use crate::config::BenchConfig;
use crate::diagnostics::{Mismatch, find_mismatch};
use crate::errors::BenchError;
use crate::generator::generate_collection;

/// Wall times, in seconds, for one operand size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeTimings {
    pub size: usize,
    /// `None` for samples where the naive run was skipped.
    pub naive: Vec<Option<f64>>,
    pub sweep: Vec<f64>,
}

impl SizeTimings {
    fn new(size: usize) -> Self {
        SizeTimings {
            size,
            naive: Vec::new(),
            sweep: Vec::new(),
        }
    }

    /// Mean naive time, if every sample ran it.
    pub fn naive_mean(&self) -> Option<f64> {
        let times: Option<Vec<f64>> = self.naive.iter().copied().collect();
        times.filter(|t| !t.is_empty()).map(|t| mean(&t))
    }

    pub fn sweep_mean(&self) -> f64 {
        mean(&self.sweep)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Everything a benchmark run measured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub samples: usize,
    pub metadata: bool,
    pub timings: Vec<SizeTimings>,
    pub mismatches: Vec<Mismatch>,
}

fn time_run<T>(f: impl FnOnce() -> T) -> (f64, T) {
    let tic = Instant::now();
    let result = f();
    (tic.elapsed().as_secs_f64(), result)
}

fn progress_bar(total: u64, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total);
    if let Ok(style) =
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
    {
        bar.set_style(style.progress_chars("##-"));
    }
    bar
}

///
/// Time both algorithms on random operand pairs of every configured size.
///
/// For each size, `samples` pairs are generated from one seeded generator,
/// so a run is reproducible from its config. The minuend and subtrahend use
/// the `a` and `b` generator settings.
///
/// # Arguments
/// - config: what to run
/// - show_progress: draw a progress bar on stderr
pub fn run_benchmark(config: &BenchConfig, show_progress: bool) -> Result<BenchReport, BenchError> {
    config.check()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let total = (config.sizes.len() * config.samples) as u64;
    let bar = progress_bar(total, show_progress);

    let options = |algorithm: Algorithm| {
        DifferenceOptions::new()
            .with_algorithm(algorithm)
            .with_min_len(config.min_len)
    };
    let naive_options = options(Algorithm::Naive);
    let sweep_options = options(Algorithm::Sweep);

    let mut timings = Vec::with_capacity(config.sizes.len());
    let mut mismatches = Vec::new();
    let mut naive_enabled = true;

    for &size in &config.sizes {
        bar.set_message(format!("{} intervals", size));
        let mut size_timings = SizeTimings::new(size);
        let mut over_budget = false;

        for _ in 0..config.samples {
            let a = generate_collection(size, &config.a, config.metadata, &mut rng)?;
            let b = generate_collection(size, &config.b, config.metadata, &mut rng)?;

            let (sweep_time, sweep) = time_run(|| difference(&a, &b, &sweep_options));
            let sweep = sweep?;
            size_timings.sweep.push(sweep_time);

            if naive_enabled {
                let (naive_time, naive) = time_run(|| difference(&a, &b, &naive_options));
                let naive = naive?;
                size_timings.naive.push(Some(naive_time));
                over_budget |= config.time_budget.is_some_and(|budget| naive_time > budget);

                if config.inspect {
                    inspect(&naive, &sweep, &a, &b, size, &mut mismatches);
                }
            } else {
                size_timings.naive.push(None);
            }
            bar.inc(1);
        }

        if over_budget {
            log::info!(
                "naive difference took longer than the time budget at {} intervals; skipping it for larger sizes",
                size
            );
            naive_enabled = false;
        }
        timings.push(size_timings);
    }
    bar.finish_and_clear();

    Ok(BenchReport {
        samples: config.samples,
        metadata: config.metadata,
        timings,
        mismatches,
    })
}

fn inspect(
    naive: &IntervalCollection,
    sweep: &IntervalCollection,
    a: &IntervalCollection,
    b: &IntervalCollection,
    size: usize,
    mismatches: &mut Vec<Mismatch>,
) {
    if let Some(mismatch) = find_mismatch(naive, sweep, a, b) {
        log::warn!(
            "unequal results at {} intervals: naive {} vs sweep {} fragments, first difference at row {}",
            size,
            mismatch.naive_len,
            mismatch.sweep_len,
            mismatch.index
        );
        mismatches.push(mismatch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn small_config() -> BenchConfig {
        BenchConfig {
            sizes: vec![0, 5, 50],
            samples: 2,
            ..Default::default()
        }
    }

    #[rstest]
    fn test_run_collects_every_sample(small_config: BenchConfig) {
        let report = run_benchmark(&small_config, false).unwrap();
        assert_eq!(report.samples, 2);
        assert_eq!(
            report.timings.iter().map(|t| t.size).collect::<Vec<_>>(),
            vec![0, 5, 50]
        );
        for timing in &report.timings {
            assert_eq!(timing.sweep.len(), 2);
            assert_eq!(timing.naive.len(), 2);
            assert!(timing.naive_mean().is_some());
        }
        assert!(report.mismatches.is_empty());
    }

    #[rstest]
    fn test_run_with_metadata_agrees(mut small_config: BenchConfig) {
        small_config.metadata = true;
        small_config.min_len = 5.0;
        let report = run_benchmark(&small_config, false).unwrap();
        assert!(report.mismatches.is_empty());
    }

    #[rstest]
    fn test_time_budget_skips_naive(mut small_config: BenchConfig) {
        small_config.time_budget = Some(f64::MIN_POSITIVE);
        small_config.sizes = vec![200, 300];
        let report = run_benchmark(&small_config, false).unwrap();
        assert!(report.timings[0].naive.iter().all(Option::is_some));
        assert_eq!(report.timings[1].naive, vec![None, None]);
        assert_eq!(report.timings[1].naive_mean(), None);
    }

    #[rstest]
    fn test_same_seed_same_operands(small_config: BenchConfig) {
        let first = run_benchmark(&small_config, false).unwrap();
        let second = run_benchmark(&small_config, false).unwrap();
        assert_eq!(first.timings.len(), second.timings.len());
        assert_eq!(first.mismatches, second.mismatches);
    }

    #[rstest]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }
}
