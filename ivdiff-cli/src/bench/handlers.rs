use anyhow::{Context, Result};
use clap::ArgMatches;

use ivdiff_bench::{BenchConfig, render_table, run_benchmark, write_csv_path, write_json_path};

pub fn run_bench(matches: &ArgMatches) -> Result<()> {
    let config = build_config(matches)?;
    log::info!(
        "benchmarking {} sizes with {} samples each (seed {})",
        config.sizes.len(),
        config.samples,
        config.seed
    );

    let report = run_benchmark(&config, true)?;
    println!("{}", render_table(&report));

    if !report.mismatches.is_empty() {
        log::warn!(
            "{} samples gave different naive and sweep results",
            report.mismatches.len()
        );
    }
    if let Some(path) = matches.get_one::<String>("csv") {
        write_csv_path(&report, path).with_context(|| format!("Failed to write {}", path))?;
        log::info!("timings written to {}", path);
    }
    if let Some(path) = matches.get_one::<String>("report") {
        write_json_path(&report, path).with_context(|| format!("Failed to write {}", path))?;
        log::info!("report written to {}", path);
    }
    Ok(())
}

fn build_config(matches: &ArgMatches) -> Result<BenchConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => BenchConfig::from_path(path)
            .with_context(|| format!("Failed to load benchmark config {}", path))?,
        None => BenchConfig::default(),
    };

    if let Some(sizes) = matches.get_many::<usize>("n-intervals") {
        config.sizes = sizes.copied().collect();
    }
    if let Some(samples) = matches.get_one::<usize>("n-samples") {
        config.samples = *samples;
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = *seed;
    }
    if let Some(min_len) = matches.get_one::<f64>("min-len") {
        config.min_len = *min_len;
    }
    if let Some(budget) = matches.get_one::<f64>("time-budget") {
        config.time_budget = Some(*budget);
    }
    if matches.get_flag("metadata") {
        config.metadata = true;
    }

    config.check()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bench::cli::create_bench_cli;

    #[test]
    fn test_flags_override_config_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("bench.toml");
        std::fs::write(&path, "sizes = [10]\nsamples = 4\nseed = 5\n").unwrap();

        let matches = create_bench_cli().get_matches_from([
            "bench",
            "--config",
            path.to_str().unwrap(),
            "-n",
            "20",
            "40",
            "--metadata",
        ]);
        let config = build_config(&matches).unwrap();
        assert_eq!(config.sizes, vec![20, 40]);
        assert_eq!(config.samples, 4);
        assert_eq!(config.seed, 5);
        assert!(config.metadata);
    }

    #[test]
    fn test_defaults_without_flags() {
        let matches = create_bench_cli().get_matches_from(["bench"]);
        assert_eq!(build_config(&matches).unwrap(), BenchConfig::default());
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let matches = create_bench_cli().get_matches_from(["bench", "-k", "0"]);
        assert!(build_config(&matches).is_err());
    }
}
