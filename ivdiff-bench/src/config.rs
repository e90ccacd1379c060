use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::BenchError;
use crate::generator::GeneratorParams;

pub const DEFAULT_SIZES: [usize; 7] = [20, 100, 500, 1000, 2000, 5000, 10000];
pub const DEFAULT_SAMPLES: usize = 3;
pub const DEFAULT_SEED: u64 = 1234;

///
/// Settings for a benchmark run, loadable from TOML.
///
/// Every field has a default, so a file only needs the values it changes:
///
/// ```toml
/// sizes = [100, 1000]
/// samples = 5
///
/// [b]
/// max_len = 40.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Number of intervals in each operand, one entry per measured size.
    pub sizes: Vec<usize>,
    /// Random operand pairs per size.
    pub samples: usize,
    pub seed: u64,
    /// Attach a tags column to both operands.
    pub metadata: bool,
    pub min_len: f64,
    /// Generator settings for the minuend.
    pub a: GeneratorParams,
    /// Generator settings for the subtrahend.
    pub b: GeneratorParams,
    /// Once one naive run takes longer than this many seconds, the naive
    /// algorithm is skipped for all larger sizes.
    pub time_budget: Option<f64>,
    /// Compare the two results after every sample.
    pub inspect: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            samples: DEFAULT_SAMPLES,
            seed: DEFAULT_SEED,
            metadata: false,
            min_len: 0.0,
            a: GeneratorParams::new(100.0, 100.0),
            b: GeneratorParams::new(0.0, 80.0),
            time_budget: None,
            inspect: true,
        }
    }
}

impl BenchConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, BenchError> {
        let config: BenchConfig = toml::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BenchError> {
        let raw = read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    pub fn check(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig("no sizes to run".to_string()));
        }
        if self.samples == 0 {
            return Err(BenchError::InvalidConfig(
                "samples must be at least 1".to_string(),
            ));
        }
        if self.min_len.is_nan() || self.min_len < 0.0 {
            return Err(BenchError::InvalidConfig(format!(
                "min_len must be a non-negative number, got {}",
                self.min_len
            )));
        }
        if let Some(budget) = self
            .time_budget
            .filter(|budget| budget.is_nan() || *budget <= 0.0)
        {
            return Err(BenchError::InvalidConfig(format!(
                "time_budget must be positive, got {}",
                budget
            )));
        }
        self.a.check()?;
        self.b.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes, vec![20, 100, 500, 1000, 2000, 5000, 10000]);
        assert_eq!(config.samples, 3);
        assert_eq!(config.seed, 1234);
        assert_eq!(config.a.start, 100.0);
        assert_eq!(config.b.max_len, 80.0);
        assert!(config.check().is_ok());
    }

    #[rstest]
    fn test_partial_toml() {
        let raw = r#"
sizes = [10, 50]
samples = 2
metadata = true
time_budget = 1.5

[b]
max_len = 40.0
"#;
        let config = BenchConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.sizes, vec![10, 50]);
        assert_eq!(config.samples, 2);
        assert!(config.metadata);
        assert_eq!(config.time_budget, Some(1.5));
        assert_eq!(config.b.max_len, 40.0);
        // untouched generator fields keep their defaults
        assert_eq!(config.b.min_len, 10.0);
        assert_eq!(config.a, GeneratorParams::new(100.0, 100.0));
    }

    #[rstest]
    #[case("sizes = []")]
    #[case("samples = 0")]
    #[case("min_len = -2.0")]
    #[case("time_budget = 0.0")]
    fn test_invalid_toml(#[case] raw: &str) {
        assert!(matches!(
            BenchConfig::from_toml_str(raw),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[rstest]
    fn test_from_path() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("bench.toml");
        std::fs::write(&path, "seed = 99\n").unwrap();
        assert_eq!(BenchConfig::from_path(&path).unwrap().seed, 99);
    }
}
