use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DifferenceError;
use crate::naive::NaiveDifference;
use crate::sweep::SweepDifference;
use crate::traits::DifferenceAlgorithm;

/// Enumerates the available difference implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Per-label scan over the bounds. Slow, used as the reference.
    Naive,
    /// Point-event sweep.
    #[default]
    Sweep,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Naive, Algorithm::Sweep];

    pub fn implementation(&self) -> Box<dyn DifferenceAlgorithm> {
        match self {
            Algorithm::Naive => Box::new(NaiveDifference),
            Algorithm::Sweep => Box::new(SweepDifference),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Naive => write!(f, "naive"),
            Algorithm::Sweep => write!(f, "sweep"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = DifferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(Algorithm::Naive),
            "sweep" | "vectorised" | "vectorized" => Ok(Algorithm::Sweep),
            other => Err(DifferenceError::InvalidInput(format!(
                "unknown algorithm '{}', expected 'naive' or 'sweep'",
                other
            ))),
        }
    }
}

///
/// Options for a single difference computation.
///
/// ```rust
/// use ivdiff_ops::{Algorithm, DifferenceOptions};
///
/// let options = DifferenceOptions::new()
///     .with_min_len(5.0)
///     .with_algorithm(Algorithm::Naive);
/// assert_eq!(options.min_len, 5.0);
/// assert!(!options.validate);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifferenceOptions {
    /// Fragments must be strictly longer than this to be kept.
    pub min_len: f64,
    pub algorithm: Algorithm,
    /// Check that neither operand overlaps itself before computing.
    pub validate: bool,
}

impl Default for DifferenceOptions {
    fn default() -> Self {
        DifferenceOptions {
            min_len: 0.0,
            algorithm: Algorithm::default(),
            validate: false,
        }
    }
}

impl DifferenceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_len(mut self, min_len: f64) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// `min_len` must be a non-negative number.
    pub fn check(&self) -> Result<(), DifferenceError> {
        if self.min_len.is_nan() || self.min_len < 0.0 {
            return Err(DifferenceError::InvalidInput(format!(
                "min_len must be a non-negative number, got {}",
                self.min_len
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("naive", Algorithm::Naive)]
    #[case("Sweep", Algorithm::Sweep)]
    #[case("vectorised", Algorithm::Sweep)]
    fn test_algorithm_from_str(#[case] raw: &str, #[case] expected: Algorithm) {
        assert_eq!(raw.parse::<Algorithm>().unwrap(), expected);
    }

    #[rstest]
    fn test_algorithm_from_str_unknown() {
        assert!(matches!(
            "fast".parse::<Algorithm>(),
            Err(DifferenceError::InvalidInput(_))
        ));
    }

    #[rstest]
    fn test_default_options() {
        let options = DifferenceOptions::default();
        assert_eq!(options.min_len, 0.0);
        assert_eq!(options.algorithm, Algorithm::Sweep);
        assert!(!options.validate);
        assert!(options.check().is_ok());
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn test_check_rejects_bad_min_len(#[case] min_len: f64) {
        let options = DifferenceOptions::new().with_min_len(min_len);
        assert!(matches!(options.check(), Err(DifferenceError::InvalidInput(_))));
    }

    #[rstest]
    fn test_algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.implementation().name(), algorithm.to_string());
        }
    }
}
