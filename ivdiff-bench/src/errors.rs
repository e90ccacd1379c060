use thiserror::Error;

use ivdiff_core::errors::IntervalError;
use ivdiff_ops::DifferenceError;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Interval(#[from] IntervalError),

    #[error(transparent)]
    Difference(#[from] DifferenceError),

    #[error("Error reading config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
