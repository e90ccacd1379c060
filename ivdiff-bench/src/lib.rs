//! Benchmark harness for the interval difference algorithms.
//!
//! Generates seeded random operand pairs of increasing size, times the naive
//! and sweep implementations on each, checks that their results agree and
//! reports mean timings as a table or CSV.
//!
//! ```rust
//! use ivdiff_bench::{BenchConfig, render_table, run_benchmark};
//!
//! let config = BenchConfig {
//!     sizes: vec![10, 100],
//!     samples: 1,
//!     ..Default::default()
//! };
//! let report = run_benchmark(&config, false).unwrap();
//! assert!(report.mismatches.is_empty());
//! println!("{}", render_table(&report));
//! ```

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod generator;
pub mod report;
pub mod runner;

// re-exports
pub use self::config::BenchConfig;
pub use self::diagnostics::{Mismatch, find_mismatch};
pub use self::errors::BenchError;
pub use self::generator::{GeneratorParams, generate_collection, generate_random_intervals};
pub use self::report::{render_table, write_csv, write_csv_path, write_json_path};
pub use self::runner::{BenchReport, SizeTimings, run_benchmark};
