use clap::{Arg, ArgAction, Command};

pub const BENCH_CMD: &str = "bench";

pub fn create_bench_cli() -> Command {
    Command::new(BENCH_CMD)
        .about("Time the naive and sweep difference on random intervals and compare their results.")
        .arg(
            Arg::new("n-intervals")
                .long("n-intervals")
                .short('n')
                .num_args(1..)
                .value_parser(clap::value_parser!(usize))
                .help("Number of intervals per operand, one run per value"),
        )
        .arg(
            Arg::new("n-samples")
                .long("n-samples")
                .short('k')
                .value_parser(clap::value_parser!(usize))
                .help("Random operand pairs per size"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(clap::value_parser!(u64))
                .help("Seed of the interval generator"),
        )
        .arg(
            Arg::new("metadata")
                .long("metadata")
                .action(ArgAction::SetTrue)
                .help("Attach a tags column to the generated intervals"),
        )
        .arg(
            Arg::new("min-len")
                .long("min-len")
                .value_parser(clap::value_parser!(f64))
                .help("Minimum fragment length passed to both algorithms"),
        )
        .arg(
            Arg::new("time-budget")
                .long("time-budget")
                .value_parser(clap::value_parser!(f64))
                .help("Skip the naive algorithm for larger sizes once a run exceeds this many seconds"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with benchmark settings; flags override it"),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Write per-sample timings to this CSV file"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Write the full report, mismatches included, as JSON"),
        )
}
