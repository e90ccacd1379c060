mod bench;
mod diff;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "ivdiff";
    pub const BIN_NAME: &str = "ivdiff";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Set difference of one-dimensional interval collections, with a benchmark of the naive and sweep algorithms.")
        .subcommand_required(true)
        .subcommand(diff::cli::create_diff_cli())
        .subcommand(bench::cli::create_bench_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // DIFF
        //
        Some((diff::cli::DIFF_CMD, matches)) => {
            diff::handlers::run_diff(matches)?;
        }

        //
        // BENCH
        //
        Some((bench::cli::BENCH_CMD, matches)) => {
            bench::handlers::run_bench(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
