use clap::{Arg, ArgAction, Command, arg};

pub const DIFF_CMD: &str = "diff";

pub fn create_diff_cli() -> Command {
    Command::new(DIFF_CMD)
        .about("Subtract the intervals in B from the intervals in A.")
        .arg(arg!(-a <A> "Interval file A, tab separated and optionally gzipped ('-' for stdin)").required(true))
        .arg(arg!(-b <B> "Interval file B to subtract").required(true))
        .arg(
            Arg::new("min-len")
                .long("min-len")
                .default_value("0")
                .help("Drop result fragments not longer than this"),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .default_value("sweep")
                .value_parser(["sweep", "naive"])
                .help("Difference implementation to use"),
        )
        .arg(
            Arg::new("validate")
                .long("validate")
                .action(ArgAction::SetTrue)
                .help("Fail when A or B overlaps itself"),
        )
        .arg(arg!(--output <OUTPUT> "Output file (default: stdout)").required(false))
}
