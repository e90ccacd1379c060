use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;

use ivdiff_core::models::IntervalCollection;
use ivdiff_core::utils::get_dynamic_reader_w_stdin;
use ivdiff_ops::{Algorithm, DifferenceOptions, difference};

pub fn run_diff(matches: &ArgMatches) -> Result<()> {
    let a_path = matches.get_one::<String>("A").expect("-a is required");
    let b_path = matches.get_one::<String>("B").expect("-b is required");
    if a_path == "-" && b_path == "-" {
        anyhow::bail!("Only one of A and B can be read from stdin");
    }

    let options = parse_options(matches)?;
    let a = load_collection(a_path).context("Failed to load interval file A")?;
    let b = load_collection(b_path).context("Failed to load interval file B")?;
    log::info!(
        "subtracting {} intervals from {} intervals ({} algorithm)",
        b.len(),
        a.len(),
        options.algorithm
    );

    let result = difference(&a, &b, &options)?;
    write_output(&result, matches.get_one::<String>("output"))
}

fn parse_options(matches: &ArgMatches) -> Result<DifferenceOptions> {
    let min_len: f64 = matches
        .get_one::<String>("min-len")
        .unwrap()
        .parse()
        .context("--min-len must be a number")?;
    let algorithm: Algorithm = matches.get_one::<String>("algorithm").unwrap().parse()?;

    Ok(DifferenceOptions::new()
        .with_min_len(min_len)
        .with_algorithm(algorithm)
        .with_validation(matches.get_flag("validate")))
}

fn load_collection(path: &str) -> Result<IntervalCollection> {
    let reader = get_dynamic_reader_w_stdin(path)?;
    IntervalCollection::from_reader(reader).with_context(|| format!("Failed to parse {}", path))
}

fn write_output(result: &IntervalCollection, output: Option<&String>) -> Result<()> {
    match output {
        Some(p) => {
            result
                .to_tsv(p)
                .with_context(|| format!("Failed to write output to {}", p))?;
            log::info!("{} intervals written to {}", result.len(), p);
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            result.write_tsv(&mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
