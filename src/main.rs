//! Command line solver for the Breach Protocol minigame.

use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use breach_protocol_solver::{solve, write_outcome, Code, Specification, Strategy};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// The default number of solutions to print when finding all of them.
const MAX_PRINTABLE_SOLUTIONS: usize = 10_000;

/// Solve the Breach Protocol minigame in Cyberpunk 2077.
#[derive(Parser)]
#[command(name = "breach-solver", version, about)]
struct Cli {
    /// The file with the minigame data
    filename: PathBuf,

    /// Find all solutions, shortest first, instead of the first matching one
    #[arg(long)]
    all_solutions: bool,

    /// The maximum number of solutions to print
    #[arg(long, default_value_t = MAX_PRINTABLE_SOLUTIONS)]
    max_printed: usize,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let input = std::fs::read_to_string(&cli.filename)
        .with_context(|| format!("failed to read {}", cli.filename.display()))?;
    let specification: Specification<Code> = input
        .parse()
        .with_context(|| format!("failed to parse {}", cli.filename.display()))?;

    let strategy = if cli.all_solutions {
        Strategy::AllSolutions
    } else {
        Strategy::FirstSolution
    };
    info!(file = %cli.filename.display(), ?strategy, "solving");

    let start = Instant::now();
    let outcome = solve(&specification, strategy);
    let elapsed = start.elapsed();

    let mut stdout = std::io::stdout().lock();
    write_outcome(&mut stdout, &outcome, cli.max_printed, elapsed)
        .context("failed to write the solutions")?;

    Ok(())
}
