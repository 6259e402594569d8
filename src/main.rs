//! Knight-Walk: Monte Carlo simulation of a knight's random walk.
//!
//! Runs many independent random walks of a knight on an unbounded board,
//! then reports summary statistics of the distinct squares visited and
//! writes a distribution plot to a file.
//!
//! ## Usage
//!
//! - `knight-walk` - Run with defaults (1,000,000 trials, 50 moves)
//! - `knight-walk --simulations 10000 --moves 100` - Custom run
//! - `knight-walk --seed 42 --workers 4` - Reproducible run

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use knight_walk::constants::{DEFAULT_MOVES, DEFAULT_OUTPUT, DEFAULT_SIMULATIONS};
use knight_walk::histogram::Histogram;
use knight_walk::runner::{RunConfig, run_simulations};
use knight_walk::stats::Summary;

/// Run a Monte Carlo simulation of a knight's random walk
#[derive(Parser)]
#[command(name = "knight-walk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of simulations to run
    #[arg(long, default_value_t = DEFAULT_SIMULATIONS)]
    simulations: u64,

    /// Number of moves per simulation
    #[arg(long, default_value_t = DEFAULT_MOVES)]
    moves: usize,

    /// Output file name for the histogram plot
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of worker threads (default: derived from CPU count)
    #[arg(long)]
    workers: Option<usize>,

    /// RNG seed for a reproducible run (default: seeded from entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RunConfig {
        simulations: cli.simulations,
        moves: cli.moves,
        workers: cli.workers,
        seed: cli.seed,
    };

    let outcome = run_simulations(&config)?;
    let summary = Summary::from_sample(&outcome.counts)?;

    println!("\n--- Simulation Results ---");
    println!("Mean distinct squares visited: {:.2}", summary.mean);
    println!("Standard deviation: {:.2}", summary.std_dev);
    println!(
        "95% Confidence Interval: ({:.2}, {:.2})",
        summary.confidence_interval.0, summary.confidence_interval.1
    );
    println!("Minimum distinct squares visited: {}", summary.min);
    println!("Maximum distinct squares visited: {}", summary.max);

    if let Some(histogram) = Histogram::build(&outcome.counts) {
        let title = format!(
            "Distribution of Distinct Squares Visited (N={}, M={})",
            cli.simulations, cli.moves
        );
        histogram.save(&cli.output, &title)?;
        println!("Histogram saved to {}", cli.output.display());
    }

    Ok(())
}
