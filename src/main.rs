//! Peg-Solver: exhaustive search for triangular peg solitaire.
//!
//! ## Usage
//!
//! - `peg-solver -s 5` - Find the line leaving the fewest pegs on a 5-row board
//! - `peg-solver -s 5 -j 4 -v` - Search on four workers and log progress
//!
//! Output is one line `<start hole>, <move count>` followed by one
//! `<from>, <to>` line per move. Holes are numbered from 1.

use anyhow::Result;
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::info;

use peg_solver::constants::MAX_SIZE;
use peg_solver::solver::{SolverConfig, solve};

/// Peg-Solver: find the fewest-peg finish on a triangular peg solitaire board
#[derive(Parser)]
#[command(name = "peg-solver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of rows on the triangular board
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=MAX_SIZE as i64))]
    size: u8,

    /// Worker threads (defaults to one per CPU)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: Option<u16>,

    /// Print the final board after the move list
    #[arg(long)]
    show_board: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let mut config = SolverConfig::new(cli.size as usize);
    if let Some(jobs) = cli.jobs {
        config = config.with_threads(jobs as usize);
    }

    let solution = solve(&config)?;
    info!("{} pegs left ({})", solution.pegs(), solution.stats);

    print!("{solution}");
    if cli.show_board {
        println!();
        print!("{}", solution.board);
    }
    Ok(())
}
