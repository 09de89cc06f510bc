//! Command-line front end for the tierdoku solver.

use std::{path::PathBuf, process, time::Instant};

use clap::{Args, Parser, Subcommand};
use tierdoku_core::Board;
use tierdoku_solver::{STALL_LIMIT, SolveResult, Solver, SolverConfig};

use crate::{batch::FAILURE_SENTINEL, error::CliError};

mod batch;
mod error;
mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a single puzzle.
    Solve(SolveArgs),
    /// Solve a corpus of puzzles from a file.
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// The puzzle: 81 cells in row-major order, digits 1-9 for clues and
    /// '0', '.', or '_' for blanks. Whitespace is ignored.
    puzzle: String,

    /// Print the board after every pass that made progress.
    #[arg(long)]
    show_process: bool,

    /// How deep hypothesis branches may nest (0 disables guessing).
    #[arg(long, value_name = "DEPTH", default_value_t = SolverConfig::default().recursion_budget)]
    recursion_budget: u32,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Corpus file with one "<index> <puzzle> <expected>" line per puzzle.
    input: PathBuf,

    /// File to append "<index> <solution>  <expected>" records to.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Corpus line to start at (0-based).
    #[arg(long, value_name = "INDEX", default_value_t = 0, conflicts_with = "resume")]
    start: usize,

    /// Start where the output file left off.
    #[arg(long, requires = "output")]
    resume: bool,

    /// Maximum number of puzzles to attempt.
    #[arg(long, value_name = "COUNT")]
    count: Option<usize>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Solve(args) => run_solve(&args),
        Command::Batch(args) => batch::run(&args).map(|_| ()),
    };
    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run_solve(args: &SolveArgs) -> Result<(), CliError> {
    let board: Board = args.puzzle.parse()?;
    let solver = Solver::new(SolverConfig {
        recursion_budget: args.recursion_budget,
    });

    println!("starting board");
    print!("{}", render::grid(&board));

    let start_time = Instant::now();
    let outcome = if args.show_process {
        solver.solve_with_observer(board, |record| {
            println!();
            println!(
                "pass #{}, stall {}/{STALL_LIMIT}, rating so far {}",
                record.pass, record.stall, record.max_stall
            );
            if record.progressed {
                print!("{}", render::grid(&record.board));
            }
        })
    } else {
        solver.solve(board)
    };

    println!();
    match outcome.result {
        SolveResult::Solved(solution) => {
            print!("{}", render::grid(&solution));
            println!("solution: {solution}");
        }
        SolveResult::Exhausted => {
            println!("solution: {FAILURE_SENTINEL}");
        }
    }
    println!(
        "difficulty: {}/{STALL_LIMIT} ({})",
        outcome.max_stall, outcome.difficulty
    );
    println!("time taken: {:?}", start_time.elapsed());
    Ok(())
}
