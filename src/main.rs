//! # puzzle-solver
//!
//! `puzzle-solver` is a command-line front end for two self-contained
//! puzzle searches:
//!
//! 1.  **`knight`**: searches a region-coloured 6×6 board for two disjoint
//!     knight's tours, one per board diagonal, whose cell-value
//!     accumulation reaches 2024 on the same value assignment. On success
//!     it prints the three region values followed by both tours as
//!     comma-separated coordinate labels, the `a1` tour first.
//! 2.  **`sudoku`**: solves the shared-divisor sudoku, a 9×9 grid whose
//!     rows read as numbers sharing the largest possible common divisor,
//!     and prints the middle row's number.
//!
//! Both searches read no input: every puzzle constant is compiled in. A
//! found answer terminates the process with a non-zero status, mirroring
//! the searches' "stop everything on success" semantics; exhausting a
//! search without an answer exits zero.
//!
//! ## Usage
//!
//! ```sh
//! puzzle-solver knight [OPTIONS]
//! puzzle-solver sudoku [OPTIONS]
//! puzzle-solver completions <SHELL>
//! ```
//!
//! ### Common Options
//!
//! -   `-d, --debug`: print search progress lines (default: `false`).
//! -   `-s, --stats`: print timing and memory statistics (default: `true`).
//! -   `-p, --print-solution`: print the full solved board or grid
//!     (default: `false`).

use clap::{Args, CommandFactory, Parser, Subcommand};
use puzzle_solver::knight::board::CandidateBoard;
use puzzle_solver::knight::search::find_cross_match;
use puzzle_solver::sudoku;
use std::fmt::Display;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the puzzle solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "puzzle-solver", version, about = "Exhaustive-search puzzle solvers")]
struct Cli {
    /// Specifies the puzzle to run.
    #[clap(subcommand)]
    command: Commands,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for the dual knight's tours reaching the target score.
    Knight {
        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve the shared-divisor sudoku.
    Sudoku {
        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across the puzzle
/// subcommands.
#[derive(Args, Debug, Default)]
struct CommonOptions {
    /// Enable debug output, printing progress lines during the search.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Enable printing of performance statistics after the search.
    #[arg(short, long, default_value_t = true)]
    stats: bool,

    /// Enable printing of the full solved board or grid.
    #[arg(short, long, default_value_t = false)]
    print_solution: bool,
}

/// Main entry point of the puzzle solver.
///
/// Parses command-line arguments, dispatches to the selected puzzle, and
/// turns the outcome into the process exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Knight { common } => run_knight(&common),
        Commands::Sudoku { common } => run_sudoku(&common),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "puzzle-solver",
                &mut std::io::stdout(),
            );
            ExitCode::SUCCESS
        }
    }
}

/// Runs the dual tour search and reports the outcome.
fn run_knight(common: &CommonOptions) -> ExitCode {
    let time = Instant::now();
    let result = find_cross_match(common.debug);
    let elapsed = time.elapsed();

    let outcome = match &result {
        Some(cross_match) => {
            println!("Found matching trips!");
            println!("{cross_match}");
            if common.print_solution {
                println!("{}", CandidateBoard::new(cross_match.assignment));
            }
            ExitCode::from(1)
        }
        None => {
            println!("No matching trips exist within the trip length bounds.");
            ExitCode::SUCCESS
        }
    };

    if common.stats {
        print_stats(elapsed);
    }
    outcome
}

/// Runs the sudoku search and reports the outcome.
fn run_sudoku(common: &CommonOptions) -> ExitCode {
    let time = Instant::now();
    let result = sudoku::solver::solve(common.debug);
    let elapsed = time.elapsed();

    let outcome = match &result {
        Some(solution) => {
            println!("Answer to the puzzle: {}", solution.middle_row);
            if common.print_solution {
                println!("{solution}");
            }
            ExitCode::from(1)
        }
        None => {
            println!("No grid satisfies the givens.");
            ExitCode::SUCCESS
        }
    };

    if common.stats {
        print_stats(elapsed);
    }
    outcome
}

/// Prints a summary of search statistics.
///
/// # Arguments
/// * `elapsed` - Duration spent by the solver.
fn print_stats(elapsed: Duration) {
    // Advance epoch for memory stats collection if using jemalloc.
    // This helps in getting more accurate memory stats related to the
    // solving phase.
    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    println!("\n========================[ Search Statistics ]========================");
    stat_line("Solve time (s)", format!("{:.3}", elapsed.as_secs_f64()));
    stat_line("Memory usage (MiB)", format!("{allocated_mib:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident_mib:.2}"));
    println!("=====================================================================");
}

/// Prints a single statistic line for the statistics box.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic.
fn stat_line(label: &str, value: impl Display) {
    println!("|  {label:<30} {value:>30}  |");
}
