//! `sdku` — solve and check Sudoku puzzle files from the command line.
//!
//! Puzzle files use the `.sdku` format: 9 lines of 9 characters, digits
//! '1'-'9' for givens and '.' for blanks. Malformed files are rejected
//! before any solving is attempted.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_core::{Grid, Position, SolveError, Solver};

#[derive(Parser)]
#[command(name = "sdku", version, about = "Sudoku puzzle solver and checker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle file and print the solution
    Solve {
        /// Path to the .sdku puzzle file
        file: PathBuf,
        /// Write the solution to this file in .sdku form
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a puzzle file against the Sudoku rules
    Check {
        /// Path to the .sdku puzzle file
        file: PathBuf,
    },
    /// Print the candidate digits for one cell
    Candidates {
        /// Path to the .sdku puzzle file
        file: PathBuf,
        /// Row, 1-9
        row: usize,
        /// Column, 1-9
        col: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Solve { file, output } => solve(&file, output.as_deref()),
        Command::Check { file } => check(&file),
        Command::Candidates { file, row, col } => candidates(&file, row, col),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Read and strictly parse a puzzle file. Any I/O or format problem is
/// reported as a string error (exit code 2 in main).
fn load_grid(path: &std::path::Path) -> Result<Grid, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Grid::from_sdku(&text).map_err(|e| format!("{}: {}", path.display(), e))
}

fn solve(file: &std::path::Path, output: Option<&std::path::Path>) -> Result<ExitCode, String> {
    let grid = load_grid(file)?;
    match Solver::new().solve(&grid) {
        Ok(solution) => {
            println!("{}", solution);
            if let Some(out) = output {
                fs::write(out, solution.to_sdku())
                    .map_err(|e| format!("{}: {}", out.display(), e))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(SolveError::Unsolvable) => {
            eprintln!("Puzzle has no solution.");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.to_string()),
    }
}

fn check(file: &std::path::Path) -> Result<ExitCode, String> {
    let grid = load_grid(file)?;
    let report = grid.validate();

    if grid.is_complete() && grid.is_valid_solution() {
        println!("Valid solution.");
        return Ok(ExitCode::SUCCESS);
    }
    if !grid.is_complete() && report.conflicts.is_empty() {
        println!("No conflicts ({} cells still empty).", grid.empty_count());
        return Ok(ExitCode::SUCCESS);
    }

    for pos in &report.conflicts {
        println!("Conflict at row {}, column {}.", pos.row + 1, pos.col + 1);
    }
    eprintln!("Grid violates the Sudoku rules.");
    Ok(ExitCode::FAILURE)
}

fn candidates(file: &std::path::Path, row: usize, col: usize) -> Result<ExitCode, String> {
    if !(1..=9).contains(&row) || !(1..=9).contains(&col) {
        return Err("row and column must be between 1 and 9".to_string());
    }
    let grid = load_grid(file)?;
    let pos = Position::new(row - 1, col - 1);

    if let Some(value) = grid.get(pos) {
        println!("Cell already holds {}.", value);
        return Ok(ExitCode::SUCCESS);
    }
    let digits: Vec<String> = grid
        .available_digits(pos)
        .iter()
        .map(|v| v.to_string())
        .collect();
    if digits.is_empty() {
        println!("No candidates remain for this cell.");
    } else {
        println!("Candidates: {}", digits.join(" "));
    }
    Ok(ExitCode::SUCCESS)
}
