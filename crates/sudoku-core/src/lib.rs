//! Core Sudoku engine.
//!
//! A 9x9 grid model with candidate tracking, pure constraint queries, a
//! propagation + backtracking solver, and rule validation. The engine is
//! synchronous and single-threaded; every solve call operates on its own
//! owned copy of the input grid, so callers can solve independent puzzles
//! concurrently without locking.
//!
//! ```
//! use sudoku_core::{Grid, Solver};
//!
//! let grid = Grid::from_string(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )
//! .unwrap();
//! let solution = Solver::new().solve(&grid).unwrap();
//! assert!(solution.is_valid_solution());
//! ```

mod bitset;
mod error;
mod grid;
mod solver;
mod validate;

pub use bitset::BitSet;
pub use error::{ParseError, ParseResult, SolveError, SolveResult};
pub use grid::{Cell, Grid, Position};
pub use solver::Solver;
pub use validate::ValidationReport;
