//! Solver orchestrator.
//!
//! One engine: naked-single propagation runs to a fixed point, and
//! backtracking finishes whatever deduction alone cannot.

mod backtrack;
mod propagate;

use crate::error::{SolveError, SolveResult};
use crate::grid::Grid;
use propagate::Propagation;

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the solved grid.
    ///
    /// The input is never mutated: the engine works on its own deep copy.
    /// Given cells keep their input values in the returned grid. The result
    /// is deterministic — cells are searched row-major and digits tried in
    /// ascending order, so repeated calls return the same solution.
    ///
    /// `Err(SolveError::Unsolvable)` is the normal outcome for input that
    /// admits no valid completion, including grids whose givens already
    /// conflict. `Err(SolveError::InvariantViolation)` signals an engine
    /// defect and aborts the call rather than returning a wrong grid.
    pub fn solve(&self, grid: &Grid) -> SolveResult<Grid> {
        let mut working = grid.deep_clone();

        // Conflicting filled cells can never be completed (and a complete
        // grid containing them must not reach the validator as "solved").
        if !working.validate().conflicts.is_empty() {
            return Err(SolveError::Unsolvable);
        }
        if working.is_complete() {
            // Already solved; hand back the copy unchanged.
            return Ok(working);
        }

        match propagate::run_to_fixed_point(&mut working) {
            Propagation::Contradiction => return Err(SolveError::Unsolvable),
            Propagation::Solved => {}
            Propagation::Stalled => {
                if !backtrack::solve_from(&mut working, 0) {
                    return Err(SolveError::Unsolvable);
                }
            }
        }

        if !working.is_valid_solution() {
            return Err(SolveError::InvariantViolation(
                "search accepted a grid that fails rule validation",
            ));
        }
        working.clear_all_candidates();
        Ok(working)
    }

    /// Whether the puzzle admits at least one valid completion.
    pub fn is_solvable(&self, grid: &Grid) -> bool {
        matches!(self.solve(grid), Ok(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const EASY_SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solve_easy() {
        let grid = Grid::from_string(EASY).unwrap();
        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();
        assert!(solution.is_complete());
        assert!(solution.is_valid_solution());
    }

    #[test]
    fn test_reference_puzzle_exact_solution() {
        let text = "\
53..7....
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79";
        let expected = "\
534678912
672195348
198342567
859761423
426853791
713924856
961537284
287419635
345286179";
        let grid = Grid::from_sdku(text).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        assert_eq!(solution.to_sdku().trim_end(), expected);
    }

    #[test]
    fn test_solve_does_not_mutate_input() {
        let grid = Grid::from_string(EASY).unwrap();
        let original = grid.deep_clone();
        let _ = Solver::new().solve(&grid).unwrap();
        assert_eq!(grid, original);
    }

    #[test]
    fn test_solve_deterministic() {
        let grid = Grid::from_string(EASY).unwrap();
        let solver = Solver::new();
        let a = solver.solve(&grid).unwrap();
        let b = solver.solve(&grid).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_givens_preserved_in_solution() {
        let grid = Grid::from_string(EASY).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        for pos in Grid::positions() {
            if grid.cell(pos).is_given() {
                assert_eq!(solution.get(pos), grid.get(pos));
            }
        }
    }

    #[test]
    fn test_solve_hard_needs_backtracking() {
        // Arto Inkala's puzzle stalls propagation; backtracking finishes it
        let hard =
            "800000000003600000070090200050007000000045700000100030001000068008500010090000400";
        let grid = Grid::from_string(hard).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        assert!(solution.is_valid_solution());
    }

    #[test]
    fn test_all_blank_grid_solves() {
        let grid = Grid::new();
        let solution = Solver::new().solve(&grid).unwrap();
        assert!(solution.is_valid_solution());
    }

    #[test]
    fn test_complete_valid_grid_returned_unchanged() {
        let grid = Grid::from_string(EASY_SOLUTION).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        for pos in Grid::positions() {
            assert_eq!(solution.get(pos), grid.get(pos));
        }
    }

    #[test]
    fn test_complete_invalid_grid_is_unsolvable() {
        let mut s = EASY_SOLUTION.to_string();
        // Duplicate the corner 5 within the first row
        s.replace_range(1..2, "5");
        let grid = Grid::from_string(&s).unwrap();
        assert_eq!(Solver::new().solve(&grid), Err(SolveError::Unsolvable));
    }

    #[test]
    fn test_conflicting_givens_unsolvable() {
        let mut lines = vec!["........."; 9];
        lines[0] = "5...5....";
        let grid = Grid::from_sdku(&lines.join("\n")).unwrap();
        assert_eq!(Solver::new().solve(&grid), Err(SolveError::Unsolvable));
        assert!(!Solver::new().is_solvable(&grid));
    }

    #[test]
    fn test_unsolvable_by_candidate_exhaustion() {
        // (0,0) is empty but sees all nine digits
        let text = "\
.12345678
9........
.........
.........
.........
.........
.........
.........
.........";
        let grid = Grid::from_sdku(text).unwrap();
        assert_eq!(Solver::new().solve(&grid), Err(SolveError::Unsolvable));
    }

    #[test]
    fn test_is_solvable() {
        let solver = Solver::new();
        assert!(solver.is_solvable(&Grid::from_string(EASY).unwrap()));
        assert!(solver.is_solvable(&Grid::new()));
    }

    #[test]
    fn test_solution_cell_check_values_hold() {
        let grid = Grid::from_string(EASY).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        for pos in Grid::positions() {
            assert!(solution.check_value(pos, solution.get(pos).unwrap()));
        }
    }

    #[test]
    fn test_medium_puzzle_stalls_then_solves() {
        // Solvable by hidden singles, which this engine does not deduce:
        // propagation must stall and backtracking must finish the grid
        let medium =
            "000000010400000000020000000000050407008000300001090000300400200050100000000806000";
        let grid = Grid::from_string(medium).unwrap();

        let mut working = grid.deep_clone();
        assert_eq!(
            propagate::run_to_fixed_point(&mut working),
            Propagation::Stalled
        );

        let solution = Solver::new().solve(&grid).unwrap();
        assert!(solution.is_valid_solution());
        assert_eq!(solution, Solver::new().solve(&grid).unwrap());
    }
}
