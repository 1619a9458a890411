//! Depth-first backtracking search.
//!
//! Visits cells in row-major order and tries candidate digits in ascending
//! order, so the first solution found is reproducible for a given input.
//! Candidates are computed on the fly from the constraint queries; stored
//! notes are never touched by the search.

use crate::grid::{Grid, Position};

/// Search for a completion of `grid` starting at cell `index` (0-80,
/// row-major). Returns true when a full valid assignment is reached, leaving
/// it in `grid`; returns false with `grid` restored to its entry state.
///
/// Recursion depth is bounded by 81.
pub(crate) fn solve_from(grid: &mut Grid, index: usize) -> bool {
    // Past the last cell: every position holds a consistent value
    if index == 81 {
        return true;
    }

    let pos = Position::new(index / 9, index % 9);
    if grid.cell(pos).is_filled() {
        return solve_from(grid, index + 1);
    }

    let candidates = grid.available_digits(pos);
    if candidates.is_empty() {
        return false;
    }
    for value in candidates.iter() {
        grid.set_cell_unchecked(pos, Some(value));
        if solve_from(grid, index + 1) {
            return true;
        }
        // Reset before trying the next digit
        grid.set_cell_unchecked(pos, None);
    }

    false
}
