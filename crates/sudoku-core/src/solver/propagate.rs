//! Naked-single propagation.
//!
//! Runs forced-value deduction to a fixed point: any empty cell whose
//! candidate set shrinks to one digit is assigned, the digit is removed from
//! the notes of its row/column/box peers, and peers forced to a single digit
//! by that removal are assigned in turn. The loop halts with an explicit
//! outcome instead of rescanning forever.

use crate::bitset::BitSet;
use crate::grid::{Grid, Position};

/// Terminal state of a propagation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Propagation {
    /// Every cell was filled by forced deductions alone.
    Solved,
    /// No further forced values exist; the grid is still incomplete.
    /// Control passes to backtracking.
    Stalled,
    /// Some empty cell has no candidates left, so this grid admits no
    /// completion.
    Contradiction,
}

/// Run propagation to a fixed point on `grid`.
///
/// Stored candidate notes are refreshed up front and kept exact throughout,
/// so after a `Stalled` return they reflect the deduced state (used for
/// display notes as well as for search pruning). Each pass either assigns a
/// cell or terminates, bounding the loop at 81 passes.
pub(crate) fn run_to_fixed_point(grid: &mut Grid) -> Propagation {
    grid.recalculate_candidates();

    loop {
        let mut assigned = false;

        for pos in grid.empty_positions() {
            // A cascade earlier in this pass may have filled the cell
            if grid.cell(pos).is_filled() {
                continue;
            }
            let candidates = grid.get_candidates(pos);
            if candidates.is_empty() {
                return Propagation::Contradiction;
            }
            if let Some(value) = candidates.single_value() {
                if !assign(grid, pos, value) {
                    return Propagation::Contradiction;
                }
                assigned = true;
            }
        }

        if grid.is_complete() {
            return Propagation::Solved;
        }
        if !assigned {
            return Propagation::Stalled;
        }
    }
}

/// Assign `value` at `pos` and cascade the elimination through its peers.
/// Returns false when some peer is left with no candidates.
fn assign(grid: &mut Grid, pos: Position, value: u8) -> bool {
    grid.set_cell_unchecked(pos, Some(value));
    grid.cell_mut(pos).set_candidates(BitSet::empty());

    for peer in peers(pos) {
        if !grid.cell(peer).is_empty() {
            continue;
        }
        if !grid.get_candidates(peer).contains(value) {
            continue;
        }
        grid.cell_mut(peer).remove_candidate(value);
        let remaining = grid.get_candidates(peer);
        if remaining.is_empty() {
            return false;
        }
        if let Some(forced) = remaining.single_value() {
            if !assign(grid, peer, forced) {
                return false;
            }
        }
    }

    true
}

/// The 20 cells sharing a row, column, or box with `pos`.
fn peers(pos: Position) -> Vec<Position> {
    let mut out = Vec::with_capacity(20);
    for col in 0..9 {
        if col != pos.col {
            out.push(Position::new(pos.row, col));
        }
    }
    for row in 0..9 {
        if row != pos.row {
            out.push(Position::new(row, pos.col));
        }
    }
    let origin = pos.box_origin();
    for dr in 0..3 {
        for dc in 0..3 {
            let p = Position::new(origin.row + dr, origin.col + dc);
            if p.row != pos.row && p.col != pos.col {
                out.push(p);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_peers_count() {
        assert_eq!(peers(Position::new(0, 0)).len(), 20);
        assert_eq!(peers(Position::new(4, 4)).len(), 20);
        assert_eq!(peers(Position::new(8, 0)).len(), 20);
    }

    #[test]
    fn test_easy_puzzle_solved_by_propagation_alone() {
        let mut grid = Grid::from_string(EASY).unwrap();
        assert_eq!(run_to_fixed_point(&mut grid), Propagation::Solved);
        assert!(grid.is_valid_solution());
    }

    #[test]
    fn test_hard_puzzle_stalls_without_branching() {
        // Arto Inkala's puzzle: naked singles cannot complete it
        let hard =
            "800000000003600000070090200050007000000045700000100030001000068008500010090000400";
        let mut grid = Grid::from_string(hard).unwrap();
        assert_eq!(run_to_fixed_point(&mut grid), Propagation::Stalled);
        assert!(!grid.is_complete());
        // Stored notes are populated for every still-empty cell
        for pos in grid.empty_positions() {
            assert!(!grid.get_candidates(pos).is_empty());
        }
    }

    #[test]
    fn test_contradiction_detected_not_looped() {
        // Cell (0,0) is empty but sees all nine digits
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
        let mut grid = Grid::from_sdku(text).unwrap();
        assert_eq!(run_to_fixed_point(&mut grid), Propagation::Contradiction);
    }

    #[test]
    fn test_assignment_preserves_givens() {
        let mut grid = Grid::from_string(EASY).unwrap();
        let before: Vec<(Position, u8)> = Grid::positions()
            .filter(|&p| grid.cell(p).is_given())
            .map(|p| (p, grid.get(p).unwrap()))
            .collect();
        run_to_fixed_point(&mut grid);
        for (pos, value) in before {
            assert_eq!(grid.get(pos), Some(value));
            assert!(grid.cell(pos).is_given());
        }
    }
}
