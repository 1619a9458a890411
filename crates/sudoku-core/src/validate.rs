//! Rule checking: full-grid solution validation, single-value checks, and
//! conflict reporting for partially filled boards.

use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};

/// Outcome of [`Grid::validate`]: overall verdict plus the positions of
/// filled cells that conflict with another filled cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub conflicts: Vec<Position>,
}

/// Check that 9 values are a permutation of 1-9 using a seen-marker array.
/// Out-of-range values (including blanks mapped to 0) fail immediately.
fn is_valid_unit(values: [u8; 9]) -> bool {
    let mut seen = [false; 9];
    for v in values {
        if !(1..=9).contains(&v) {
            return false;
        }
        let slot = (v - 1) as usize;
        if seen[slot] {
            return false;
        }
        seen[slot] = true;
    }
    true
}

impl Grid {
    /// True iff every cell holds a value 1-9 and each row, column, and box
    /// is a permutation of 1-9.
    pub fn is_valid_solution(&self) -> bool {
        for row in 0..9 {
            let mut values = [0u8; 9];
            for col in 0..9 {
                values[col] = self.get(Position::new(row, col)).unwrap_or(0);
            }
            if !is_valid_unit(values) {
                return false;
            }
        }

        for col in 0..9 {
            let mut values = [0u8; 9];
            for row in 0..9 {
                values[row] = self.get(Position::new(row, col)).unwrap_or(0);
            }
            if !is_valid_unit(values) {
                return false;
            }
        }

        for box_row in 0..3 {
            for box_col in 0..3 {
                let mut values = [0u8; 9];
                for dr in 0..3 {
                    for dc in 0..3 {
                        values[dr * 3 + dc] =
                            self.get(Position::new(box_row * 3 + dr, box_col * 3 + dc)).unwrap_or(0);
                    }
                }
                if !is_valid_unit(values) {
                    return false;
                }
            }
        }

        true
    }

    /// True iff placing `value` at `pos` would not duplicate `value` at any
    /// other cell of the same row, column, or box. The cell at `pos` itself
    /// is excluded, so a value already written there checks as consistent.
    /// Intended for live input feedback; no solve is performed.
    pub fn check_value(&self, pos: Position, value: u8) -> bool {
        if !(1..=9).contains(&value) {
            return false;
        }

        for col in 0..9 {
            if col != pos.col && self.get(Position::new(pos.row, col)) == Some(value) {
                return false;
            }
        }

        for row in 0..9 {
            if row != pos.row && self.get(Position::new(row, pos.col)) == Some(value) {
                return false;
            }
        }

        let origin = pos.box_origin();
        for dr in 0..3 {
            for dc in 0..3 {
                let other = Position::new(origin.row + dr, origin.col + dc);
                if other != pos && self.get(other) == Some(value) {
                    return false;
                }
            }
        }

        true
    }

    /// Report every filled cell whose value conflicts with another filled
    /// cell in a shared unit. A complete, conflict-free grid is valid.
    pub fn validate(&self) -> ValidationReport {
        let mut conflicts = Vec::new();
        for pos in Grid::positions() {
            if let Some(v) = self.get(pos) {
                if !self.check_value(pos, v) {
                    conflicts.push(pos);
                }
            }
        }
        ValidationReport {
            is_valid: conflicts.is_empty() && self.is_complete(),
            conflicts,
        }
    }
}
