use crate::bitset::BitSet;
use crate::error::{ParseError, ParseResult};
use serde::{Deserialize, Serialize};

/// A cell coordinate on the 9x9 board. Row and column are 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Index (0-8) of the 3x3 box containing this position, row-major.
    pub fn box_index(&self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Top-left corner of the containing box.
    pub fn box_origin(&self) -> Position {
        Position::new(self.row - self.row % 3, self.col - self.col % 3)
    }
}

/// One cell of the board: its value, whether it was given in the original
/// puzzle, and the candidate notes tracked while it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: Option<u8>,
    given: bool,
    candidates: BitSet,
}

impl Cell {
    fn empty() -> Self {
        Self {
            value: None,
            given: false,
            candidates: BitSet::empty(),
        }
    }

    fn given(value: u8) -> Self {
        Self {
            value: Some(value),
            given: true,
            candidates: BitSet::empty(),
        }
    }

    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// Whether this cell's value came with the original puzzle. Given cells
    /// are never modified by the engine.
    pub fn is_given(&self) -> bool {
        self.given
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    /// Candidate notes. Only meaningful while the cell is empty.
    pub fn candidates(&self) -> BitSet {
        self.candidates
    }

    pub fn set_candidates(&mut self, candidates: BitSet) {
        self.candidates = candidates;
    }

    pub fn remove_candidate(&mut self, value: u8) {
        self.candidates.remove(value);
    }
}

/// A 9x9 Sudoku board.
///
/// The engine never mutates a caller's grid: solving operates on a
/// [`deep_clone`](Grid::deep_clone) owned by that call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An all-empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::empty(); 9]; 9],
        }
    }

    /// Parse a puzzle from a string of 81 cell characters: '1'-'9' for a
    /// given value, '.' or '0' for a blank. Whitespace (including newlines)
    /// is skipped, so both single-line fixtures and 9-line layouts parse.
    pub fn from_string(s: &str) -> ParseResult<Self> {
        let mut grid = Grid::new();
        let mut idx = 0usize;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if idx >= 81 {
                idx += 1;
                continue;
            }
            let pos = Position::new(idx / 9, idx % 9);
            match ch {
                '.' | '0' => {}
                '1'..='9' => {
                    grid.cells[pos.row][pos.col] = Cell::given(ch as u8 - b'0');
                }
                _ => {
                    return Err(ParseError::InvalidCharacter {
                        line: pos.row,
                        col: pos.col,
                        found: ch,
                    })
                }
            }
            idx += 1;
        }
        if idx != 81 {
            return Err(ParseError::WrongCellCount(idx));
        }
        grid.recalculate_candidates();
        Ok(grid)
    }

    /// Parse the strict `.sdku` file format: exactly 9 lines of exactly 9
    /// characters, each '1'-'9' (given) or '.' (blank). Anything else is
    /// malformed and rejected before any solving happens.
    pub fn from_sdku(s: &str) -> ParseResult<Self> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != 9 {
            return Err(ParseError::WrongLineCount(lines.len()));
        }
        let mut grid = Grid::new();
        for (row, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 9 {
                return Err(ParseError::WrongLineLength {
                    line: row,
                    len: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                match ch {
                    '.' => {}
                    '1'..='9' => {
                        grid.cells[row][col] = Cell::given(ch as u8 - b'0');
                    }
                    _ => {
                        return Err(ParseError::InvalidCharacter {
                            line: row,
                            col,
                            found: ch,
                        })
                    }
                }
            }
        }
        grid.recalculate_candidates();
        Ok(grid)
    }

    /// Render in `.sdku` form: 9 lines of 9 characters, blanks as '.'.
    pub fn to_sdku(&self) -> String {
        let mut out = String::with_capacity(90);
        for row in 0..9 {
            for col in 0..9 {
                match self.cells[row][col].value {
                    Some(v) => out.push((b'0' + v) as char),
                    None => out.push('.'),
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.row][pos.col]
    }

    pub fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.row][pos.col]
    }

    /// Value at a position, `None` when empty.
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col].value
    }

    /// Set or clear a value without any rule checking. The given flag is
    /// untouched; callers must not target given cells.
    pub fn set_cell_unchecked(&mut self, pos: Position, value: Option<u8>) {
        debug_assert!(!self.cells[pos.row][pos.col].given);
        self.cells[pos.row][pos.col].value = value;
    }

    /// All positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..81).map(|i| Position::new(i / 9, i % 9))
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Self::positions()
            .filter(|&pos| self.cell(pos).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|cell| cell.value.is_some())
    }

    pub fn given_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.given).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.value.is_none())
            .count()
    }

    /// Explicit owned copy for per-call solver state.
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    // ==================== Constraint queries ====================

    /// Digits 1-9 not yet placed anywhere in the row.
    pub fn remaining_in_row(&self, row: usize) -> BitSet {
        let mut remaining = BitSet::full();
        for col in 0..9 {
            if let Some(v) = self.cells[row][col].value {
                remaining.remove(v);
            }
        }
        remaining
    }

    /// Digits 1-9 not yet placed anywhere in the column.
    pub fn remaining_in_col(&self, col: usize) -> BitSet {
        let mut remaining = BitSet::full();
        for row in 0..9 {
            if let Some(v) = self.cells[row][col].value {
                remaining.remove(v);
            }
        }
        remaining
    }

    /// Digits 1-9 not yet placed anywhere in the 3x3 box containing `pos`.
    pub fn remaining_in_box(&self, pos: Position) -> BitSet {
        let origin = pos.box_origin();
        let mut remaining = BitSet::full();
        for dr in 0..3 {
            for dc in 0..3 {
                if let Some(v) = self.cells[origin.row + dr][origin.col + dc].value {
                    remaining.remove(v);
                }
            }
        }
        remaining
    }

    /// Digits placeable at `pos` under current constraints: the intersection
    /// of the row, column, and box remaining sets.
    pub fn available_digits(&self, pos: Position) -> BitSet {
        self.remaining_in_row(pos.row) & self.remaining_in_col(pos.col) & self.remaining_in_box(pos)
    }

    /// Stored candidate notes for a cell.
    pub fn get_candidates(&self, pos: Position) -> BitSet {
        self.cell(pos).candidates()
    }

    /// Refresh every empty cell's stored candidates from the current
    /// constraints. Filled cells get an empty set.
    pub fn recalculate_candidates(&mut self) {
        for pos in Self::positions() {
            let candidates = if self.cell(pos).is_empty() {
                self.available_digits(pos)
            } else {
                BitSet::empty()
            };
            self.cell_mut(pos).set_candidates(candidates);
        }
    }

    pub fn clear_all_candidates(&mut self) {
        for pos in Self::positions() {
            self.cell_mut(pos).set_candidates(BitSet::empty());
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..9 {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    write!(f, "| ")?;
                }
                match self.cells[row][col].value {
                    Some(v) => write!(f, "{} ", v)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
