/// Result type for parsing puzzle text.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for solve operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Errors raised while parsing puzzle text into a grid.
///
/// Parsing failures mean the engine never attempted a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input did not contain exactly 9 lines
    WrongLineCount(usize),
    /// A line did not contain exactly 9 characters
    WrongLineLength { line: usize, len: usize },
    /// A character other than '1'-'9' or '.' was encountered
    InvalidCharacter { line: usize, col: usize, found: char },
    /// Input did not contain exactly 81 cell characters
    WrongCellCount(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLineCount(n) => write!(f, "expected 9 lines, found {}", n),
            Self::WrongLineLength { line, len } => {
                write!(f, "line {}: expected 9 characters, found {}", line + 1, len)
            }
            Self::InvalidCharacter { line, col, found } => {
                write!(
                    f,
                    "line {}, column {}: invalid character {:?}",
                    line + 1,
                    col + 1,
                    found
                )
            }
            Self::WrongCellCount(n) => write!(f, "expected 81 cells, found {}", n),
        }
    }
}

impl std::error::Error for ParseError {}

/// Outcome errors from [`Solver::solve`](crate::Solver::solve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The search exhausted every branch without finding a valid completion.
    /// This is a normal, final result for contradictory input.
    Unsolvable,
    /// An internal consistency check failed. Indicates a defect in the
    /// engine itself; the solve call is aborted and never retried.
    InvariantViolation(&'static str),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsolvable => write!(f, "puzzle has no solution"),
            Self::InvariantViolation(what) => {
                write!(f, "internal solver invariant violated: {}", what)
            }
        }
    }
}

impl std::error::Error for SolveError {}
