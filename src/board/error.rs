//! Error types for board and game operations.

use std::fmt;

use super::Square;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Neither algebraic notation nor a `row,col` pair
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for text layout parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout must have exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece letter in a row
    InvalidPiece { char: char },
    /// A row describes more than 8 squares
    RowTooLong { row: usize },
    /// A row describes fewer than 8 squares
    RowTooShort { row: usize, squares: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "Layout must have 8 rows, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            LayoutError::RowTooLong { row } => {
                write!(f, "Row {row} describes more than 8 squares")
            }
            LayoutError::RowTooShort { row, squares } => {
                write!(f, "Row {row} describes only {squares} squares")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Contract violations by callers of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The square lies outside the 8x8 board
    OffBoard { square: Square },
    /// A piece was required on this square but it is empty
    EmptySquare { square: Square },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OffBoard { square } => {
                write!(f, "Square {square} is outside the board")
            }
            GameError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_col_bounds() {
        let err = SquareError::ColOutOfBounds { col: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_layout_error_row_count() {
        let err = LayoutError::WrongRowCount { found: 7 };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('8'));
    }

    #[test]
    fn test_layout_error_invalid_piece() {
        let err = LayoutError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_game_error_names_square() {
        let err = GameError::EmptySquare {
            square: Square(4, 4),
        };
        assert!(err.to_string().contains("e4"));

        let err = GameError::OffBoard {
            square: Square(8, 1),
        };
        assert!(err.to_string().contains("(8,1)"));
    }

    #[test]
    fn test_error_clone() {
        let err = LayoutError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
