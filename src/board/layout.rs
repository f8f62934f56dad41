//! Text layout of piece placement.
//!
//! Rows are separated by `/`, the first row is row 0 (Black's back rank),
//! uppercase letters are White pieces and digits are runs of empty squares:
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.

use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, ColoredPiece, Square};

pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a board from its text layout.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 {
                        return Err(LayoutError::InvalidPiece { char: c });
                    }
                    col += run as usize;
                    if col > 8 {
                        return Err(LayoutError::RowTooLong { row });
                    }
                    continue;
                }
                let piece = ColoredPiece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(LayoutError::RowTooLong { row });
                }
                board.set_piece(Square(row, col), piece.color, piece.piece);
                col += 1;
            }
            if col < 8 {
                return Err(LayoutError::RowTooShort { row, squares: col });
            }
        }
        Ok(board)
    }

    /// Format the board as a text layout.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some(p) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(p.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_layout(s)
    }
}
