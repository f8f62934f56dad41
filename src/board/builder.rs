//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing a layout.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial layout.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::from_board(&Board::new())
    }

    /// Create a builder holding the pieces of an existing board.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        BoardBuilder {
            pieces: board
                .pieces()
                .map(|(sq, p)| (sq, p.color, p.piece))
                .collect(),
        }
    }

    /// Place a piece on the board. Off-board squares are dropped at build time.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, color, piece) in self.pieces {
            if sq.is_on_board() {
                board.set_piece(sq, color, piece);
            }
        }
        board
    }
}
