use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, ColoredPiece, Piece, Square, SquareSet};

static INITIAL_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, piece) in Piece::BACK_RANK.iter().enumerate() {
        for color in Color::BOTH {
            board.set_piece(Square(color.back_rank(), col), color, *piece);
            board.set_piece(Square(color.pawn_start_rank(), col), color, Piece::Pawn);
        }
    }
    board
});

/// An 8x8 grid of optional pieces, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<ColoredPiece>; 8]; 8],
}

impl Board {
    /// The standard starting layout.
    #[must_use]
    pub fn new() -> Self {
        INITIAL_BOARD.clone()
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Contents of a square; `None` for empty or off-board squares.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        if sq.is_on_board() {
            self.squares[sq.row()][sq.col()]
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Squares occupied by pieces of `color`.
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> SquareSet {
        self.pieces()
            .filter(|(_, p)| p.color == color)
            .map(|(sq, _)| sq)
            .collect()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(sq.is_on_board());
        self.squares[sq.row()][sq.col()] = Some(ColoredPiece::new(color, piece));
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        debug_assert!(sq.is_on_board());
        self.squares[sq.row()][sq.col()] = None;
    }

    /// Put the piece from `from` on `to` and empty `from`, returning whatever
    /// stood on `to` before.
    pub(crate) fn move_piece(&mut self, from: Square, to: Square) -> Option<ColoredPiece> {
        debug_assert!(from.is_on_board() && to.is_on_board());
        let moving = self.squares[from.row()][from.col()].take();
        std::mem::replace(&mut self.squares[to.row()][to.col()], moving)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
