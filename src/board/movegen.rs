//! Destination enumeration.

use log::{trace, warn};

use super::error::GameError;
use super::rules::is_legal;
use super::{Board, Square, SquareSet};

/// All squares the piece on `from` may legally move to, in row-major order.
///
/// Asking about an empty or off-board square is a caller error.
pub fn legal_destinations(board: &Board, from: Square) -> Result<SquareSet, GameError> {
    if !from.is_on_board() {
        warn!("destination scan requested for off-board square {from}");
        return Err(GameError::OffBoard { square: from });
    }
    let Some(piece) = board.piece_at(from) else {
        warn!("destination scan requested for empty square {from}");
        return Err(GameError::EmptySquare { square: from });
    };

    let moves: SquareSet = Square::all()
        .filter(|&to| is_legal(board, from, to, piece))
        .collect();
    trace!("{piece} on {from}: {} destinations", moves.len());
    Ok(moves)
}

impl Board {
    /// See [`legal_destinations`].
    pub fn legal_destinations(&self, from: Square) -> Result<SquareSet, GameError> {
        legal_destinations(self, from)
    }
}
