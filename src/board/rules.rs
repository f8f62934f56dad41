//! Per-piece movement rules.
//!
//! The rule set is reduced: there is no check detection, so a
//! king may step onto an attacked square and may itself be captured. Castling,
//! en passant and promotion do not exist.

use super::{Board, Color, ColoredPiece, Piece, Square};

/// Whether a square's content belongs to `color`. Empty squares belong to
/// neither side.
#[inline]
#[must_use]
pub fn belongs_to(content: Option<ColoredPiece>, color: Color) -> bool {
    matches!(content, Some(p) if p.color == color)
}

/// Unit step (-1, 0 or +1) from `from` toward `to` along one axis.
#[inline]
fn step(from: usize, to: usize) -> isize {
    match to.cmp(&from) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Returns true when every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, column or diagonal; otherwise, or when
/// either square is off the board, the answer is false. The occupancy of `to`
/// itself is not considered.
#[must_use]
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let (d_row, d_col) = diff(from, to);
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return false;
    }

    let (row_step, col_step) = (step(from.row(), to.row()), step(from.col(), to.col()));
    let mut current = from;
    loop {
        current = match current.offset(row_step, col_step) {
            Some(sq) => sq,
            None => return false,
        };
        if current == to {
            return true;
        }
        if board.is_occupied(current) {
            return false;
        }
    }
}

#[inline]
fn diff(from: Square, to: Square) -> (isize, isize) {
    (
        to.row() as isize - from.row() as isize,
        to.col() as isize - from.col() as isize,
    )
}

/// Decide whether `piece`, standing on `from`, may move to `to`.
///
/// Off-board squares and captures of friendly pieces are always illegal.
#[must_use]
pub fn is_legal(board: &Board, from: Square, to: Square, piece: ColoredPiece) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let target = board.piece_at(to);
    if belongs_to(target, piece.color) {
        return false;
    }

    let (d_row, d_col) = diff(from, to);
    match piece.piece {
        Piece::Pawn => pawn_move_is_legal(board, from, piece.color, target, d_row, d_col),
        Piece::Knight => matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2)),
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            let kind = piece.piece;
            let on_line = (kind.slides_diagonally() && is_diagonal(d_row, d_col))
                || (kind.slides_straight() && is_straight(d_row, d_col));
            on_line && is_path_clear(board, from, to)
        }
        Piece::King => d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0),
    }
}

#[inline]
fn is_diagonal(d_row: isize, d_col: isize) -> bool {
    d_row != 0 && d_row.abs() == d_col.abs()
}

/// Exactly one of the two offsets is zero.
#[inline]
fn is_straight(d_row: isize, d_col: isize) -> bool {
    (d_row == 0) != (d_col == 0)
}

fn pawn_move_is_legal(
    board: &Board,
    from: Square,
    color: Color,
    target: Option<ColoredPiece>,
    d_row: isize,
    d_col: isize,
) -> bool {
    let dir = color.pawn_direction();

    if d_col == 0 && target.is_none() {
        if d_row == dir {
            return true;
        }
        if d_row == 2 * dir && from.row() == color.pawn_start_rank() {
            return from
                .offset(dir, 0)
                .is_some_and(|between| !board.is_occupied(between));
        }
        return false;
    }

    // Only an opposing piece can be on `target` here; friendly captures were
    // rejected by the caller.
    d_col.abs() == 1 && d_row == dir && target.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(piece: Piece) -> ColoredPiece {
        ColoredPiece::new(Color::White, piece)
    }

    #[test]
    fn test_belongs_to() {
        assert!(belongs_to(Some(white(Piece::Pawn)), Color::White));
        assert!(!belongs_to(Some(white(Piece::Pawn)), Color::Black));
        assert!(!belongs_to(None, Color::White));
        assert!(!belongs_to(None, Color::Black));
    }

    #[test]
    fn test_path_clear_ignores_destination() {
        let board = Board::new();
        // a1 rook to a2 pawn: nothing in between
        assert!(is_path_clear(&board, Square(7, 0), Square(6, 0)));
        // a1 to a3 passes through the a2 pawn
        assert!(!is_path_clear(&board, Square(7, 0), Square(5, 0)));
    }

    #[test]
    fn test_path_clear_rejects_unaligned() {
        let board = Board::empty();
        assert!(!is_path_clear(&board, Square(0, 0), Square(1, 2)));
        assert!(!is_path_clear(&board, Square(0, 0), Square(9, 9)));
    }

    #[test]
    fn test_step() {
        assert_eq!(step(3, 5), 1);
        assert_eq!(step(5, 3), -1);
        assert_eq!(step(4, 4), 0);
    }

    #[test]
    fn test_off_board_destination() {
        let board = Board::new();
        assert!(!is_legal(&board, Square(7, 1), Square(8, 2), white(Piece::Knight)));
        assert!(!is_legal(&board, Square(7, 1), Square(5, 8), white(Piece::Knight)));
    }

    #[test]
    fn test_king_cannot_stay() {
        let board = Board::empty();
        assert!(!is_legal(&board, Square(4, 4), Square(4, 4), white(Piece::King)));
        assert!(is_legal(&board, Square(4, 4), Square(3, 3), white(Piece::King)));
        assert!(!is_legal(&board, Square(4, 4), Square(2, 4), white(Piece::King)));
    }
}
