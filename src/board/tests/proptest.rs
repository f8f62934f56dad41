//! Property-based tests using proptest.

use crate::board::{
    is_legal, is_path_clear, legal_destinations, Board, BoardBuilder, Color, ColoredPiece, Piece,
    Square,
};
use proptest::prelude::*;

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop::sample::select(Piece::ALL.to_vec())
}

fn colored_piece_strategy() -> impl Strategy<Value = ColoredPiece> {
    (color_strategy(), piece_strategy()).prop_map(|(c, p)| ColoredPiece::new(c, p))
}

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..8usize, 0..8usize).prop_map(|(r, c)| Square(r, c))
}

/// Random board with roughly a third of the squares occupied
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::option::weighted(0.35, colored_piece_strategy()), 64).prop_map(
        |cells| {
            let mut builder = BoardBuilder::new();
            for (idx, cell) in cells.into_iter().enumerate() {
                if let Some(p) = cell {
                    builder = builder.piece(Square::from_index(idx), p.color, p.piece);
                }
            }
            builder.build()
        },
    )
}

fn line_between(from: Square, to: Square) -> Vec<Square> {
    let d_row = (to.row() as isize - from.row() as isize).signum();
    let d_col = (to.col() as isize - from.col() as isize).signum();
    let mut squares = Vec::new();
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        if next == to {
            break;
        }
        squares.push(next);
        current = next;
    }
    squares
}

proptest! {
    /// Property: a piece never captures a piece of its own color
    #[test]
    fn prop_no_self_capture(board in board_strategy(), from in square_strategy(), to in square_strategy(), mover in colored_piece_strategy()) {
        let board = BoardBuilder::from_board(&board).piece(from, mover.color, mover.piece).build();
        if let Some(target) = board.piece_at(to) {
            if target.color == mover.color {
                prop_assert!(!is_legal(&board, from, to, mover));
            }
        }
    }

    /// Property: sliders never pass through an occupied square
    #[test]
    fn prop_sliders_respect_obstruction(board in board_strategy(), from in square_strategy(), to in square_strategy(), color in color_strategy()) {
        let d_row = to.row() as isize - from.row() as isize;
        let d_col = to.col() as isize - from.col() as isize;
        let aligned = (d_row == 0) != (d_col == 0) || (d_row != 0 && d_row.abs() == d_col.abs());
        if !aligned {
            return Ok(());
        }

        let between = line_between(from, to);
        let blocked = between.iter().any(|&sq| board.is_occupied(sq));
        prop_assert_eq!(is_path_clear(&board, from, to), !blocked);

        if blocked {
            for kind in [Piece::Bishop, Piece::Rook, Piece::Queen] {
                prop_assert!(!is_legal(&board, from, to, ColoredPiece::new(color, kind)));
            }
        }
    }

    /// Property: a knight's jump is legal onto any non-friendly square, however crowded
    #[test]
    fn prop_knight_ignores_obstruction(board in board_strategy(), from in square_strategy(), color in color_strategy()) {
        let knight = ColoredPiece::new(color, Piece::Knight);
        for (dr, dc) in [(2, 1), (1, 2), (-1, 2), (-2, 1), (-2, -1), (-1, -2), (1, -2), (2, -1)] {
            if let Some(to) = from.offset(dr, dc) {
                let friendly = board.piece_at(to).is_some_and(|p| p.color == color);
                prop_assert_eq!(is_legal(&board, from, to, knight), !friendly);
            }
        }
    }

    /// Property: enumeration agrees with the evaluator square by square
    #[test]
    fn prop_destinations_match_evaluator(board in board_strategy(), from in square_strategy(), mover in colored_piece_strategy()) {
        let board = BoardBuilder::from_board(&board).piece(from, mover.color, mover.piece).build();
        let moves = legal_destinations(&board, from).unwrap();
        for to in Square::all() {
            prop_assert_eq!(moves.contains(to), is_legal(&board, from, to, mover));
        }
    }

    /// Property: pawns only move diagonally onto an opposing piece
    #[test]
    fn prop_pawn_diagonal_requires_capture(board in board_strategy(), from in square_strategy(), color in color_strategy()) {
        let pawn = ColoredPiece::new(color, Piece::Pawn);
        for dc in [-1, 1] {
            if let Some(to) = from.offset(color.pawn_direction(), dc) {
                let enemy = board.piece_at(to).is_some_and(|p| p.color != color);
                prop_assert_eq!(is_legal(&board, from, to, pawn), enemy);
            }
        }
    }
}
