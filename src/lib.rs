pub mod board;
pub mod console;
pub mod game;

pub use board::{Board, Color, ColoredPiece, Piece, Square, SquareSet};
pub use game::{ClickOutcome, Game, GameEvent};
