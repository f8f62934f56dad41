//! Board representation and movement rules.
//!
//! An 8x8 grid of optional pieces plus the reduced legality rules that judge
//! single moves on it. No check detection, castling, en passant or promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let board = Board::new();
//! let moves = board.legal_destinations(Square(6, 4)).unwrap();
//! assert_eq!(moves.to_vec(), vec![Square(4, 4), Square(5, 4)]);
//! ```

mod builder;
mod display;
mod error;
mod layout;
mod movegen;
pub mod prelude;
pub mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use display::RenderStyle;
pub use error::{GameError, LayoutError, SquareError};
pub use layout::STARTING_LAYOUT;
pub use movegen::legal_destinations;
pub use rules::{belongs_to, is_legal, is_path_clear};
pub use state::Board;
pub use types::{Color, ColoredPiece, Piece, Square, SquareSet, SquareSetIter};
