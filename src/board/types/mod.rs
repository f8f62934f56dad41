//! Core board types.
//!
//! - `Piece`, `Color` and `ColoredPiece` - piece kinds and sides
//! - `Square` - (row, col) coordinates
//! - `SquareSet` - 64-bit set of squares

mod piece;
mod square;
mod square_set;

pub use piece::{Color, ColoredPiece, Piece};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
