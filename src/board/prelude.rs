//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    belongs_to, is_legal, is_path_clear, legal_destinations, Board, BoardBuilder, Color,
    ColoredPiece, GameError, LayoutError, Piece, Square, SquareError, SquareSet,
};
