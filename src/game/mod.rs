//! Click-driven game state machine.
//!
//! A [`Game`] is either idle or has one piece of the side to move selected.
//! Clicking a cached destination applies the move and passes the turn;
//! clicking another own piece reselects; anything else deselects.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Square};
//! use chess_rules::game::Game;
//!
//! let mut game = Game::new();
//! game.click(Square(6, 4)).unwrap();
//! game.click(Square(4, 4)).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

mod shared;
mod state;


pub use shared::SharedGame;
pub use state::{ClickOutcome, Game, GameEvent, GameView, Phase};
