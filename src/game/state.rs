use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    belongs_to, legal_destinations, Board, Color, ColoredPiece, GameError, Square, SquareSet,
};

/// External events the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Click(Square),
    Reset,
}

/// Selection state. The side to move is tracked separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// A piece of the side to move is chosen, with its destinations cached.
    Selected { from: Square, destinations: SquareSet },
}

/// What a single event did, for callers that redraw selectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed
    Ignored,
    /// A piece was selected (or reselected)
    Selected {
        square: Square,
        destinations: SquareSet,
    },
    /// A move was applied and the turn passed
    Moved {
        from: Square,
        to: Square,
        piece: ColoredPiece,
        captured: Option<ColoredPiece>,
    },
    /// The selection was dropped without moving
    Deselected,
    /// The game went back to the starting position
    Reset,
}

/// Read-only picture of the game for a rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameView {
    pub board: Board,
    pub side_to_move: Color,
    pub selection: Option<Square>,
    pub destinations: Option<SquareSet>,
}

/// The click-driven game: board, side to move and current selection.
///
/// Only an applied move changes the board or the side to move; every other
/// click at most changes the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    phase: Phase,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Starting layout, White to move, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Game::with_position(Board::new(), Color::White)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn with_position(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            phase: Phase::Idle,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn selection(&self) -> Option<Square> {
        match self.phase {
            Phase::Idle => None,
            Phase::Selected { from, .. } => Some(from),
        }
    }

    /// Cached destinations of the selected piece, if any.
    #[must_use]
    pub fn destinations(&self) -> Option<SquareSet> {
        match self.phase {
            Phase::Idle => None,
            Phase::Selected { destinations, .. } => Some(destinations),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> GameView {
        GameView {
            board: self.board.clone(),
            side_to_move: self.side_to_move,
            selection: self.selection(),
            destinations: self.destinations(),
        }
    }

    /// React to a click on `square`.
    ///
    /// Off-board squares are rejected without touching the state.
    pub fn click(&mut self, square: Square) -> Result<ClickOutcome, GameError> {
        if !square.is_on_board() {
            warn!("click on off-board square {square} rejected");
            return Err(GameError::OffBoard { square });
        }

        match self.phase {
            Phase::Idle => self.try_select(square),
            Phase::Selected { from, destinations } => match self.board.piece_at(from) {
                Some(piece) if destinations.contains(square) => {
                    Ok(self.apply_move(from, square, piece))
                }
                _ if self.is_own_piece(square) => self.try_select(square),
                _ => {
                    debug!("deselected {from}");
                    self.phase = Phase::Idle;
                    Ok(ClickOutcome::Deselected)
                }
            },
        }
    }

    /// [`Game::click`] with raw coordinates.
    pub fn click_at(&mut self, row: usize, col: usize) -> Result<ClickOutcome, GameError> {
        self.click(Square(row, col))
    }

    /// Back to the starting layout with White to move and no selection.
    pub fn reset(&mut self) -> ClickOutcome {
        debug!("game reset");
        *self = Game::new();
        ClickOutcome::Reset
    }

    /// Handle one event in place.
    pub fn handle(&mut self, event: GameEvent) -> Result<ClickOutcome, GameError> {
        match event {
            GameEvent::Click(square) => self.click(square),
            GameEvent::Reset => Ok(self.reset()),
        }
    }

    /// Pure transition: consume the state and return the next one.
    pub fn apply(mut self, event: GameEvent) -> Result<Self, GameError> {
        self.handle(event)?;
        Ok(self)
    }

    fn is_own_piece(&self, square: Square) -> bool {
        belongs_to(self.board.piece_at(square), self.side_to_move)
    }

    fn try_select(&mut self, square: Square) -> Result<ClickOutcome, GameError> {
        if !self.is_own_piece(square) {
            return Ok(ClickOutcome::Ignored);
        }
        let destinations = legal_destinations(&self.board, square)?;
        debug!(
            "{} selected {square} with {} destinations",
            self.side_to_move,
            destinations.len()
        );
        self.phase = Phase::Selected {
            from: square,
            destinations,
        };
        Ok(ClickOutcome::Selected {
            square,
            destinations,
        })
    }

    fn apply_move(&mut self, from: Square, to: Square, piece: ColoredPiece) -> ClickOutcome {
        let captured = self.board.move_piece(from, to);
        match captured {
            Some(victim) => debug!("{piece} {from} takes {victim} on {to}"),
            None => debug!("{piece} {from} to {to}"),
        }
        self.side_to_move = self.side_to_move.opponent();
        self.phase = Phase::Idle;
        ClickOutcome::Moved {
            from,
            to,
            piece,
            captured,
        }
    }
}
