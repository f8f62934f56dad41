//! Thread-safe handle around a single game.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{ClickOutcome, Game, GameEvent, GameView};
use crate::board::GameError;

/// A cloneable handle that serializes every event through one lock.
///
/// Events from different threads are applied one at a time in the order the
/// lock is acquired; each one runs to completion before the next starts.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    pub fn handle(&self, event: GameEvent) -> Result<ClickOutcome, GameError> {
        self.0.lock().handle(event)
    }

    /// Consistent copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameView {
        self.0.lock().snapshot()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut *self.0.lock())
    }
}
