//! Human-driven player fed by an input collaborator.

use super::{Player, PlayerState};
use crate::game::{Board, Mark, Position};
use anyhow::Result;
use rand::rngs::StdRng;
use tracing::debug;

/// Supplies validated positions for a human-driven player.
///
/// Implementations own the prompt/reprompt loop and only return positions
/// that are available on the board they were shown.
pub trait MoveSource {
    /// Produces the next move for the given board.
    fn choose(&mut self, board: &Board) -> Result<Position>;
}

/// Player whose moves come from an external input source.
pub struct HumanPlayer {
    name: String,
    state: PlayerState,
    source: Box<dyn MoveSource>,
}

impl HumanPlayer {
    /// Creates a human player reading moves from `source`.
    pub fn new(name: impl Into<String>, mark: Mark, source: Box<dyn MoveSource>) -> Self {
        Self {
            name: name.into(),
            state: PlayerState::new(mark),
            source,
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn take_turn(
        &mut self,
        _opponent: &PlayerState,
        board: &mut Board,
        _rng: &mut StdRng,
    ) -> Result<Position> {
        let position = self.source.choose(board)?;
        debug!(player = %self.name, cell = %position, "move accepted");
        self.state.place_mark(position, board);
        Ok(position)
    }
}
