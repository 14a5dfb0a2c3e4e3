//! Player trait and the two move-selection variants.

mod heuristic;
mod human;

pub use heuristic::{HeuristicPlayer, find_winning_cell};
pub use human::{HumanPlayer, MoveSource};

use crate::game::{Board, Mark, Position, Square};
use anyhow::Result;
use rand::rngs::StdRng;

/// A participant in the game.
///
/// Implementations select and place their next move in one call: the
/// human-driven variant is handed its position by the input collaborator,
/// the heuristic variant computes one from the board.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// Mark and occupied-cell bookkeeping.
    fn state(&self) -> &PlayerState;

    /// Selects the next move and places it on `board`.
    ///
    /// Returns the chosen position. The board is only borrowed for the
    /// duration of this call; players never retain it.
    fn take_turn(
        &mut self,
        opponent: &PlayerState,
        board: &mut Board,
        rng: &mut StdRng,
    ) -> Result<Position>;
}

/// A player's mark and the cells it has marked.
#[derive(Debug, Clone)]
pub struct PlayerState {
    mark: Mark,
    cells: Vec<Position>,
}

impl PlayerState {
    /// Creates an empty state for `mark`.
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            cells: Vec::new(),
        }
    }

    /// The player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Cells this player has marked, in play order.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Whether this player has marked `position`.
    pub fn occupies(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    /// Writes the mark to the board and records the cell.
    ///
    /// Callers must ensure `position` is available on `board`: the human
    /// path validates in the input loop, the heuristic only selects open
    /// cells.
    pub fn place_mark(&mut self, position: Position, board: &mut Board) {
        board.set(position, Square::Occupied(self.mark));
        self.cells.push(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_mark_updates_board_and_bookkeeping() {
        let mut board = Board::new();
        let mut state = PlayerState::new(Mark::new('x').unwrap());

        state.place_mark(Position::Center, &mut board);

        assert_eq!(
            board.get(Position::Center),
            Square::Occupied(Mark::new('x').unwrap())
        );
        assert!(state.occupies(Position::Center));
        assert_eq!(state.cells(), &[Position::Center]);
        assert_eq!(board.available().len(), 8);
    }
}
