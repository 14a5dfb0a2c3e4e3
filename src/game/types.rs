//! Core domain types: marks, squares, the board, and game status.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// Errors raised when assembling a game from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Empty cells render as blanks, so a whitespace mark would be invisible.
    #[display("a player mark may not be a whitespace character")]
    BlankMark,
    /// Each mark must identify exactly one player.
    #[display("players must use distinct marks")]
    DuplicateMark,
}

/// A player's mark character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark(char);

impl Mark {
    /// Creates a mark, rejecting whitespace characters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BlankMark`] for whitespace input.
    pub fn new(symbol: char) -> Result<Self, ConfigError> {
        if symbol.is_whitespace() {
            return Err(ConfigError::BlankMark);
        }
        Ok(Self(symbol))
    }

    /// The underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a player's mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Availability is derived from the cells on demand, so it can never go
/// stale — mutating through [`Board::set`] or [`Board::clear`] needs no
/// separate bookkeeping step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    cells: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Square::Empty; 9],
        }
    }

    /// The square at the given position.
    pub fn get(&self, position: Position) -> Square {
        self.cells[position.index()]
    }

    /// Overwrites the square at the given position.
    ///
    /// Callers placing a mark must check availability first; an occupied
    /// square is overwritten without complaint.
    pub fn set(&mut self, position: Position, square: Square) {
        self.cells[position.index()] = square;
    }

    /// Whether the square at `position` is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Square::Empty
    }

    /// Empty positions in ascending index order.
    pub fn available(&self) -> Vec<Position> {
        Position::iter()
            .filter(|&position| self.is_empty(position))
            .collect()
    }

    /// Resets every square to empty.
    pub fn clear(&mut self) {
        self.cells = [Square::Empty; 9];
    }

    /// All squares, row-major, for rendering.
    pub fn squares(&self) -> &[Square; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with the given mark making three in a row.
    Won(Mark),
    /// Game ended with a full board and no winner.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(symbol: char) -> Mark {
        Mark::new(symbol).unwrap()
    }

    fn empties(board: &Board) -> Vec<Position> {
        Position::iter()
            .filter(|&position| board.get(position) == Square::Empty)
            .collect()
    }

    #[test]
    fn test_available_tracks_cells_after_every_set() {
        let mut board = Board::new();
        assert_eq!(board.available().len(), 9);

        let plays = [Position::Center, Position::TopLeft, Position::BottomRight];
        for (step, position) in plays.into_iter().enumerate() {
            board.set(position, Square::Occupied(mark('x')));
            assert_eq!(board.available(), empties(&board));
            assert_eq!(board.available().len(), 8 - step);
        }
    }

    #[test]
    fn test_available_is_ascending() {
        let mut board = Board::new();
        board.set(Position::TopCenter, Square::Occupied(mark('x')));
        board.set(Position::BottomLeft, Square::Occupied(mark('o')));

        let indices: Vec<usize> = board.available().iter().map(|p| p.index()).collect();
        assert_eq!(indices, vec![0, 2, 3, 4, 5, 7, 8]);
    }

    #[test]
    fn test_clear_restores_availability() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(mark('x')));
        board.set(Position::TopLeft, Square::Occupied(mark('o')));

        board.clear();
        assert_eq!(board.available().len(), 9);
        assert!(board.squares().iter().all(|&square| square == Square::Empty));
    }

    #[test]
    fn test_set_overwrites_unconditionally() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(mark('x')));
        board.set(Position::Center, Square::Occupied(mark('o')));
        assert_eq!(board.get(Position::Center), Square::Occupied(mark('o')));
    }

    #[test]
    fn test_whitespace_mark_rejected() {
        assert_eq!(Mark::new(' '), Err(ConfigError::BlankMark));
        assert_eq!(Mark::new('\t'), Err(ConfigError::BlankMark));
        assert!(Mark::new('x').is_ok());
    }

    #[test]
    fn test_status_serializes_with_winning_mark() {
        let status = GameStatus::Won(mark('x'));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#"{"Won":"x"}"#);
    }
}
