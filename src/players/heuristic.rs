//! Heuristic computer opponent: win, block, or play at random.

use super::{Player, PlayerState};
use crate::game::{Board, Mark, Position, WINNING_LINES};
use anyhow::Result;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Computer opponent with a greedy one-ply policy.
///
/// The policy takes an immediate win, otherwise blocks the opponent's
/// immediate win, otherwise plays a uniformly random open cell. It does
/// not look further ahead and a fork beats it.
pub struct HeuristicPlayer {
    name: String,
    state: PlayerState,
}

impl HeuristicPlayer {
    /// Creates a heuristic player.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            state: PlayerState::new(mark),
        }
    }
}

impl Player for HeuristicPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> &PlayerState {
        &self.state
    }

    #[instrument(skip_all, fields(player = %self.name))]
    fn take_turn(
        &mut self,
        opponent: &PlayerState,
        board: &mut Board,
        rng: &mut StdRng,
    ) -> Result<Position> {
        let position = if let Some(winning) = find_winning_cell(&self.state, board) {
            debug!(cell = %winning, "taking the winning cell");
            winning
        } else if let Some(threat) = find_winning_cell(opponent, board) {
            debug!(cell = %threat, "blocking the opponent");
            threat
        } else {
            let open = board.available();
            let pick = open
                .choose(rng)
                .copied()
                .ok_or_else(|| anyhow::anyhow!("no open cells left to play"))?;
            debug!(cell = %pick, "no win or threat in sight, playing a random cell");
            pick
        };

        self.state.place_mark(position, board);
        Ok(position)
    }
}

/// Finds the cell that would complete a winning triple for `player`.
///
/// Scans the triples in [`WINNING_LINES`] order and returns the first
/// open third cell of a triple where `player` already holds the other
/// two. Returns `None` when no triple is one move from completion.
pub fn find_winning_cell(player: &PlayerState, board: &Board) -> Option<Position> {
    for line in &WINNING_LINES {
        let held = line.iter().filter(|&&cell| player.occupies(cell)).count();
        if held != 2 {
            continue;
        }
        if let Some(&third) = line.iter().find(|&&cell| !player.occupies(cell)) {
            if board.is_empty(third) {
                return Some(third);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Square;
    use rand::SeedableRng;

    fn mark(symbol: char) -> Mark {
        Mark::new(symbol).unwrap()
    }

    /// Places the given cells for two players and returns their states.
    fn setup(
        player_cells: &[Position],
        opponent_cells: &[Position],
    ) -> (PlayerState, PlayerState, Board) {
        let mut board = Board::new();
        let mut player = PlayerState::new(mark('x'));
        let mut opponent = PlayerState::new(mark('o'));
        for &cell in player_cells {
            player.place_mark(cell, &mut board);
        }
        for &cell in opponent_cells {
            opponent.place_mark(cell, &mut board);
        }
        (player, opponent, board)
    }

    #[test]
    fn test_finds_cell_completing_a_row() {
        let (player, _, board) = setup(&[Position::TopLeft, Position::TopCenter], &[]);
        assert_eq!(find_winning_cell(&player, &board), Some(Position::TopRight));
    }

    #[test]
    fn test_ignores_triple_whose_third_cell_is_taken() {
        let (player, _, board) = setup(
            &[Position::TopLeft, Position::TopCenter],
            &[Position::TopRight],
        );
        assert_eq!(find_winning_cell(&player, &board), None);
    }

    #[test]
    fn test_no_winning_cell_without_a_pair() {
        let (player, _, board) = setup(&[Position::TopLeft, Position::BottomCenter], &[]);
        assert_eq!(find_winning_cell(&player, &board), None);
    }

    #[test]
    fn test_takes_the_win_over_the_block() {
        // Heuristic holds {0,1}, opponent holds {3,4}: both a win at 2 and
        // a block at 5 exist; the win must be chosen.
        let (player, opponent, mut board) = setup(
            &[Position::TopLeft, Position::TopCenter],
            &[Position::MiddleLeft, Position::Center],
        );
        let mut bot = HeuristicPlayer {
            name: "bot".to_string(),
            state: player,
        };
        let mut rng = StdRng::seed_from_u64(7);

        let chosen = bot.take_turn(&opponent, &mut board, &mut rng).unwrap();

        assert_eq!(chosen, Position::TopRight);
        assert_eq!(
            board.get(Position::TopRight),
            Square::Occupied(mark('x')),
        );
    }

    #[test]
    fn test_blocks_the_opponent_without_a_win_of_its_own() {
        let (player, opponent, mut board) = setup(
            &[Position::BottomCenter],
            &[Position::MiddleLeft, Position::Center],
        );
        let mut bot = HeuristicPlayer {
            name: "bot".to_string(),
            state: player,
        };
        let mut rng = StdRng::seed_from_u64(7);

        let chosen = bot.take_turn(&opponent, &mut board, &mut rng).unwrap();

        assert_eq!(chosen, Position::MiddleRight);
    }

    #[test]
    fn test_falls_back_to_a_random_open_cell() {
        let (player, opponent, mut board) = setup(&[Position::TopLeft], &[Position::Center]);
        let open_before = board.available();
        let mut bot = HeuristicPlayer {
            name: "bot".to_string(),
            state: player,
        };
        let mut rng = StdRng::seed_from_u64(42);

        let chosen = bot.take_turn(&opponent, &mut board, &mut rng).unwrap();

        assert!(open_before.contains(&chosen));
        assert!(bot.state().occupies(chosen));
        assert_eq!(board.available().len(), open_before.len() - 1);
    }
}
