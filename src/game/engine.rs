//! Turn orchestration between the two players.

use super::position::Position;
use super::rules;
use super::types::{Board, ConfigError, GameStatus, Mark};
use crate::players::Player;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Messages sent from the engine to the frontend.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A ply is starting.
    TurnStarted {
        /// 1-based ply counter.
        number: u32,
        /// Mark of the player about to move.
        mark: Mark,
        /// Board state before the move.
        board: Board,
    },
    /// A move was made.
    MoveMade {
        /// Display name of the mover.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Cell the mark was placed in.
        position: Position,
    },
    /// The game reached a terminal state.
    GameOver {
        /// Final board.
        board: Board,
        /// Final status, never [`GameStatus::InProgress`].
        status: GameStatus,
    },
}

/// Receives engine events; implemented by frontends and test recorders.
pub trait EventSink {
    /// Handles one event.
    fn handle(&mut self, event: GameEvent) -> Result<()>;
}

/// Turn state machine driving a game between two players.
///
/// The engine owns the board exclusively; players borrow it only for the
/// duration of their own move. Strict turn alternation is the only
/// serialization the single-threaded game needs.
pub struct Engine {
    board: Board,
    players: [Box<dyn Player>; 2],
    rng: StdRng,
    turn: u32,
    status: GameStatus,
    first_mover: Option<usize>,
}

impl Engine {
    /// Creates an engine for the two players.
    ///
    /// A fixed `seed` makes the first-mover coin flip and the heuristic's
    /// random moves reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateMark`] if both players use the
    /// same mark.
    pub fn new(players: [Box<dyn Player>; 2], seed: Option<u64>) -> Result<Self, ConfigError> {
        if players[0].state().mark() == players[1].state().mark() {
            return Err(ConfigError::DuplicateMark);
        }

        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };

        Ok(Self {
            board: Board::new(),
            players,
            rng,
            turn: 0,
            status: GameStatus::InProgress,
            first_mover: None,
        })
    }

    /// Fixes who moves first instead of flipping a coin.
    ///
    /// `index` is 0 or 1, matching the order the players were passed to
    /// [`Engine::new`].
    pub fn with_first_mover(mut self, index: usize) -> Self {
        assert!(index < 2, "player index out of range");
        self.first_mover = Some(index);
        self
    }

    /// Read access to the board, e.g. for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Runs the game to completion, reporting progress through `sink`.
    ///
    /// Returns the terminal status. Each ply: report the turn, let the
    /// current player select and place its move, flip ownership, then
    /// evaluate terminal conditions — but only from the fifth ply on,
    /// the earliest a win is possible.
    #[instrument(skip_all)]
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Result<GameStatus> {
        let mut current = match self.first_mover {
            Some(index) => index,
            None => usize::from(self.rng.random::<bool>()),
        };
        info!(first = self.players[current].name(), "game started");

        while self.status == GameStatus::InProgress {
            self.turn += 1;
            let mark = self.players[current].state().mark();
            sink.handle(GameEvent::TurnStarted {
                number: self.turn,
                mark,
                board: self.board.clone(),
            })?;

            let position = self.play_ply(current)?;
            debug!(
                turn = self.turn,
                player = self.players[current].name(),
                %mark,
                cell = %position,
                "ply complete"
            );
            sink.handle(GameEvent::MoveMade {
                player: self.players[current].name().to_string(),
                mark,
                position,
            })?;

            current = 1 - current;
            if self.turn >= 5 {
                self.status = self.evaluate();
            }
        }

        info!(status = ?self.status, "game over");
        sink.handle(GameEvent::GameOver {
            board: self.board.clone(),
            status: self.status,
        })?;
        Ok(self.status)
    }

    /// Lets the indexed player take its turn against the other one.
    fn play_ply(&mut self, index: usize) -> Result<Position> {
        let (left, right) = self.players.split_at_mut(1);
        let (mover, opponent) = match index {
            0 => (&mut left[0], &right[0]),
            _ => (&mut right[0], &left[0]),
        };
        mover.take_turn(opponent.state(), &mut self.board, &mut self.rng)
    }

    fn evaluate(&self) -> GameStatus {
        if let Some(mark) = rules::check_winner(&self.board) {
            GameStatus::Won(mark)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}
