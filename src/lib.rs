//! Console tic-tac-toe with a greedy computer opponent.
//!
//! The [`Engine`] owns the board and alternates turns between two
//! [`Player`] variants: a human fed by the console prompt and a
//! [`HeuristicPlayer`] that takes an immediate win, blocks an immediate
//! loss, and otherwise plays a random open cell. Frontends consume
//! [`GameEvent`]s through the [`EventSink`] trait, so the full state
//! machine runs headless in tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod game;
mod players;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - console boundary
pub use console::{Console, ConsolePrompt, render_board};

// Crate-level exports - game domain
pub use game::{
    Board, ConfigError, Engine, EventSink, GameEvent, GameStatus, Mark, Position, Square,
    WINNING_LINES, check_winner, is_full,
};

// Crate-level exports - players
pub use players::{
    HeuristicPlayer, HumanPlayer, MoveSource, Player, PlayerState, find_winning_cell,
};
