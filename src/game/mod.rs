//! Game domain: board, positions, rules, and the turn engine.

mod engine;
mod position;
mod rules;
mod types;

pub use engine::{Engine, EventSink, GameEvent};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, is_full};
pub use types::{Board, ConfigError, GameStatus, Mark, Square};
