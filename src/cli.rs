//! Command-line interface.

use clap::Parser;

/// Play tic-tac-toe in the terminal against a computer opponent.
#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, about, long_about = None)]
pub struct Cli {
    /// Mark placed by the human player.
    #[arg(long, default_value_t = 'x')]
    pub human_mark: char,

    /// Mark placed by the computer opponent.
    #[arg(long, default_value_t = 'o')]
    pub computer_mark: char,

    /// Seed for the turn-order coin flip and the computer's random moves,
    /// for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
}
