//! Binary entry point: wire the console boundary to the engine.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{Cli, Console, ConsolePrompt, Engine, HeuristicPlayer, HumanPlayer, Mark};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they cannot corrupt the board rendering.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let human_mark = Mark::new(cli.human_mark)?;
    let computer_mark = Mark::new(cli.computer_mark)?;

    let human = HumanPlayer::new("You", human_mark, Box::new(ConsolePrompt::stdio()));
    let computer = HeuristicPlayer::new("Computer", computer_mark);

    let mut engine = Engine::new([Box::new(human), Box::new(computer)], cli.seed)?;
    engine.run(&mut Console::new())?;

    Ok(())
}
