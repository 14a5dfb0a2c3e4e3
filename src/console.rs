//! Console boundary: rendering, screen clearing, and the input loop.
//!
//! Everything impure lives here; the engine itself runs headless against
//! the [`EventSink`] and [`MoveSource`] traits.

use crate::game::{Board, EventSink, GameEvent, GameStatus, Position, Square};
use crate::players::MoveSource;
use anyhow::{Context, Result, bail};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use tracing::debug;

/// Formats the board in the fixed console layout.
///
/// Empty cells render as spaces. Pure, so rendering the same board twice
/// yields identical output.
pub fn render_board(board: &Board) -> String {
    let cell = |square: Square| match square {
        Square::Empty => ' ',
        Square::Occupied(mark) => mark.as_char(),
    };

    let rows: Vec<String> = board
        .squares()
        .chunks(3)
        .map(|row| format!("   {} | {} | {} ", cell(row[0]), cell(row[1]), cell(row[2])))
        .collect();
    rows.join("\n  -----------\n")
}

/// Terminal frontend consuming engine events.
///
/// Clears the screen and redraws the board at the start of every ply and
/// once more with the result message when the game ends.
pub struct Console;

impl Console {
    /// Creates the console frontend.
    pub fn new() -> Self {
        Self
    }

    fn clear(&self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for Console {
    fn handle(&mut self, event: GameEvent) -> Result<()> {
        match event {
            GameEvent::TurnStarted { board, .. } => {
                self.clear()?;
                println!("{}", render_board(&board));
            }
            GameEvent::MoveMade {
                player,
                mark,
                position,
            } => {
                debug!(player = %player, %mark, cell = %position, "rendered move");
            }
            GameEvent::GameOver { board, status } => {
                self.clear()?;
                println!("{}", render_board(&board));
                match status {
                    GameStatus::Won(mark) => println!("WINNER: {mark}"),
                    GameStatus::Draw => println!("It's a draw."),
                    GameStatus::InProgress => {}
                }
            }
        }
        Ok(())
    }
}

/// Interactive move source: prompts with the open cells and reprompts
/// until the entry is one of them.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    /// Prompt wired to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsolePrompt<R, W> {
    /// Creates a prompt over the given input and output streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsolePrompt<R, W> {
    fn choose(&mut self, board: &Board) -> Result<Position> {
        let open = board.available();
        let indices: Vec<usize> = open.iter().map(|position| position.index()).collect();

        loop {
            writeln!(self.output, "Pick one of the open cells:")?;
            writeln!(self.output, "{indices:?}")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read a move")?;
            if read == 0 {
                bail!("input closed before a move was chosen");
            }

            let Ok(index) = line.trim().parse::<usize>() else {
                continue;
            };
            let Some(position) = Position::from_index(index) else {
                continue;
            };
            if open.contains(&position) {
                return Ok(position);
            }
        }
    }
}
