//! Line-oriented front end: reads one command per line and writes the board
//! after every change. Used by `--headless` and by the integration tests.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::error::{CommandError, MoveError, UndoError};
use crate::game::GameEngine;
use crate::ui::text::{render_board, status_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based column
    Drop(usize),
    Undo,
    Reset,
    Board,
    Quit,
}

/// Parse a single input line. Columns are entered 1-based.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let word = line.trim().to_ascii_lowercase();
    match word.as_str() {
        "" => Err(CommandError::Empty),
        "u" | "undo" => Ok(Command::Undo),
        "r" | "reset" => Ok(Command::Reset),
        "b" | "board" => Ok(Command::Board),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => match other.parse::<usize>() {
            Ok(0) => Err(CommandError::ColumnOutOfRange(0)),
            Ok(n) => Ok(Command::Drop(n - 1)),
            Err(_) => Err(CommandError::Unknown(other.to_string())),
        },
    }
}

/// Drive `engine` from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    mut output: W,
) -> io::Result<()> {
    write_state(&mut output, engine)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                warn!(input = %line.trim(), error = %e, "unrecognized command");
                writeln!(output, "error: {e}")?;
                continue;
            }
        };
        debug!(?command, "headless command");

        match command {
            Command::Drop(column) => match engine.drop_piece(column) {
                Ok(result) => {
                    writeln!(
                        output,
                        "{} dropped in column {}",
                        result.player,
                        result.column + 1
                    )?;
                    write_state(&mut output, engine)?;
                }
                Err(e) => writeln!(output, "error: {}", describe_move_error(&e))?,
            },
            Command::Undo => match engine.undo() {
                Ok(undone) => {
                    writeln!(
                        output,
                        "Undid {}'s move in column {}",
                        undone.player,
                        undone.column + 1
                    )?;
                    write_state(&mut output, engine)?;
                }
                Err(UndoError::NothingToUndo) => writeln!(output, "error: nothing to undo")?,
            },
            Command::Reset => {
                engine.reset();
                writeln!(output, "New game")?;
                write_state(&mut output, engine)?;
            }
            Command::Board => write_state(&mut output, engine)?,
            Command::Quit => break,
        }
    }

    output.flush()
}

fn write_state<W: Write>(output: &mut W, engine: &GameEngine) -> io::Result<()> {
    write!(output, "{}", render_board(engine))?;
    writeln!(output, "{}", status_line(engine))
}

/// Engine errors use zero-based columns; players type one-based ones.
fn describe_move_error(err: &MoveError) -> String {
    match err {
        MoveError::InvalidColumn { width, .. } => {
            format!("columns are numbered 1 to {width}")
        }
        MoveError::ColumnFull(column) => format!("column {} is full", column + 1),
        MoveError::GameAlreadyOver => "the game is over (undo or reset to continue)".to_string(),
    }
}
