//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that act on a [`Game`] and queue output in a
//! [`View`].

pub mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use input::{InputEvent, InputManager, LineSource};
pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use std::io::Write;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::command::{Command, parse_command};
use crate::game::Game;
use crate::view::{View, ViewItem};

/// Printed before every prompt.
pub const ASK: &str = "What would you like to do?";
/// Prompt handed to the line reader.
pub const PROMPT: &str = "> ";

/// Run the main read–eval–print loop until the game is finished.
///
/// Shows the start room, then reads and dispatches one line at a time.
/// End of input only prints a reminder; the loop ends when `quit` is
/// entered or the input reports an interrupt.
///
/// # Errors
/// - failures writing to `out`
pub fn run_repl(game: &mut Game, input: &mut impl LineSource, out: &mut impl Write) -> Result<()> {
    let mut view = View::new();
    look_handler(game, &mut view);
    view.flush(out).context("while showing the start room")?;

    while !game.is_finished() {
        writeln!(out, "{ASK}").context("while prompting")?;
        out.flush().context("while prompting")?;

        match input.read_line(PROMPT) {
            Ok(InputEvent::Line(line)) => dispatch(game, &mut view, &line),
            Ok(InputEvent::Eof) => {
                info!("end of input received; waiting for 'quit'");
                view.push(ViewItem::EngineMessage("Use 'quit' to exit.".to_string()));
            },
            Ok(InputEvent::Interrupted) => {
                info!("interrupted by user");
                quit_handler(game, &mut view);
            },
            Err(err) => {
                warn!("failed to read input: {err}");
                view.push(ViewItem::Error("Failed to read input. Try again.".to_string()));
            },
        }
        view.flush(out).context("while writing command output")?;
    }
    Ok(())
}

/// Parse one input line and run the matching handler.
pub fn dispatch(game: &mut Game, view: &mut View, line: &str) {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    match parse_command(line) {
        Ok(command) => match &command {
            Go(direction) => move_to_handler(game, view, direction),
            Look => look_handler(game, view),
            Get(item) => take_handler(game, view, item),
            Inventory => inv_handler(game, view),
            Drop(item) => drop_handler(game, view, item),
            Quit => quit_handler(game, view),
            Help => help_handler(game, view),
        },
        Err(err) => {
            info!("rejected input {line:?}: {err}");
            view.push(ViewItem::Error(err.to_string()));
        },
    }
}
