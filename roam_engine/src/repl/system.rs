//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use crate::game::Game;
use crate::view::{View, ViewItem};

/// Last line of every session that ends by quitting or interrupting.
pub const FAREWELL: &str = "Goodbye!";

/// Quit the game.
pub fn quit_handler(game: &mut Game, view: &mut View) {
    game.quit();
    view.push(ViewItem::EngineMessage(FAREWELL.to_string()));
}

/// Show available commands.
pub fn help_handler(game: &Game, view: &mut View) {
    view.push(ViewItem::Help(game.help()));
}
