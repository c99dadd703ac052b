//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::game::Game;
use crate::view::{View, ViewItem};

/// Move the player through the named exit and describe where they end up.
pub fn move_to_handler(game: &mut Game, view: &mut View, direction: &str) {
    match game.move_to(direction) {
        Ok(room) => view.push(ViewItem::RoomDescription(room.view())),
        Err(err) => view.push(ViewItem::Error(err.to_string())),
    }
}
