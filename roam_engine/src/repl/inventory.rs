//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that move items between the
//! current room and the player's inventory.

use crate::game::Game;
use crate::view::{View, ViewItem};

/// Removes an item from current room and adds it to inventory.
pub fn take_handler(game: &mut Game, view: &mut View, item: &str) {
    match game.pick_up(item) {
        Ok(()) => view.push(ViewItem::ActionSuccess(format!("You pick up the {item}."))),
        Err(err) => view.push(ViewItem::Error(err.to_string())),
    }
}

/// Drops an item from inventory in the current room.
pub fn drop_handler(game: &mut Game, view: &mut View, item: &str) {
    match game.drop_item(item) {
        Ok(()) => view.push(ViewItem::ActionSuccess(format!("You drop the {item}."))),
        Err(err) => view.push(ViewItem::Error(err.to_string())),
    }
}
