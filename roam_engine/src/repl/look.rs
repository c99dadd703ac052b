//! `repl::look` module
//!
//! Observation handlers. None of these change the game state.

use log::info;

use crate::game::Game;
use crate::view::{View, ViewItem};

/// Shows description of surroundings.
pub fn look_handler(game: &Game, view: &mut View) {
    let room = game.describe();
    info!("player looked around '{}'", room.name);
    view.push(ViewItem::RoomDescription(room));
}

/// Lists the items the player is carrying.
pub fn inv_handler(game: &Game, view: &mut View) {
    view.push(ViewItem::Inventory(game.inventory().to_vec()));
}
