//! Game session state and the operations commands act on.
//!
//! A [`Game`] wraps the loaded [`World`] together with the [`Player`] and the
//! flag that ends the session. Each operation either succeeds completely or
//! returns a [`CommandError`] without touching any state.

use log::info;

use crate::command::{HelpLine, help_lines};
use crate::error::CommandError;
use crate::item::{ItemHolder, transfer_item};
use crate::player::Player;
use crate::room::{Room, RoomView};
use crate::world::World;

/// Complete state of a running session.
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    player: Player,
    finished: bool,
}

impl Game {
    /// Start a session in the world's start room with empty hands.
    pub fn new(world: World) -> Self {
        let player = Player::new(world.start_room());
        Self {
            world,
            player,
            finished: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn current_room(&self) -> &Room {
        self.world.room(self.player.location)
    }

    /// Follow the exit named `direction` out of the current room.
    ///
    /// # Errors
    /// - `CommandError::NoExit` if the current room has no exit with exactly that name
    pub fn move_to(&mut self, direction: &str) -> Result<&Room, CommandError> {
        let leaving = self.current_room();
        let Some(exit) = leaving.exit(direction) else {
            info!("no exit '{direction}' from '{}'", leaving.name);
            return Err(CommandError::NoExit(direction.to_string()));
        };
        let destination = exit.to;
        info!(
            "player moved {direction} from '{}' to '{}'",
            leaving.name,
            self.world.room(destination).name
        );
        self.player.location = destination;
        Ok(self.current_room())
    }

    /// Structured description of the current room.
    pub fn describe(&self) -> RoomView {
        self.current_room().view()
    }

    /// Plain-text description of the current room.
    pub fn look(&self) -> String {
        self.describe().to_string()
    }

    /// Move `item` from the current room into the inventory.
    ///
    /// # Errors
    /// - `CommandError::NoSuchItem` if the room holds no item with exactly that name
    pub fn pick_up(&mut self, item: &str) -> Result<(), CommandError> {
        let room = self.world.room_mut(self.player.location);
        if !transfer_item(room, &mut self.player, item) {
            return Err(CommandError::NoSuchItem(item.to_string()));
        }
        info!("player took '{item}' from '{}'", room.name);
        Ok(())
    }

    /// Move `item` from the inventory into the current room.
    ///
    /// # Errors
    /// - `CommandError::NotCarrying` if the player holds no item with exactly that name
    pub fn drop_item(&mut self, item: &str) -> Result<(), CommandError> {
        let room = self.world.room_mut(self.player.location);
        if !transfer_item(&mut self.player, room, item) {
            return Err(CommandError::NotCarrying(item.to_string()));
        }
        info!("player dropped '{item}' in '{}'", room.name);
        Ok(())
    }

    /// Items carried, in the order they were picked up.
    pub fn inventory(&self) -> &[String] {
        self.player.items()
    }

    /// Mark the session as over. The command loop stops once it sees this.
    pub fn quit(&mut self) {
        info!(
            "quitting in '{}' carrying [{}]",
            self.current_room().name,
            self.player.inventory.join(", ")
        );
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Usage lines for every command.
    #[allow(clippy::unused_self)]
    pub fn help(&self) -> Vec<HelpLine> {
        help_lines()
    }

    /// Help as plain text.
    pub fn help_text(&self) -> String {
        let mut text = String::from("You can run the following commands:");
        for line in self.help() {
            text.push_str(&format!("\n  {:<12}{}", line.usage, line.summary));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roam_data::{MapDef, RoomDef};

    fn game() -> Game {
        let def = MapDef {
            start: "Hall".into(),
            rooms: vec![
                RoomDef {
                    name: "Hall".into(),
                    desc: "A long hall.".into(),
                    exits: [("north", "Kitchen")].into_iter().collect(),
                    items: vec!["umbrella".into()],
                },
                RoomDef {
                    name: "Kitchen".into(),
                    desc: "Smells of bread.".into(),
                    exits: [("south", "Hall")].into_iter().collect(),
                    items: vec!["key".into()],
                },
            ],
        };
        Game::new(World::from_def(&def).unwrap())
    }

    #[test]
    fn failed_move_returns_error_and_stays() {
        let mut game = game();
        assert_eq!(game.move_to("North"), Err(CommandError::NoExit("North".into())));
        assert_eq!(game.current_room().name, "Hall");
    }

    #[test]
    fn items_cannot_be_taken_from_other_rooms() {
        let mut game = game();
        assert_eq!(game.pick_up("key"), Err(CommandError::NoSuchItem("key".into())));
        assert!(game.inventory().is_empty());
        assert!(game.pick_up("umbrella").is_ok());
        assert_eq!(game.inventory(), ["umbrella"]);
    }

    #[test]
    fn dropping_puts_item_in_current_room() {
        let mut game = game();
        game.pick_up("umbrella").unwrap();
        game.move_to("north").unwrap();
        game.drop_item("umbrella").unwrap();
        assert_eq!(game.current_room().contents, ["key", "umbrella"]);
        assert!(game.world().room_named("Hall").unwrap().contents.is_empty());
    }

    #[test]
    fn quit_sets_the_finished_flag() {
        let mut game = game();
        assert!(!game.is_finished());
        game.quit();
        assert!(game.is_finished());
    }

    #[test]
    fn help_text_lists_every_verb() {
        let text = game().help_text();
        assert!(text.starts_with("You can run the following commands:"));
        assert!(text.contains("\n  go ...      walk through one of the exits"));
        assert!(text.contains("\n  inventory   list what you are carrying"));
    }
}
