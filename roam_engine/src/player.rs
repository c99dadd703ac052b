//! Player -- where the player stands and what they carry.
use crate::item::{ItemHolder, remove_from};
use crate::world::RoomId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub location: RoomId,
    pub inventory: Vec<String>,
}

impl Player {
    /// A player with empty hands standing in `location`.
    pub fn new(location: RoomId) -> Self {
        Self {
            location,
            inventory: Vec::new(),
        }
    }
}

impl ItemHolder for Player {
    fn items(&self) -> &[String] {
        &self.inventory
    }

    fn add_item(&mut self, item: String) {
        self.inventory.push(item);
    }

    fn remove_item(&mut self, item: &str) -> Option<String> {
        remove_from(&mut self.inventory, item)
    }
}
