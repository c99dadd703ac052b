//! Room definitions.
//!
//! A room is any place the player can stand. Its exits point at other rooms by
//! [`RoomId`], resolved when the world is built, so following an exit can
//! never miss.

use std::fmt;

use crate::item::{ItemHolder, remove_from};
use crate::world::RoomId;

/// An exit from one room to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub to: RoomId,
}

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Exits in the order the map declared them.
    pub exits: Vec<Exit>,
    pub contents: Vec<String>,
}

impl Room {
    /// Exit for an exact (case-sensitive) direction name.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.direction == direction)
    }

    pub fn exit_directions(&self) -> impl Iterator<Item = &str> {
        self.exits.iter().map(|exit| exit.direction.as_str())
    }

    /// Snapshot of what the player sees when looking around.
    pub fn view(&self) -> RoomView {
        RoomView {
            name: self.name.clone(),
            description: self.description.clone(),
            exits: self.exit_directions().map(str::to_string).collect(),
            items: self.contents.clone(),
        }
    }
}

impl ItemHolder for Room {
    fn items(&self) -> &[String] {
        &self.contents
    }

    fn add_item(&mut self, item: String) {
        self.contents.push(item);
    }

    fn remove_item(&mut self, item: &str) -> Option<String> {
        remove_from(&mut self.contents, item)
    }
}

/// Rendered description of a room.
///
/// The `Display` form is the plain text of a `look`:
/// name, description, exits and (only when present) items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub name: String,
    pub description: String,
    pub exits: Vec<String>,
    pub items: Vec<String>,
}

impl fmt::Display for RoomView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\n{}\n\nExits: {}",
            self.name,
            self.description,
            self.exits.join(", ")
        )?;
        if !self.items.is_empty() {
            write!(f, "\nItems: {}", self.items.join(", "))?;
        }
        Ok(())
    }
}
