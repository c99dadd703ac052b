//! The loaded room graph.
//!
//! [`World`] owns every [`Room`] and is built only from a validated
//! [`MapDef`], so every [`RoomId`] handed out refers to a real room.

use std::collections::HashMap;

use log::info;
use roam_data::{MapDef, ValidationError, validate_map};

use crate::error::MapFormatError;
use crate::room::{Exit, Room};

/// Handle for a room inside a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

impl RoomId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }
}

/// Every room in the game plus the start room.
#[derive(Debug, Clone)]
pub struct World {
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
    start: RoomId,
}

impl World {
    /// Validate a map document and build the room graph from it.
    ///
    /// # Errors
    /// - `MapFormatError::Invalid` listing every problem `validate_map` finds
    pub fn from_def(def: &MapDef) -> Result<World, MapFormatError> {
        let problems = validate_map(def);
        if !problems.is_empty() {
            return Err(MapFormatError::Invalid(problems));
        }

        let by_name: HashMap<String, RoomId> = def
            .rooms
            .iter()
            .enumerate()
            .map(|(index, room)| (room.name.clone(), RoomId::new(index)))
            .collect();

        let mut rooms = Vec::with_capacity(def.rooms.len());
        for room_def in &def.rooms {
            let mut exits = Vec::with_capacity(room_def.exits.len());
            for exit in &room_def.exits {
                let to = resolve(&by_name, &exit.to).ok_or_else(|| {
                    MapFormatError::Invalid(vec![ValidationError::DanglingExit {
                        room: room_def.name.clone(),
                        direction: exit.direction.clone(),
                        to: exit.to.clone(),
                    }])
                })?;
                exits.push(Exit {
                    direction: exit.direction.clone(),
                    to,
                });
            }
            rooms.push(Room {
                name: room_def.name.clone(),
                description: room_def.desc.clone(),
                exits,
                contents: room_def.items.clone(),
            });
        }

        let start = resolve(&by_name, &def.start).ok_or_else(|| {
            MapFormatError::Invalid(vec![ValidationError::MissingStartRoom {
                name: def.start.clone(),
            }])
        })?;

        info!(
            "world built: {} rooms, {} items, starting in '{}'",
            rooms.len(),
            rooms.iter().map(|room| room.contents.len()).sum::<usize>(),
            def.start
        );
        Ok(World { rooms, by_name, start })
    }

    pub fn start_room(&self) -> RoomId {
        self.start
    }

    /// Room for a handle issued by this world.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        resolve(&self.by_name, name)
    }

    pub fn room_named(&self, name: &str) -> Option<&Room> {
        self.room_id(name).map(|id| self.room(id))
    }

    /// Rooms in map order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

fn resolve(by_name: &HashMap<String, RoomId>, name: &str) -> Option<RoomId> {
    by_name.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roam_data::RoomDef;

    fn room(name: &str, exits: &[(&str, &str)], items: &[&str]) -> RoomDef {
        RoomDef {
            name: name.into(),
            desc: format!("The {name}."),
            exits: exits.iter().copied().collect(),
            items: items.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn exits_resolve_to_room_handles() {
        let def = MapDef {
            start: "Hall".into(),
            rooms: vec![
                room("Hall", &[("north", "Kitchen"), ("down", "Cellar")], &[]),
                room("Kitchen", &[("south", "Hall")], &["key"]),
                room("Cellar", &[("up", "Hall")], &[]),
            ],
        };
        let world = World::from_def(&def).unwrap();
        assert_eq!(world.len(), 3);
        let hall = world.room(world.start_room());
        assert_eq!(hall.name, "Hall");
        let down = hall.exit("down").unwrap().to;
        assert_eq!(world.room(down).name, "Cellar");
        assert_eq!(world.room_named("Kitchen").unwrap().contents, ["key"]);
    }

    #[test]
    fn invalid_maps_are_rejected() {
        let def = MapDef {
            start: "Hall".into(),
            rooms: vec![room("Hall", &[("north", "Kitchen")], &[])],
        };
        let err = World::from_def(&def).unwrap_err();
        assert!(matches!(err, MapFormatError::Invalid(ref problems) if problems.len() == 1));
    }

    #[test]
    fn unknown_room_names_do_not_resolve() {
        let def = MapDef {
            start: "Hall".into(),
            rooms: vec![room("Hall", &[], &[])],
        };
        let world = World::from_def(&def).unwrap();
        assert!(world.room_id("hall").is_none());
        assert!(world.room_named("Attic").is_none());
    }
}
