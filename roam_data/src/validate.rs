use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Structural problem found in a [`MapDef`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyRoomName { index: usize },
    DuplicateRoom { name: Id },
    MissingStartRoom { name: Id },
    DanglingExit { room: Id, direction: String, to: Id },
    EmptyItemName { room: Id },
    DuplicateItem { item: String, first: Id, second: Id },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyRoomName { index } => {
                write!(f, "room #{} has an empty name", index + 1)
            },
            ValidationError::DuplicateRoom { name } => {
                write!(f, "duplicate room name '{name}'")
            },
            ValidationError::MissingStartRoom { name } => {
                write!(f, "start room '{name}' not found among rooms")
            },
            ValidationError::DanglingExit { room, direction, to } => {
                write!(f, "room '{room}' exit '{direction}' leads to missing room '{to}'")
            },
            ValidationError::EmptyItemName { room } => {
                write!(f, "room '{room}' lists an item with an empty name")
            },
            ValidationError::DuplicateItem { item, first, second } => {
                if first == second {
                    write!(f, "item '{item}' is listed more than once in room '{first}'")
                } else {
                    write!(f, "item '{item}' is listed in both '{first}' and '{second}'")
                }
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and uniqueness rules in a [`MapDef`].
///
/// Every problem is reported; an empty vector means the map can be played.
///
/// ```
/// use roam_data::{ExitTable, MapDef, RoomDef, ValidationError, validate_map};
///
/// let map = MapDef {
///     start: "Hall".into(),
///     rooms: vec![RoomDef {
///         name: "Hall".into(),
///         desc: "A drafty hall.".into(),
///         exits: [("north", "Kitchen")].into_iter().collect::<ExitTable>(),
///         items: vec!["lamp".into()],
///     }],
/// };
/// assert_eq!(
///     validate_map(&map),
///     vec![ValidationError::DanglingExit {
///         room: "Hall".into(),
///         direction: "north".into(),
///         to: "Kitchen".into(),
///     }]
/// );
/// ```
pub fn validate_map(map: &MapDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    for (index, room) in map.rooms.iter().enumerate() {
        if room.name.trim().is_empty() {
            errors.push(ValidationError::EmptyRoomName { index });
        } else if !rooms.insert(room.name.as_str()) {
            errors.push(ValidationError::DuplicateRoom {
                name: room.name.clone(),
            });
        }
    }

    if !rooms.contains(map.start.as_str()) {
        errors.push(ValidationError::MissingStartRoom {
            name: map.start.clone(),
        });
    }

    // item name -> room it was first seen in
    let mut items: HashMap<&str, &str> = HashMap::new();
    for room in &map.rooms {
        for exit in &room.exits {
            if !rooms.contains(exit.to.as_str()) {
                errors.push(ValidationError::DanglingExit {
                    room: room.name.clone(),
                    direction: exit.direction.clone(),
                    to: exit.to.clone(),
                });
            }
        }
        for item in &room.items {
            if item.trim().is_empty() {
                errors.push(ValidationError::EmptyItemName {
                    room: room.name.clone(),
                });
            } else if let Some(first) = items.insert(item.as_str(), room.name.as_str()) {
                errors.push(ValidationError::DuplicateItem {
                    item: item.clone(),
                    first: first.to_string(),
                    second: room.name.clone(),
                });
            }
        }
    }

    errors
}
