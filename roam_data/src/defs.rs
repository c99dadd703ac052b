//! Serializable definitions for a Roam map.
//!
//! These types mirror the on-disk document exactly. Cross references (exit
//! targets, the start room) are plain room names here; the engine resolves
//! them once [`crate::validate_map`] reports no problems.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rooms are referred to by their unique name.
pub type Id = String;

/// Top-level map document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDef {
    pub start: Id,
    pub rooms: Vec<RoomDef>,
}

/// A single room record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDef {
    pub name: Id,
    pub desc: String,
    pub exits: ExitTable,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One entry of an exit table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

/// Direction -> destination mapping that keeps document order.
///
/// Serialized as a plain map (`{"north": "Kitchen"}`). Re-declaring a direction
/// replaces its destination but keeps the position of the first declaration.
///
/// ```
/// use roam_data::ExitTable;
///
/// let mut exits = ExitTable::new();
/// exits.insert("north", "Kitchen");
/// exits.insert("east", "Garden");
/// exits.insert("north", "Pantry");
/// assert_eq!(exits.directions().collect::<Vec<_>>(), ["north", "east"]);
/// assert_eq!(exits.get("north"), Some("Pantry"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitTable(Vec<ExitDef>);

impl ExitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exit, or retarget an existing direction in place.
    pub fn insert(&mut self, direction: impl Into<String>, to: impl Into<Id>) {
        let direction = direction.into();
        let to = to.into();
        if let Some(existing) = self.0.iter_mut().find(|exit| exit.direction == direction) {
            existing.to = to;
        } else {
            self.0.push(ExitDef { direction, to });
        }
    }

    /// Destination for an exact direction name.
    pub fn get(&self, direction: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|exit| exit.direction == direction)
            .map(|exit| exit.to.as_str())
    }

    pub fn directions(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|exit| exit.direction.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExitDef> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExitTable {
    type Item = &'a ExitDef;
    type IntoIter = std::slice::Iter<'a, ExitDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<D: Into<String>, T: Into<Id>> FromIterator<(D, T)> for ExitTable {
    fn from_iter<I: IntoIterator<Item = (D, T)>>(iter: I) -> Self {
        let mut table = ExitTable::new();
        for (direction, to) in iter {
            table.insert(direction, to);
        }
        table
    }
}

impl Serialize for ExitTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for exit in &self.0 {
            map.serialize_entry(&exit.direction, &exit.to)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExitTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ExitTableVisitor)
    }
}

struct ExitTableVisitor;

impl<'de> Visitor<'de> for ExitTableVisitor {
    type Value = ExitTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of direction names to room names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ExitTable, A::Error> {
        let mut table = ExitTable::new();
        while let Some((direction, to)) = access.next_entry::<String, Id>()? {
            table.insert(direction, to);
        }
        Ok(table)
    }
}
