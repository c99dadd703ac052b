//! Loader utilities for building a [`World`] from a map file.
//!
//! The map may be written as JSON, TOML or RON; the format is chosen from the
//! file extension and defaults to JSON.

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use roam_data::MapDef;
use serde::de::DeserializeOwned;

use crate::error::{MapFormatError, StartupError};
use crate::world::World;

/// Supported map document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MapFormat {
    #[default]
    Json,
    Toml,
    Ron,
}

impl MapFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> MapFormat {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => MapFormat::Toml,
            Some("ron") => MapFormat::Ron,
            _ => MapFormat::Json,
        }
    }

    fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, MapFormatError> {
        let parsed = match self {
            MapFormat::Json => serde_json::from_str(text).map_err(|err| err.to_string()),
            MapFormat::Toml => toml::from_str(text).map_err(|err| err.to_string()),
            MapFormat::Ron => ron::from_str(text).map_err(|err| err.to_string()),
        };
        parsed.map_err(|message| MapFormatError::Parse {
            format: self,
            message: message.trim_end().to_string(),
        })
    }
}

impl fmt::Display for MapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MapFormat::Json => "JSON",
            MapFormat::Toml => "TOML",
            MapFormat::Ron => "RON",
        };
        f.write_str(name)
    }
}

/// Parse a map document without validating it.
///
/// # Errors
/// - `MapFormatError::Parse` on syntax errors and missing or mistyped fields
pub fn parse_map(text: &str, format: MapFormat) -> Result<MapDef, MapFormatError> {
    format.parse(text)
}

/// Parse, validate and build a world from map text.
///
/// # Errors
/// - `MapFormatError::Parse` if the document cannot be read as a map
/// - `MapFormatError::Invalid` if the map breaks any structural rule
pub fn load_world_from_str(text: &str, format: MapFormat) -> Result<World, MapFormatError> {
    let def = parse_map(text, format)?;
    info!("{} raw rooms parsed from {format} map", def.rooms.len());
    World::from_def(&def)
}

/// Load the [`World`] from a map file.
///
/// The file is read completely before parsing begins.
///
/// # Errors
/// - `StartupError::Unreadable` if the file cannot be read
/// - `StartupError::Malformed` if its contents are not a valid map
pub fn load_world(path: &Path) -> Result<World, StartupError> {
    let text = fs::read_to_string(path).map_err(|source| StartupError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let format = MapFormat::from_path(path);
    info!("loading {format} map from '{}'", path.display());
    load_world_from_str(&text, format).map_err(|source| StartupError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
