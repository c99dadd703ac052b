//! Error types for the Roam engine.
//!
//! Startup problems are fatal and end the process; command problems are
//! reported to the player as a single line and play continues.

use std::io;
use std::path::PathBuf;

use roam_data::ValidationError;
use thiserror::Error;

use crate::loader::MapFormat;

/// A map document that cannot be turned into a playable world.
#[derive(Debug, Error)]
pub enum MapFormatError {
    #[error("malformed {format} map: {message}")]
    Parse { format: MapFormat, message: String },
    #[error("map failed validation:\n{}", bullet_list(.0))]
    Invalid(Vec<ValidationError>),
}

fn bullet_list(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fatal errors raised before the first prompt.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Usage: roam [map_filename]")]
    MissingMapArgument,
    #[error("unable to read map file '{}'", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to load map file '{}'", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: MapFormatError,
    },
}

impl StartupError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            StartupError::MissingMapArgument => 1,
            StartupError::Unreadable { .. } | StartupError::Malformed { .. } => 2,
        }
    }
}

/// Recoverable problems with a single command. The `Display` text is exactly
/// what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Sorry, I didn't understand that.")]
    Unrecognized,
    #[error("Sorry, you need to '{verb}' {noun}.")]
    MissingArgument { verb: &'static str, noun: &'static str },
    #[error("There's no way to go {0}.")]
    NoExit(String),
    #[error("There's no {0} anywhere.")]
    NoSuchItem(String),
    #[error("You don't have a {0} to drop.")]
    NotCarrying(String),
}
