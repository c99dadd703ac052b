#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ROAM_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod error;
pub mod game;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use command::{COMMANDS, Command, CommandSpec, parse_command};
pub use error::{CommandError, MapFormatError, StartupError};
pub use game::Game;
pub use item::ItemHolder;
pub use loader::{MapFormat, load_world, load_world_from_str};
pub use player::Player;
pub use repl::run_repl;
pub use room::{Room, RoomView};
pub use view::{View, ViewItem};
pub use world::{RoomId, World};
