#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Roam **
//! Wander a map of rooms, picking things up and putting them down.

use roam_engine::repl::InputManager;
use roam_engine::{Game, ROAM_VERSION, StartupError, load_world, run_repl};

use log::{error, info};

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(map_path) = env::args_os().nth(1).map(PathBuf::from) else {
        println!("{}", StartupError::MissingMapArgument);
        return ExitCode::from(StartupError::MissingMapArgument.exit_code());
    };

    info!("Start: roam v{ROAM_VERSION} loading '{}'", map_path.display());
    let world = match load_world(&map_path) {
        Ok(world) => world,
        Err(err) => {
            let code = err.exit_code();
            error!("startup failed: {err}");
            eprintln!("{:#}", anyhow::Error::new(err));
            return ExitCode::from(code);
        },
    };
    info!("World loaded successfully with {} rooms.", world.len());

    let mut game = Game::new(world);
    let mut input = InputManager::new();
    let mut stdout = io::stdout();
    if let Err(err) = run_repl(&mut game, &mut input, &mut stdout) {
        error!("REPL stopped: {err:#}");
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }
    info!("Session over.");
    ExitCode::SUCCESS
}
