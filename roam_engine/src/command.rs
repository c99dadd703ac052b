//! Command module
//!
//! The verbs a player can type, the static table describing them, and the
//! parser that turns a raw input line into a [`Command`].

use variantly::Variantly;

use crate::error::CommandError;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Go(String),
    Look,
    Get(String),
    Inventory,
    Quit,
    Help,
    Drop(String),
}

/// Static description of one verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub verb: &'static str,
    /// What the verb needs as an object ("somewhere", "something"), if anything.
    /// Verbs without one ignore any trailing words.
    pub argument: Option<&'static str>,
    pub summary: &'static str,
}

impl CommandSpec {
    /// Usage form shown in help, e.g. `go ...`.
    pub fn usage(&self) -> String {
        if self.argument.is_some() {
            format!("{} ...", self.verb)
        } else {
            self.verb.to_string()
        }
    }
}

/// Every verb the game understands, in help order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        verb: "go",
        argument: Some("somewhere"),
        summary: "walk through one of the exits",
    },
    CommandSpec {
        verb: "look",
        argument: None,
        summary: "describe your surroundings again",
    },
    CommandSpec {
        verb: "get",
        argument: Some("something"),
        summary: "pick up an item in this room",
    },
    CommandSpec {
        verb: "inventory",
        argument: None,
        summary: "list what you are carrying",
    },
    CommandSpec {
        verb: "quit",
        argument: None,
        summary: "leave the game",
    },
    CommandSpec {
        verb: "help",
        argument: None,
        summary: "show this list",
    },
    CommandSpec {
        verb: "drop",
        argument: Some("something"),
        summary: "put down an item you are carrying",
    },
];

/// Table entry for an exact (already lower-cased) verb.
pub fn lookup(verb: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.verb == verb)
}

/// One line of help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLine {
    pub usage: String,
    pub summary: &'static str,
}

/// Help lines for the whole command table.
pub fn help_lines() -> Vec<HelpLine> {
    COMMANDS
        .iter()
        .map(|spec| HelpLine {
            usage: spec.usage(),
            summary: spec.summary,
        })
        .collect()
}

/// Parses an input line into a `Command`.
///
/// The line is trimmed and lower-cased, then split at the first run of
/// whitespace into a verb and an argument; the argument is kept whole, so
/// `drop red key` drops the `red key`.
///
/// # Errors
/// - `CommandError::Unrecognized` for unknown verbs and blank lines
/// - `CommandError::MissingArgument` when a verb that needs an object has none
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let line = input.trim().to_lowercase();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line.as_str(), ""),
    };

    let spec = lookup(verb).ok_or(CommandError::Unrecognized)?;
    let argument = match spec.argument {
        Some(noun) if rest.is_empty() => {
            return Err(CommandError::MissingArgument { verb: spec.verb, noun });
        },
        Some(_) => rest.to_string(),
        None => String::new(),
    };

    let command = match spec.verb {
        "go" => Command::Go(argument),
        "look" => Command::Look,
        "get" => Command::Get(argument),
        "inventory" => Command::Inventory,
        "quit" => Command::Quit,
        "help" => Command::Help,
        "drop" => Command::Drop(argument),
        _ => return Err(CommandError::Unrecognized),
    };
    Ok(command)
}
