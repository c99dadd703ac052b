//! Terminal input handling for the Roam REPL.
//!
//! [`InputManager`] reads through a rustyline editor (history, verb
//! completion) when stdin is a terminal, and through plain stdin otherwise.
//! In plain mode an interrupt signal ends the session with the usual farewell.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMANDS;
use crate::repl::system::FAREWELL;

/// Outcome of reading a line from the REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything the REPL can read player input from.
pub trait LineSource {
    /// Show `prompt` and wait for one line.
    ///
    /// # Errors
    /// - I/O failures from the underlying reader
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

type ReplEditor = rustyline::Editor<RoamHelper, DefaultHistory>;

/// Completes the verb at the start of the line from the command table.
#[derive(Default)]
struct RoamHelper;

impl Helper for RoamHelper {}
impl Highlighter for RoamHelper {}
impl Validator for RoamHelper {}

impl Hinter for RoamHelper {
    type Hint = String;
}

impl Completer for RoamHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, prefix) = current_prefix(line, pos);
        // arguments are free text
        if prefix.is_empty() || prefix.contains(char::is_whitespace) {
            return Ok((start, Vec::new()));
        }
        Ok((start, verb_candidates(&prefix)))
    }
}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let typed = &line[..pos];
    let trimmed = typed.trim_start();
    (pos - trimmed.len(), trimmed.to_string())
}

fn verb_candidates(prefix: &str) -> Vec<Pair> {
    let lower = prefix.to_lowercase();
    COMMANDS
        .iter()
        .filter(|spec| spec.verb.starts_with(&lower))
        .map(|spec| Pair {
            display: spec.usage(),
            replacement: spec.verb.to_string(),
        })
        .collect()
}

/// Reads player input, preferring the line editor for as long as it works.
pub struct InputManager {
    editor: Option<LineEditor>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let editor = if io::stdin().is_terminal() {
            LineEditor::open()
                .inspect_err(|err| warn!("line editor unavailable ({err}); reading plain stdin"))
                .ok()
        } else {
            info!("stdin is not a terminal; reading plain lines");
            None
        };
        if editor.is_none() {
            install_interrupt_handler();
        }
        Self { editor }
    }
}

impl LineSource for InputManager {
    /// A failing editor is dropped for the rest of the session and the same
    /// prompt is retried on plain stdin.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        if let Some(editor) = self.editor.as_mut() {
            match editor.read_line(prompt) {
                Ok(event) => return Ok(event),
                Err(err) => {
                    warn!("line editor failed ({err}); switching to plain stdin");
                    self.editor = None;
                    install_interrupt_handler();
                },
            }
        }
        read_plain_line(prompt)
    }
}

/// Plain reads block until a whole line arrives, so the farewell is written
/// from the signal thread and the process ends there.
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        info!("interrupted by user");
        let mut stdout = io::stdout();
        let _ = writeln!(stdout, "\n{FAREWELL}");
        let _ = stdout.flush();
        process::exit(0);
    });
    match installed {
        Ok(()) => info!("interrupt handler installed for plain input"),
        Err(err) => warn!("failed to install interrupt handler: {err}"),
    }
}

fn read_plain_line(prompt: &str) -> io::Result<InputEvent> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(InputEvent::Eof);
    }
    Ok(InputEvent::Line(strip_line_ending(line)))
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

struct LineEditor {
    editor: ReplEditor,
    history: Option<PathBuf>,
}

impl LineEditor {
    fn open() -> rustyline::Result<Self> {
        let mut editor = ReplEditor::new()?;
        editor.set_helper(Some(RoamHelper));
        let history = history_file();
        if let Some(path) = &history {
            restore_history(&mut editor, path);
        }
        info!("reading input through the line editor");
        Ok(Self { editor, history })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.remember(&line);
                Ok(InputEvent::Line(line))
            },
            Err(err) => readline_event(err),
        }
    }

    /// Record a non-blank line and persist the history file right away.
    fn remember(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Err(err) = self.editor.add_history_entry(line) {
            warn!("failed to append to history: {err}");
        }
        if let Some(path) = &self.history
            && let Err(err) = self.editor.save_history(path)
        {
            warn!("failed to write history to {}: {err}", path.display());
        }
    }
}

fn restore_history(editor: &mut ReplEditor, path: &Path) {
    if let Some(dir) = path.parent()
        && let Err(err) = fs::create_dir_all(dir)
    {
        warn!("failed to create history directory {}: {err}", dir.display());
    }
    match editor.load_history(path) {
        Ok(()) => info!("history restored from {}", path.display()),
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            info!("no history at {} yet", path.display());
        },
        Err(err) => warn!("failed to load history from {}: {err}", path.display()),
    }
}

/// Map the editor's non-line outcomes onto input events.
fn readline_event(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(err) => Err(err),
        other => Err(io::Error::other(other)),
    }
}

fn history_file() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| history_file_in(&base))
}

fn history_file_in(base: &Path) -> PathBuf {
    base.join("roam").join("history.txt")
}
