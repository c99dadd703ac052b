//! View module.
//! Rather than printing from each handler, handlers push [`ViewItem`]s and the
//! REPL flushes them once per command, in the order they were pushed.
use std::io::{self, Write};

use variantly::Variantly;

use crate::command::HelpLine;
use crate::room::RoomView;
use crate::style::GameStyle;

/// Something to show the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    RoomDescription(RoomView),
    ActionSuccess(String),
    Error(String),
    Inventory(Vec<String>),
    Help(Vec<HelpLine>),
    EngineMessage(String),
}

/// Pending output for the current turn.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub items: Vec<ViewItem>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write every pending item to `out` and clear the view.
    ///
    /// # Errors
    /// - any I/O error from `out`
    pub fn flush(&mut self, out: &mut impl Write) -> io::Result<()> {
        for item in self.items.drain(..) {
            render_item(&item, out)?;
        }
        out.flush()
    }
}

fn render_item(item: &ViewItem, out: &mut impl Write) -> io::Result<()> {
    match item {
        ViewItem::RoomDescription(room) => room_description(room, out),
        ViewItem::ActionSuccess(msg) | ViewItem::EngineMessage(msg) => writeln!(out, "{msg}"),
        ViewItem::Error(msg) => writeln!(out, "{}", msg.error_style()),
        ViewItem::Inventory(items) => inventory(items, out),
        ViewItem::Help(lines) => help(lines, out),
    }
}

fn room_description(room: &RoomView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}\n", room.name.room_style())?;
    writeln!(out, "{}\n", room.description.description_style())?;
    let exits: Vec<String> = room.exits.iter().map(|exit| exit.exit_style().to_string()).collect();
    writeln!(out, "Exits: {}", exits.join(", "))?;
    if !room.items.is_empty() {
        let items: Vec<String> = room.items.iter().map(|item| item.item_style().to_string()).collect();
        writeln!(out, "Items: {}", items.join(", "))?;
    }
    Ok(())
}

fn inventory(items: &[String], out: &mut impl Write) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "You're not carrying anything.");
    }
    writeln!(out, "{}:", "Inventory".subheading_style())?;
    for item in items {
        writeln!(out, "  {}", item.item_style())?;
    }
    Ok(())
}

fn help(lines: &[HelpLine], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "You can run the following commands:")?;
    for line in lines {
        writeln!(out, "  {}{}", format!("{:<12}", line.usage).command_style(), line.summary)?;
    }
    Ok(())
}
