//! Key handling for one calculator screen.
//!
//! [`Session`] owns the formula buffer, the memory register and the caret, and
//! turns every key press into the new formula text, caret position and live
//! preview.

use crate::command::{Command, ItemKind};
use crate::config::Config;
use crate::display::{display_string, normalize, purified};
use crate::edit::{insert, move_cursor, remove, Edit};
use crate::errors::*;
use crate::parse::deserialize;
use crate::stack::invoke;

/// What the host shows after a key press
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    pub formula: String,
    pub cursor: usize,
    pub preview: Option<String>,
}

/// Result of the formula as it would be after `=`, without touching the
/// buffer. Only finite results of a formula with more than one item are
/// previewed
pub fn preview(commands: &[Command], config: &Config) -> Option<String> {
    if normalize(commands).len() < 2 {
        return None;
    }

    let result = invoke(commands, &Command::new(ItemKind::Equals), config);
    match result.commands.last() {
        Some(c) if c.kind == ItemKind::Number => Some(display_string(&purified(&result.commands))),
        _ => None,
    }
}

pub struct Session {
    commands: Vec<Command>,
    memory: Vec<Command>,
    cursor: usize,
    preview: Option<String>,
    config: Config,
}

impl Default for Session {
    fn default() -> Session {
        Session::new(Config::default())
    }
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            commands: Vec::new(),
            memory: Vec::new(),
            cursor: 0,
            preview: None,
            config,
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn memory(&self) -> &[Command] {
        &self.memory
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn formula(&self) -> String {
        display_string(&self.commands)
    }

    /// Preview computed after the last key press
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Moves the caret, e.g. after the user tapped into the formula. The
    /// position is clamped to the formula length
    pub fn set_cursor(&mut self, position: usize) -> usize {
        self.cursor = move_cursor(&self.commands, position, 0);
        self.cursor
    }

    fn update(&self) -> Update {
        Update {
            formula: self.formula(),
            cursor: self.cursor,
            preview: self.preview.clone(),
        }
    }

    fn apply(&mut self, edit: Edit) {
        self.commands = edit.commands;
        self.cursor = edit.cursor;
    }

    fn refresh_preview(&mut self, command: ItemKind) {
        self.preview = if command == ItemKind::Equals || self.commands.is_empty() {
            None
        } else {
            preview(&self.commands, &self.config)
        };
    }

    /// Handles one key press
    pub fn press(&mut self, command: Command) -> Update {
        if command.kind == ItemKind::None {
            return self.update();
        }
        if command.kind == ItemKind::Number && command.text.is_none() {
            log::trace!("ignored number key without digits");
            return self.update();
        }

        log::trace!("key {:?} at {}", command.kind, self.cursor);
        match command.kind {
            ItemKind::CursorLeft => self.cursor = move_cursor(&self.commands, self.cursor, -1),
            ItemKind::CursorRight => self.cursor = move_cursor(&self.commands, self.cursor, 1),
            ItemKind::MemoryStore => self.memory = self.commands.clone(),
            ItemKind::MemoryRecall => {
                let edit = insert(&self.commands, &self.memory, self.cursor);
                self.apply(edit);
            }
            ItemKind::Delete => {
                let edit = remove(&self.commands, self.cursor);
                self.apply(edit);
            }
            ItemKind::AllClear | ItemKind::Equals => {
                let edit = invoke(&self.commands, &command, &self.config);
                self.apply(edit);
            }
            _ => {
                let edit = insert(&self.commands, &[command.clone()], self.cursor);
                self.apply(edit);
            }
        }

        self.refresh_preview(command.kind);
        log::debug!("formula {:?}, cursor {}", self.formula(), self.cursor);
        self.update()
    }

    /// Inserts pasted text at the caret. Text without a single formula item
    /// leaves the buffer untouched
    pub fn paste(&mut self, text: &str) -> CalcResult<Update> {
        let pasted = deserialize(text);
        if pasted.is_empty() {
            log::debug!("nothing to paste from {:?}", text);
            return Err(CalcError::PasteFailed(text.to_string()));
        }

        let edit = insert(&self.commands, &pasted, self.cursor);
        self.apply(edit);
        self.preview = preview(&self.commands, &self.config);
        Ok(self.update())
    }
}
