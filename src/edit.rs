//! Pure edit operations on the formula buffer.
//!
//! Every operation takes the current buffer and a cursor position measured in
//! characters of the displayed formula, and returns the new buffer together
//! with the cursor position the host should move to.

use crate::command::Command;
use crate::display::{display_len, display_string, exploded, purified};

/// Buffer state after a key action, with the cursor in display characters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub commands: Vec<Command>,
    pub cursor: usize,
}

impl Edit {
    fn unchanged(commands: &[Command], cursor: usize) -> Self {
        Edit {
            commands: commands.to_vec(),
            cursor,
        }
    }

    pub fn display_string(&self) -> String {
        display_string(&self.commands)
    }
}

/// Index of the item the display position points at or right after.
///
/// The space that follows an item is counted as part of it. Returns None when
/// the position is at the very start of the formula, and the last index when
/// the position is past the end.
pub fn index_from_position(commands: &[Command], position: usize) -> Option<usize> {
    if position < 1 || commands.is_empty() {
        return None;
    }

    let last = commands.len() - 1;
    for i in 0..commands.len() {
        let length = display_len(&commands[..=i]);
        let spaces = if i < last {
            display_string(&commands[i..i + 2])
                .chars()
                .filter(|c| c.is_whitespace())
                .count()
        } else {
            0
        };
        if position <= length + spaces {
            return Some(i);
        }
    }
    Some(last)
}

/// Inserts items at the display position.
///
/// Placeholders are dropped and multi-character numbers are split into one
/// item per character before the position is resolved. The cursor moves past
/// the inserted text. A payload holding a key action leaves the buffer as is.
pub fn insert(commands: &[Command], inserted: &[Command], position: usize) -> Edit {
    if inserted.iter().any(|c| c.is_control_command()) {
        return Edit::unchanged(commands, position);
    }

    let len_before = display_len(commands);
    let base = exploded(&purified(commands));
    let text_len = display_len(&base);
    // purifying may have shortened the text in front of the cursor
    let position = (position + text_len).saturating_sub(len_before);
    let index = index_from_position(&base, position).map_or(0, |i| i + 1);

    let mut result = base[..index].to_vec();
    result.extend(exploded(inserted));
    result.extend_from_slice(&base[index..]);

    let new_len = display_len(&result);
    let cursor = (position + new_len).saturating_sub(text_len).min(new_len);
    Edit {
        commands: result,
        cursor,
    }
}

/// Removes the item the display position points at. Nothing is removed at
/// the start of the formula
pub fn remove(commands: &[Command], position: usize) -> Edit {
    let index = match index_from_position(commands, position) {
        Some(i) => i,
        None => return Edit::unchanged(commands, position),
    };

    let len_before = display_len(commands);
    let mut result = commands.to_vec();
    result.remove(index);

    let cursor = (position + display_len(&result)).saturating_sub(len_before);
    Edit {
        commands: result,
        cursor,
    }
}

/// Cursor moved by `delta` characters, kept inside the displayed formula
pub fn move_cursor(commands: &[Command], cursor: usize, delta: isize) -> usize {
    let len = display_len(commands);
    let moved = if delta < 0 {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        cursor.saturating_add(delta as usize)
    };
    moved.min(len)
}
