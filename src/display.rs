//! Normalized view of the formula buffer.
//!
//! The buffer stores one `Number` item per typed character. Everything that is
//! shown or evaluated works on the normalized form, where adjacent digits are
//! merged into a single number and a unary minus is folded into the number
//! that follows it.

use lazy_static::lazy_static;
use regex::Regex;

use crate::command::{Command, ItemKind};

lazy_static! {
    static ref TRAILING_ZEROS: Regex = Regex::new(r"^(.*\.\d+?)0+$").unwrap();
}

/// Merges digit runs into numbers. A `Minus` that does not follow a number
/// is a sign and gets merged into the unsigned number after it
pub fn normalize(commands: &[Command]) -> Vec<Command> {
    let mut list: Vec<Command> = Vec::with_capacity(commands.len());
    for command in commands {
        let merge = command.kind == ItemKind::Number && {
            let n = list.len();
            match list.last().map(|c| c.kind) {
                Some(ItemKind::Number) => true,
                // `5 - 3` is a subtraction, `5 × - 3` is a negative operand
                Some(ItemKind::Minus) => {
                    !command.text().starts_with('-')
                        && (n < 2 || list[n - 2].kind != ItemKind::Number)
                }
                _ => false,
            }
        };

        match list.last_mut() {
            Some(last) if merge => {
                let text = format!("{}{}", last.text(), command.text());
                *last = Command::number(&text);
            }
            _ => list.push(command.clone()),
        }
    }
    list
}

/// Shortens `1.500` to `1.5`, keeping at least one fractional digit
pub fn clean(text: &str) -> String {
    TRAILING_ZEROS.replace(text, "$1").into_owned()
}

/// The formula as shown to the user
pub fn display_string(commands: &[Command]) -> String {
    let mut s = String::new();
    for c in normalize(commands) {
        if let Some(text) = &c.text {
            s.push(' ');
            s.push_str(&clean(text));
        }
    }
    s.trim().to_string()
}

/// Length of the displayed formula in characters, the unit of the cursor
pub fn display_len(commands: &[Command]) -> usize {
    display_string(commands).chars().count()
}

/// Drops placeholders such as a previous `=` or `ERROR!`
pub fn purified(commands: &[Command]) -> Vec<Command> {
    commands.iter().filter(|c| c.kind != ItemKind::None).cloned().collect()
}

/// Splits multi-character numbers back into one item per character. A leading
/// sign becomes a `Minus` item
pub fn exploded(commands: &[Command]) -> Vec<Command> {
    let mut list = Vec::with_capacity(commands.len());
    for c in commands {
        match &c.text {
            Some(text) if c.kind == ItemKind::Number && text.chars().count() > 1 => {
                for ch in text.chars() {
                    if ch == '-' {
                        list.push(Command::new(ItemKind::Minus));
                    } else {
                        list.push(Command::number(&ch.to_string()));
                    }
                }
            }
            _ => list.push(c.clone()),
        }
    }
    list
}
