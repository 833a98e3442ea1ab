use pest::iterators::Pair;
use pest::Parser;

use crate::command::{Command, ItemKind};

#[derive(Parser)]
#[grammar = "clipboard.pest"]
pub struct ClipboardParser;

fn number(pair: &Pair<Rule>) -> Command {
    Command::number(&pair.as_str().replace(',', ""))
}

/// Converts pasted text into formula items.
///
/// The text is split on whitespace. Numbers may contain thousands separators,
/// a leading `-` becomes a separate `Minus` item. Every other piece must be
/// a glyph of a formula item. Pieces that are neither are dropped.
pub fn deserialize(text: &str) -> Vec<Command> {
    let pairs = match ClipboardParser::parse(Rule::clipboard, text) {
        Ok(mut p) => match p.next() {
            Some(clipboard) => clipboard.into_inner(),
            None => return Vec::new(),
        },
        Err(e) => {
            log::debug!("clipboard text rejected: {}", e);
            return Vec::new();
        }
    };

    let mut commands = Vec::new();
    for pair in pairs {
        match pair.as_rule() {
            Rule::number => commands.push(number(&pair)),
            Rule::signed => {
                for inner in pair.into_inner() {
                    match inner.as_rule() {
                        Rule::minus => commands.push(Command::new(ItemKind::Minus)),
                        Rule::number => commands.push(number(&inner)),
                        _ => {}
                    }
                }
            }
            Rule::glyph => {
                let text = pair.as_str().replace(',', "");
                match ItemKind::from_text(&text) {
                    Some(kind) => commands.push(Command::new(kind)),
                    None => log::trace!("dropped pasted piece {:?}", pair.as_str()),
                }
            }
            _ => {}
        }
    }
    commands
}
