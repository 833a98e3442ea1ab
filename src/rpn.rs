use crate::command::{Command, ItemKind};

/// Reorders a normalized formula into postfix order (shunting-yard).
///
/// Items with an equal or smaller weight on top of the queue are flushed
/// before a new item is pushed, so operators of the same weight are left
/// associative. Items without a weight (`(`) stop the flushing.
///
/// A `)` without a matching `(` is dropped. An unmatched `(` is flushed
/// into the output at the end and ignored by the evaluator later.
pub fn to_rpn(commands: &[Command]) -> Vec<Command> {
    let mut output: Vec<Command> = Vec::with_capacity(commands.len());
    let mut queue: Vec<Command> = Vec::new();

    for command in commands {
        match command.kind {
            ItemKind::RightParen => {
                if let Some(pos) = queue.iter().rposition(|c| c.kind == ItemKind::LeftParen) {
                    while queue.len() > pos + 1 {
                        if let Some(c) = queue.pop() {
                            output.push(c);
                        }
                    }
                    queue.pop();
                }
            }
            _ => {
                pop_while_weight(&mut queue, &mut output, command.kind.weight());
                queue.push(command.clone());
            }
        }
    }

    while let Some(c) = queue.pop() {
        output.push(c);
    }
    output
}

// move items from the queue to output while the top item binds at least as
// tight as the incoming one
fn pop_while_weight(queue: &mut Vec<Command>, output: &mut Vec<Command>, weight: Option<i32>) {
    let weight = match weight {
        Some(w) => w,
        None => return,
    };
    while let Some(top) = queue.last() {
        match top.kind.weight() {
            Some(w) if w <= weight => {}
            _ => return,
        }
        if let Some(c) = queue.pop() {
            output.push(c);
        }
    }
}
