//! Property-based invariant tests for the formula buffer pipeline.
//!
//! 1. Normalization is idempotent
//! 2. Display text survives a round trip through clipboard deserialization
//! 3. Cursor moves never leave the displayed formula
//! 4. Typing a digit at the end and deleting it restores the buffer
//! 5. Random key sequences never panic and keep the caret in range
//! 6. Evaluation is deterministic
//! 7. A vanishing operand never stalls `+`, `-`, `×`, `÷` or `%`

use flickcalc::display::{display_len, display_string, normalize};
use flickcalc::edit::{insert, move_cursor, remove};
use flickcalc::parse::deserialize;
use flickcalc::rpn::to_rpn;
use flickcalc::stack::calculate;
use flickcalc::{Command, Config, ItemKind, Session};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn formula_kind() -> impl Strategy<Value = ItemKind> {
    prop::sample::select(vec![
        ItemKind::Plus,
        ItemKind::Minus,
        ItemKind::Multiply,
        ItemKind::Divide,
        ItemKind::Modulo,
        ItemKind::Power,
        ItemKind::LeftParen,
        ItemKind::RightParen,
        ItemKind::Pi,
        ItemKind::E,
        ItemKind::Sqrt,
        ItemKind::Sin,
        ItemKind::Cos,
        ItemKind::ATan,
        ItemKind::Ln,
        ItemKind::Log10,
        ItemKind::Abs,
    ])
}

/// Well formed decimal literal, typed one character per item
fn number_text() -> impl Strategy<Value = String> {
    "[0-9]{1,20}(\\.[0-9]{1,12})?"
}

fn typed(text: &str) -> Vec<Command> {
    text.chars().map(|ch| Command::number(&ch.to_string())).collect()
}

/// Buffer as typed on the keyboard: every number is followed by a
/// non-number item, so two literals never run into each other
fn typed_buffer() -> impl Strategy<Value = Vec<Command>> {
    proptest::collection::vec((proptest::option::of(number_text()), formula_kind()), 0..8).prop_map(
        |atoms| {
            let mut commands = Vec::new();
            for (number, kind) in atoms {
                if let Some(text) = number {
                    commands.extend(typed(&text));
                }
                commands.push(Command::new(kind));
            }
            commands
        },
    )
}

/// Any single formula item, including lone digits and decimal points
fn any_item() -> impl Strategy<Value = Command> {
    prop_oneof![
        "[0-9.]".prop_map(|s| Command::number(&s)),
        formula_kind().prop_map(Command::new),
    ]
}

fn any_key() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => any_item(),
        1 => prop::sample::select(vec![
            ItemKind::CursorLeft,
            ItemKind::CursorRight,
            ItemKind::Delete,
            ItemKind::AllClear,
            ItemKind::MemoryStore,
            ItemKind::MemoryRecall,
            ItemKind::Equals,
        ])
        .prop_map(Command::new),
    ]
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn normalize_is_idempotent(items in proptest::collection::vec(any_item(), 0..24)) {
        let once = normalize(&items);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn display_survives_paste(buffer in typed_buffer()) {
        let shown = display_string(&buffer);
        let pasted = deserialize(&shown);
        prop_assert_eq!(display_string(&pasted), shown);
    }

    #[test]
    fn cursor_stays_in_formula(
        buffer in typed_buffer(),
        cursor in 0usize..64,
        delta in -64isize..64,
    ) {
        let moved = move_cursor(&buffer, cursor, delta);
        prop_assert!(moved <= display_len(&buffer));
    }

    #[test]
    fn digit_at_end_then_delete_restores(buffer in typed_buffer(), digit in "[0-9]") {
        let end = display_len(&buffer);
        let inserted = insert(&buffer, &[Command::number(&digit)], end);
        prop_assert_eq!(inserted.cursor, display_len(&inserted.commands));

        let removed = remove(&inserted.commands, inserted.cursor);
        prop_assert_eq!(&removed.commands, &buffer);
        prop_assert_eq!(removed.cursor, end);
    }

    #[test]
    fn key_presses_keep_caret_in_range(keys in proptest::collection::vec(any_key(), 0..24)) {
        let mut session = Session::default();
        for key in keys {
            let update = session.press(key);
            prop_assert!(update.cursor <= update.formula.chars().count());
            prop_assert_eq!(update.formula, session.formula());
        }
    }

    #[test]
    fn evaluation_is_deterministic(buffer in typed_buffer()) {
        let rpn = to_rpn(&normalize(&buffer));
        let config = Config::default();
        prop_assert_eq!(calculate(&rpn, &config), calculate(&rpn, &config));
    }

    #[test]
    fn vanishing_operand_never_stalls(
        a in "[1-9][0-9]{0,19}",
        base in "0\\.[0-9]{1,3}",
        exponent in 1_000_000u64..1_000_000_000_000,
        kind in prop::sample::select(vec![
            ItemKind::Plus,
            ItemKind::Minus,
            ItemKind::Multiply,
            ItemKind::Divide,
            ItemKind::Modulo,
        ]),
    ) {
        // a op ( base ^ exponent )
        let mut formula = typed(&a);
        formula.push(Command::new(kind));
        formula.push(Command::new(ItemKind::LeftParen));
        formula.extend(typed(&base));
        formula.push(Command::new(ItemKind::Power));
        formula.extend(typed(&exponent.to_string()));
        formula.push(Command::new(ItemKind::RightParen));

        let result = calculate(&to_rpn(&normalize(&formula)), &Config::default());
        let text = result.as_ref().map(|c| c.text().to_string());
        match kind {
            ItemKind::Plus | ItemKind::Minus => prop_assert_eq!(text, Some(a)),
            ItemKind::Multiply => prop_assert_eq!(text, Some("0".to_string())),
            _ => prop_assert!(text.is_some()),
        }
    }
}
