use crate::command::{Command, ItemKind};
use crate::config::Config;
use crate::display::{display_len, exploded, normalize};
use crate::edit::Edit;
use crate::errors::*;
use crate::rpn::to_rpn;
use crate::value::*;

pub(crate) const RESULT_MARK: &str = "=";
pub(crate) const ERROR_MARK: &str = "ERROR!";

macro_rules! one_arg_op {
    ($id:ident) => {
        fn $id(&mut self) -> CalcErrorResult {
            let v = self.values.pop().ok_or(CalcError::TooManyOps)?;
            let v = v.$id()?;
            self.values.push(v);
            Ok(())
        }
    };
}
macro_rules! two_arg_op {
    ($id:ident) => {
        fn $id(&mut self) -> CalcErrorResult {
            let a = self.values.pop().ok_or(CalcError::TooManyOps)?;
            let b = self.values.pop().ok_or(CalcError::TooManyOps)?;
            let v = b.$id(a)?;
            self.values.push(v);
            Ok(())
        }
    };
}

/// Value stack that consumes a formula in postfix order
pub(crate) struct Stack {
    values: Vec<Value>,
}

impl Stack {
    pub(crate) fn new() -> Self {
        Stack { values: Vec::new() }
    }

    fn push_number(&mut self, command: &Command) -> CalcErrorResult {
        let text = command.text.as_deref().ok_or(CalcError::MissingText)?;
        let v = Value::from_str_decimal(text)?;
        self.values.push(v);
        Ok(())
    }

    fn process(&mut self, command: &Command) -> CalcErrorResult {
        match command.kind {
            ItemKind::Number => self.push_number(command),
            ItemKind::Pi => {
                self.values.push(Value::pi());
                Ok(())
            }
            ItemKind::E => {
                self.values.push(Value::e());
                Ok(())
            }
            ItemKind::PositiveInfinity | ItemKind::NegativeInfinity | ItemKind::NaN => {
                if let Some(v) = Value::from_marker(command.kind) {
                    self.values.push(v);
                }
                Ok(())
            }

            ItemKind::Plus => self.addition(),
            ItemKind::Minus => self.subtract(),
            ItemKind::Multiply => self.multiply(),
            ItemKind::Divide => self.divide(),
            ItemKind::Power => self.power(),
            ItemKind::Modulo => self.reminder(),
            ItemKind::Factorial => self.fact(),

            ItemKind::Sqrt => self.sqrt(),
            ItemKind::Ln => self.ln(),
            ItemKind::Log10 => self.log10(),
            ItemKind::Log2 => self.log2(),
            ItemKind::Sin => self.sin(),
            ItemKind::Cos => self.cos(),
            ItemKind::Tan => self.tan(),
            ItemKind::ASin => self.asin(),
            ItemKind::ACos => self.acos(),
            ItemKind::ATan => self.atan(),
            ItemKind::Abs => self.abs(),

            // brackets left over by the converter and key actions
            ItemKind::None
            | ItemKind::LeftParen
            | ItemKind::RightParen
            | ItemKind::MemoryStore
            | ItemKind::MemoryRecall
            | ItemKind::Delete
            | ItemKind::AllClear
            | ItemKind::CursorLeft
            | ItemKind::CursorRight
            | ItemKind::Equals => Ok(()),
        }
    }

    one_arg_op!(fact);
    one_arg_op!(sqrt);
    one_arg_op!(ln);
    one_arg_op!(log10);
    one_arg_op!(log2);
    one_arg_op!(sin);
    one_arg_op!(cos);
    one_arg_op!(tan);
    one_arg_op!(asin);
    one_arg_op!(acos);
    one_arg_op!(atan);
    one_arg_op!(abs);

    two_arg_op!(addition);
    two_arg_op!(subtract);
    two_arg_op!(multiply);
    two_arg_op!(divide);
    two_arg_op!(power);
    two_arg_op!(reminder);

    pub(crate) fn calculate(&mut self, rpn: &[Command], config: &Config) -> CalcResult<Command> {
        if rpn.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        self.values = Vec::new();
        for command in rpn {
            self.process(command)?;
        }

        // values typed next to each other without an operator are multiplied
        // from left to right
        let mut values = std::mem::take(&mut self.values).into_iter();
        let first = values.next().ok_or(CalcError::TooManyOps)?;
        let v = values.try_fold(first, |acc, v| acc.multiply(v))?;
        Ok(v.into_command(config))
    }
}

/// Evaluates a formula in postfix order. Any failure yields None
pub fn calculate(rpn: &[Command], config: &Config) -> Option<Command> {
    match Stack::new().calculate(rpn, config) {
        Ok(c) => Some(c),
        Err(e) => {
            log::debug!("evaluation failed: {}", e);
            None
        }
    }
}

/// Applies `AllClear` or `Equals` to the buffer. Other commands leave it as
/// is. The cursor always ends up after the last character
pub fn invoke(commands: &[Command], command: &Command, config: &Config) -> Edit {
    let commands = match command.kind {
        ItemKind::AllClear => Vec::new(),
        ItemKind::Equals => {
            let rpn = to_rpn(&normalize(commands));
            match calculate(&rpn, config) {
                Some(result) => {
                    let mut v = vec![Command::marker(RESULT_MARK)];
                    v.extend(exploded(&[result]));
                    v
                }
                None => vec![Command::marker(ERROR_MARK)],
            }
        }
        _ => commands.to_vec(),
    };
    let cursor = display_len(&commands);
    Edit { commands, cursor }
}
