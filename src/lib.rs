//! # Button calculator core
//!
//! The formula is kept as a list of items, one item per pressed key. Digits and
//! the decimal point are stored one character per item, so that the caret can
//! be put between any two characters and a single digit can be deleted.
//! Everything that is shown or evaluated works on the normalized form, where
//! adjacent digits are merged into a number and a sign is merged into the
//! number after it:
//! * `1`, `2`, `+`, `3` is shown as `12 + 3`
//! * `5`, `×`, `-`, `3` is shown as `5 × -3` (unary minus)
//! * `5`, `-`, `3` is shown as `5 - 3` (subtraction)
//!
//! Evaluation converts the normalized formula into postfix order and runs it
//! on a value stack. All intermediate values are decimals with 100
//! significant digits, the result is rounded half up to 20 fractional digits
//! by default (see [`Config`]). Overflow and undefined results are not
//! errors: they are shown as `Infinity`, `-Infinity`, and `NaN`. Every other
//! failure (missing operand, non-integer factorial, argument outside of the
//! function domain) is shown as `ERROR!`.
//!
//! Operators (starting from highest priority):
//! * functions: `√`, `sin`, `cos`, `tan`, `sin⁻¹`, `cos⁻¹`, `tan⁻¹`, `ln`, `log₁₀`, `log₂`, `ABS`
//! * `^` - power, `!` - factorial, `%` - remainder
//! * `×`, `÷` - multiplication and division
//! * `+`, `-` - addition and subtraction
//!
//! Operators of the same priority are left associative: `1 - 2 - 3` is `-4`.
//! A closing bracket without an opening one is ignored, an unclosed opening
//! bracket is closed at the end of the formula. Values written next to each
//! other without an operator are multiplied: `( 2 ) ( 3 )` is `6`.
//!
//! Predefined constants:
//! * `π` - 3.14159...
//! * `e` - 2.71828...
//!
//! [`Session`] glues everything together: it receives key presses and pasted
//! text and returns the formula text, the caret position, and the live preview
//! of the result.
//!
//! ```
//! use flickcalc::{Command, ItemKind, Session};
//!
//! let mut session = Session::default();
//! session.press(Command::number("2"));
//! session.press(Command::new(ItemKind::Plus));
//! let update = session.press(Command::number("3"));
//! assert_eq!(update.formula, "2 + 3");
//! assert_eq!(update.preview.as_deref(), Some("5"));
//!
//! let update = session.press(Command::new(ItemKind::Equals));
//! assert_eq!(update.formula, "= 5");
//! ```

#[macro_use]
extern crate pest_derive;

pub mod command;
pub mod config;
pub mod display;
pub mod edit;
pub mod errors;
mod math;
pub mod parse;
pub mod rpn;
pub mod session;
pub mod stack;
pub mod value;

pub use command::{Command, ItemKind};
pub use config::Config;
pub use edit::Edit;
pub use errors::{CalcError, CalcResult};
pub use session::{Session, Update};
