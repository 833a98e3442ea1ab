use std::fmt;

use bigdecimal::BigDecimal;

use crate::command::{Command, ItemKind};
use crate::config::{Config, WORKING_PRECISION};
use crate::errors::*;
use crate::math;

/// One entry of the evaluator's value stack
#[derive(Clone, PartialEq)]
pub enum Value {
    /// Finite decimal number
    Normal(BigDecimal),
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            Value::Normal(d) => write!(f, "{}", math::to_plain_string(d)),
            Value::NaN => write!(f, "NaN"),
            Value::PositiveInfinity => write!(f, "Infinity"),
            Value::NegativeInfinity => write!(f, "-Infinity"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            Value::Normal(d) => write!(f, "Normal({})", math::to_plain_string(d)),
            _ => write!(f, "{}", self),
        }
    }
}

// binary operation: double-precision classification and the exact kernel
macro_rules! checked_binary_op {
    ($id:ident, $f64op:expr, $exact:expr) => {
        pub fn $id(self, rhs: Value) -> CalcResult<Value> {
            let check: fn(f64, f64) -> f64 = $f64op;
            let pre = check(self.to_f64(), rhs.to_f64());
            match (&self, &rhs) {
                (Value::Normal(b), Value::Normal(a)) => {
                    if let Some(v) = Value::classify(pre) {
                        return Ok(v);
                    }
                    let exact: fn(&BigDecimal, &BigDecimal) -> CalcResult<BigDecimal> = $exact;
                    Ok(Value::Normal(exact(b, a)?))
                }
                _ => Value::from_f64(pre),
            }
        }
    };
}

// unary function with the same double-precision classification
macro_rules! checked_unary_op {
    ($id:ident, $f64op:expr, $exact:expr) => {
        pub fn $id(self) -> CalcResult<Value> {
            let check: fn(f64) -> f64 = $f64op;
            let pre = check(self.to_f64());
            match &self {
                Value::Normal(a) => {
                    if let Some(v) = Value::classify(pre) {
                        return Ok(v);
                    }
                    let exact: fn(&BigDecimal) -> CalcResult<BigDecimal> = $exact;
                    Ok(Value::Normal(exact(a)?))
                }
                _ => Value::from_f64(pre),
            }
        }
    };
}

// unary function computed directly; non-finite input goes through doubles
macro_rules! unary_op {
    ($id:ident, $f64op:expr, $exact:expr) => {
        pub fn $id(self) -> CalcResult<Value> {
            match &self {
                Value::Normal(a) => {
                    let exact: fn(&BigDecimal) -> CalcResult<BigDecimal> = $exact;
                    Ok(Value::Normal(exact(a)?))
                }
                _ => {
                    let f: fn(f64) -> f64 = $f64op;
                    Value::from_f64(f(self.to_f64()))
                }
            }
        }
    };
}

const P: u64 = WORKING_PRECISION;

impl Value {
    pub fn from_str_decimal(s: &str) -> CalcResult<Value> {
        Ok(Value::Normal(math::parse_decimal(s)?))
    }

    pub fn pi() -> Value {
        Value::Normal(math::pi(P))
    }

    pub fn e() -> Value {
        Value::Normal(math::e(P))
    }

    /// Value of a marker item that made it into the formula, e.g. a previous
    /// `Infinity` result
    pub fn from_marker(kind: ItemKind) -> Option<Value> {
        match kind {
            ItemKind::PositiveInfinity => Some(Value::PositiveInfinity),
            ItemKind::NegativeInfinity => Some(Value::NegativeInfinity),
            ItemKind::NaN => Some(Value::NaN),
            _ => None,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Normal(d) => math::to_f64(d),
            Value::NaN => f64::NAN,
            Value::PositiveInfinity => f64::INFINITY,
            Value::NegativeInfinity => f64::NEG_INFINITY,
        }
    }

    /// Marker for a non-finite double, None for a finite one
    pub fn classify(f: f64) -> Option<Value> {
        if f.is_nan() {
            Some(Value::NaN)
        } else if f == f64::INFINITY {
            Some(Value::PositiveInfinity)
        } else if f == f64::NEG_INFINITY {
            Some(Value::NegativeInfinity)
        } else {
            None
        }
    }

    pub fn from_f64(f: f64) -> CalcResult<Value> {
        match Value::classify(f) {
            Some(v) => Ok(v),
            None => Ok(Value::Normal(math::from_f64(f)?)),
        }
    }

    pub fn addition(self, rhs: Value) -> CalcResult<Value> {
        match (&self, &rhs) {
            (Value::Normal(b), Value::Normal(a)) => Ok(Value::Normal(math::add(b, a, P))),
            _ => Value::from_f64(self.to_f64() + rhs.to_f64()),
        }
    }

    pub fn subtract(self, rhs: Value) -> CalcResult<Value> {
        match (&self, &rhs) {
            (Value::Normal(b), Value::Normal(a)) => Ok(Value::Normal(math::sub(b, a, P))),
            _ => Value::from_f64(self.to_f64() - rhs.to_f64()),
        }
    }

    checked_binary_op!(multiply, |b, a| b * a, |b, a| Ok(math::multiply(b, a, P)));
    checked_binary_op!(divide, |b, a| b / a, |b, a| math::div(b, a, P));
    checked_binary_op!(power, |b, a| b.powf(a), |b, a| math::pow(b, a, P));
    checked_binary_op!(reminder, |b, a| b % a, |b, a| math::rem(b, a));

    checked_unary_op!(sqrt, |a| a.sqrt(), |a| math::sqrt(a, P));
    checked_unary_op!(ln, |a| a.ln(), |a| math::ln(a, P));
    checked_unary_op!(log10, |a| a.log10(), |a| math::log10(a, P));
    checked_unary_op!(log2, |a| a.log2(), |a| math::log2(a, P));

    unary_op!(sin, |a| a.sin(), |a| math::sin(a, P));
    unary_op!(cos, |a| a.cos(), |a| math::cos(a, P));
    unary_op!(tan, |a| a.tan(), |a| math::tan(a, P));
    unary_op!(asin, |a| a.asin(), |a| math::asin(a, P));
    unary_op!(acos, |a| a.acos(), |a| math::acos(a, P));
    unary_op!(atan, |a| a.atan(), |a| math::atan(a, P));
    unary_op!(abs, |a| a.abs(), |a| Ok(math::abs(a)));

    pub fn fact(self) -> CalcResult<Value> {
        match &self {
            Value::Normal(a) => Ok(Value::Normal(math::factorial(a)?)),
            _ => Err(CalcError::NotFinite("!".to_string())),
        }
    }

    /// Item handed back to the formula: a number rounded for display or a marker
    pub fn into_command(self, config: &Config) -> Command {
        match self {
            Value::Normal(d) => Command::number(&math::round_to_display(&d, config.display_precision)),
            Value::PositiveInfinity => Command::with_text(ItemKind::PositiveInfinity, "Infinity"),
            Value::NegativeInfinity => Command::with_text(ItemKind::NegativeInfinity, "-Infinity"),
            Value::NaN => Command::with_text(ItemKind::NaN, "NaN"),
        }
    }
}
