use std::fmt;

/// Result of any internal evaluation step
pub type CalcResult<T> = Result<T, CalcError>;
pub(crate) type CalcErrorResult = Result<(), CalcError>;

#[derive(Clone, PartialEq)]
pub enum CalcError {
    StrToDecimal(String),
    DividedByZero(String),

    OnlyInt(String),
    NotForNegativeInt(String),
    NotFinite(String),

    InvalidArgument(String, String),
    ArgumentOutOfRange(String, String, String),

    EmptyExpression,
    TooManyOps,
    MissingText,

    PasteFailed(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            CalcError::StrToDecimal(s) => write!(f, "Failed to convert '{}' to decimal", s),
            CalcError::DividedByZero(s) => write!(f, "'{}' divided by zero", s),

            CalcError::OnlyInt(s) => write!(f, "{} supports only integers", s),
            CalcError::NotForNegativeInt(s) => write!(f, "Function '{}' is not supported for negative integers", s),
            CalcError::NotFinite(s) => write!(f, "Function '{}' requires a finite number", s),

            CalcError::InvalidArgument(func, val) => write!(f, "Invalid argument {} for function '{}'", val, func),
            CalcError::ArgumentOutOfRange(func, val, range) => {
                write!(f, "Argument {} of {} out of range({})", val, func, range)
            }

            CalcError::EmptyExpression => write!(f, "Nothing to calculate"),
            CalcError::TooManyOps => write!(f, "Too many operators"),
            CalcError::MissingText => write!(f, "Number without digits"),

            CalcError::PasteFailed(s) => write!(f, "Nothing to paste from '{}'", s),
        }
    }
}

impl fmt::Debug for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            CalcError::StrToDecimal(s) => write!(f, "StrToDecimal({:?})", s),
            CalcError::DividedByZero(s) => write!(f, "DividedByZero({:?})", s),
            CalcError::OnlyInt(s) => write!(f, "OnlyInt({:?})", s),
            CalcError::NotForNegativeInt(s) => write!(f, "NotForNegativeInt({:?})", s),
            CalcError::NotFinite(s) => write!(f, "NotFinite({:?})", s),
            CalcError::InvalidArgument(func, val) => write!(f, "InvalidArgument({:?}, {:?})", func, val),
            CalcError::ArgumentOutOfRange(func, val, range) => {
                write!(f, "ArgumentOutOfRange({:?}, {:?}, {:?})", func, val, range)
            }
            CalcError::EmptyExpression => write!(f, "EmptyExpression"),
            CalcError::TooManyOps => write!(f, "TooManyOps"),
            CalcError::MissingText => write!(f, "MissingText"),
            CalcError::PasteFailed(s) => write!(f, "PasteFailed({:?})", s),
        }
    }
}

impl std::error::Error for CalcError {}
