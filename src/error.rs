use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::MAX_DIGITS;

#[derive(Debug)]
pub struct BigNumError {
    kind: BigNumErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigNumErrorKind {
    /// The normalized result would need more significant digits than
    /// `MAX_DIGITS`
    CapacityExceeded,
    /// The divisor's magnitude is zero
    DivisionByZero,
    /// A raw digit outside `[0, 9]` was passed to a constructor
    InvalidDigit,
}

impl BigNumError {
    pub fn capacity(len: usize) -> Self {
        Self {
            kind: BigNumErrorKind::CapacityExceeded,
            message: format!(
                "result requires {} digits but the maximum is {}",
                len, MAX_DIGITS
            ),
        }
    }

    pub fn division_by_zero() -> Self {
        Self {
            kind: BigNumErrorKind::DivisionByZero,
            message: "attempt to divide by a zero BigNum".to_string(),
        }
    }

    pub fn invalid_digit(digit: u8, index: usize) -> Self {
        Self {
            kind: BigNumErrorKind::InvalidDigit,
            message: format!("digit {} at position {} is not in [0, 9]", digit, index),
        }
    }

    pub fn kind(&self) -> BigNumErrorKind {
        self.kind
    }
}

impl Display for BigNumErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "{}",
            match self {
                BigNumErrorKind::CapacityExceeded => "CapacityExceeded",
                BigNumErrorKind::DivisionByZero => "DivisionByZero",
                BigNumErrorKind::InvalidDigit => "InvalidDigit",
            }
        ))
    }
}

impl Display for BigNumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "ErrorKind: {}, Message: {}",
            self.kind, self.message
        ))
    }
}

impl Error for BigNumError {}

pub type BigNumResult<T> = Result<T, BigNumError>;
pub type BigNumTestResult = Result<(), BigNumError>;
