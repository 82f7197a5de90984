//! Error types returned by fallible constructors and arithmetic.
//!
//! The three categories below mirror the three ways an operation in this
//! crate can fail: the input text didn't parse, the requested arithmetic
//! is mathematically undefined or unrepresentable, or an argument violated
//! a precondition. Nothing here carries a heap-allocated message; every
//! variant is a plain enum so callers can `match` on failure kind.

use core::fmt;

/// Malformed input text, or construction from a non-finite `f64`/`f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The input (or the digit body after a sign) was empty.
    Empty,
    /// A non-digit byte appeared where a digit was required.
    InvalidDigit,
    /// Two sign characters appeared back to back (e.g. `+-`, `-+`).
    DoubleSign,
    /// The exponent portion of a scientific-notation literal didn't parse.
    InvalidExponent,
    /// `f64`/`f32` construction was attempted from `NaN` or `±Infinity`.
    NonFiniteFloat,
    /// A `RoundingMode` name wasn't one of the eight canonical uppercase forms.
    InvalidRoundingModeName,
    /// A `MathContext` text form didn't match `"precision=<n> roundingMode=<NAME>"`.
    InvalidMathContextText,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Empty => f.write_str("cannot parse a number from empty input"),
            FormatError::InvalidDigit => f.write_str("invalid digit in numeric input"),
            FormatError::DoubleSign => f.write_str("adjacent sign characters in numeric input"),
            FormatError::InvalidExponent => f.write_str("invalid exponent in scientific notation"),
            FormatError::NonFiniteFloat => f.write_str("cannot construct a decimal from NaN or infinity"),
            FormatError::InvalidRoundingModeName => f.write_str("unrecognized rounding mode name"),
            FormatError::InvalidMathContextText => f.write_str("malformed math context text"),
        }
    }
}

/// An arithmetic operation that is mathematically undefined, or whose
/// result cannot be represented without discarding digits the caller
/// asked not to discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArithmeticError {
    /// Division where the divisor is zero.
    DivisionByZero,
    /// `RoundingMode::Unnecessary` was requested but the exact result has
    /// digits that would need to be discarded.
    RoundingNecessary,
    /// A scale computation (e.g. `scale(a) + scale(b)`) overflowed `i32`.
    ScaleOverflow,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => f.write_str("division by zero"),
            ArithmeticError::RoundingNecessary => {
                f.write_str("rounding necessary but RoundingMode::Unnecessary was requested")
            }
            ArithmeticError::ScaleOverflow => f.write_str("scale overflowed i32 bounds"),
        }
    }
}

/// A caller-supplied argument violated a documented precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgumentError {
    /// `MathContext` precision was negative.
    NegativePrecision,
    /// A rounding-mode selector didn't correspond to a known mode.
    UnknownRoundingSelector,
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::NegativePrecision => f.write_str("precision must be non-negative"),
            ArgumentError::UnknownRoundingSelector => f.write_str("unknown rounding mode selector"),
        }
    }
}

/// The error type returned by every fallible operation in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// See [`FormatError`].
    Format(FormatError),
    /// See [`ArithmeticError`].
    Arithmetic(ArithmeticError),
    /// See [`ArgumentError`].
    Argument(ArgumentError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format(e) => e.fmt(f),
            Error::Arithmetic(e) => e.fmt(f),
            Error::Argument(e) => e.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Error::Format(e)
    }
}

impl From<ArithmeticError> for Error {
    fn from(e: ArithmeticError) -> Self {
        Error::Arithmetic(e)
    }
}

impl From<ArgumentError> for Error {
    fn from(e: ArgumentError) -> Self {
        Error::Argument(e)
    }
}
