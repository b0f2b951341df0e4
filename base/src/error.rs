//! The error taxonomy shared by every `exactum` numeric type.
//!
//! Unlike `dashu`, which panics on most arithmetic faults and reserves its
//! `ParseError`/`ConversionError` types for parsing and narrowing
//! conversions only, `exactum` routes every domain violation through this
//! single enum so callers can match on the kind instead of catching a
//! panic.

use core::fmt::{self, Display, Formatter};

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// The kind of failure raised by a fallible `exactum` operation.
///
/// Variants correspond 1:1 to the taxonomy of error kinds (not class names)
/// enumerated for this arithmetic system: unparseable input, division by a
/// zero divisor, an exact operation whose true result is not representable,
/// a negative input where one is forbidden, overflow on narrowing to a host
/// integer, and the two catch-all kinds for other domain/argument
/// violations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Unparseable input, an empty byte string, or a character outside the
    /// alphabet during base decoding.
    NumberFormat(String),
    /// A division or modular operation with a zero divisor, or the
    /// reciprocal/modular-inverse of zero.
    DivisionByZero,
    /// An exact operation was requested (rounding mode `UNNECESSARY`,
    /// `toBigInteger`, `exactlyDividedBy`, an integer accumulator fed a
    /// fractional addend) but the true result is not representable without
    /// rounding.
    RoundingNecessary,
    /// A negative input was supplied where the operation forbids it
    /// (square root, `powMod` arguments, unsigned byte encoding,
    /// arbitrary-base encoding).
    NegativeNumber,
    /// `toInt`/`toI64`-style narrowing of a value outside the host's
    /// native integer range.
    IntegerOverflow,
    /// A domain violation that does not fit the other kinds: a modular
    /// inverse that does not exist, `randomRange` with `min > max`, and
    /// similar.
    MathException(String),
    /// An argument outside its valid range: a negative scale, a base
    /// outside `[2, 36]`, an alphabet shorter than two symbols, an
    /// exponent outside `[0, 1_000_000]`, a negative bit index.
    InvalidArgument(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::NumberFormat(msg) => write!(f, "number format error: {msg}"),
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::RoundingNecessary => f.write_str("rounding is necessary but was not permitted"),
            Error::NegativeNumber => f.write_str("operation does not accept a negative number"),
            Error::IntegerOverflow => f.write_str("value is out of range for the target integer type"),
            Error::MathException(msg) => write!(f, "math error: {msg}"),
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result alias used throughout the `exactum` crates.
pub type Result<T> = core::result::Result<T, Error>;
