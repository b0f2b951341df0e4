//! The ten named rounding policies shared by `BigDecimal` and `BigRational`.
//!
//! `dashu_float::round` models rounding as a zero-sized `Round` trait with
//! one type per policy (`mode::Zero`, `mode::HalfEven`, ...) so the choice
//! is monomorphized at compile time. That shape doesn't fit here: callers
//! need the mode to be a *runtime* value (it is parsed from a string
//! identifier and threaded through `BigDecimal::divided_by` as an ordinary
//! argument), so this module instead uses a plain enum and a single
//! decision function, closer to the shape of a typical `RoundingMode` enum
//! from other big-decimal libraries.

use core::cmp::Ordering;
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::sign::Sign;

/// One of the ten rounding policies used by scaled division.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RoundingMode {
    Up,
    Down,
    Ceiling,
    Floor,
    HalfUp,
    HalfDown,
    HalfCeiling,
    HalfFloor,
    HalfEven,
    Unnecessary,
}

impl RoundingMode {
    /// All ten variants, in their canonical listing order.
    pub const ALL: [RoundingMode; 10] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfCeiling,
        RoundingMode::HalfFloor,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    pub const fn identifier(self) -> &'static str {
        match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfCeiling => "HALF_CEILING",
            RoundingMode::HalfFloor => "HALF_FLOOR",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Unnecessary => "UNNECESSARY",
        }
    }
}

impl Default for RoundingMode {
    /// `UNNECESSARY` is the default wherever a caller omits a mode
    /// (e.g. `BigInteger::divided_by` without an explicit mode).
    #[inline]
    fn default() -> Self {
        RoundingMode::Unnecessary
    }
}

impl FromStr for RoundingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RoundingMode::ALL
            .into_iter()
            .find(|m| m.identifier() == s)
            .ok_or_else(|| Error::InvalidArgument(alloc_string(s)))
    }
}

#[cfg(feature = "std")]
fn alloc_string(s: &str) -> String {
    format!("unrecognized rounding mode identifier {s:?}")
}

#[cfg(not(feature = "std"))]
fn alloc_string(s: &str) -> alloc::string::String {
    alloc::format!("unrecognized rounding mode identifier {s:?}")
}

/// Decide whether a truncated quotient must be nudged one unit away from
/// zero, given:
///
/// - `sign`: the sign of the untruncated mathematical quotient,
/// - `remainder_is_zero`: whether the division was exact,
/// - `cmp_double_remainder_to_divisor`: `(2 * |remainder|).cmp(&|divisor|)`,
/// - `quotient_is_odd`: the parity of the truncated quotient's last kept
///   digit, used only by `HalfEven`.
///
/// Returns `Err(Error::RoundingNecessary)` for `Unnecessary` when the
/// remainder is nonzero.
pub fn should_increment(
    mode: RoundingMode,
    sign: Sign,
    remainder_is_zero: bool,
    cmp_double_remainder_to_divisor: Ordering,
    quotient_is_odd: bool,
) -> Result<bool> {
    if remainder_is_zero {
        return Ok(false);
    }
    use Ordering::*;
    use RoundingMode::*;
    Ok(match mode {
        Up => true,
        Down => false,
        Ceiling => sign.is_positive(),
        Floor => sign.is_negative(),
        HalfUp => cmp_double_remainder_to_divisor != Less,
        HalfDown => cmp_double_remainder_to_divisor == Greater,
        HalfCeiling => match cmp_double_remainder_to_divisor {
            Equal => sign.is_positive(),
            Greater => true,
            Less => false,
        },
        HalfFloor => match cmp_double_remainder_to_divisor {
            Equal => sign.is_negative(),
            Greater => true,
            Less => false,
        },
        HalfEven => match cmp_double_remainder_to_divisor {
            Equal => quotient_is_odd,
            Greater => true,
            Less => false,
        },
        Unnecessary => return Err(Error::RoundingNecessary),
    })
}
