//! Input coercion for [`crate::of`].

use alloc::format;
use alloc::string::ToString;

use exactum_base::{Error, Result};
use exactum_decimal::BigDecimal;
use exactum_integer::BigInteger;
use exactum_rational::BigRational;

use crate::BigNumber;

/// Anything [`crate::of`] can turn into a [`BigNumber`].
pub trait Coerce {
    fn coerce(self) -> Result<BigNumber>;
}

impl Coerce for BigNumber {
    fn coerce(self) -> Result<BigNumber> {
        Ok(self)
    }
}

impl Coerce for BigInteger {
    fn coerce(self) -> Result<BigNumber> {
        Ok(BigNumber::Integer(self))
    }
}

impl Coerce for BigDecimal {
    fn coerce(self) -> Result<BigNumber> {
        Ok(BigNumber::Decimal(self))
    }
}

impl Coerce for BigRational {
    fn coerce(self) -> Result<BigNumber> {
        Ok(BigNumber::Rational(self))
    }
}

/// Tries the integer grammar first, then the rational `p/q` grammar, then
/// falls back to the decimal grammar — whichever one `s` actually matches.
fn of_str(s: &str) -> Result<BigNumber> {
    if let Ok(i) = BigInteger::parse(s) {
        return Ok(BigNumber::Integer(i));
    }
    if s.contains('/') {
        return Ok(BigNumber::Rational(BigRational::parse(s)?));
    }
    Ok(BigNumber::Decimal(BigDecimal::parse(s)?))
}

impl Coerce for &str {
    fn coerce(self) -> Result<BigNumber> {
        of_str(self)
    }
}

impl Coerce for alloc::string::String {
    fn coerce(self) -> Result<BigNumber> {
        of_str(&self)
    }
}

/// A host float is rendered through Rust's own fixed-notation `Display`
/// (never scientific, unlike many languages' default float formatting)
/// and re-parsed as a string, so a whole-valued float like `5.0` becomes
/// the same `BigNumber::Integer` a literal `"5"` would.
impl Coerce for f64 {
    fn coerce(self) -> Result<BigNumber> {
        if self.is_nan() || self.is_infinite() {
            return Err(Error::NumberFormat(format!("{self} has no exact representation")));
        }
        of_str(&self.to_string())
    }
}

impl Coerce for f32 {
    fn coerce(self) -> Result<BigNumber> {
        (self as f64).coerce()
    }
}

macro_rules! impl_coerce_for_int {
    ($($t:ty),*) => {
        $(
            impl Coerce for $t {
                fn coerce(self) -> Result<BigNumber> {
                    Ok(BigNumber::Integer(BigInteger::from(self)))
                }
            }
        )*
    };
}

impl_coerce_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
