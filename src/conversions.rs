//! `BigDecimal <-> BigRational` conversions.
//!
//! Neither leaf crate can define these: `exactum-decimal` returning a
//! `BigRational` would need to depend on `exactum-rational`, and the
//! reverse conversion would need the opposite dependency, so the two
//! crates would depend on each other. Defining the traits here, in the
//! crate that already depends on both, satisfies the orphan rule (the
//! trait is local) without a cycle.

use exactum_base::{Result, RoundingMode};
use exactum_decimal::BigDecimal;
use exactum_integer::BigInteger;
use exactum_rational::BigRational;

/// Widens a [`BigDecimal`] to the exact [`BigRational`] it represents:
/// `unscaled / 10^scale`. Always exact, never fails on the value itself —
/// the only failure mode is `scale` being large enough that `10^scale`
/// overflows the power-of-ten bound `BigInteger::pow` enforces.
pub trait ToBigRational {
    fn to_big_rational(&self) -> Result<BigRational>;
}

impl ToBigRational for BigDecimal {
    fn to_big_rational(&self) -> Result<BigRational> {
        let denominator = BigInteger::ten().pow(u32::try_from(self.scale()).unwrap_or(u32::MAX))?;
        BigRational::new(self.unscaled_value().clone(), denominator)
    }
}

/// Narrows a [`BigRational`] to a [`BigDecimal`] at the given `scale`,
/// under `mode` — `numerator` and `denominator` are each lifted to a
/// scale-`0` `BigDecimal` and divided via [`BigDecimal::divided_by`], so
/// this conversion inherits that method's rounding semantics exactly.
pub trait ToBigDecimal {
    fn to_big_decimal(&self, scale: u64, mode: RoundingMode) -> Result<BigDecimal>;
}

impl ToBigDecimal for BigRational {
    fn to_big_decimal(&self, scale: u64, mode: RoundingMode) -> Result<BigDecimal> {
        let numerator = BigDecimal::from_big_integer(self.numerator().clone());
        let denominator = BigDecimal::from_big_integer(self.denominator().clone());
        numerator.divided_by(&denominator, Some(scale), mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_to_rational_round_trips_through_a_power_of_ten_denominator() {
        let d = BigDecimal::parse("1.25").unwrap();
        let r = d.to_big_rational().unwrap();
        assert_eq!(r.to_string(), "125/100");
        assert_eq!(r.simplified().unwrap().to_string(), "5/4");
    }

    #[test]
    fn rational_to_decimal_uses_the_requested_scale_and_mode() {
        let r = BigRational::new(BigInteger::parse("1").unwrap(), BigInteger::parse("3").unwrap()).unwrap();
        let d = r.to_big_decimal(2, RoundingMode::HalfUp).unwrap();
        assert_eq!(d.to_string(), "0.33");
        assert!(r.to_big_decimal(2, RoundingMode::Unnecessary).is_err());
    }

    #[test]
    fn an_integral_rational_converts_to_a_whole_decimal() {
        let r = BigRational::from_big_integer(BigInteger::parse("7").unwrap());
        assert_eq!(r.to_big_decimal(0, RoundingMode::Unnecessary).unwrap().to_string(), "7");
    }
}
