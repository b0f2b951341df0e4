//! `exactum`: the umbrella crate tying together [`exactum_integer::BigInteger`],
//! [`exactum_decimal::BigDecimal`] and [`exactum_rational::BigRational`]
//! behind a single polymorphic [`BigNumber`] value, the way `dashu`'s facade
//! crate re-exports its split `dashu-int`/`dashu-float`/`dashu-ratio` crates.
//!
//! The leaf crates cannot depend on each other — `exactum-decimal` and
//! `exactum-rational` would form a cycle if either tried to return the
//! other's type from a conversion method — so the `BigDecimal <-> BigRational`
//! conversions and the domain-crossing [`min`], [`max`] and [`sum`] live
//! here instead, where both leaves are already in scope.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod coerce;
mod conversions;

pub use exactum_base::{Error, Result, RoundingMode, Sign};
pub use exactum_decimal::BigDecimal;
pub use exactum_integer::BigInteger;
pub use exactum_rational::BigRational;

pub use coerce::Coerce;
pub use conversions::{ToBigDecimal, ToBigRational};

use core::cmp::Ordering;
use core::fmt;

/// A dynamically-typed arbitrary-precision number: whichever of
/// [`BigInteger`], [`BigDecimal`] or [`BigRational`] a value or an
/// operation's result happens to be.
///
/// `BigInteger < BigDecimal < BigRational` forms the generality lattice used
/// by [`sum`]: every integer is exactly a decimal of scale `0`, and every
/// decimal is exactly a rational with a power-of-ten denominator, so
/// promoting upward never loses precision.
#[derive(Clone, Debug)]
pub enum BigNumber {
    Integer(BigInteger),
    Decimal(BigDecimal),
    Rational(BigRational),
}

impl BigNumber {
    fn rank(&self) -> u8 {
        match self {
            BigNumber::Integer(_) => 0,
            BigNumber::Decimal(_) => 1,
            BigNumber::Rational(_) => 2,
        }
    }

    /// Widens to the exact `BigRational` value it represents; used as the
    /// common ground for cross-domain comparison and summation.
    fn as_rational(&self) -> Result<BigRational> {
        match self {
            BigNumber::Integer(i) => Ok(BigRational::from_big_integer(i.clone())),
            BigNumber::Decimal(d) => d.to_big_rational(),
            BigNumber::Rational(r) => Ok(r.clone()),
        }
    }

    /// Value comparison across domains, via [`BigNumber::as_rational`].
    pub fn cmp_value(&self, other: &BigNumber) -> Result<Ordering> {
        self.as_rational()?.cmp_value(&other.as_rational()?)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigNumber::Integer(i) => write!(f, "{i}"),
            BigNumber::Decimal(d) => write!(f, "{d}"),
            BigNumber::Rational(r) => write!(f, "{r}"),
        }
    }
}

/// Coerces a host integer, a host float, a string, or an already-built
/// `BigInteger`/`BigDecimal`/`BigRational` into a [`BigNumber`].
///
/// A string is tried in order as an integer literal, then a rational
/// `p/q` literal, then a decimal literal — the first grammar that matches
/// wins, mirroring how [`Coerce::coerce`] is implemented for `&str`.
///
/// # Examples
///
/// ```
/// # use exactum::{of, BigNumber};
/// assert!(matches!(of("42").unwrap(), BigNumber::Integer(_)));
/// assert!(matches!(of("1/2").unwrap(), BigNumber::Rational(_)));
/// assert!(matches!(of("1.5").unwrap(), BigNumber::Decimal(_)));
/// assert_eq!(of(7i32).unwrap().to_string(), "7");
/// ```
pub fn of(value: impl Coerce) -> Result<BigNumber> {
    value.coerce()
}

/// The least of `values` by [`BigNumber::cmp_value`], keeping the original
/// operand's dynamic type (no promotion on the winner).
///
/// # Examples
///
/// ```
/// # use exactum::{of, min};
/// let values = [of("3").unwrap(), of("1/2").unwrap(), of("1.7").unwrap()];
/// assert_eq!(min(&values).unwrap().to_string(), "1/2");
/// ```
pub fn min(values: &[BigNumber]) -> Result<BigNumber> {
    extreme(values, Ordering::Less)
}

/// The greatest of `values` by [`BigNumber::cmp_value`], keeping the
/// original operand's dynamic type (no promotion on the winner).
pub fn max(values: &[BigNumber]) -> Result<BigNumber> {
    extreme(values, Ordering::Greater)
}

fn extreme(values: &[BigNumber], wanted: Ordering) -> Result<BigNumber> {
    let mut values = values.iter();
    let mut best = values.next().ok_or_else(|| Error::InvalidArgument("at least one value is required".into()))?;
    for candidate in values {
        if candidate.cmp_value(best)? == wanted {
            best = candidate;
        }
    }
    Ok(best.clone())
}

/// Sums `values`, promoting the accumulator to the most general type
/// present in the input (`BigInteger < BigDecimal < BigRational`).
///
/// Every narrower-to-wider promotion in that lattice is exact, so choosing
/// the accumulator's type up front from the whole input set — rather than
/// growing it incrementally as wider addends are encountered — never
/// rejects a sum the incremental reading would have accepted; see
/// `DESIGN.md` for the full reasoning.
///
/// # Examples
///
/// ```
/// # use exactum::{of, sum, BigNumber};
/// let values = [of("1").unwrap(), of("0.5").unwrap()];
/// assert_eq!(sum(&values).unwrap().to_string(), "1.5");
/// assert!(matches!(sum(&values).unwrap(), BigNumber::Decimal(_)));
/// ```
pub fn sum(values: &[BigNumber]) -> Result<BigNumber> {
    if values.is_empty() {
        return Err(Error::InvalidArgument("at least one value is required".into()));
    }
    let rank = values.iter().map(BigNumber::rank).max().expect("checked non-empty above");
    match rank {
        0 => {
            let mut acc = BigInteger::ZERO;
            for v in values {
                match v {
                    BigNumber::Integer(i) => acc = acc.add_ref(i),
                    _ => unreachable!("rank 0 implies every value is Integer"),
                }
            }
            Ok(BigNumber::Integer(acc))
        }
        1 => {
            let mut acc = BigDecimal::ZERO;
            for v in values {
                let d = match v {
                    BigNumber::Integer(i) => BigDecimal::from_big_integer(i.clone()),
                    BigNumber::Decimal(d) => d.clone(),
                    BigNumber::Rational(_) => unreachable!("rank 1 implies no Rational value is present"),
                };
                acc = acc.plus(&d);
            }
            Ok(BigNumber::Decimal(acc))
        }
        _ => {
            let mut acc = BigRational::from_big_integer(BigInteger::ZERO);
            for v in values {
                acc = acc.plus(&v.as_rational()?);
            }
            Ok(BigNumber::Rational(acc))
        }
    }
}
