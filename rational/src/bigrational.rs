//! `BigRational`: an immutable `numerator / denominator` pair of
//! [`BigInteger`]s, kept unsimplified unless [`BigRational::simplified`] is
//! called explicitly — construction and arithmetic never auto-simplify.
//!
//! The string grammar (`^[+-]?[0-9]+/[0-9]+$`) permits a zero denominator
//! as a syntactically valid parse; this type mirrors that by not
//! validating the denominator in [`BigRational::parse`], deferring the
//! `DivisionByZero` error to whichever operation first needs to divide by
//! it (`simplified`, comparisons, conversions). [`BigRational::new`] is
//! the validating constructor for code building a `BigRational` from
//! already-computed parts.

use alloc::format;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use exactum_base::{Error, Result};
use exactum_integer::BigInteger;

/// An immutable, arbitrary-precision exact fraction.
///
/// Deliberately implements `PartialEq`/`PartialOrd` but not `Eq`/`Ord`:
/// a rational built from a syntactically-legal but semantically-invalid
/// `n/0` literal cannot be compared at all, so equality and ordering are
/// partial here, not total.
#[derive(Clone, Debug)]
pub struct BigRational {
    numerator: BigInteger,
    denominator: BigInteger,
}

fn normalize_sign(mut numerator: BigInteger, mut denominator: BigInteger) -> BigRational {
    if denominator.is_negative() {
        numerator = numerator.neg_ref();
        denominator = denominator.neg_ref();
    }
    BigRational { numerator, denominator }
}

impl BigRational {
    /// Builds a `numerator/denominator` pair, normalizing the
    /// denominator's sign into the numerator. Rejects a zero denominator
    /// outright, unlike [`BigRational::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_rational::BigRational;
    /// # use exactum_integer::BigInteger;
    /// let r = BigRational::new(BigInteger::from(1i32), BigInteger::from(-2i32)).unwrap();
    /// assert_eq!(r.to_string(), "-1/2");
    /// assert!(BigRational::new(BigInteger::from(1i32), BigInteger::ZERO).is_err());
    /// ```
    pub fn new(numerator: BigInteger, denominator: BigInteger) -> Result<BigRational> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(normalize_sign(numerator, denominator))
    }

    pub fn from_big_integer(value: BigInteger) -> BigRational {
        BigRational { numerator: value, denominator: BigInteger::one() }
    }

    pub fn numerator(&self) -> &BigInteger {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInteger {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Parses `^[+-]?[0-9]+/[0-9]+$`. A zero denominator parses
    /// successfully; it surfaces as `DivisionByZero` only when the value
    /// is later used.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_rational::BigRational;
    /// let r = BigRational::parse("-3/4").unwrap();
    /// assert_eq!(r.to_string(), "-3/4");
    /// assert!(BigRational::parse("3/-4").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<BigRational> {
        let (num_str, den_str) =
            s.split_once('/').ok_or_else(|| Error::NumberFormat(format!("not a rational literal: {s:?}")))?;
        let numerator = BigInteger::parse(num_str)?;
        if den_str.is_empty() || !den_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::NumberFormat(format!("denominator must be unsigned digits: {s:?}")));
        }
        let denominator = BigInteger::parse(den_str)?;
        Ok(BigRational { numerator, denominator })
    }

    // ---- arithmetic (none of these simplify the result) ------------------

    pub fn plus(&self, other: &BigRational) -> BigRational {
        let numerator =
            self.numerator.mul_ref(&other.denominator).add_ref(&other.numerator.mul_ref(&self.denominator));
        let denominator = self.denominator.mul_ref(&other.denominator);
        BigRational { numerator, denominator }
    }

    pub fn minus(&self, other: &BigRational) -> BigRational {
        let numerator =
            self.numerator.mul_ref(&other.denominator).sub_ref(&other.numerator.mul_ref(&self.denominator));
        let denominator = self.denominator.mul_ref(&other.denominator);
        BigRational { numerator, denominator }
    }

    pub fn multiplied_by(&self, other: &BigRational) -> BigRational {
        BigRational {
            numerator: self.numerator.mul_ref(&other.numerator),
            denominator: self.denominator.mul_ref(&other.denominator),
        }
    }

    pub fn divided_by(&self, other: &BigRational) -> Result<BigRational> {
        if other.numerator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let numerator = self.numerator.mul_ref(&other.denominator);
        let denominator = self.denominator.mul_ref(&other.numerator);
        Ok(normalize_sign(numerator, denominator))
    }

    pub fn negated(&self) -> BigRational {
        BigRational { numerator: self.numerator.neg_ref(), denominator: self.denominator.clone() }
    }

    /// `(a/b)^-1 = b/a`; `a = 0` fails with `DivisionByZero`. The original
    /// denominator's sign is normalized back into the new numerator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_rational::BigRational;
    /// let r = BigRational::parse("-2/3").unwrap().reciprocal().unwrap();
    /// assert_eq!(r.to_string(), "-3/2");
    /// assert!(BigRational::parse("0/5").unwrap().reciprocal().is_err());
    /// ```
    pub fn reciprocal(&self) -> Result<BigRational> {
        if self.numerator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(normalize_sign(self.denominator.clone(), self.numerator.clone()))
    }

    /// Divides numerator and denominator by `gcd(|numerator|, denominator)`
    /// and forces the denominator positive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_rational::BigRational;
    /// let r = BigRational::parse("4/2").unwrap();
    /// assert_eq!(r.to_string(), "4/2"); // unsimplified until asked
    /// assert_eq!(r.simplified().unwrap().to_string(), "2");
    /// ```
    pub fn simplified(&self) -> Result<BigRational> {
        if self.denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.numerator.is_zero() {
            return Ok(BigRational { numerator: BigInteger::ZERO, denominator: BigInteger::one() });
        }
        let g = self.numerator.abs().gcd(&self.denominator);
        let numerator = self.numerator.quotient(&g)?;
        let denominator = self.denominator.quotient(&g)?;
        Ok(normalize_sign(numerator, denominator))
    }

    /// True iff, in lowest terms, the denominator's only prime factors are
    /// 2 and 5 (the value has a terminating decimal expansion).
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_rational::BigRational;
    /// assert!(BigRational::parse("3/20").unwrap().is_finite_decimal().unwrap());
    /// assert!(!BigRational::parse("1/3").unwrap().is_finite_decimal().unwrap());
    /// ```
    pub fn is_finite_decimal(&self) -> Result<bool> {
        let simplified = self.simplified()?;
        let mut d = simplified.denominator;
        let two = BigInteger::from(2u32);
        let five = BigInteger::from(5u32);
        while !d.is_zero() && d.remainder(&two)?.is_zero() {
            d = d.quotient(&two)?;
        }
        while !d.is_zero() && d.remainder(&five)?.is_zero() {
            d = d.quotient(&five)?;
        }
        Ok(d == BigInteger::one())
    }

    /// `a/b ⋛ c/d` via `a*d ⋛ c*b`; both of `self`/`other` must have a
    /// nonzero denominator.
    pub fn cmp_value(&self, other: &BigRational) -> Result<Ordering> {
        if self.denominator.is_zero() || other.denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.numerator.mul_ref(&other.denominator).cmp_value(&other.numerator.mul_ref(&self.denominator)))
    }

    // ---- conversions --------------------------------------------------

    /// Requires denominator `1` after simplification, else
    /// `RoundingNecessary`.
    pub fn to_big_integer(&self) -> Result<BigInteger> {
        let simplified = self.simplified()?;
        if simplified.denominator != BigInteger::one() {
            return Err(Error::RoundingNecessary);
        }
        Ok(simplified.numerator)
    }
}

impl PartialEq for BigRational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ok(Ordering::Equal)
    }
}

impl PartialOrd for BigRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cmp_value(other).ok()
    }
}

/// Hashes the simplified form so that values equal under
/// [`BigRational::cmp_value`] (e.g. `4/2` and `2/1`) hash equal; falls back
/// to raw fields for the unsimplifiable zero-denominator edge case.
impl Hash for BigRational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.simplified() {
            Ok(s) => {
                s.numerator.hash(state);
                s.denominator.hash(state);
            }
            Err(_) => {
                self.numerator.hash(state);
                self.denominator.hash(state);
            }
        }
    }
}

impl fmt::Display for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == BigInteger::one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for BigRational {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigRational::parse(s)
    }
}
