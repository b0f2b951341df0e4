//! `BigDecimal`: an immutable `(unscaled: BigInteger, scale: non-negative
//! integer)` pair representing `unscaled * 10^-scale`.
//!
//! Grounded in `exactum-integer::BigInteger`'s own shape (`bigint.rs`): a
//! thin struct around the integer kernel, every fallible path returning
//! `exactum_base::Result` rather than panicking. Scale is stored as `u64`
//! rather than the signed, possibly-negative integer the source language
//! uses internally, because this type's own invariant is `scale >= 0`
//! unconditionally; the type system enforces it instead of a runtime check.
use alloc::format;
use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use exactum_base::{Error, Result, RoundingMode};
use exactum_integer::BigInteger;

/// An immutable, arbitrary-precision, base-10 fixed-point number.
#[derive(Clone, Eq)]
pub struct BigDecimal {
    unscaled: BigInteger,
    scale: u64,
}

fn pow_of_ten(n: u64) -> Result<BigInteger> {
    let exponent = u32::try_from(n).map_err(|_| Error::InvalidArgument("scale difference too large".into()))?;
    BigInteger::ten().pow(exponent)
}

impl BigDecimal {
    pub const ZERO: BigDecimal = BigDecimal { unscaled: BigInteger::ZERO, scale: 0 };

    pub fn from_big_integer(value: BigInteger) -> BigDecimal {
        BigDecimal { unscaled: value, scale: 0 }
    }

    pub fn unscaled_value(&self) -> &BigInteger {
        &self.unscaled
    }

    pub fn scale(&self) -> u64 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    // ---- parsing --------------------------------------------------------

    /// Parses `[sign][digits][.digits][e[sign]digits]`; `"1."` is accepted
    /// as scale `0` (the stricter of the two plausible readings of a bare
    /// trailing point — see `DESIGN.md` for the reasoning).
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_decimal::BigDecimal;
    /// let a = BigDecimal::parse("1.2e-3").unwrap();
    /// assert_eq!(a.scale(), 4);
    /// assert_eq!(a.to_string(), "0.0012");
    /// assert!(BigDecimal::parse("1.2.3").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<BigDecimal> {
        let bytes = s.as_bytes();
        let mut i = 0usize;
        let negative = match bytes.first() {
            Some(b'+') => {
                i += 1;
                false
            }
            Some(b'-') => {
                i += 1;
                true
            }
            _ => false,
        };

        let int_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let int_part = &s[int_start..i];

        let mut frac_part = "";
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            let frac_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            frac_part = &s[frac_start..i];
        }

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(Error::NumberFormat(format!("not a decimal number: {s:?}")));
        }

        let mut exponent: i64 = 0;
        if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
            i += 1;
            let exp_negative = match bytes.get(i) {
                Some(b'+') => {
                    i += 1;
                    false
                }
                Some(b'-') => {
                    i += 1;
                    true
                }
                _ => false,
            };
            let exp_digits_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i == exp_digits_start {
                return Err(Error::NumberFormat(format!("malformed exponent: {s:?}")));
            }
            let magnitude: i64 = s[exp_digits_start..i]
                .parse()
                .map_err(|_| Error::NumberFormat(format!("exponent out of range: {s:?}")))?;
            exponent = if exp_negative { -magnitude } else { magnitude };
        }

        if i != bytes.len() {
            return Err(Error::NumberFormat(format!("trailing characters in: {s:?}")));
        }

        let digits = format!("{int_part}{frac_part}");
        let mut unscaled = BigInteger::parse(&digits)?;
        let mut scale = frac_part.len() as i64 - exponent;
        if scale < 0 {
            unscaled = unscaled.mul_ref(&pow_of_ten((-scale) as u64)?);
            scale = 0;
        }
        if negative {
            unscaled = unscaled.neg_ref();
        }
        Ok(BigDecimal { unscaled, scale: scale as u64 })
    }

    // ---- comparison -------------------------------------------------------

    pub fn cmp_value(&self, other: &BigDecimal) -> Ordering {
        let max_scale = self.scale.max(other.scale);
        let a = self.scaled_unscaled(max_scale);
        let b = other.scaled_unscaled(max_scale);
        a.cmp_value(&b)
    }

    fn scaled_unscaled(&self, target_scale: u64) -> BigInteger {
        if target_scale == self.scale {
            self.unscaled.clone()
        } else {
            self.unscaled.mul_ref(&pow_of_ten(target_scale - self.scale).expect("bounded by caller"))
        }
    }

    // ---- arithmetic ---------------------------------------------------------

    pub fn plus(&self, other: &BigDecimal) -> BigDecimal {
        let scale = self.scale.max(other.scale);
        let unscaled = self.scaled_unscaled(scale).add_ref(&other.scaled_unscaled(scale));
        BigDecimal { unscaled, scale }
    }

    pub fn minus(&self, other: &BigDecimal) -> BigDecimal {
        let scale = self.scale.max(other.scale);
        let unscaled = self.scaled_unscaled(scale).sub_ref(&other.scaled_unscaled(scale));
        BigDecimal { unscaled, scale }
    }

    pub fn multiplied_by(&self, other: &BigDecimal) -> BigDecimal {
        BigDecimal { unscaled: self.unscaled.mul_ref(&other.unscaled), scale: self.scale + other.scale }
    }

    pub fn negated(&self) -> BigDecimal {
        BigDecimal { unscaled: self.unscaled.neg_ref(), scale: self.scale }
    }

    /// Divides at the given `scale` under `mode`: aligns both operands to
    /// their common scale, then reuses
    /// [`BigInteger::divided_by`]'s rounding table on the resulting
    /// integer division, so the same `should_increment` decision backs
    /// both BI and BD division.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_decimal::BigDecimal;
    /// # use exactum_base::RoundingMode;
    /// let a = BigDecimal::parse("1").unwrap();
    /// let b = BigDecimal::parse("3").unwrap();
    /// assert_eq!(a.divided_by(&b, Some(2), RoundingMode::HalfUp).unwrap().to_string(), "0.33");
    /// assert!(a.divided_by(&b, Some(2), RoundingMode::Unnecessary).is_err());
    /// ```
    pub fn divided_by(&self, divisor: &BigDecimal, scale: Option<u64>, mode: RoundingMode) -> Result<BigDecimal> {
        if divisor.unscaled.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let scale = scale.unwrap_or(self.scale);
        let max_scale = self.scale.max(divisor.scale);
        let p = self.scaled_unscaled(max_scale);
        let q = divisor.scaled_unscaled(max_scale);
        let numerator = p.mul_ref(&pow_of_ten(scale)?);
        let unscaled = numerator.divided_by(&q, mode)?;
        Ok(BigDecimal { unscaled, scale })
    }

    /// Equivalent to [`BigDecimal::divided_by`] with the scale chosen
    /// automatically: succeeds iff the quotient terminates (its reduced
    /// denominator's only prime factors are 2 and 5).
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_decimal::BigDecimal;
    /// let one = BigDecimal::parse("1").unwrap();
    /// assert_eq!(one.exactly_divided_by(&BigDecimal::parse("4").unwrap()).unwrap().to_string(), "0.25");
    /// assert!(one.exactly_divided_by(&BigDecimal::parse("3").unwrap()).is_err());
    /// ```
    pub fn exactly_divided_by(&self, divisor: &BigDecimal) -> Result<BigDecimal> {
        if divisor.unscaled.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mut numerator = self.unscaled.mul_ref(&pow_of_ten(divisor.scale)?);
        let mut denominator = divisor.unscaled.mul_ref(&pow_of_ten(self.scale)?);
        if denominator.is_negative() {
            numerator = numerator.neg_ref();
            denominator = denominator.neg_ref();
        }
        let g = numerator.gcd(&denominator);
        if !g.is_zero() {
            numerator = numerator.quotient(&g)?;
            denominator = denominator.quotient(&g)?;
        }

        let two = BigInteger::from(2u32);
        let five = BigInteger::from(5u32);
        let mut twos = 0u64;
        let mut fives = 0u64;
        while !denominator.is_zero() && denominator.remainder(&two)?.is_zero() {
            denominator = denominator.quotient(&two)?;
            twos += 1;
        }
        while !denominator.is_zero() && denominator.remainder(&five)?.is_zero() {
            denominator = denominator.quotient(&five)?;
            fives += 1;
        }
        if denominator != BigInteger::one() {
            return Err(Error::RoundingNecessary);
        }
        let scale = twos.max(fives);
        let unscaled = numerator
            .mul_ref(&two.pow(u32::try_from(scale - twos).map_err(|_| Error::InvalidArgument("scale overflow".into()))?)?)
            .mul_ref(&five.pow(u32::try_from(scale - fives).map_err(|_| Error::InvalidArgument("scale overflow".into()))?)?);
        Ok(BigDecimal { unscaled, scale })
    }

    /// Interprets both operands as rationals and truncates toward zero;
    /// the quotient is a scale-`0` BD, the remainder keeps
    /// `max(a.scale, b.scale)`.
    pub fn quotient_and_remainder(&self, divisor: &BigDecimal) -> Result<(BigDecimal, BigDecimal)> {
        if divisor.unscaled.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let max_scale = self.scale.max(divisor.scale);
        let p = self.scaled_unscaled(max_scale);
        let q = divisor.scaled_unscaled(max_scale);
        let quotient_int = p.quotient(&q)?;
        let remainder_unscaled = p.sub_ref(&quotient_int.mul_ref(&q));
        Ok((
            BigDecimal::from_big_integer(quotient_int),
            BigDecimal { unscaled: remainder_unscaled, scale: max_scale },
        ))
    }

    pub fn quotient(&self, divisor: &BigDecimal) -> Result<BigDecimal> {
        self.quotient_and_remainder(divisor).map(|(q, _)| q)
    }

    pub fn remainder(&self, divisor: &BigDecimal) -> Result<BigDecimal> {
        self.quotient_and_remainder(divisor).map(|(_, r)| r)
    }

    /// `floor(sqrt(unscaled * 10^(2*scale - self.scale)))` at the
    /// requested `scale`, bumping `self`'s effective scale up by one
    /// decimal first when the exponent would otherwise be odd.
    ///
    /// A requested `scale` smaller than roughly `self.scale / 2` would
    /// make that exponent negative; rather than rejecting such a (still
    /// perfectly valid) request, the root is computed at a large enough
    /// internal scale first and then truncated down to `scale`, the same
    /// widen-then-narrow shape [`BigDecimal::divided_by`] uses for its own
    /// scale alignment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_decimal::BigDecimal;
    /// let x = BigDecimal::parse("2.00").unwrap();
    /// assert_eq!(x.sqrt(0).unwrap().to_string(), "1");
    /// assert_eq!(x.sqrt(4).unwrap().to_string(), "1.4142");
    /// ```
    pub fn sqrt(&self, scale: u64) -> Result<BigDecimal> {
        if self.unscaled.is_negative() {
            return Err(Error::NegativeNumber);
        }
        let internal_scale = scale.max((self.scale + 1) / 2);
        let mut unscaled = self.unscaled.clone();
        let mut source_scale = self.scale;
        if (2 * internal_scale as i128 - source_scale as i128) % 2 != 0 {
            unscaled = unscaled.mul_ref(&BigInteger::ten());
            source_scale += 1;
        }
        let exponent = 2 * internal_scale as i128 - source_scale as i128;
        debug_assert!(exponent >= 0, "internal_scale is chosen to keep this non-negative");
        let shifted = unscaled.mul_ref(&pow_of_ten(exponent.max(0) as u64)?);
        let at_internal_scale = BigDecimal { unscaled: shifted.sqrt()?, scale: internal_scale };
        at_internal_scale.to_scale(scale, RoundingMode::Down)
    }

    pub fn power(&self, exponent: u32) -> Result<BigDecimal> {
        let unscaled = self.unscaled.pow(exponent)?;
        Ok(BigDecimal { unscaled, scale: self.scale * exponent as u64 })
    }

    /// Rescales to `new_scale`; scaling up is always exact (multiplies by
    /// a power of ten), scaling down reuses [`BigInteger::divided_by`]'s
    /// rounding table.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_decimal::BigDecimal;
    /// # use exactum_base::RoundingMode;
    /// let a = BigDecimal::parse("1.2345").unwrap();
    /// assert_eq!(a.to_scale(2, RoundingMode::HalfUp).unwrap().to_string(), "1.23");
    /// assert_eq!(a.to_scale(6, RoundingMode::Down).unwrap().to_string(), "1.234500");
    /// ```
    pub fn to_scale(&self, new_scale: u64, mode: RoundingMode) -> Result<BigDecimal> {
        if new_scale >= self.scale {
            let factor = pow_of_ten(new_scale - self.scale)?;
            Ok(BigDecimal { unscaled: self.unscaled.mul_ref(&factor), scale: new_scale })
        } else {
            let factor = pow_of_ten(self.scale - new_scale)?;
            let unscaled = self.unscaled.divided_by(&factor, mode)?;
            Ok(BigDecimal { unscaled, scale: new_scale })
        }
    }

    pub fn with_point_moved_left(&self, n: i64) -> Result<BigDecimal> {
        if n == 0 {
            return Ok(self.clone());
        }
        if n < 0 {
            return self.with_point_moved_right(-n);
        }
        Ok(BigDecimal { unscaled: self.unscaled.clone(), scale: self.scale + n as u64 })
    }

    pub fn with_point_moved_right(&self, n: i64) -> Result<BigDecimal> {
        if n == 0 {
            return Ok(self.clone());
        }
        if n < 0 {
            return self.with_point_moved_left(-n);
        }
        let n = n as u64;
        if n <= self.scale {
            Ok(BigDecimal { unscaled: self.unscaled.clone(), scale: self.scale - n })
        } else {
            let factor = pow_of_ten(n - self.scale)?;
            Ok(BigDecimal { unscaled: self.unscaled.mul_ref(&factor), scale: 0 })
        }
    }

    pub fn strip_trailing_zeros(&self) -> BigDecimal {
        if self.unscaled.is_zero() {
            return BigDecimal::ZERO;
        }
        let ten = BigInteger::ten();
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (q, r) = unscaled.divide_qr(&ten).expect("ten is never zero");
            if !r.is_zero() {
                break;
            }
            unscaled = q;
            scale -= 1;
        }
        BigDecimal { unscaled, scale }
    }

    // ---- conversions --------------------------------------------------

    pub fn to_big_integer(&self) -> Result<BigInteger> {
        if self.scale == 0 {
            return Ok(self.unscaled.clone());
        }
        let factor = pow_of_ten(self.scale)?;
        let (q, r) = self.unscaled.divide_qr(&factor)?;
        if !r.is_zero() {
            return Err(Error::RoundingNecessary);
        }
        Ok(q)
    }

    pub fn to_int(&self) -> Result<i64> {
        self.to_big_integer()?.to_i64()
    }

    pub fn to_float(&self) -> f64 {
        self.to_string().parse().unwrap_or(if self.unscaled.is_negative() { f64::NEG_INFINITY } else { f64::INFINITY })
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

/// Hashes the stripped-trailing-zeros canonical form, so that values equal
/// under [`BigDecimal::cmp_value`] (e.g. `1.50` and `1.5`) always hash equal.
impl Hash for BigDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.strip_trailing_zeros();
        canonical.unscaled.hash(state);
        canonical.scale.hash(state);
    }
}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_value(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.unscaled);
        }
        let negative = self.unscaled.is_negative();
        let digits = self.unscaled.abs().to_string();
        let scale = self.scale as usize;
        let (int_part, frac_part): (String, String) = if digits.len() > scale {
            let split = digits.len() - scale;
            (digits[..split].to_string(), digits[split..].to_string())
        } else {
            ("0".to_string(), format!("{}{}", "0".repeat(scale - digits.len()), digits))
        };
        if negative {
            write!(f, "-{int_part}.{frac_part}")
        } else {
            write!(f, "{int_part}.{frac_part}")
        }
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigDecimal({self})")
    }
}

impl FromStr for BigDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigDecimal::parse(s)
    }
}
