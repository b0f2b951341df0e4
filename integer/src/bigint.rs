//! `BigInteger`: the public, immutable arbitrary-precision integer type.
//!
//! This is a thin wrapper around the [`crate::magnitude`] kernel, in the
//! same spirit as `dashu_int::IBig` wrapping `Repr` — except `exactum`
//! keeps sign and magnitude as two plain fields instead of dashu's
//! niche-optimized `Repr` union, and every fallible operation returns
//! `exactum_base::Result` instead of panicking.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use core::str::FromStr;

use exactum_base::rounding::should_increment;
use exactum_base::{Error, Result, RoundingMode, Sign};

use crate::magnitude::{self, Magnitude};

/// An immutable arbitrary-precision signed integer.
///
/// The canonical representation of zero is `Sign::Positive` with an empty
/// magnitude; every constructor and operation in this module restores that
/// invariant before returning.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct BigInteger {
    sign: Sign,
    magnitude: Magnitude,
}

impl BigInteger {
    pub const ZERO: BigInteger = BigInteger { sign: Sign::Positive, magnitude: Vec::new() };

    /// Builds a `BigInteger` from a sign and magnitude, canonicalizing zero.
    pub(crate) fn from_parts(sign: Sign, mut magnitude: Magnitude) -> BigInteger {
        magnitude::normalize(&mut magnitude);
        let sign = if magnitude.is_empty() { Sign::Positive } else { sign };
        BigInteger { sign, magnitude }
    }

    pub fn one() -> BigInteger {
        BigInteger::from_parts(Sign::Positive, alloc::vec![1])
    }

    pub fn ten() -> BigInteger {
        BigInteger::from_parts(Sign::Positive, alloc::vec![10])
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_negative(&self) -> bool {
        self.sign.is_negative() && !self.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.sign.is_positive() && !self.is_zero()
    }

    pub(crate) fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    pub(crate) fn into_parts(self) -> (Sign, Magnitude) {
        (self.sign, self.magnitude)
    }

    pub fn abs(&self) -> BigInteger {
        BigInteger { sign: Sign::Positive, magnitude: self.magnitude.clone() }
    }

    // ---- parsing & formatting --------------------------------------

    /// Parses `^[+-]?[0-9]+$`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_integer::BigInteger;
    /// assert_eq!(BigInteger::parse("-042").unwrap(), BigInteger::parse("-42").unwrap());
    /// assert!(BigInteger::parse("4.2").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<BigInteger> {
        let (sign, digits) = split_sign(s);
        let mag = magnitude::from_decimal_str(digits)
            .ok_or_else(|| Error::NumberFormat(alloc::format!("not an integer: {s:?}")))?;
        Ok(BigInteger::from_parts(sign, mag))
    }

    // ---- comparisons --------------------------------------------------

    pub fn cmp_value(&self, other: &BigInteger) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => magnitude::cmp(&self.magnitude, &other.magnitude),
            (Sign::Negative, Sign::Negative) => magnitude::cmp(&other.magnitude, &self.magnitude),
        }
    }

    // ---- arithmetic -----------------------------------------------

    pub fn add_ref(&self, other: &BigInteger) -> BigInteger {
        if self.sign == other.sign {
            BigInteger::from_parts(self.sign, magnitude::add(&self.magnitude, &other.magnitude))
        } else {
            match magnitude::cmp(&self.magnitude, &other.magnitude) {
                Ordering::Equal => BigInteger::ZERO,
                Ordering::Greater => {
                    BigInteger::from_parts(self.sign, magnitude::sub(&self.magnitude, &other.magnitude))
                }
                Ordering::Less => {
                    BigInteger::from_parts(other.sign, magnitude::sub(&other.magnitude, &self.magnitude))
                }
            }
        }
    }

    pub fn sub_ref(&self, other: &BigInteger) -> BigInteger {
        self.add_ref(&other.neg_ref())
    }

    pub fn neg_ref(&self) -> BigInteger {
        BigInteger::from_parts(-self.sign, self.magnitude.clone())
    }

    pub fn mul_ref(&self, other: &BigInteger) -> BigInteger {
        BigInteger::from_parts(self.sign.combine(other.sign), magnitude::mul(&self.magnitude, &other.magnitude))
    }

    /// Truncated division: `(quotient, remainder)` with
    /// `|dividend| = |quotient|*|divisor| + |remainder|`, `0 <= |remainder| < |divisor|`,
    /// `sign(quotient) = sign(dividend)*sign(divisor)`, `sign(remainder) = sign(dividend)`.
    pub fn divide_qr(&self, divisor: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q_mag, r_mag) = magnitude::divmod(&self.magnitude, &divisor.magnitude);
        let q_sign = self.sign.combine(divisor.sign);
        let r_sign = self.sign;
        Ok((BigInteger::from_parts(q_sign, q_mag), BigInteger::from_parts(r_sign, r_mag)))
    }

    pub fn quotient(&self, divisor: &BigInteger) -> Result<BigInteger> {
        self.divide_qr(divisor).map(|(q, _)| q)
    }

    pub fn remainder(&self, divisor: &BigInteger) -> Result<BigInteger> {
        self.divide_qr(divisor).map(|(_, r)| r)
    }

    /// The Euclidean-like positive remainder: requires `n > 0`, result in `[0, n)`.
    pub fn modulo(&self, n: &BigInteger) -> Result<BigInteger> {
        if n.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if n.is_negative() {
            return Err(Error::NegativeNumber);
        }
        let (_, r) = self.divide_qr(n)?;
        if r.is_negative() {
            Ok(r.add_ref(n))
        } else {
            Ok(r)
        }
    }

    /// Exact integer division with an explicit rounding mode.
    /// Defaults effectively to `UNNECESSARY` when `mode` is `RoundingMode::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_integer::BigInteger;
    /// # use exactum_base::RoundingMode;
    /// let seven = BigInteger::parse("7").unwrap();
    /// let two = BigInteger::parse("2").unwrap();
    /// assert_eq!(seven.divided_by(&two, RoundingMode::Down).unwrap(), BigInteger::parse("3").unwrap());
    /// assert_eq!(seven.divided_by(&two, RoundingMode::HalfEven).unwrap(), BigInteger::parse("4").unwrap());
    /// assert!(seven.divided_by(&two, RoundingMode::Unnecessary).is_err());
    /// ```
    pub fn divided_by(&self, divisor: &BigInteger, mode: RoundingMode) -> Result<BigInteger> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q, r) = self.divide_qr(divisor)?;
        if r.is_zero() {
            return Ok(q);
        }
        let double_r = magnitude::shift_left_bits(&r.magnitude, 1);
        let cmp = magnitude::cmp(&double_r, &divisor.magnitude);
        let quotient_is_odd = magnitude::get_bit(&q.magnitude, 0);
        let overall_sign = self.sign.combine(divisor.sign);
        let bump = should_increment(mode, overall_sign, false, cmp, quotient_is_odd)?;
        if bump {
            Ok(q.add_ref(&BigInteger::from_parts(overall_sign, alloc::vec![1])))
        } else {
            Ok(q)
        }
    }

    // ---- powers, gcd, sqrt, modular arithmetic ----------------------

    pub fn pow(&self, exponent: u32) -> Result<BigInteger> {
        if exponent > 1_000_000 {
            return Err(Error::InvalidArgument("exponent must be in [0, 1_000_000]".into()));
        }
        if exponent == 0 {
            return Ok(BigInteger::one());
        }
        let mut result = BigInteger::one();
        let mut base = self.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul_ref(&base);
            }
            base = base.mul_ref(&base);
            e >>= 1;
        }
        Ok(result)
    }

    /// `self^exponent mod modulus`, via binary exponentiation reducing mod
    /// `modulus` after every multiply.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_integer::BigInteger;
    /// let base = BigInteger::parse("4").unwrap();
    /// let exponent = BigInteger::parse("13").unwrap();
    /// let modulus = BigInteger::parse("497").unwrap();
    /// assert_eq!(base.pow_mod(&exponent, &modulus).unwrap(), BigInteger::parse("445").unwrap());
    /// ```
    pub fn pow_mod(&self, exponent: &BigInteger, modulus: &BigInteger) -> Result<BigInteger> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.is_negative() || exponent.is_negative() {
            return Err(Error::NegativeNumber);
        }
        if modulus.is_negative() {
            return Err(Error::NegativeNumber);
        }
        let mut result = BigInteger::one().modulo(modulus)?;
        let mut base = self.modulo(modulus)?;
        let bits = magnitude::bit_length(&exponent.magnitude);
        for i in 0..bits {
            if magnitude::get_bit(&exponent.magnitude, i) {
                result = result.mul_ref(&base).modulo(modulus)?;
            }
            base = base.mul_ref(&base).modulo(modulus)?;
        }
        Ok(result)
    }

    /// `self^-1 mod modulus` via the extended Euclidean algorithm.
    pub fn mod_inverse(&self, modulus: &BigInteger) -> Result<BigInteger> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if modulus.is_negative() {
            return Err(Error::NegativeNumber);
        }
        let a = self.modulo(modulus)?;
        let (mut old_r, mut r) = (a, modulus.clone());
        let (mut old_s, mut s) = (BigInteger::one(), BigInteger::ZERO);
        while !r.is_zero() {
            let (q, new_r) = old_r.divide_qr(&r)?;
            old_r = core::mem::replace(&mut r, new_r);
            let new_s = old_s.sub_ref(&q.mul_ref(&s));
            old_s = core::mem::replace(&mut s, new_s);
        }
        if old_r != BigInteger::one() {
            return Err(Error::MathException("modular inverse does not exist".into()));
        }
        old_s.modulo(modulus)
    }

    /// `gcd(|self|, |other|)`; `gcd(0, 0) = 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_integer::BigInteger;
    /// let a = BigInteger::parse("48").unwrap();
    /// let b = BigInteger::parse("-18").unwrap();
    /// assert_eq!(a.gcd(&b), BigInteger::parse("6").unwrap());
    /// ```
    pub fn gcd(&self, other: &BigInteger) -> BigInteger {
        if self.is_zero() && other.is_zero() {
            return BigInteger::ZERO;
        }
        BigInteger::from_parts(Sign::Positive, magnitude::gcd(&self.magnitude, &other.magnitude))
    }

    pub fn gcd_multiple(values: &[BigInteger]) -> Result<BigInteger> {
        if values.is_empty() {
            return Err(Error::InvalidArgument("gcdMultiple requires at least one value".into()));
        }
        let mut acc = values[0].abs();
        for v in &values[1..] {
            acc = acc.gcd(v);
        }
        Ok(acc)
    }

    /// Floor of the square root. Rejects a negative `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_integer::BigInteger;
    /// assert_eq!(BigInteger::parse("99").unwrap().sqrt().unwrap(), BigInteger::parse("9").unwrap());
    /// assert!(BigInteger::parse("-1").unwrap().sqrt().is_err());
    /// ```
    pub fn sqrt(&self) -> Result<BigInteger> {
        if self.is_negative() {
            return Err(Error::NegativeNumber);
        }
        Ok(BigInteger::from_parts(Sign::Positive, magnitude::sqrt(&self.magnitude)))
    }

    // ---- bitwise ops (two's-complement view) ------------------------

    fn tc_bit(&self, mag_minus_one: &Magnitude, i: usize) -> bool {
        if self.is_negative() {
            !magnitude::get_bit(mag_minus_one, i)
        } else {
            magnitude::get_bit(&self.magnitude, i)
        }
    }

    fn mag_minus_one(&self) -> Magnitude {
        if self.is_negative() {
            magnitude::sub(&self.magnitude, &[1])
        } else {
            Magnitude::new()
        }
    }

    fn bitwise(&self, other: &BigInteger, op: impl Fn(bool, bool) -> bool) -> BigInteger {
        let a_m1 = self.mag_minus_one();
        let b_m1 = other.mag_minus_one();
        let bits_needed = magnitude::bit_length(&self.magnitude).max(magnitude::bit_length(&other.magnitude)) + 1;
        let mut bits = Vec::with_capacity(bits_needed);
        for i in 0..bits_needed {
            bits.push(op(self.tc_bit(&a_m1, i), other.tc_bit(&b_m1, i)));
        }
        let tail = op(self.is_negative(), other.is_negative());
        if !tail {
            BigInteger::from_parts(Sign::Positive, bits_to_magnitude(&bits))
        } else {
            let inverted: Vec<bool> = bits.iter().map(|&b| !b).collect();
            let mag = magnitude::add_small(&bits_to_magnitude(&inverted), 1);
            BigInteger::from_parts(Sign::Negative, mag)
        }
    }

    pub fn and(&self, other: &BigInteger) -> BigInteger {
        self.bitwise(other, |a, b| a && b)
    }

    pub fn or(&self, other: &BigInteger) -> BigInteger {
        self.bitwise(other, |a, b| a || b)
    }

    pub fn xor(&self, other: &BigInteger) -> BigInteger {
        self.bitwise(other, |a, b| a != b)
    }

    /// `not(x) = -x - 1`.
    pub fn not(&self) -> BigInteger {
        self.neg_ref().sub_ref(&BigInteger::one())
    }

    /// Minimal two's-complement bit count excluding the sign bit
    /// (`bitLength(0) = 0`, `bitLength(+1) = 1`, `bitLength(-1) = 0`).
    pub fn bit_length(&self) -> usize {
        if self.is_negative() {
            magnitude::bit_length(&self.mag_minus_one())
        } else {
            magnitude::bit_length(&self.magnitude)
        }
    }

    /// Index of the lowest set bit, `-1` when `self` is zero.
    pub fn lowest_set_bit(&self) -> i64 {
        match magnitude::trailing_zero_bit(&self.magnitude) {
            Some(i) => i as i64,
            None => -1,
        }
    }

    pub fn test_bit(&self, n: i64) -> Result<bool> {
        if n < 0 {
            return Err(Error::InvalidArgument("bit index must not be negative".into()));
        }
        let m1 = self.mag_minus_one();
        Ok(self.tc_bit(&m1, n as usize))
    }

    pub fn shift_left(&self, n: i64) -> BigInteger {
        if n < 0 {
            return self.shift_right(-n);
        }
        BigInteger::from_parts(self.sign, magnitude::shift_left_bits(&self.magnitude, n as usize))
    }

    pub fn shift_right(&self, n: i64) -> BigInteger {
        if n < 0 {
            return self.shift_left(-n);
        }
        let n = n as usize;
        if self.sign.is_positive() {
            BigInteger::from_parts(Sign::Positive, magnitude::shift_right_bits(&self.magnitude, n))
        } else {
            let shifted = magnitude::shift_right_bits(&self.magnitude, n);
            let inexact = magnitude::any_low_bits_set(&self.magnitude, n);
            let mag = if inexact { magnitude::add_small(&shifted, 1) } else { shifted };
            BigInteger::from_parts(Sign::Negative, mag)
        }
    }

    // ---- base conversion ---------------------------------------------

    /// Formats in the given base (`2..=36`), lowercase digits, leading `-`
    /// for negative values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exactum_integer::BigInteger;
    /// let value = BigInteger::parse("-255").unwrap();
    /// assert_eq!(value.to_base(16).unwrap(), "-ff");
    /// assert_eq!(BigInteger::from_base("-ff", 16).unwrap(), value);
    /// ```
    pub fn to_base(&self, base: u32) -> Result<String> {
        if !(2..=36).contains(&base) {
            return Err(Error::InvalidArgument("base must be in [2, 36]".into()));
        }
        let digits = magnitude::to_radix_str(&self.magnitude, base);
        Ok(if self.is_negative() { alloc::format!("-{digits}") } else { digits })
    }

    pub fn from_base(s: &str, base: u32) -> Result<BigInteger> {
        if !(2..=36).contains(&base) {
            return Err(Error::InvalidArgument("base must be in [2, 36]".into()));
        }
        let (sign, digits) = split_sign(s);
        let mag = magnitude::from_radix_str(digits, base)
            .ok_or_else(|| Error::NumberFormat(alloc::format!("invalid base-{base} digits: {s:?}")))?;
        Ok(BigInteger::from_parts(sign, mag))
    }

    pub fn to_arbitrary_base(&self, alphabet: &[char]) -> Result<String> {
        if alphabet.len() < 2 {
            return Err(Error::InvalidArgument("alphabet must have at least 2 symbols".into()));
        }
        if self.is_negative() {
            return Err(Error::NegativeNumber);
        }
        Ok(magnitude::to_arbitrary_base(&self.magnitude, alphabet))
    }

    pub fn from_arbitrary_base(s: &str, alphabet: &[char]) -> Result<BigInteger> {
        if alphabet.len() < 2 {
            return Err(Error::InvalidArgument("alphabet must have at least 2 symbols".into()));
        }
        let mag = magnitude::from_arbitrary_base(s, alphabet)
            .ok_or_else(|| Error::NumberFormat(alloc::format!("invalid digits for alphabet: {s:?}")))?;
        Ok(BigInteger::from_parts(Sign::Positive, mag))
    }

    // ---- byte encoding -------------------------------------------------

    pub fn to_bytes(&self, signed: bool) -> Result<Vec<u8>> {
        if !signed {
            if self.is_negative() {
                return Err(Error::NegativeNumber);
            }
            let bytes = magnitude::to_bytes_be(&self.magnitude);
            return Ok(if bytes.is_empty() { alloc::vec![0] } else { bytes });
        }
        if self.is_zero() {
            return Ok(alloc::vec![0]);
        }
        let len = self.bit_length() / 8 + 1;
        if self.is_positive() {
            let raw = magnitude::to_bytes_be(&self.magnitude);
            let mut out = alloc::vec![0u8; len - raw.len()];
            out.extend_from_slice(&raw);
            Ok(out)
        } else {
            let modulus = magnitude::shift_left_bits(&[1], len * 8);
            let tc = magnitude::sub(&modulus, &self.magnitude);
            let raw = magnitude::to_bytes_be(&tc);
            let mut out = alloc::vec![0u8; len - raw.len()];
            out.extend_from_slice(&raw);
            Ok(out)
        }
    }

    pub fn from_bytes(bytes: &[u8], signed: bool) -> Result<BigInteger> {
        if bytes.is_empty() {
            return Err(Error::NumberFormat("empty byte string".into()));
        }
        if !signed || bytes[0] & 0x80 == 0 {
            let mag = magnitude::from_bytes_be(bytes);
            return Ok(BigInteger::from_parts(Sign::Positive, mag));
        }
        let unsigned = magnitude::from_bytes_be(bytes);
        let modulus = magnitude::shift_left_bits(&[1], bytes.len() * 8);
        let mag = magnitude::sub(&modulus, &unsigned);
        Ok(BigInteger::from_parts(Sign::Negative, mag))
    }

    // ---- randomness ------------------------------------------------------

    /// Uniform integer in `[0, 2^n)`. `rng` is called exactly once and must
    /// return exactly `ceil(n/8)` bytes.
    pub fn random_bits(n: usize, rng: &mut impl FnMut(usize) -> Vec<u8>) -> BigInteger {
        if n == 0 {
            return BigInteger::ZERO;
        }
        let nbytes = (n + 7) / 8;
        let mut bytes = rng(nbytes);
        let extra_bits = nbytes * 8 - n;
        if extra_bits > 0 {
            bytes[0] &= 0xFFu8 >> extra_bits;
        }
        BigInteger::from_parts(Sign::Positive, magnitude::from_bytes_be(&bytes))
    }

    pub fn random_range(
        min: &BigInteger,
        max: &BigInteger,
        rng: &mut impl FnMut(usize) -> Vec<u8>,
    ) -> Result<BigInteger> {
        if min.cmp_value(max) == Ordering::Greater {
            return Err(Error::MathException("min must not exceed max".into()));
        }
        if min == max {
            return Ok(min.clone());
        }
        let span = max.sub_ref(min);
        let bound = span.add_ref(&BigInteger::one());
        let bits = magnitude::bit_length(&span.magnitude);
        loop {
            let sample = BigInteger::random_bits(bits, rng);
            if sample.cmp_value(&bound) == Ordering::Less {
                return Ok(min.add_ref(&sample));
            }
        }
    }

    // ---- narrowing conversions ------------------------------------------

    pub fn to_i64(&self) -> Result<i64> {
        self.to_string().parse::<i64>().map_err(|_| Error::IntegerOverflow)
    }

    pub fn to_f64(&self) -> f64 {
        // Rust's decimal-to-float parser saturates to +/-infinity for
        // magnitudes beyond f64 range rather than erroring, which is the
        // desired behavior here too: out-of-range magnitudes saturate
        // instead of failing.
        self.to_string().parse::<f64>().unwrap_or(if self.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    }
}

fn bits_to_magnitude(bits: &[bool]) -> Magnitude {
    let mut mag = alloc::vec![0u32; (bits.len() + 31) / 32];
    for (i, &b) in bits.iter().enumerate() {
        if b {
            mag[i / 32] |= 1 << (i % 32);
        }
    }
    magnitude::normalize(&mut mag);
    mag
}

fn split_sign(s: &str) -> (Sign, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (Sign::Negative, &s[1..]),
        Some(b'+') => (Sign::Positive, &s[1..]),
        _ => (Sign::Positive, s),
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", magnitude::to_decimal_str(&self.magnitude))
        } else {
            f.write_str(&magnitude::to_decimal_str(&self.magnitude))
        }
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({self})")
    }
}

impl FromStr for BigInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigInteger::parse(s)
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            fn from(v: $t) -> BigInteger {
                BigInteger::parse(&v.to_string()).expect("primitive integers always parse")
            }
        }
    )*};
}
impl_from_signed!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_op {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait for BigInteger {
            type Output = BigInteger;
            fn $method(self, rhs: BigInteger) -> BigInteger {
                self.$inner(&rhs)
            }
        }
        impl $trait for &BigInteger {
            type Output = BigInteger;
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                self.$inner(rhs)
            }
        }
    };
}
impl_op!(Add, add, add_ref);
impl_op!(Sub, sub, sub_ref);
impl_op!(Mul, mul, mul_ref);

impl Neg for BigInteger {
    type Output = BigInteger;
    fn neg(self) -> BigInteger {
        self.neg_ref()
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;
    fn neg(self) -> BigInteger {
        self.neg_ref()
    }
}

/// Truncated division, matching [`BigInteger::quotient`]. Panics on
/// division by zero, like the standard library's integer `Div`; use
/// [`BigInteger::quotient`] directly for the fallible form.
impl Div for &BigInteger {
    type Output = BigInteger;
    fn div(self, rhs: &BigInteger) -> BigInteger {
        self.quotient(rhs).expect("division by zero")
    }
}

impl Rem for &BigInteger {
    type Output = BigInteger;
    fn rem(self, rhs: &BigInteger) -> BigInteger {
        self.remainder(rhs).expect("division by zero")
    }
}
