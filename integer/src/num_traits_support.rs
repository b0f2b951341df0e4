//! Optional `num-traits` interop, grounded in `dashu-int`'s
//! `third_party/num_traits.rs`.

use num_traits::{One, Pow, Signed, Zero};

use crate::BigInteger;

impl Zero for BigInteger {
    fn zero() -> Self {
        BigInteger::ZERO
    }

    fn is_zero(&self) -> bool {
        BigInteger::is_zero(self)
    }
}

impl One for BigInteger {
    fn one() -> Self {
        BigInteger::one()
    }
}

impl Signed for BigInteger {
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            BigInteger::ZERO
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        if self.is_zero() {
            BigInteger::ZERO
        } else if self.is_negative() {
            -BigInteger::one()
        } else {
            BigInteger::one()
        }
    }

    fn is_positive(&self) -> bool {
        BigInteger::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInteger::is_negative(self)
    }
}

impl Pow<u32> for BigInteger {
    type Output = BigInteger;

    fn pow(self, rhs: u32) -> BigInteger {
        BigInteger::pow(&self, rhs).expect("exponent must be in [0, 1_000_000]")
    }
}
