//! Optional `rand`-crate bridge for [`BigInteger::random_bits`]/[`BigInteger::random_range`].
//!
//! Grounded in `dashu-int`'s `third_party/rand.rs`: dashu implements
//! `rand::distributions::uniform::SampleUniform` directly against
//! `rand::Rng`. `exactum`'s core randomness contract is an injected
//! byte-producing closure rather than an `Rng` trait object (the
//! byte-count-and-masking protocol is part of the public contract, not an
//! implementation detail dashu's approach hides), so this module is a thin
//! shim that adapts a `rand::RngCore` into that closure shape.

use alloc::vec::Vec;
use rand::RngCore;

use crate::BigInteger;
use exactum_base::Result;

/// Draws a uniform `BigInteger` in `[0, 2^n)` using `rng`.
pub fn random_bits(n: usize, rng: &mut impl RngCore) -> BigInteger {
    BigInteger::random_bits(n, &mut |nbytes| {
        let mut buf = Vec::with_capacity(nbytes);
        buf.resize(nbytes, 0u8);
        rng.fill_bytes(&mut buf);
        buf
    })
}

/// Draws a uniform `BigInteger` in `[min, max]` using `rng`.
pub fn random_range(min: &BigInteger, max: &BigInteger, rng: &mut impl RngCore) -> Result<BigInteger> {
    BigInteger::random_range(min, max, &mut |nbytes| {
        let mut buf = Vec::with_capacity(nbytes);
        buf.resize(nbytes, 0u8);
        rng.fill_bytes(&mut buf);
        buf
    })
}
