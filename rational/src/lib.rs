//! The exact-fraction [`BigRational`] type built on top of
//! `exactum-integer`'s `BigInteger`.
//!
//! There is no `dashu-ratio` crate to mirror directly; this crate follows
//! the same shape `exactum-decimal` takes from
//! `exactum-integer::BigInteger` (a thin immutable struct, Result-based
//! fallibility, no implicit simplification) and leans on `BigInteger`'s
//! `gcd`/`quotient`/`remainder` for the rational-specific arithmetic.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bigrational;

#[cfg(feature = "serde")]
mod serde_support;

pub use bigrational::BigRational;
pub use exactum_base::{Error, Result};
