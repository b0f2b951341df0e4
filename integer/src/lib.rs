//! The arbitrary-precision Integer Kernel (IK) and the public
//! [`BigInteger`] type built on top of it.
//!
//! Mirrors `dashu-int`'s role in the `dashu` workspace: the lowest
//! arithmetic layer other than the shared vocabulary in `exactum-base`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bigint;
pub mod magnitude;

#[cfg(feature = "rand")]
pub mod rand_support;

#[cfg(feature = "serde")]
mod serde_support;

#[cfg(feature = "num-traits")]
mod num_traits_support;

pub use bigint::BigInteger;
pub use exactum_base::{Error, Result, RoundingMode, Sign};
