//! The scale-aware [`BigDecimal`] type built on top of `exactum-integer`'s
//! `BigInteger`.
//!
//! Mirrors `dashu-float`'s role in the `dashu` workspace, but trades its
//! compile-time-dispatched `Round` trait and binary/decimal-generic
//! `Repr<Word>` for a single base-10 `(unscaled: BigInteger, scale: u64)`
//! pair and the runtime `RoundingMode` enum from `exactum-base`, matching
//! the fixed-scale-decimal contract this crate implements instead of
//! `dashu-float`'s binary floating point.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bigdecimal;

#[cfg(feature = "serde")]
mod serde_support;

pub use bigdecimal::BigDecimal;
pub use exactum_base::{Error, Result, RoundingMode};
