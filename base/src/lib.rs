//! Shared error taxonomy, sign and rounding-mode types for the `exactum`
//! arbitrary-precision numeric crates.
//!
//! This crate plays the same role `dashu-base` plays for `dashu`: it sits
//! at the bottom of the dependency graph and holds only common vocabulary,
//! no arithmetic.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod rounding;
pub mod sign;

pub use error::{Error, Result};
pub use rounding::RoundingMode;
pub use sign::Sign;
