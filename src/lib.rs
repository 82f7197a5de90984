//! An arbitrary-precision signed decimal: `unscaled × 10^(−scale)`.
//!
//! [`BigDecimal`] pairs an arbitrary-precision [`BigInteger`] with an
//! `i32` scale. All three public value types ([`BigInteger`], [`BigDecimal`],
//! [`MathContext`]) are deeply immutable — every operation takes `&self`
//! and returns a fresh value — so they are freely `Send + Sync` with no
//! synchronization required.
//!
//! ```
//! use arbitrary_decimal::{BigDecimal, RoundingMode};
//!
//! let a = BigDecimal::parse("100000.374").unwrap();
//! let rounded = a.set_scale_with_mode(2, RoundingMode::HalfUp).unwrap();
//! assert_eq!(rounded.to_string(), "100000.37");
//! ```
#![forbid(unsafe_code)]
#![deny(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod arithmetic_impls;
mod big_integer;
mod context;
mod decimal;
mod error;
mod ops;
mod rounding;
mod str;

#[cfg(feature = "rust-fuzz")]
mod fuzz_support;
#[cfg(feature = "proptest")]
mod proptest_support;
#[cfg(feature = "serde")]
mod serde_support;

pub use big_integer::BigInteger;
pub use context::MathContext;
pub use decimal::BigDecimal;
pub use error::{ArgumentError, ArithmeticError, Error, FormatError};
pub use rounding::RoundingMode;

/// The result type returned by every fallible operation in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// A convenience module appropriate for glob imports (`use arbitrary_decimal::prelude::*;`).
pub mod prelude {
    pub use crate::{BigDecimal, BigInteger, Error, MathContext, Result, RoundingMode};
    pub use core::str::FromStr;
    pub use num_traits::{One, Zero};
}
