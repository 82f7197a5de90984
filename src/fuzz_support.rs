//! `arbitrary::Arbitrary` impls, gated behind the `rust-fuzz` feature, so
//! `cargo-fuzz` targets can `#[derive(Arbitrary)]` a struct with
//! [`BigInteger`]/[`BigDecimal`] fields directly.

use arbitrary::{Arbitrary, Unstructured};

use crate::{BigDecimal, BigInteger};

impl<'a> Arbitrary<'a> for BigInteger {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(BigInteger::from_i128(i128::arbitrary(u)?))
    }
}

impl<'a> Arbitrary<'a> for BigDecimal {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let unscaled = BigInteger::arbitrary(u)?;
        let scale = i32::arbitrary(u)?;
        Ok(BigDecimal::from_parts(unscaled, scale))
    }
}
