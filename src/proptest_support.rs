//! `proptest::arbitrary::Arbitrary` impls, gated behind the `proptest`
//! feature, so downstream property tests can generate arbitrary values of
//! either public value type without hand-writing a strategy.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};

use crate::{BigDecimal, BigInteger};

impl Arbitrary for BigInteger {
    type Parameters = ();
    type Strategy = BoxedStrategy<BigInteger>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        any::<i128>().prop_map(BigInteger::from_i128).boxed()
    }
}

impl Arbitrary for BigDecimal {
    type Parameters = ();
    type Strategy = BoxedStrategy<BigDecimal>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        (any::<i128>(), any::<i32>())
            .prop_map(|(unscaled, scale)| BigDecimal::from_parts(BigInteger::from_i128(unscaled), scale))
            .boxed()
    }
}
