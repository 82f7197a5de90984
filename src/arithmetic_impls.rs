//! Operator overloads and `num_traits` integration.
//!
//! `Add`/`Sub`/`Mul`/`Neg` panic on the rare failure case (scale overflow)
//! since operator traits are infallible; callers who need a `Result` use
//! `checked_add`/`checked_sub`/`checked_multiply` directly. There is
//! deliberately no `Div` impl: division always needs an explicit
//! `RoundingMode`, which an infallible binary operator can't carry.

use core::ops::{Add, Neg, Sub};

// `num_traits::Signed` is deliberately not implemented: it requires `Num`,
// which in turn requires infallible `Div`/`Rem` — this crate's division
// always needs an explicit `RoundingMode` and returns a `Result`, so there
// is no sound infallible `Div` to hang `Num` off of. `Zero`/`One` cover the
// generic-numeric-code integration this crate supports.
use num_traits::{One, Zero};

use crate::big_integer::BigInteger;
use crate::decimal::BigDecimal;

impl Add for BigDecimal {
    type Output = BigDecimal;
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).expect("BigDecimal addition does not fail")
    }
}

impl Sub for BigDecimal {
    type Output = BigDecimal;
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).expect("BigDecimal subtraction does not fail")
    }
}

impl core::ops::Mul for BigDecimal {
    type Output = BigDecimal;
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_multiply(&rhs).expect("scale overflow in BigDecimal multiplication")
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;
    fn neg(self) -> Self::Output {
        BigDecimal::negate(&self)
    }
}

impl Add for BigInteger {
    type Output = BigInteger;
    fn add(self, rhs: Self) -> Self::Output {
        BigInteger::add(&self, &rhs)
    }
}

impl Sub for BigInteger {
    type Output = BigInteger;
    fn sub(self, rhs: Self) -> Self::Output {
        BigInteger::subtract(&self, &rhs)
    }
}

impl core::ops::Mul for BigInteger {
    type Output = BigInteger;
    fn mul(self, rhs: Self) -> Self::Output {
        BigInteger::multiply(&self, &rhs)
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;
    fn neg(self) -> Self::Output {
        BigInteger::negate(&self)
    }
}

impl Zero for BigInteger {
    fn zero() -> Self {
        BigInteger::zero()
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

impl Zero for BigDecimal {
    fn zero() -> Self {
        BigDecimal::from_i64(0)
    }
    fn is_zero(&self) -> bool {
        BigDecimal::sign(self) == 0
    }
}

impl One for BigDecimal {
    fn one() -> Self {
        BigDecimal::from_i64(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_overloads_match_checked_variants() {
        let a = BigDecimal::from_i64_with_scale(5, 1);
        let b = BigDecimal::from_i64_with_scale(7, 1);
        assert_eq!(a.clone() + b.clone(), a.checked_add(&b).unwrap());
        assert_eq!(-a.clone(), a.negate());
    }

    #[test]
    fn num_traits_zero_one_roundtrip() {
        assert!(<BigDecimal as Zero>::zero().is_zero());
        assert!(!<BigDecimal as One>::one().is_zero());
        assert!(<BigInteger as Zero>::zero().is_zero());
    }
}
