//! Division. `checked_divide` targets `self.scale()`; `checked_divide_with_scale`
//! targets an explicit scale, matching a `BigInteger` division against the
//! divisor's unscaled value.

use super::common::quotient_sign;
use crate::big_integer::BigInteger;
use crate::decimal::BigDecimal;
use crate::error::{ArithmeticError, Error};
use crate::rounding::{round_discard_digits, round_quotient, RoundingMode};

impl BigDecimal {
    /// `round(u_a * 10^(s_b) / u_b, mode)` at scale `self.scale()`.
    /// `other == 0` fails with [`ArithmeticError::DivisionByZero`].
    pub fn checked_divide(&self, other: &Self, mode: RoundingMode) -> Result<Self, Error> {
        let (numerator, denominator) = numerator_and_denominator(&self.unscaled, other.scale, &other.unscaled)?;
        let (q, r) = numerator.divide_and_remainder(&denominator)?;
        let sign = quotient_sign(&numerator, &denominator);
        let rounded = round_quotient(q, r, &denominator.abs(), sign, mode)?;
        Ok(BigDecimal::from_parts(rounded, self.scale))
    }

    /// Same division, targeting an explicit result `scale` rather than
    /// `self.scale()`. When the implied alignment exponent is negative, the
    /// numerator is pre-rounded to the needed precision before the final
    /// division, exactly as `java.math.BigDecimal.divide(divisor, scale, mode)` does.
    pub fn checked_divide_with_scale(&self, other: &Self, scale: i32, mode: RoundingMode) -> Result<Self, Error> {
        if other.unscaled.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        let exponent = (scale as i64) + (other.scale as i64) - (self.scale as i64);
        let numerator = if exponent >= 0 {
            let shift: u32 = exponent.try_into().map_err(|_| Error::Arithmetic(ArithmeticError::ScaleOverflow))?;
            self.unscaled.multiply_by_power_of_ten(shift)
        } else {
            let shift: u32 = (-exponent).try_into().map_err(|_| Error::Arithmetic(ArithmeticError::ScaleOverflow))?;
            round_discard_digits(&self.unscaled, shift, mode)?
        };
        let denominator = other.unscaled.clone();
        let (q, r) = numerator.divide_and_remainder(&denominator)?;
        let sign = quotient_sign(&numerator, &denominator);
        let rounded = round_quotient(q, r, &denominator.abs(), sign, mode)?;
        Ok(BigDecimal::from_parts(rounded, scale))
    }
}

/// Factors the divisor's scale into either the numerator or the denominator
/// (whichever keeps the exponent non-negative), since `multiply_by_power_of_ten`
/// only accepts `n >= 0`.
fn numerator_and_denominator(
    numerator_unscaled: &BigInteger,
    divisor_scale: i32,
    divisor_unscaled: &BigInteger,
) -> Result<(BigInteger, BigInteger), Error> {
    if divisor_unscaled.is_zero() {
        return Err(ArithmeticError::DivisionByZero.into());
    }
    if divisor_scale >= 0 {
        Ok((numerator_unscaled.multiply_by_power_of_ten(divisor_scale as u32), divisor_unscaled.clone()))
    } else {
        Ok((numerator_unscaled.clone(), divisor_unscaled.multiply_by_power_of_ten((-divisor_scale) as u32)))
    }
}

#[cfg(test)]
mod tests {
    use crate::decimal::BigDecimal;
    use crate::rounding::RoundingMode;
    use core::cmp::Ordering;

    #[test]
    fn divide_targets_dividend_scale() {
        let a = BigDecimal::from_i64_with_scale(1, 0);
        let b = BigDecimal::from_i64_with_scale(3, 0);
        let q = a.checked_divide(&b, RoundingMode::HalfUp).unwrap();
        assert_eq!(q.scale(), 0);
    }

    #[test]
    fn divide_by_zero_fails() {
        let a = BigDecimal::from_i64(1);
        let zero = BigDecimal::from_i64(0);
        assert!(a.checked_divide(&zero, RoundingMode::HalfUp).is_err());
    }

    #[test]
    fn divide_rounding_modes_bound_the_exact_value() {
        let a = BigDecimal::from_i64_with_scale(100_000_374, 3); // 100000.374
        let up = a.set_scale_with_mode(2, RoundingMode::Up).unwrap();
        let half_up = a.set_scale_with_mode(2, RoundingMode::HalfUp).unwrap();
        assert_eq!(up.to_string(), "100000.38");
        assert_eq!(half_up.to_string(), "100000.37");
    }

    #[test]
    fn explicit_scale_division_matches_target_scale() {
        let a = BigDecimal::from_i64(10);
        let b = BigDecimal::from_i64(3);
        let q = a.checked_divide_with_scale(&b, 4, RoundingMode::HalfEven).unwrap();
        assert_eq!(q.scale(), 4);
        assert_eq!(q.compare_to(&BigDecimal::parse("3.3333").unwrap()), Ordering::Equal);
    }
}
