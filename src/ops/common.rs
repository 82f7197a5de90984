//! Shared helpers for scale-aligned arithmetic.

use crate::big_integer::BigInteger;
use crate::decimal::BigDecimal;
use crate::error::{ArithmeticError, Error};

/// Aligns `a` and `b` to `scale = max(a.scale, b.scale)` by multiplying the
/// lower-scale operand's unscaled value by the appropriate power of ten.
/// Used by `add`/`subtract`/`compare_to`. The scale difference is computed
/// in `i64` (plain `i32` subtraction of two arbitrary `i32` scales can
/// overflow `i32` itself) before being checked against `u32`.
pub(crate) fn align(a: &BigDecimal, b: &BigDecimal) -> Result<(BigInteger, BigInteger, i32), Error> {
    let scale = a.scale.max(b.scale);
    let ua = shift_to_scale(&a.unscaled, a.scale, scale)?;
    let ub = shift_to_scale(&b.unscaled, b.scale, scale)?;
    Ok((ua, ub, scale))
}

fn shift_to_scale(unscaled: &BigInteger, from_scale: i32, to_scale: i32) -> Result<BigInteger, Error> {
    if from_scale == to_scale {
        return Ok(unscaled.clone());
    }
    let shift: u32 = ((to_scale as i64) - (from_scale as i64))
        .try_into()
        .map_err(|_| Error::Arithmetic(ArithmeticError::ScaleOverflow))?;
    Ok(unscaled.multiply_by_power_of_ten(shift))
}

/// The sign of the exact quotient `numerator / denominator` (both nonzero).
pub(crate) fn quotient_sign(numerator: &BigInteger, denominator: &BigInteger) -> i8 {
    if numerator.is_zero() || denominator.is_zero() {
        0
    } else if numerator.sign() == denominator.sign() {
        1
    } else {
        -1
    }
}
