//! Multiplication: `(u_a * u_b, s_a + s_b)`.

use crate::decimal::BigDecimal;
use crate::error::{ArithmeticError, Error};

impl BigDecimal {
    /// Scale addition is checked against `i32` bounds; see
    /// [`ArithmeticError::ScaleOverflow`].
    pub fn checked_multiply(&self, other: &Self) -> Result<Self, Error> {
        let scale = self.scale.checked_add(other.scale).ok_or(ArithmeticError::ScaleOverflow)?;
        Ok(BigDecimal::from_parts(self.unscaled.multiply(&other.unscaled), scale))
    }
}

#[cfg(test)]
mod tests {
    use crate::decimal::BigDecimal;

    #[test]
    fn multiply_adds_scales() {
        let a = BigDecimal::from_i64_with_scale(12, 1);
        let b = BigDecimal::from_i64_with_scale(34, 2);
        let product = a.checked_multiply(&b).unwrap();
        assert_eq!(product.scale(), 3);
        assert_eq!(product.unscaled_value(), crate::big_integer::BigInteger::from_i64(408));
    }

    #[test]
    fn multiply_rejects_scale_overflow() {
        let a = BigDecimal::from_i64_with_scale(1, i32::MAX);
        let b = BigDecimal::from_i64_with_scale(1, 1);
        assert!(a.checked_multiply(&b).is_err());
    }
}
