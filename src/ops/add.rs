//! Addition and subtraction: align scales, then add/subtract magnitudes.

use super::common::align;
use crate::decimal::BigDecimal;
use crate::error::Error;

impl BigDecimal {
    /// `(unscaled, scale)` aligned to `max(self.scale(), other.scale())`,
    /// then added.
    pub fn checked_add(&self, other: &Self) -> Result<Self, Error> {
        let (ua, ub, scale) = align(self, other)?;
        Ok(BigDecimal::from_parts(ua.add(&ub), scale))
    }

    /// Same alignment as [`BigDecimal::checked_add`], then subtracted.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, Error> {
        let (ua, ub, scale) = align(self, other)?;
        Ok(BigDecimal::from_parts(ua.subtract(&ub), scale))
    }
}
