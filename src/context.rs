//! Precision-and-rounding configuration for [`BigDecimal::round`](crate::BigDecimal::round).

use core::fmt;
use core::str::FromStr;

use crate::error::{ArgumentError, Error, FormatError};
use crate::rounding::RoundingMode;

/// A precision (significant-digit count) paired with a rounding policy.
///
/// `precision == 0` means unlimited precision: [`BigDecimal::round`](crate::BigDecimal::round)
/// leaves the value exact regardless of `rounding_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MathContext {
    precision: i32,
    rounding_mode: RoundingMode,
}

impl MathContext {
    /// No limit on significant digits; rounding is never triggered.
    pub const UNLIMITED: MathContext = MathContext { precision: 0, rounding_mode: RoundingMode::HalfUp };

    /// Builds a context with the given precision and [`RoundingMode::HalfUp`].
    ///
    /// Returns [`ArgumentError::NegativePrecision`] if `precision < 0`.
    pub fn new(precision: i32) -> Result<Self, Error> {
        Self::with_rounding_mode(precision, RoundingMode::HalfUp)
    }

    /// Builds a context with the given precision and rounding mode.
    ///
    /// Returns [`ArgumentError::NegativePrecision`] if `precision < 0`.
    pub fn with_rounding_mode(precision: i32, rounding_mode: RoundingMode) -> Result<Self, Error> {
        if precision < 0 {
            return Err(ArgumentError::NegativePrecision.into());
        }
        Ok(MathContext { precision, rounding_mode })
    }

    /// The configured significant-digit count (`0` means unlimited).
    pub fn precision(&self) -> i32 {
        self.precision
    }

    /// The configured rounding policy.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }
}

impl Default for MathContext {
    fn default() -> Self {
        MathContext::UNLIMITED
    }
}

impl fmt::Display for MathContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "precision={} roundingMode={}", self.precision, self.rounding_mode)
    }
}

impl FromStr for MathContext {
    type Err = Error;

    /// Parses `"precision=<n> roundingMode=<NAME>"`; the two fields may
    /// appear in either order separated by whitespace, with `<NAME>` one of
    /// the eight canonical uppercase rounding-mode names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut precision: Option<i32> = None;
        let mut rounding_mode: Option<RoundingMode> = None;

        for field in s.split_whitespace() {
            if let Some(value) = field.strip_prefix("precision=") {
                let n: i32 = value.parse().map_err(|_| Error::Format(FormatError::InvalidMathContextText))?;
                precision = Some(n);
            } else if let Some(value) = field.strip_prefix("roundingMode=") {
                rounding_mode = Some(RoundingMode::from_uppercase_name(&value.to_uppercase())?);
            } else {
                return Err(Error::Format(FormatError::InvalidMathContextText));
            }
        }

        match (precision, rounding_mode) {
            (Some(p), Some(m)) => MathContext::with_rounding_mode(p, m),
            _ => Err(Error::Format(FormatError::InvalidMathContextText)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_precision() {
        assert!(MathContext::new(-1).is_err());
    }

    #[test]
    fn display_and_parse_roundtrip() {
        let ctx = MathContext::with_rounding_mode(7, RoundingMode::HalfEven).unwrap();
        let text = ctx.to_string();
        assert_eq!(text, "precision=7 roundingMode=HalfEven");
        assert_eq!(text.parse::<MathContext>().unwrap(), ctx);
    }

    #[test]
    fn parse_accepts_either_field_order() {
        let ctx: MathContext = "roundingMode=Floor precision=3".parse().unwrap();
        assert_eq!(ctx.precision(), 3);
        assert_eq!(ctx.rounding_mode(), RoundingMode::Floor);
    }

    #[test]
    fn unlimited_constant_has_zero_precision() {
        assert_eq!(MathContext::UNLIMITED.precision(), 0);
    }
}
