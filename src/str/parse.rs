//! Parses `sign? (digits ('.' digits?)? | '.' digits) ([eE] sign? digits)?`.
//!
//! The mantissa digits (integer part and fractional part, dot removed) are
//! concatenated and handed to [`BigInteger::parse`]; the fractional digit
//! count minus the exponent becomes the result scale.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::big_integer::BigInteger;
use crate::decimal::BigDecimal;
use crate::error::{ArithmeticError, Error, FormatError};

pub(crate) fn parse(s: &str) -> Result<BigDecimal, Error> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return Err(FormatError::Empty.into());
    }

    let mut i = 0;
    let negative = match bytes[0] {
        b'+' => {
            i += 1;
            false
        }
        b'-' => {
            i += 1;
            true
        }
        _ => false,
    };

    let mantissa_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_len = i - mantissa_start;

    let mut frac_len = 0usize;
    if i < len && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_len = i - frac_start;
    }

    if int_len == 0 && frac_len == 0 {
        return Err(FormatError::Empty.into());
    }
    let mantissa_end = i;

    let mut exponent: i64 = 0;
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        let exp_negative = match bytes.get(i) {
            Some(b'+') => {
                i += 1;
                false
            }
            Some(b'-') => {
                i += 1;
                true
            }
            _ => false,
        };
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            return Err(FormatError::DoubleSign.into());
        }
        let exp_digits_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_digits_start {
            return Err(FormatError::InvalidExponent.into());
        }
        // Safety: the scanned range is ASCII digits only.
        let exp_str = core::str::from_utf8(&bytes[exp_digits_start..i]).expect("ascii digits");
        let magnitude: i64 = exp_str.parse().map_err(|_| Error::Format(FormatError::InvalidExponent))?;
        exponent = if exp_negative { -magnitude } else { magnitude };
    }

    if i != len {
        return Err(FormatError::InvalidDigit.into());
    }

    let mut digit_string = String::with_capacity(mantissa_end - mantissa_start + 1);
    if negative {
        digit_string.push('-');
    }
    for &b in &bytes[mantissa_start..mantissa_end] {
        if b != b'.' {
            digit_string.push(b as char);
        }
    }
    let unscaled = BigInteger::parse(&digit_string)?;

    let scale_i64 = frac_len as i64 - exponent;
    let scale: i32 = scale_i64.try_into().map_err(|_| Error::Arithmetic(ArithmeticError::ScaleOverflow))?;

    Ok(BigDecimal::from_parts(unscaled, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;

    #[test]
    fn rejects_empty_input() {
        assert!(parse("").is_err());
        assert!(parse("+").is_err());
        assert!(parse("-").is_err());
        assert!(parse(".").is_err());
    }

    #[test]
    fn rejects_non_digit_body() {
        assert!(parse("12a3").is_err());
        assert!(parse("1..2").is_err());
        assert!(parse("1-2").is_err());
    }

    #[test]
    fn rejects_double_sign_in_exponent_only() {
        assert!(parse("1e+-2").is_err());
        assert!(parse("1e-+2").is_err());
        assert!(parse("1e").is_err());
        assert!(parse("1e+").is_err());
    }

    #[test]
    fn trailing_dot_has_zero_fractional_digits() {
        let d = parse("123.").unwrap();
        assert_eq!(d.scale(), 0);
        assert_eq!(d.unscaled_value(), BigInteger::from_i64(123));
    }

    #[test]
    fn leading_dot_is_accepted() {
        let d = parse(".456").unwrap();
        assert_eq!(d.scale(), 3);
        assert_eq!(d.unscaled_value(), BigInteger::from_i64(456));
    }

    #[test]
    fn scenario_long_fraction_roundtrips_scale() {
        let d = parse("345.23499600293850").unwrap();
        assert_eq!(d.scale(), 14);
    }

    #[test]
    fn scientific_notation_with_explicit_plus_exponent() {
        let a = parse("-12380945E+61").unwrap();
        let b = parse("-1.2380945E+68").unwrap();
        assert_eq!(a.compare_to(&b), Ordering::Equal);
    }

    #[test]
    fn negative_exponent_shifts_scale_up() {
        let d = parse("-123.4E-5").unwrap();
        assert_eq!(d.to_string(), "-0.001234");
    }
}
