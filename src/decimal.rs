//! `BigDecimal`: an arbitrary-precision signed decimal, `unscaled × 10^(−scale)`.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
use core::cmp::Ordering;
use core::str::FromStr;

use crate::big_integer::BigInteger;
use crate::context::MathContext;
use crate::error::{ArithmeticError, Error, FormatError};
use crate::rounding::{round_discard_digits, RoundingMode};

/// A signed decimal number `unscaled × 10^(−scale)`.
///
/// `scale` may be any `i32`, including negative (trailing implicit zeros).
/// Two values are [`PartialEq`]/[`Eq`]-equal only when both fields match
/// exactly — `(10, scale=1)` and `(100, scale=2)` both mean `1.0`, but are
/// *not* equal. To compare by numeric value use [`BigDecimal::compare_to`]
/// (exposed as [`Ord`]/[`PartialOrd`]), not `==`. This mirrors the
/// well-documented `java.math.BigDecimal` quirk of the same name, by design.
#[derive(Debug, Clone, Hash)]
pub struct BigDecimal {
    pub(crate) unscaled: BigInteger,
    pub(crate) scale: i32,
}

impl BigDecimal {
    /// `(value, scale=0)`.
    pub fn from_unscaled(value: BigInteger) -> Self {
        BigDecimal { unscaled: value, scale: 0 }
    }

    /// Direct construction from an unscaled value and a scale.
    pub fn from_parts(unscaled: BigInteger, scale: i32) -> Self {
        BigDecimal { unscaled, scale }
    }

    /// `(BigInteger::from_i64(v), scale=0)`.
    pub fn from_i64(v: i64) -> Self {
        BigDecimal { unscaled: BigInteger::from_i64(v), scale: 0 }
    }

    /// Direct construction from a machine integer and a scale.
    pub fn from_i64_with_scale(v: i64, scale: i32) -> Self {
        BigDecimal { unscaled: BigInteger::from_i64(v), scale }
    }

    /// Exact conversion from an `f64`.
    ///
    /// Rejects `NaN`/`±Infinity`. `-0.0` normalizes to exact zero at scale 0.
    /// Otherwise decomposes the IEEE-754 bit pattern into sign, unbiased
    /// exponent `e`, and 53-bit significand `m` (the implicit leading bit is
    /// restored for normals; subnormals have no implicit bit) and represents
    /// the exact value `sign·m·2^(e−52)` without stripping trailing factors
    /// of 2 or 5 — the resulting decimal text can be long, which is
    /// expected for an exact binary-to-decimal conversion.
    pub fn from_f64(d: f64) -> Result<Self, Error> {
        if d.is_nan() || d.is_infinite() {
            return Err(Error::Format(FormatError::NonFiniteFloat));
        }
        if d == 0.0 {
            return Ok(BigDecimal { unscaled: BigInteger::zero(), scale: 0 });
        }
        let bits = d.to_bits();
        let sign: i8 = if bits >> 63 == 1 { -1 } else { 1 };
        let biased_exp = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & 0x000f_ffff_ffff_ffff;
        let (significand, e): (u64, i64) = if biased_exp == 0 {
            (frac, -1022)
        } else {
            (frac | (1u64 << 52), biased_exp - 1023)
        };
        let m = BigInteger::from_i128(significand as i128);
        let m = if sign < 0 { m.negate() } else { m };
        let (unscaled, scale) = if e >= 52 {
            let shift = (e - 52) as u32;
            (m.multiply(&pow_small(2, shift)), 0)
        } else {
            let shift = (52 - e) as u32;
            (m.multiply(&pow_small(5, shift)), shift as i32)
        };
        Ok(BigDecimal { unscaled, scale })
    }

    /// Exact conversion from an `f32`, via the lossless `f32 -> f64` widening.
    pub fn from_f32(f: f32) -> Result<Self, Error> {
        BigDecimal::from_f64(f as f64)
    }

    /// Parses the grammar `sign? (digits ('.' digits?)? | '.' digits) ([eE] sign? digits)?`.
    pub fn parse(s: &str) -> Result<Self, Error> {
        crate::str::parse::parse(s)
    }

    /// Parses the substring `buffer[offset..offset+length]`.
    pub fn parse_range(buffer: &str, offset: usize, length: usize) -> Result<Self, Error> {
        let end = offset.checked_add(length).ok_or(Error::Format(FormatError::InvalidDigit))?;
        let slice = buffer.get(offset..end).ok_or(Error::Format(FormatError::InvalidDigit))?;
        BigDecimal::parse(slice)
    }

    /// The scale `s`.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// The unscaled value `u`.
    pub fn unscaled_value(&self) -> BigInteger {
        self.unscaled.clone()
    }

    /// Negates the value; scale is unchanged.
    pub fn negate(&self) -> Self {
        BigDecimal { unscaled: self.unscaled.negate(), scale: self.scale }
    }

    /// Absolute value; scale is unchanged.
    pub fn abs(&self) -> Self {
        BigDecimal { unscaled: self.unscaled.abs(), scale: self.scale }
    }

    /// Sign of the unscaled value: `-1`, `0`, or `1`.
    pub fn sign(&self) -> i8 {
        self.unscaled.sign()
    }

    /// Sets the scale, failing if digits would need to be discarded
    /// (equivalent to `set_scale_with_mode(new_scale, RoundingMode::Unnecessary)`).
    pub fn set_scale(&self, new_scale: i32) -> Result<Self, Error> {
        self.set_scale_with_mode(new_scale, RoundingMode::Unnecessary)
    }

    /// Sets the scale, rounding under `mode` if the new scale is smaller.
    pub fn set_scale_with_mode(&self, new_scale: i32, mode: RoundingMode) -> Result<Self, Error> {
        if new_scale >= self.scale {
            let shift: u32 = ((new_scale as i64) - (self.scale as i64))
                .try_into()
                .map_err(|_| Error::Arithmetic(ArithmeticError::ScaleOverflow))?;
            Ok(BigDecimal { unscaled: self.unscaled.multiply_by_power_of_ten(shift), scale: new_scale })
        } else {
            let shift: u32 = ((self.scale as i64) - (new_scale as i64))
                .try_into()
                .map_err(|_| Error::Arithmetic(ArithmeticError::ScaleOverflow))?;
            let rounded = round_discard_digits(&self.unscaled, shift, mode)?;
            Ok(BigDecimal { unscaled: rounded, scale: new_scale })
        }
    }

    /// Shifts the decimal point `n` places left: a pure relabeling of the
    /// scale (`unscaled` is untouched), valid for any sign of `n` since
    /// scale may be any `i32`. Exact inverse of `move_point_right(n)`.
    /// Fails with `ArithmeticError::ScaleOverflow` if the new scale would
    /// not fit in an `i32`.
    pub fn move_point_left(&self, n: i32) -> Result<Self, Error> {
        let scale = (self.scale as i64)
            .checked_add(n as i64)
            .and_then(|s| i32::try_from(s).ok())
            .ok_or(Error::Arithmetic(ArithmeticError::ScaleOverflow))?;
        Ok(BigDecimal { unscaled: self.unscaled.clone(), scale })
    }

    /// Shifts the decimal point `n` places right; `move_point_left(-n)`.
    pub fn move_point_right(&self, n: i32) -> Result<Self, Error> {
        let scale = (self.scale as i64)
            .checked_sub(n as i64)
            .and_then(|s| i32::try_from(s).ok())
            .ok_or(Error::Arithmetic(ArithmeticError::ScaleOverflow))?;
        Ok(BigDecimal { unscaled: self.unscaled.clone(), scale })
    }

    /// Removes trailing zero digits from the unscaled value, decrementing
    /// the scale to match. Zero always collapses to the canonical `(0, 0)`.
    pub fn strip_trailing_zeros(&self) -> Self {
        if self.unscaled.is_zero() {
            return BigDecimal { unscaled: BigInteger::zero(), scale: 0 };
        }
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        let ten = BigInteger::from_i64(10);
        loop {
            let (q, r) = unscaled.divide_and_remainder(&ten).expect("ten is never zero");
            if !r.is_zero() {
                break;
            }
            unscaled = q;
            scale -= 1;
        }
        BigDecimal { unscaled, scale }
    }

    /// Rounds so the unscaled value has at most `mc.precision()` significant
    /// digits, adjusting the scale to compensate. `mc.precision() == 0`
    /// leaves the value exact.
    pub fn round(&self, mc: &MathContext) -> Result<Self, Error> {
        if mc.precision() == 0 {
            return Ok(self.clone());
        }
        let digits = self.unscaled.digit_count() as i32;
        let drop = digits - mc.precision();
        if drop <= 0 {
            return Ok(self.clone());
        }
        let rounded = round_discard_digits(&self.unscaled, drop as u32, mc.rounding_mode())?;
        let scale = self.scale - drop;
        // Rounding away from zero can carry into an extra digit (e.g. 995 at
        // precision 2 rounds to 100, not 99): the carried digit is always a
        // trailing zero, so one more exact divide-by-ten restores precision.
        if rounded.digit_count() as i32 > mc.precision() {
            let (carried, _) = rounded.divide_by_power_of_ten(1);
            Ok(BigDecimal { unscaled: carried, scale: scale - 1 })
        } else {
            Ok(BigDecimal { unscaled: rounded, scale })
        }
    }

    /// `abs(self)`, then [`BigDecimal::round`] under `mc`.
    pub fn abs_with_context(&self, mc: &MathContext) -> Result<Self, Error> {
        self.abs().round(mc)
    }

    /// Aligns scales (as for addition) and compares the aligned unscaled
    /// values. This is the *value* ordering — see the [`BigDecimal`]
    /// doc comment for how it differs from [`PartialEq`].
    pub fn compare_to(&self, other: &Self) -> Ordering {
        // `scale = max(self.scale, other.scale)` so the per-operand shift is
        // always in `0..=(i32::MAX - i32::MIN)`, which fits a `u32`: alignment
        // of two valid `i32` scales can never hit `ArithmeticError::ScaleOverflow`.
        let (ua, ub, _) = crate::ops::common::align(self, other)
            .expect("aligning two i32 scales never overflows a u32 shift");
        ua.compare(&ub)
    }

    /// Truncates toward zero to a `BigInteger`.
    pub fn to_big_integer(&self) -> BigInteger {
        if self.scale <= 0 {
            self.unscaled.multiply_by_power_of_ten((-self.scale) as u32)
        } else {
            self.unscaled.divide_by_power_of_ten(self.scale as u32).0
        }
    }

    /// Truncates toward zero, then reduces modulo `2^32` and reinterprets
    /// the result as two's-complement (wraparound semantics).
    pub fn to_i32(&self) -> i32 {
        (self.to_big_integer_mod_pow2(32) as u32) as i32
    }

    /// Truncates toward zero, then reduces modulo `2^64` and reinterprets
    /// the result as two's-complement (wraparound semantics).
    pub fn to_i64(&self) -> i64 {
        self.to_big_integer_mod_pow2(64) as i64
    }

    fn to_big_integer_mod_pow2(&self, bits: u32) -> u64 {
        let truncated = self.to_big_integer();
        let modulus = BigInteger::from_i128(1i128 << bits);
        let (_, mut r) = truncated.divide_and_remainder(&modulus).expect("modulus is never zero");
        if r.sign() < 0 {
            r = r.add(&modulus);
        }
        r.to_u128_magnitude() as u64
    }

    /// The nearest `f64`, via exact decimal text and the platform's
    /// correctly-rounded decimal-to-binary parser.
    pub fn to_f64(&self) -> f64 {
        self.exact_exponential_text().parse::<f64>().expect("generated decimal text is always well-formed")
    }

    /// The nearest `f32`, via the same strategy as [`BigDecimal::to_f64`].
    pub fn to_f32(&self) -> f32 {
        self.exact_exponential_text().parse::<f32>().expect("generated decimal text is always well-formed")
    }

    fn exact_exponential_text(&self) -> String {
        let sign = if self.unscaled.sign() < 0 { "-" } else { "" };
        format!("{}{}e{}", sign, self.unscaled.abs(), -(self.scale as i64))
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale && self.unscaled == other.unscaled
    }
}
impl Eq for BigDecimal {}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }

    /// The operand whose value is not greater; returns `self` on a tie.
    ///
    /// Overridden because [`Ord`]'s default `min` returns the *second*
    /// argument on a tie under some implementations, whereas this crate's
    /// spec mandates the first.
    fn min(self, other: Self) -> Self {
        if self.compare_to(&other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    /// The operand whose value is not smaller; returns `self` on a tie.
    ///
    /// Overridden for the same reason as [`BigDecimal`]'s `min`: [`Ord`]'s
    /// default `max` returns the second argument on a tie, not the first.
    fn max(self, other: Self) -> Self {
        if self.compare_to(&other) == Ordering::Less {
            other
        } else {
            self
        }
    }
}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::str::fmt::to_canonical_string(self))
    }
}

impl FromStr for BigDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::parse(s)
    }
}

/// `base^n` via exponentiation by squaring, used by exact `f64`/`f32`
/// decomposition (`base` is `2` or `5`, `n` bounded by the IEEE-754 exponent
/// range so this never needs to be asymptotically fast).
fn pow_small(base: i64, n: u32) -> BigInteger {
    let mut result = BigInteger::one();
    let mut b = BigInteger::from_i64(base);
    let mut exp = n;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.multiply(&b);
        }
        exp >>= 1;
        if exp > 0 {
            b = b.multiply(&b);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unscaled_has_scale_zero() {
        let d = BigDecimal::from_unscaled(BigInteger::from_i64(42));
        assert_eq!(d.scale(), 0);
        assert_eq!(d.unscaled_value(), BigInteger::from_i64(42));
    }

    #[test]
    fn set_scale_exact_enlargement() {
        let d = BigDecimal::from_i64_with_scale(1234, 2);
        let widened = d.set_scale(5).unwrap();
        assert_eq!(widened.unscaled_value(), BigInteger::from_i64(1_234_000));
        assert_eq!(widened.scale(), 5);
    }

    #[test]
    fn set_scale_unnecessary_fails_when_rounding_needed() {
        let d = BigDecimal::from_i64_with_scale(1235, 2);
        assert!(d.set_scale(1).is_err());
        assert!(d.set_scale_with_mode(1, RoundingMode::HalfUp).is_ok());
    }

    #[test]
    fn move_point_roundtrips() {
        let d = BigDecimal::from_i64_with_scale(12345, 3);
        for n in [-5, -1, 0, 1, 7] {
            let moved = d.move_point_right(n).unwrap();
            assert_eq!(moved.move_point_left(n).unwrap(), d);
        }
    }

    #[test]
    fn move_point_rejects_scale_overflow() {
        let d = BigDecimal::from_i64_with_scale(1, i32::MAX);
        assert!(d.move_point_left(1).is_err());
        let d = BigDecimal::from_i64_with_scale(1, i32::MIN);
        assert!(d.move_point_right(1).is_err());
    }

    #[test]
    fn round_carries_into_extra_digit() {
        let d = BigDecimal::from_i64_with_scale(995, 0);
        let mc = MathContext::with_rounding_mode(2, RoundingMode::HalfUp).unwrap();
        let rounded = d.round(&mc).unwrap();
        assert_eq!(rounded.unscaled_value(), BigInteger::from_i64(10));
        assert_eq!(rounded.scale(), -2);
        assert_eq!(rounded.unscaled.digit_count(), 2);
    }

    #[test]
    fn strip_trailing_zeros_collapses_zero() {
        let z = BigDecimal::from_i64_with_scale(0, 9);
        let stripped = z.strip_trailing_zeros();
        assert_eq!(stripped.scale(), 0);
        assert_eq!(stripped.unscaled_value(), BigInteger::zero());
    }

    #[test]
    fn equals_is_stricter_than_compare_to() {
        let a = BigDecimal::from_i64_with_scale(10, 1);
        let b = BigDecimal::from_i64_with_scale(100, 2);
        assert_ne!(a, b);
        assert_eq!(a.compare_to(&b), Ordering::Equal);
    }

    #[test]
    fn round_under_math_context_matches_known_example() {
        let d = BigDecimal::parse("-12380945E+61").unwrap().abs();
        let mc = MathContext::with_rounding_mode(6, RoundingMode::HalfDown).unwrap();
        let rounded = d.round(&mc).unwrap();
        assert_eq!(rounded.unscaled_value(), BigInteger::from_i64(123_809));
        assert_eq!(rounded.scale(), -63);
    }

    #[test]
    fn to_i32_matches_known_truncation() {
        let d = BigDecimal::parse("23423419083091823091283933").unwrap();
        assert_eq!(d.to_i32(), -249_268_259);
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        assert!(BigDecimal::from_f64(f64::NAN).is_err());
        assert!(BigDecimal::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn from_f64_zero_is_canonical() {
        let d = BigDecimal::from_f64(-0.0).unwrap();
        assert_eq!(d.unscaled_value(), BigInteger::zero());
        assert_eq!(d.scale(), 0);
    }

    #[test]
    fn from_f64_one_is_exact() {
        let d = BigDecimal::from_f64(1.0).unwrap();
        assert_eq!(d.compare_to(&BigDecimal::from_i64(1)), Ordering::Equal);
    }
}
