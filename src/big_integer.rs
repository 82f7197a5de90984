//! An arbitrary-precision signed integer.
//!
//! Magnitude is stored as base-10^9 limbs, little-endian, canonically
//! trimmed (no trailing zero limb; zero is the empty-magnitude value).
//! This base is chosen over base-2^32 because the dominant operations in
//! this crate are decimal-text conversion and power-of-ten scaling, both
//! of which become limb-aligned (and therefore cheap) in base 10^9.

mod div;
mod mul;
mod pow10;

pub(crate) use div::div_rem_magnitude;
pub(crate) use mul::mul_magnitude;

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::{Error, FormatError};

/// A single limb holds a value in `0..BASE`.
pub(crate) const BASE: u64 = 1_000_000_000;
pub(crate) const BASE_DIGITS: usize = 9;

/// An arbitrary-precision signed integer: `sign * magnitude`.
#[derive(Clone, Debug, Default)]
pub struct BigInteger {
    pub(crate) sign: i8,
    pub(crate) magnitude: Vec<u32>,
}

/// Removes any trailing (most-significant) zero limbs.
pub(crate) fn trim(magnitude: &mut Vec<u32>) {
    while matches!(magnitude.last(), Some(0)) {
        magnitude.pop();
    }
}

/// Compares two magnitudes (unsigned, little-endian, canonically trimmed).
pub(crate) fn cmp_magnitude(a: &[u32], b: &[u32]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {
            for i in (0..a.len()).rev() {
                match a[i].cmp(&b[i]) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            Ordering::Equal
        }
        other => other,
    }
}

pub(crate) fn add_magnitude(a: &[u32], b: &[u32]) -> Vec<u32> {
    let len = a.len().max(b.len());
    let mut result = Vec::with_capacity(len + 1);
    let mut carry: u64 = 0;
    for i in 0..len {
        let x = *a.get(i).unwrap_or(&0) as u64;
        let y = *b.get(i).unwrap_or(&0) as u64;
        let s = x + y + carry;
        result.push((s % BASE) as u32);
        carry = s / BASE;
    }
    if carry > 0 {
        result.push(carry as u32);
    }
    result
}

/// Requires `a >= b` (as magnitudes).
pub(crate) fn sub_magnitude(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut result = Vec::with_capacity(a.len());
    let mut borrow: i64 = 0;
    for i in 0..a.len() {
        let x = a[i] as i64;
        let y = *b.get(i).unwrap_or(&0) as i64;
        let mut d = x - y - borrow;
        if d < 0 {
            d += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(d as u32);
    }
    trim(&mut result);
    result
}

/// Divides a magnitude by a single limb, returning `(quotient, remainder)`.
pub(crate) fn div_small_magnitude(a: &[u32], divisor: u64) -> (Vec<u32>, u64) {
    let mut quotient = vec![0u32; a.len()];
    let mut rem: u64 = 0;
    for i in (0..a.len()).rev() {
        let cur = rem * BASE + a[i] as u64;
        quotient[i] = (cur / divisor) as u32;
        rem = cur % divisor;
    }
    trim(&mut quotient);
    (quotient, rem)
}

fn magnitude_from_digits(digits: &str) -> Vec<u32> {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return Vec::new();
    }
    let bytes = trimmed.as_bytes();
    let len = bytes.len();
    let mut limbs = Vec::with_capacity(len / BASE_DIGITS + 1);
    let mut end = len;
    while end > 0 {
        let start = end.saturating_sub(BASE_DIGITS);
        // Safety: `bytes` is all ASCII digits, so any byte range is valid UTF-8.
        let chunk = core::str::from_utf8(&bytes[start..end]).unwrap();
        limbs.push(chunk.parse::<u32>().unwrap());
        end = start;
    }
    limbs
}

/// Builds a magnitude from a most-significant-first slice of decimal digits.
pub(crate) fn magnitude_from_digit_slice(digits: &[u8]) -> Vec<u32> {
    let mut start = 0;
    while start < digits.len() && digits[start] == 0 {
        start += 1;
    }
    let digits = &digits[start..];
    if digits.is_empty() {
        return Vec::new();
    }
    let mut limbs = Vec::with_capacity(digits.len() / BASE_DIGITS + 1);
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(BASE_DIGITS);
        let mut value: u32 = 0;
        for &d in &digits[start..end] {
            value = value * 10 + d as u32;
        }
        limbs.push(value);
        end = start;
    }
    limbs
}

/// Renders a magnitude (most-significant-first decimal digits, no leading zeros).
pub(crate) fn magnitude_to_digits(mag: &[u32]) -> Vec<u8> {
    if mag.is_empty() {
        return vec![0];
    }
    let mut s = String::new();
    for i in (0..mag.len()).rev() {
        if i == mag.len() - 1 {
            s.push_str(&mag[i].to_string());
        } else {
            s.push_str(&format_limb(mag[i]));
        }
    }
    s.bytes().map(|b| b - b'0').collect()
}

fn format_limb(limb: u32) -> String {
    let s = limb.to_string();
    let mut padded = String::with_capacity(BASE_DIGITS);
    for _ in 0..(BASE_DIGITS - s.len()) {
        padded.push('0');
    }
    padded.push_str(&s);
    padded
}

impl BigInteger {
    /// The canonical zero value.
    pub fn zero() -> Self {
        BigInteger { sign: 0, magnitude: Vec::new() }
    }

    /// The value `1`.
    pub fn one() -> Self {
        BigInteger { sign: 1, magnitude: vec![1] }
    }

    /// Parses a signed decimal integer: optional `+`/`-`, then one or more `[0-9]`.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(Error::Format(FormatError::Empty));
        }
        let (negative, start) = match bytes[0] {
            b'+' => (false, 1),
            b'-' => (true, 1),
            _ => (false, 0),
        };
        let digits = &s[start..];
        if digits.is_empty() {
            return Err(Error::Format(FormatError::Empty));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Format(FormatError::InvalidDigit));
        }
        let magnitude = magnitude_from_digits(digits);
        let sign = if magnitude.is_empty() {
            0
        } else if negative {
            -1
        } else {
            1
        };
        Ok(BigInteger { sign, magnitude })
    }

    /// Builds a value directly from a machine integer.
    pub fn from_i64(value: i64) -> Self {
        BigInteger::from_i128(value as i128)
    }

    /// Builds a value directly from a 128-bit machine integer.
    pub fn from_i128(value: i128) -> Self {
        if value == 0 {
            return BigInteger::zero();
        }
        let sign = if value < 0 { -1 } else { 1 };
        let mut mag = value.unsigned_abs();
        let mut limbs = Vec::new();
        while mag > 0 {
            limbs.push((mag % BASE as u128) as u32);
            mag /= BASE as u128;
        }
        BigInteger { sign, magnitude: limbs }
    }

    /// `-1`, `0`, or `1`.
    pub fn sign(&self) -> i8 {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    /// Flips the sign; `negate(0) == 0`.
    pub fn negate(&self) -> Self {
        BigInteger { sign: -self.sign, magnitude: self.magnitude.clone() }
    }

    /// Returns a value with `sign >= 0`.
    pub fn abs(&self) -> Self {
        BigInteger { sign: self.sign.abs(), magnitude: self.magnitude.clone() }
    }

    pub fn add(&self, other: &Self) -> Self {
        if self.sign == 0 {
            return other.clone();
        }
        if other.sign == 0 {
            return self.clone();
        }
        if self.sign == other.sign {
            BigInteger { sign: self.sign, magnitude: add_magnitude(&self.magnitude, &other.magnitude) }
        } else {
            match cmp_magnitude(&self.magnitude, &other.magnitude) {
                Ordering::Equal => BigInteger::zero(),
                Ordering::Greater => {
                    BigInteger { sign: self.sign, magnitude: sub_magnitude(&self.magnitude, &other.magnitude) }
                }
                Ordering::Less => {
                    BigInteger { sign: other.sign, magnitude: sub_magnitude(&other.magnitude, &self.magnitude) }
                }
            }
        }
    }

    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    pub fn multiply(&self, other: &Self) -> Self {
        if self.sign == 0 || other.sign == 0 {
            return BigInteger::zero();
        }
        BigInteger {
            sign: self.sign * other.sign,
            magnitude: mul_magnitude(&self.magnitude, &other.magnitude),
        }
    }

    /// Multiplies by a small (single-limb) non-negative factor.
    pub(crate) fn mul_small(&self, factor: u32) -> Self {
        if self.sign == 0 || factor == 0 {
            return BigInteger::zero();
        }
        BigInteger { sign: self.sign, magnitude: mul_magnitude(&self.magnitude, &[factor]) }
    }

    /// For `other != 0`, returns `(q, r)` with `self = q*other + r`, `|r| < |other|`,
    /// and `sign(r) == sign(self)` when `r != 0` (truncation toward zero).
    pub fn divide_and_remainder(&self, other: &Self) -> Result<(Self, Self), Error> {
        if other.sign == 0 {
            return Err(crate::error::ArithmeticError::DivisionByZero.into());
        }
        if self.sign == 0 {
            return Ok((BigInteger::zero(), BigInteger::zero()));
        }
        if cmp_magnitude(&self.magnitude, &other.magnitude) == Ordering::Less {
            return Ok((BigInteger::zero(), self.clone()));
        }
        let (q_mag, r_mag) = div_rem_magnitude(&self.magnitude, &other.magnitude);
        let q_sign = if q_mag.is_empty() { 0 } else { self.sign * other.sign };
        let r_sign = if r_mag.is_empty() { 0 } else { self.sign };
        Ok((BigInteger { sign: q_sign, magnitude: q_mag }, BigInteger { sign: r_sign, magnitude: r_mag }))
    }

    /// Three-way comparison by signed value.
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal if self.sign == 0 => Ordering::Equal,
            Ordering::Equal if self.sign > 0 => cmp_magnitude(&self.magnitude, &other.magnitude),
            Ordering::Equal => cmp_magnitude(&other.magnitude, &self.magnitude),
            other => other,
        }
    }

    /// Position of the highest set magnitude bit; `0` for zero.
    pub fn bit_length(&self) -> u32 {
        if self.sign == 0 {
            return 0;
        }
        let mut mag = self.magnitude.clone();
        let mut count = 0u32;
        while !mag.is_empty() {
            let (q, _r) = div_small_magnitude(&mag, 2);
            mag = q;
            count += 1;
        }
        count
    }

    /// Returns `self * 10^n` for `n >= 0`, computed via exponentiation by
    /// squaring of `10^n` so the multiplication count stays logarithmic in `n`.
    pub fn multiply_by_power_of_ten(&self, n: u32) -> Self {
        self.multiply(&pow10::pow10(n))
    }

    /// Returns `(q, r)` such that `self = q*10^n + r`, `|r| < 10^n`,
    /// `sign(r) == sign(self)`, for `n >= 0`.
    pub fn divide_by_power_of_ten(&self, n: u32) -> (Self, Self) {
        self.divide_and_remainder(&pow10::pow10(n))
            .expect("10^n is never zero")
    }

    /// `10^n`, computed via exponentiation by squaring.
    pub fn pow10(n: u32) -> Self {
        pow10::pow10(n)
    }

    /// Number of decimal digits in `|self|` (`1` for zero).
    pub fn digit_count(&self) -> u32 {
        if self.magnitude.is_empty() {
            return 1;
        }
        let top = *self.magnitude.last().expect("non-empty magnitude");
        (self.magnitude.len() as u32 - 1) * BASE_DIGITS as u32 + top.to_string().len() as u32
    }

    pub(crate) fn magnitude_limbs(&self) -> &[u32] {
        &self.magnitude
    }

    /// `true` if `|self|` is odd. `BASE` is even, so parity is carried
    /// entirely by the least-significant limb.
    pub(crate) fn is_odd(&self) -> bool {
        matches!(self.magnitude.first(), Some(limb) if limb % 2 == 1)
    }

    /// Renders a non-negative magnitude known to fit in 128 bits as a `u128`.
    /// Used for small post-modulus values (e.g. `|self| < 2^64`).
    pub(crate) fn to_u128_magnitude(&self) -> u128 {
        let mut acc: u128 = 0;
        for &limb in self.magnitude.iter().rev() {
            acc = acc * BASE as u128 + limb as u128;
        }
        acc
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign < 0 {
            f.write_str("-")?;
        }
        if self.magnitude.is_empty() {
            return f.write_str("0");
        }
        for i in (0..self.magnitude.len()).rev() {
            if i == self.magnitude.len() - 1 {
                write!(f, "{}", self.magnitude[i])?;
            } else {
                write!(f, "{}", format_limb(self.magnitude[i]))?;
            }
        }
        Ok(())
    }
}

impl FromStr for BigInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInteger::parse(s)
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.magnitude == other.magnitude
    }
}
impl Eq for BigInteger {}

impl core::hash::Hash for BigInteger {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.magnitude.hash(state);
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        BigInteger::from_i64(value)
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        BigInteger::from_i64(value as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_roundtrip() {
        for text in ["0", "1", "-1", "123456789012345678901234567890", "-999999999999999999999"] {
            let n = BigInteger::parse(text).unwrap();
            assert_eq!(n.to_string(), text);
        }
    }

    #[test]
    fn rejects_empty_and_invalid() {
        assert!(BigInteger::parse("").is_err());
        assert!(BigInteger::parse("+").is_err());
        assert!(BigInteger::parse("12a").is_err());
        assert!(BigInteger::parse("1.2").is_err());
    }

    #[test]
    fn add_and_subtract_are_inverse() {
        let a = BigInteger::parse("123456789012345678901234567890").unwrap();
        let b = BigInteger::parse("-98765432109876543210").unwrap();
        let sum = a.add(&b);
        assert_eq!(sum.subtract(&b), a);
        assert_eq!(a.add(&a.negate()), BigInteger::zero());
    }

    #[test]
    fn multiply_matches_known_product() {
        let a = BigInteger::parse("123456789").unwrap();
        let b = BigInteger::parse("987654321").unwrap();
        let product = a.multiply(&b);
        assert_eq!(product.to_string(), "121932631112635269");
    }

    #[test]
    fn divide_and_remainder_truncates_toward_zero() {
        let a = BigInteger::parse("23423419083091823091283933").unwrap();
        let b = BigInteger::parse("7").unwrap();
        let (q, r) = a.divide_and_remainder(&b).unwrap();
        assert_eq!(q.multiply(&b).add(&r), a);

        let a = BigInteger::parse("-7").unwrap();
        let b = BigInteger::parse("2").unwrap();
        let (q, r) = a.divide_and_remainder(&b).unwrap();
        assert_eq!(q, BigInteger::parse("-3").unwrap());
        assert_eq!(r, BigInteger::parse("-1").unwrap());
    }

    #[test]
    fn divide_by_zero_errors() {
        let a = BigInteger::one();
        assert!(a.divide_and_remainder(&BigInteger::zero()).is_err());
    }

    #[test]
    fn divide_by_multi_limb_divisor() {
        let a = BigInteger::parse("111111111111111111111111111111111111111").unwrap();
        let b = BigInteger::parse("987654321987654321").unwrap();
        let (q, r) = a.divide_and_remainder(&b).unwrap();
        assert_eq!(q.multiply(&b).add(&r), a);
        assert_eq!(r.compare(&b.abs()), Ordering::Less);
    }

    #[test]
    fn pow10_matches_repeated_multiplication() {
        let mut expected = BigInteger::one();
        let ten = BigInteger::from_i64(10);
        for _ in 0..17 {
            expected = expected.multiply(&ten);
        }
        assert_eq!(BigInteger::pow10(17), expected);
    }

    #[test]
    fn bit_length_matches_known_values() {
        assert_eq!(BigInteger::zero().bit_length(), 0);
        assert_eq!(BigInteger::one().bit_length(), 1);
        assert_eq!(BigInteger::from_i64(255).bit_length(), 8);
        assert_eq!(BigInteger::from_i64(256).bit_length(), 9);
    }

    #[test]
    fn digit_count_matches_string_length() {
        let n = BigInteger::parse("-123456789012345678901234567890").unwrap();
        assert_eq!(n.digit_count(), 30);
        assert_eq!(BigInteger::zero().digit_count(), 1);
    }
}
