//! Magnitude division.
//!
//! A single-limb divisor goes straight through direct base-10^9 long
//! division. A multi-limb divisor falls back to classic schoolbook long
//! division carried out over decimal digits: the nine multiples of the
//! divisor are precomputed once, then each digit of the dividend is folded
//! into a running remainder against which the largest non-exceeding
//! multiple is selected. This is the textbook algorithm generalized to an
//! arbitrary-precision digit string — simpler to verify than Knuth's
//! Algorithm D, at the cost of one divisor addition and one subtraction per
//! dividend digit rather than per dividend limb.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use super::{add_magnitude, cmp_magnitude, div_small_magnitude, magnitude_from_digit_slice, magnitude_to_digits, sub_magnitude};
use core::cmp::Ordering;

/// Requires `a >= b` (as magnitudes) and `b` non-empty (non-zero).
/// Returns `(quotient, remainder)`, both canonically trimmed.
pub(crate) fn div_rem_magnitude(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    if b.len() == 1 {
        let (q, r) = div_small_magnitude(a, b[0] as u64);
        let r_mag = if r == 0 { Vec::new() } else { vec![r as u32] };
        return (q, r_mag);
    }

    let dividend_digits = magnitude_to_digits(a);

    // multiples[k] = k * b, for k in 0..=9.
    let mut multiples: Vec<Vec<u32>> = Vec::with_capacity(10);
    multiples.push(Vec::new());
    multiples.push(b.to_vec());
    for k in 2..=9u32 {
        let prev = multiples[(k - 1) as usize].clone();
        multiples.push(add_magnitude(&prev, b));
    }

    let mut remainder: Vec<u32> = Vec::new();
    let mut quotient_digits: Vec<u8> = Vec::with_capacity(dividend_digits.len());

    for &digit in &dividend_digits {
        remainder = add_magnitude(&mul_by_ten(&remainder), &[digit as u32]);
        let mut chosen = 0u8;
        for k in (0..=9u8).rev() {
            if cmp_magnitude(&remainder, &multiples[k as usize]) != Ordering::Less {
                chosen = k;
                break;
            }
        }
        remainder = sub_magnitude(&remainder, &multiples[chosen as usize]);
        quotient_digits.push(chosen);
    }

    let quotient = magnitude_from_digit_slice(&quotient_digits);
    (quotient, remainder)
}

fn mul_by_ten(mag: &[u32]) -> Vec<u32> {
    if mag.is_empty() {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(mag.len() + 1);
    let mut carry: u64 = 0;
    for &limb in mag {
        let product = limb as u64 * 10 + carry;
        result.push((product % super::BASE) as u32);
        carry = product / super::BASE;
    }
    if carry > 0 {
        result.push(carry as u32);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::big_integer::BigInteger;

    #[test]
    fn divides_exactly_with_multi_limb_divisor() {
        let a = BigInteger::parse("1000000000000000000000000000000").unwrap();
        let b = BigInteger::parse("1000000000000000000000").unwrap();
        let (q, r) = a.divide_and_remainder(&b).unwrap();
        assert_eq!(q.to_string(), "1000000000");
        assert_eq!(r, BigInteger::zero());
    }

    #[test]
    fn quotient_and_remainder_satisfy_division_identity() {
        let a = BigInteger::parse("99999999999999999999999999999999999").unwrap();
        let b = BigInteger::parse("31415926535897932384").unwrap();
        let (q, r) = a.divide_and_remainder(&b).unwrap();
        assert_eq!(q.multiply(&b).add(&r), a);
        assert_eq!(cmp_magnitude(r.magnitude_limbs(), b.magnitude_limbs()), Ordering::Less);
    }

    #[test]
    fn single_limb_divisor_path_agrees_with_multi_limb_path() {
        let a = BigInteger::parse("123456789123456789123456789").unwrap();
        let b_small = BigInteger::from_i64(7);
        let b_multi = BigInteger::parse("7000000000").unwrap();
        let (q_small, r_small) = a.divide_and_remainder(&b_small).unwrap();
        let (q_multi, r_multi) = a.divide_and_remainder(&b_multi).unwrap();
        assert_eq!(q_small.multiply(&b_small).add(&r_small), a);
        assert_eq!(q_multi.multiply(&b_multi).add(&r_multi), a);
    }
}
