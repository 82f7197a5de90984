//! Schoolbook magnitude multiplication in base 10^9.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::{trim, BASE};

/// Multiplies two canonically-trimmed magnitudes.
///
/// Each limb product fits in a `u64` (limbs are `< 10^9`, so a product is
/// `< 10^18`), and per-column accumulation across up to a few billion limbs
/// would be needed to overflow `u64` headroom above `10^18`, which is far
/// beyond any magnitude this crate is expected to carry; accumulation uses
/// `u128` regardless to keep the carry propagation exact without a second
/// audit of the bound.
pub(crate) fn mul_magnitude(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut acc = vec![0u128; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            acc[i + j] += x as u128 * y as u128;
        }
    }
    let mut result = Vec::with_capacity(acc.len());
    let mut carry: u128 = 0;
    for limb in acc {
        let total = limb + carry;
        result.push((total % BASE as u128) as u32);
        carry = total / BASE as u128;
    }
    while carry > 0 {
        result.push((carry % BASE as u128) as u32);
        carry /= BASE as u128;
    }
    trim(&mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::big_integer::BigInteger;

    #[test]
    fn matches_scalar_arithmetic_for_small_values() {
        let a = BigInteger::from_i64(123_456_789);
        let b = BigInteger::from_i64(987_654_321);
        assert_eq!(a.multiply(&b).to_string(), "121932631112635269");
    }

    #[test]
    fn zero_absorbs() {
        let a = BigInteger::parse("123456789012345678901234567890").unwrap();
        assert_eq!(a.multiply(&BigInteger::zero()), BigInteger::zero());
    }

    #[test]
    fn handles_carries_across_many_limbs() {
        let nines = BigInteger::parse(&"9".repeat(30)).unwrap();
        let product = nines.multiply(&nines);
        // (10^30 - 1)^2 = 10^60 - 2*10^30 + 1
        let mut expected = String::from("9".repeat(29));
        expected.push('8');
        expected.push_str(&"0".repeat(29));
        expected.push('1');
        assert_eq!(product.to_string(), expected);
    }
}
