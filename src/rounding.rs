//! Policies for discarding low-order decimal digits.

use crate::big_integer::BigInteger;
use crate::error::{ArgumentError, Error, FormatError};
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

/// How to round when an operation must discard digits.
///
/// Given an unscaled integer `u` being reduced by `k >= 1` decimal digits,
/// producing quotient `q` and remainder `r` such that `u = q*10^k + r`,
/// `sign(r) = sign(u)`, and `0 <= |r| < 10^k`, each mode decides whether
/// `q` is additionally adjusted by one away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Always round away from zero when any discarded digit is non-zero.
    Up,
    /// Always truncate toward zero.
    Down,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
    /// Round to nearest; ties round away from zero.
    HalfUp,
    /// Round to nearest; ties round toward zero.
    HalfDown,
    /// Round to nearest; ties round to the neighbor with an even last digit.
    HalfEven,
    /// Never round; fail if any digit would be discarded.
    Unnecessary,
}

impl RoundingMode {
    /// The eight canonical uppercase names accepted by [`MathContext`](crate::MathContext) text input.
    pub fn from_uppercase_name(name: &str) -> Result<Self, Error> {
        match name {
            "UP" => Ok(RoundingMode::Up),
            "DOWN" => Ok(RoundingMode::Down),
            "CEILING" => Ok(RoundingMode::Ceiling),
            "FLOOR" => Ok(RoundingMode::Floor),
            "HALFUP" => Ok(RoundingMode::HalfUp),
            "HALFDOWN" => Ok(RoundingMode::HalfDown),
            "HALFEVEN" => Ok(RoundingMode::HalfEven),
            "UNNECESSARY" => Ok(RoundingMode::Unnecessary),
            _ => Err(Error::Format(FormatError::InvalidRoundingModeName)),
        }
    }

    /// The legacy ordinal selector (`0..=7`, in the declaration order above),
    /// matching `java.math.RoundingMode.valueOf(int)`'s mapping from the
    /// pre-enum `BigDecimal.ROUND_*` integer constants. Unknown selectors
    /// fail with [`ArgumentError::UnknownRoundingSelector`], not a
    /// [`FormatError`] — this is a programming-interface precondition, not
    /// malformed text.
    pub fn from_ordinal(selector: i32) -> Result<Self, Error> {
        match selector {
            0 => Ok(RoundingMode::Up),
            1 => Ok(RoundingMode::Down),
            2 => Ok(RoundingMode::Ceiling),
            3 => Ok(RoundingMode::Floor),
            4 => Ok(RoundingMode::HalfUp),
            5 => Ok(RoundingMode::HalfDown),
            6 => Ok(RoundingMode::HalfEven),
            7 => Ok(RoundingMode::Unnecessary),
            _ => Err(ArgumentError::UnknownRoundingSelector.into()),
        }
    }

    /// The mixed-case enumerator name, as emitted by [`fmt::Display`] and by
    /// `MathContext::to_string`.
    pub fn name(self) -> &'static str {
        match self {
            RoundingMode::Up => "Up",
            RoundingMode::Down => "Down",
            RoundingMode::Ceiling => "Ceiling",
            RoundingMode::Floor => "Floor",
            RoundingMode::HalfUp => "HalfUp",
            RoundingMode::HalfDown => "HalfDown",
            RoundingMode::HalfEven => "HalfEven",
            RoundingMode::Unnecessary => "Unnecessary",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoundingMode::from_uppercase_name(s)
    }
}

/// Decide whether the magnitude of a truncated quotient `q` should be
/// incremented by one, given a division `dividend = q*divisor + r` that
/// produced discarded remainder magnitude `r_abs` against divisor magnitude
/// `divisor_abs`. `value_sign` is the sign of the dividend (and thus of `q`
/// before any adjustment, unless `q` is zero). `quotient_is_odd` reflects
/// the least-significant decimal digit of `|q|` before adjustment, needed
/// only for `HalfEven`.
///
/// Ties are detected by comparing `2*r_abs` to `divisor_abs` rather than
/// precomputing `divisor_abs / 2`, so this works whether or not the divisor
/// is even (a plain `BigInteger` division can have an odd divisor; a
/// power-of-ten divisor never does, but the same code path serves both).
pub(crate) fn should_round_away_from_zero(
    mode: RoundingMode,
    value_sign: i8,
    quotient_is_odd: bool,
    r_abs: &BigInteger,
    divisor_abs: &BigInteger,
) -> Result<bool, Error> {
    if r_abs.is_zero() {
        return Ok(false);
    }
    match mode {
        RoundingMode::Up => Ok(true),
        RoundingMode::Down => Ok(false),
        RoundingMode::Ceiling => Ok(value_sign > 0),
        RoundingMode::Floor => Ok(value_sign < 0),
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
            let two_r = r_abs.add(r_abs);
            match two_r.compare(divisor_abs) {
                Ordering::Greater => Ok(true),
                Ordering::Less => Ok(false),
                Ordering::Equal => match mode {
                    RoundingMode::HalfUp => Ok(true),
                    RoundingMode::HalfDown => Ok(false),
                    RoundingMode::HalfEven => Ok(quotient_is_odd),
                    _ => unreachable!(),
                },
            }
        }
        RoundingMode::Unnecessary => Err(Error::Arithmetic(crate::error::ArithmeticError::RoundingNecessary)),
    }
}

/// Applies rounding adjustment to a truncated `(quotient, remainder)` pair
/// produced by dividing a value of sign `value_sign` by a divisor of
/// magnitude `divisor_abs`.
pub(crate) fn round_quotient(
    quotient: BigInteger,
    remainder: BigInteger,
    divisor_abs: &BigInteger,
    value_sign: i8,
    mode: RoundingMode,
) -> Result<BigInteger, Error> {
    let r_abs = remainder.abs();
    let quotient_is_odd = quotient.is_odd();
    let round_away = should_round_away_from_zero(mode, value_sign, quotient_is_odd, &r_abs, divisor_abs)?;
    if round_away {
        let adjust_sign = if quotient.is_zero() { value_sign } else { quotient.sign() };
        Ok(quotient.add(&BigInteger::from_i64(adjust_sign as i64)))
    } else {
        Ok(quotient)
    }
}

/// Discards the `k` least-significant decimal digits of `u`, rounding the
/// remaining digits per `mode`. `k == 0` is the identity.
pub(crate) fn round_discard_digits(u: &BigInteger, k: u32, mode: RoundingMode) -> Result<BigInteger, Error> {
    if k == 0 {
        return Ok(u.clone());
    }
    let (q, r) = u.divide_by_power_of_ten(k);
    let divisor = BigInteger::pow10(k);
    round_quotient(q, r, &divisor, u.sign(), mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        let modes = [
            RoundingMode::Up,
            RoundingMode::Down,
            RoundingMode::Ceiling,
            RoundingMode::Floor,
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
            RoundingMode::Unnecessary,
        ];
        for mode in modes {
            let upper = mode.name().to_uppercase();
            assert_eq!(RoundingMode::from_uppercase_name(&upper), Ok(mode));
        }
    }

    #[test]
    fn rejects_unknown_name() {
        assert!(RoundingMode::from_uppercase_name("SIDEWAYS").is_err());
    }

    #[test]
    fn ordinal_roundtrips_for_known_selectors() {
        let modes = [
            RoundingMode::Up,
            RoundingMode::Down,
            RoundingMode::Ceiling,
            RoundingMode::Floor,
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
            RoundingMode::Unnecessary,
        ];
        for (ordinal, mode) in modes.into_iter().enumerate() {
            assert_eq!(RoundingMode::from_ordinal(ordinal as i32), Ok(mode));
        }
    }

    #[test]
    fn rejects_unknown_ordinal() {
        assert!(RoundingMode::from_ordinal(-1).is_err());
        assert!(RoundingMode::from_ordinal(8).is_err());
    }

    #[test]
    fn display_is_mixed_case() {
        assert_eq!(RoundingMode::HalfDown.to_string(), "HalfDown");
    }
}
