//! Canonical `BigDecimal` text rendering (spec §4.4).
//!
//! `adjusted = (digit_count(u) - 1) - scale` decides the branch: `scale ==
//! 0` prints the bare integer, `scale > 0 && adjusted >= -6` inserts a
//! decimal point into the plain digit string, and everything else
//! (including every negative scale, which can never satisfy `scale > 0`)
//! renders in scientific notation. This matches `java.math.BigDecimal`'s
//! `toString`, the documented lineage of this format.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use crate::big_integer::magnitude_to_digits;
use crate::decimal::BigDecimal;

pub(crate) fn to_canonical_string(d: &BigDecimal) -> String {
    let scale = d.scale;
    let sign = if d.unscaled.sign() < 0 { "-" } else { "" };

    if scale == 0 {
        return format!("{}", d.unscaled);
    }

    let digits = magnitude_to_digits(d.unscaled.magnitude_limbs());
    let digit_str: String = digits.iter().map(|&v| (b'0' + v) as char).collect();
    let digit_count = digit_str.len() as i64;
    let adjusted = (digit_count - 1) - scale as i64;

    if scale > 0 && adjusted >= -6 {
        let scale_usize = scale as usize;
        let mut out = String::with_capacity(digit_str.len() + 2);
        out.push_str(sign);
        if scale_usize >= digit_str.len() {
            out.push_str("0.");
            for _ in 0..(scale_usize - digit_str.len()) {
                out.push('0');
            }
            out.push_str(&digit_str);
        } else {
            let split = digit_str.len() - scale_usize;
            out.push_str(&digit_str[..split]);
            out.push('.');
            out.push_str(&digit_str[split..]);
        }
        return out;
    }

    let mut out = String::with_capacity(digit_str.len() + 8);
    out.push_str(sign);
    out.push_str(&digit_str[..1]);
    if digit_str.len() > 1 {
        out.push('.');
        out.push_str(&digit_str[1..]);
    }
    out.push('E');
    out.push_str(&adjusted.to_string());
    out
}
