#![no_main]

use arbitrary_decimal::{BigDecimal, MathContext, RoundingMode};

#[derive(Debug, arbitrary::Arbitrary)]
struct Data<'a> {
    parse_value: &'a str,
    from_f64_value: f64,
    unscaled: i64,
    scale: i32,
    set_scale_target: i32,
}

libfuzzer_sys::fuzz_target!(|data: Data<'_>| {
    let _ = BigDecimal::parse(data.parse_value);
    let _ = BigDecimal::from_f64(data.from_f64_value);
    let mc = MathContext::new(data.scale.unsigned_abs() as i32);

    let d = BigDecimal::from_i64_with_scale(data.unscaled, data.scale);
    let _ = d.set_scale_with_mode(data.set_scale_target, RoundingMode::HalfUp);
    if let Ok(mc) = mc {
        let _ = d.round(&mc);
    }
});
