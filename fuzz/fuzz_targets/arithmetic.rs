#![no_main]

use arbitrary_decimal::{BigDecimal, RoundingMode};

#[derive(Debug, arbitrary::Arbitrary)]
struct Data {
    a: BigDecimal,
    b: BigDecimal,
}

libfuzzer_sys::fuzz_target!(|data: Data| {
    let fun = || {
        let _ = data.a.checked_add(&data.b).ok()?;
        let _ = data.a.checked_sub(&data.b).ok()?;
        let _ = data.a.checked_multiply(&data.b).ok()?;
        let _ = data.a.checked_divide(&data.b, RoundingMode::HalfUp).ok()?;
        let _ = data.a.compare_to(&data.b);
        Some(())
    };
    let _ = fun();
});
