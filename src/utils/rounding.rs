//! Decimal rounding for display figures

/// Round half away from zero to `decimals` places (2.45 -> 2.5 at one place).
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
