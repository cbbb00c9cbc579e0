//! Cent rounding for settled money amounts

/// Round to two decimal places, half away from zero
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
