//! Floating-point helpers for the real-plane geometry

/// Round `value` to a multiple of `10^exp`.
///
/// The decimal shift is done on the exponent of the value's scientific
/// notation rather than by multiplying by a power of ten, so that values
/// such as `1.005` round on their printed digits. Halves round away from
/// zero, symmetrically for negative values. NaN and infinities pass through.
pub fn round_to_exp(value: f64, exp: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if exp == 0 {
        return value.round();
    }

    let shifted = shift_decimal(value, -exp).round();
    shift_decimal(shifted, exp)
}

/// Multiply by `10^by` through the printed exponent.
fn shift_decimal(value: f64, by: i32) -> f64 {
    let printed = format!("{:e}", value);
    let (mantissa, exponent) = match printed.split_once('e') {
        Some(parts) => parts,
        None => return value,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(e) => e,
        Err(_) => return value,
    };

    format!("{}e{}", mantissa, exponent + by)
        .parse()
        .unwrap_or(value)
}

/// Sort ascending and collapse exactly equal neighbours.
///
/// NaN values sort last and are kept.
pub fn sort_unique(values: &mut Vec<f64>) {
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| a == b);
}
