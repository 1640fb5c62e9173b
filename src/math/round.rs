/// Splits `10^digits` into two factors so that neither overflows on its own.
///
/// `10^22` is the largest power of ten that is exactly representable as an
/// `f64`; anything beyond is carried by the second factor.
fn power_of_ten_factors(digits: i32) -> (f64, f64) {
    if digits > 22 {
        (10.0_f64.powi(digits - 22), 1e22)
    } else if digits < -22 {
        (10.0_f64.powi(digits + 22), 1e-22)
    } else {
        (10.0_f64.powi(digits), 1.0)
    }
}

/// Rounds `x` to `digits` decimal places, halves going up
/// (`floor(x * 10^digits + 0.5) / 10^digits`).
///
/// Negative `digits` round to tens, hundreds and so on.
pub fn round_half_up(x: f64, digits: i32) -> f64 {
    let (pow1, pow2) = power_of_ten_factors(digits);
    let y = (x * pow1) * pow2;
    let z = (y + 0.5).floor();
    (z / pow2) / pow1
}

/// Number of decimal digits needed to resolve `eps` next to `max`:
/// `floor(log10(max / eps))`, at least `min_digits` and, when given, at most
/// `max_digits`.
///
/// Ratios that are not finite or are below one carry no usable scale and
/// fall back to `min_digits`.
pub fn significant_digits(max: f64, eps: f64, min_digits: i32, max_digits: Option<i32>) -> i32 {
    let ratio = max / eps;
    if !ratio.is_finite() || ratio < 1.0 {
        return min_digits;
    }
    let digits = (ratio.log10().floor() as i32).max(min_digits);
    match max_digits {
        Some(cap) => digits.min(cap.max(min_digits)),
        None => digits,
    }
}
