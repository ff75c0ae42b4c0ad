//! Fixed-precision rounding shared by every reported ratio

/// Decimal places kept for every float written to a result file
pub const DIGITS: i32 = 5;

/// Round `value` to [`DIGITS`] decimal places.
#[inline]
pub fn round_digits(value: f64) -> f64 {
    let scale = 10f64.powi(DIGITS);
    (value * scale).round() / scale
}

/// Divide and round, reporting an empty denominator instead of producing NaN.
pub(crate) fn ratio(
    numerator: usize,
    denominator: usize,
    unit: impl FnOnce() -> String,
    denominator_name: &'static str,
) -> crate::Result<f64> {
    if denominator == 0 {
        return Err(crate::ComputationError::division_by_zero(
            unit(),
            denominator_name,
        ));
    }
    Ok(round_digits(numerator as f64 / denominator as f64))
}
