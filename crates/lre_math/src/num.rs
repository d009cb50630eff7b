//! Guards for numerically degenerate quantities.
//!
//! Degenerate inputs are never reported as errors. Instead, each operation
//! that would divide by something close to zero substitutes a fixed
//! replacement value, keeping numeric code free of error paths.

/// Lengths, divisors and determinants below this threshold are treated as
/// zero.
pub const NEAR_ZERO: f32 = 1e-6;

/// Whether the absolute value of `value` is below [`NEAR_ZERO`].
#[inline]
pub fn is_near_zero(value: f32) -> bool {
    value.abs() < NEAR_ZERO
}

/// Returns `divisor`, or `1.0` if its absolute value is below
/// [`NEAR_ZERO`].
#[inline]
pub fn guarded_divisor(divisor: f32) -> f32 {
    if is_near_zero(divisor) { 1.0 } else { divisor }
}

/// Returns `length`, or `1.0` if it does not exceed [`NEAR_ZERO`].
///
/// Unlike [`guarded_divisor`], the threshold itself counts as degenerate.
#[inline]
pub fn guarded_length(length: f32) -> f32 {
    if length <= NEAR_ZERO { 1.0 } else { length }
}

/// Clamps `t` to `[0, 1]`. A NaN parameter becomes `0.0`.
#[inline]
pub fn clamped_unit_parameter(t: f32) -> f32 {
    let t = if 1.0 < t { 1.0 } else { t };
    if 0.0 < t { t } else { 0.0 }
}
