use std::f64::consts::TAU;

/// Convert an `usize` (e.g. an index) into a `f64`.
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

/// Convert a (color channel) value into an `u8`.
///
/// The value is rounded and saturated into the range `0..=255`. `NaN` maps to 0.
#[must_use]
pub fn f64_to_u8(value: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let newval = value.round().clamp(0.0, 255.0) as u8;
    newval
}

/// Convert a (non-negative) size into an `u32`.
///
/// The value is rounded up and saturated into the range of `u32`. `NaN` maps to 0.
#[must_use]
pub fn f64_to_u32(value: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let newval = value.ceil() as u32;
    newval
}

/// Normalize an angle (in radians) into the interval `[0, 2π)`.
#[must_use]
pub fn normalize_radians(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly 2π for tiny negative inputs
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}
