/// Move an 8-bit channel towards `to` by `factor` (0.0-1.0)
///
/// The step is `ceil(|to - from| * factor)`, clamped to the remaining
/// distance. Any positive factor moves at least one unit; `1.0` lands on
/// `to` exactly. Factors outside `0.0..=1.0` are clamped and NaN counts as 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lerp8(from: u8, to: u8, factor: f32) -> u8 {
    if from == to {
        return from;
    }
    let factor = if factor >= 1.0 {
        1.0
    } else if factor > 0.0 {
        factor
    } else {
        0.0
    };

    let delta = i16::from(to) - i16::from(from);
    let distance = delta.unsigned_abs();
    let step = (libm::ceilf(f32::from(distance) * factor) as u16).min(distance) as u8;

    if delta > 0 { from + step } else { from - step }
}

/// Scale `value` by `numerator / denominator`, rounding down
///
/// Returns `value` unchanged for a zero denominator.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_ratio(value: u8, numerator: u32, denominator: u32) -> u8 {
    if denominator == 0 {
        return value;
    }
    let scaled = (value as u64 * numerator as u64) / denominator as u64;
    if scaled > u8::MAX as u64 {
        u8::MAX
    } else {
        scaled as u8
    }
}
