//! Channel blending helpers shared by the color conversions.

/// Map a hue fraction to a channel intensity in `0.0..=1.0`.
///
/// `p` and `q` are the low and high anchors computed from saturation and
/// lightness; `t` is the hue fraction, wrapped into `[0, 1)` before the
/// standard piecewise ramp is applied.
#[must_use]
pub fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Blend two byte-range values by a `0.0..=1.0` ratio, rounding to nearest.
///
/// A ratio of 0 keeps `a`, a ratio of 1 yields `b`.
#[must_use]
pub fn mix_bytes(a: u8, b: u8, ratio: f64) -> u8 {
    #[expect(clippy::cast_possible_truncation, reason = "result lies between two bytes")]
    #[expect(clippy::cast_sign_loss, reason = "result lies between two bytes")]
    let mixed = (f64::from(a) + (f64::from(b) - f64::from(a)) * ratio).round() as u8;
    mixed
}
