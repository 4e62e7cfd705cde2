/// Quadratic ease-in/ease-out over normalized progress.
///
/// Input is clamped to `[0, 1]`. The curve hits `0`, `0.5` and `1` exactly at
/// the start, midpoint and end.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
