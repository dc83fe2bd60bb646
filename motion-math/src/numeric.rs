//! Small numeric helpers shared by the graph and the playground.

use glam::Vec2;

/// Rounds `value` to `decimals` decimal places, with ties rounded up.
pub fn round(value: f32, decimals: i32) -> f32 {
    let multiplier = 10_f32.powi(decimals);
    (value * multiplier + 0.5).floor() / multiplier
}

/// Position of `value` inside `[start, stop]`, as a fraction.
///
/// Not clamped; values outside the range map outside `[0, 1]`.
pub fn normalize(start: f32, stop: f32, value: f32) -> f32 {
    (value - start) / (stop - start)
}

/// Linear interpolation between `start` and `stop`.
pub fn lerp(start: f32, stop: f32, fraction: f32) -> f32 {
    start + (stop - start) * fraction
}

/// Direction from `start` to `end` in degrees, within `[0, 360)`.
pub fn angle_degrees(start: Vec2, end: Vec2) -> f32 {
    let delta = end - start;
    let angle = delta.y.atan2(delta.x).to_degrees();
    if angle < 0.0 { angle + 360.0 } else { angle }
}
