use anyhow::{Result, anyhow};
use glam::Vec2;
use motion_math::{
    SpringParameters, estimate_settling_duration,
    fling::{ExponentialDecay, FloatWindowDock, release_velocity},
    numeric::angle_degrees,
};

use crate::{commands::format_duration, output};

const SETTLE_THRESHOLD_PX: f32 = 0.5;

pub struct FlingOptions {
    pub position: Vec2,
    pub velocity: Vec2,
    pub container: Vec2,
    pub window: Vec2,
    pub velocity_factor: f32,
    pub spring: SpringParameters,
}

pub fn vec2(values: &[f32]) -> Result<Vec2> {
    match values {
        [x, y] => Ok(Vec2::new(*x, *y)),
        _ => Err(anyhow!("expected two values, got {}", values.len())),
    }
}

pub fn execute(options: FlingOptions) -> Result<()> {
    options.spring.validate()?;

    let velocity = release_velocity(options.velocity, options.velocity_factor);
    let projected = ExponentialDecay::default().target_offset(options.position, velocity);
    let resting = FloatWindowDock::new(options.container, options.window).resting_offset(projected);

    // Ignores the release velocity carried into the spring.
    let travel = (resting - options.position).abs().max_element();
    let settle = estimate_settling_duration(options.spring, travel, SETTLE_THRESHOLD_PX);

    output::status("Released", format!("at ({}, {})", options.position.x, options.position.y));
    output::properties([
        ("Release velocity", format!("({:.1}, {:.1})", velocity.x, velocity.y)),
        ("Direction", format!("{:.1}°", angle_degrees(Vec2::ZERO, velocity))),
        ("Projected target", format!("({:.1}, {:.1})", projected.x, projected.y)),
        ("Resting offset", format!("({:.1}, {:.1})", resting.x, resting.y)),
        ("Spring settles after", format_duration(settle)),
    ]);
    Ok(())
}
