use anyhow::{Result, bail};
use motion_math::{SpringParameters, stepper::SpringStepper};
use tracing::debug;

use crate::output;

/// Frames after which an animation that has not settled is cut off.
const MAX_FRAMES: u32 = 10_000;

pub fn execute(params: SpringParameters, from: f32, to: f32, fps: u32) -> Result<()> {
    if fps == 0 {
        bail!("fps must be positive");
    }
    params.validate()?;

    let dt = 1.0 / fps as f32;
    let mut spring = SpringStepper::new(from);
    spring.set_target(to);

    output::status("Animating", format!("{from} -> {to} at {fps} fps"));
    let mut peak = from;
    let mut frame = 0;
    while spring.is_animating() {
        if frame >= MAX_FRAMES {
            output::warn(format!("spring still moving after {MAX_FRAMES} frames"));
            break;
        }
        spring.update(dt, params);
        frame += 1;
        if (spring.value() - from).abs() > (peak - from).abs() {
            peak = spring.value();
        }
        debug!(frame, value = spring.value(), velocity = spring.velocity(), "frame");
        println!("{:>5} {:>10.4}", frame, spring.value());
    }

    output::status(
        "Settled",
        format!("after {frame} frames ({:.3}s), peak {peak:.4}", frame as f32 * dt),
    );
    Ok(())
}
