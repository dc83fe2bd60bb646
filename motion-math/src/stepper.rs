//! Frame-by-frame spring integration.
//!
//! The closed form in [`crate::solver`] assumes a release from rest. A live
//! animation gets retargeted mid-flight and keeps its velocity, so it is
//! advanced numerically instead.

use crate::params::SpringParameters;

/// Largest step taken per update, so a stalled frame cannot blow up.
const MAX_STEP_SECONDS: f32 = 0.05;
/// Position and velocity error under which the spring snaps to rest.
const REST_THRESHOLD: f32 = 0.01;

/// One-dimensional spring animated toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStepper {
    value: f32,
    velocity: f32,
    target: f32,
}

impl SpringStepper {
    /// Creates a spring at rest at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Value the spring is heading to.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Jumps to `value` and stops.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Retargets the spring, keeping its current velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Adds to the current velocity, e.g. the release velocity of a drag.
    pub fn impulse(&mut self, velocity: f32) {
        self.velocity += velocity;
    }

    /// Advances the spring by `dt` seconds.
    pub fn update(&mut self, dt: f32, params: SpringParameters) {
        let dt = dt.clamp(0.0, MAX_STEP_SECONDS);
        let stiffness = params.stiffness.max(0.0);
        if stiffness == 0.0 {
            self.snap_to(self.target);
            return;
        }

        let damping_ratio = params.damping_ratio.max(0.0);
        let damping = 2.0 * damping_ratio * stiffness.sqrt();
        let displacement = self.value - self.target;
        let acceleration = -stiffness * displacement - damping * self.velocity;

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if !self.is_animating() {
            self.snap_to(self.target);
        }
    }

    /// Whether the spring is still visibly moving.
    pub fn is_animating(&self) -> bool {
        (self.value - self.target).abs() >= REST_THRESHOLD || self.velocity.abs() >= REST_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    const FRAME: f32 = 1.0 / 240.0;

    #[test]
    fn test_new_is_at_rest() {
        let spring = SpringStepper::new(3.0);
        assert!(!spring.is_animating());
        assert_eq!(spring.target(), 3.0);
    }

    #[test]
    fn test_zero_stiffness_snaps() {
        let mut spring = SpringStepper::new(0.0);
        spring.set_target(5.0);
        spring.update(FRAME, SpringParameters::new(0.5, 0.0));
        assert_eq!(spring.value(), 5.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_tracks_closed_form() {
        let params = SpringParameters::new(0.5, 100.0);
        let response = solve(params.damping_ratio, params.stiffness);
        let mut spring = SpringStepper::new(0.0);
        spring.set_target(1.0);

        let mut t = 0.0;
        for _ in 0..240 {
            spring.update(FRAME, params);
            t += FRAME;
            assert!(
                (spring.value() - response.value(t)).abs() < 0.03,
                "diverged at t = {t}"
            );
        }
    }

    #[test]
    fn test_settles_on_target() {
        let params = SpringParameters::new(0.8, 160.0);
        let mut spring = SpringStepper::new(1.0);
        spring.set_target(1.5);
        spring.impulse(-4.0);
        for _ in 0..2400 {
            spring.update(FRAME, params);
        }
        assert_eq!(spring.value(), 1.5);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_large_frames_are_clamped() {
        let params = SpringParameters::new(1.0, 10_000.0);
        let mut spring = SpringStepper::new(0.0);
        spring.set_target(1.0);
        spring.update(10.0, params);
        assert!(spring.value().is_finite());
    }
}
