//! Fling projection and docking for draggable floating windows.
//!
//! ## Usage
//!
//! On release, project where a fling would coast to with [`ExponentialDecay`],
//! then pick the resting place with [`FloatWindowDock`] and animate there with
//! a spring, carrying the release velocity over.

use std::time::Duration;

use derive_setters::Setters;
use glam::Vec2;

/// Friction scale of the exponential decay curve.
const FRICTION_SCALE: f32 = -4.2;

/// Velocity that decays exponentially over time.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct ExponentialDecay {
    /// Multiplier on the base friction; larger stops sooner.
    pub friction_multiplier: f32,
    /// Speed under which the motion counts as stopped.
    pub abs_velocity_threshold: f32,
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self {
            friction_multiplier: 1.0,
            abs_velocity_threshold: 0.1,
        }
    }
}

impl ExponentialDecay {
    fn friction(&self) -> f32 {
        FRICTION_SCALE * self.friction_multiplier.max(f32::EPSILON)
    }

    /// Value reached `elapsed` after release.
    pub fn value_at(&self, initial_value: f32, initial_velocity: f32, elapsed: Duration) -> f32 {
        let friction = self.friction();
        let travel = initial_velocity / friction;
        initial_value - travel + travel * (friction * elapsed.as_secs_f32()).exp()
    }

    /// Time until the velocity drops under the threshold.
    ///
    /// Returns `None` when the motion never slows that far, which is the case
    /// for a zero threshold.
    pub fn duration(&self, initial_velocity: f32) -> Option<Duration> {
        let speed = initial_velocity.abs();
        if speed <= self.abs_velocity_threshold {
            return Some(Duration::ZERO);
        }
        if self.abs_velocity_threshold <= 0.0 {
            return None;
        }
        let seconds = (self.abs_velocity_threshold / speed).ln() / self.friction();
        Duration::try_from_secs_f32(seconds).ok()
    }

    /// Value the motion comes to rest at, the asymptote of the decay.
    pub fn target_value(&self, initial_value: f32, initial_velocity: f32) -> f32 {
        if initial_velocity.abs() <= self.abs_velocity_threshold {
            return initial_value;
        }
        initial_value - initial_velocity / self.friction()
    }

    /// [`Self::target_value`] applied per axis.
    pub fn target_offset(&self, initial: Vec2, velocity: Vec2) -> Vec2 {
        Vec2::new(
            self.target_value(initial.x, velocity.x),
            self.target_value(initial.y, velocity.y),
        )
    }
}

/// Scales a release velocity by how strongly it should carry into the fling.
///
/// The factor is clamped to `[0, 1]`. Non-finite velocities count as no fling.
pub fn release_velocity(velocity: Vec2, velocity_response_factor: f32) -> Vec2 {
    if !velocity.is_finite() || !velocity_response_factor.is_finite() {
        return Vec2::ZERO;
    }
    velocity * velocity_response_factor.clamp(0.0, 1.0)
}

/// Docking rules of a floating window anchored at the bottom-right corner
/// of its container.
///
/// Offsets are measured from that corner, so they are zero or negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatWindowDock {
    /// Size of the area the window moves in.
    pub container: Vec2,
    /// Size of the window itself.
    pub window: Vec2,
}

impl FloatWindowDock {
    /// Creates docking rules for a window inside a container.
    pub fn new(container: Vec2, window: Vec2) -> Self {
        Self { container, window }
    }

    /// Resting offset for a projected fling target.
    ///
    /// Horizontally the window snaps to whichever edge is closer to the
    /// target; vertically it stays where it lands, inside the container.
    pub fn resting_offset(&self, target: Vec2) -> Vec2 {
        let distance = (self.container - self.window).max(Vec2::ZERO);

        let x = if target.x < -distance.x * 0.5 {
            -distance.x
        } else {
            0.0
        };
        let y = target.y.clamp(-distance.y, 0.0);
        Vec2::new(x, y)
    }
}
