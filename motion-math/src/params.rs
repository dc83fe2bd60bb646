//! Spring parameters and their designer-friendly form.
//!
//! ## Usage
//!
//! Describe a spring either physically (damping ratio and stiffness) or the
//! way motion designers do (bounce and duration).

use std::time::Duration;

use derive_setters::Setters;

use crate::{
    Result, SpringError,
    estimate::estimate_settling_duration,
    frequency::{frequency_response_from_stiffness, stiffness_from_frequency_response},
    solver::{ResponseFunction, solve},
};

/// Common spring constants used by UI toolkits.
pub struct SpringDefaults;

impl SpringDefaults {
    /// Damping ratio for a very bouncy spring.
    pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;
    /// Damping ratio for a medium bouncy spring.
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    /// Damping ratio for a slightly bouncy spring.
    pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
    /// Critical damping: the fastest return without overshoot.
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

    /// Stiffness of a very fast spring.
    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    /// Stiffness of a medium-speed spring.
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    /// Stiffness between medium and low.
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
    /// Stiffness of a slow spring.
    pub const STIFFNESS_LOW: f32 = 200.0;
    /// Stiffness of a very slow spring.
    pub const STIFFNESS_VERY_LOW: f32 = 50.0;

    /// Distance from the target under which an animation counts as settled.
    pub const DISPLACEMENT_THRESHOLD: f32 = 0.01;
}

/// A damped harmonic oscillator with unit mass.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct SpringParameters {
    /// Dimensionless damping ratio `ζ`. Below 1 the spring oscillates.
    pub damping_ratio: f32,
    /// Spring constant `k`; the natural frequency is `√k`.
    pub stiffness: f32,
}

impl Default for SpringParameters {
    fn default() -> Self {
        Self {
            damping_ratio: SpringDefaults::DAMPING_RATIO_NO_BOUNCY,
            stiffness: SpringDefaults::STIFFNESS_MEDIUM,
        }
    }
}

impl SpringParameters {
    /// Creates parameters from a damping ratio and stiffness.
    pub const fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
        }
    }

    /// Creates parameters from a bounce in `[-1, 1]` and a duration in seconds.
    ///
    /// `damping_ratio = 1 - bounce` and the duration is the frequency
    /// response of the resulting stiffness. Negative bounce yields an
    /// overdamped spring.
    ///
    /// # Errors
    ///
    /// [`SpringError::InvalidParameter`] for a bounce outside `[-1, 1]`,
    /// [`SpringError::DivisionByZero`] for a zero duration.
    pub fn from_design(bounce: f32, duration: f32) -> Result<Self> {
        if !(-1.0..=1.0).contains(&bounce) {
            return Err(SpringError::InvalidParameter {
                name: "bounce",
                value: bounce,
            });
        }
        Ok(Self {
            damping_ratio: 1.0 - bounce,
            stiffness: stiffness_from_frequency_response(duration)?,
        })
    }

    /// Design-friendly bounce, `1 - damping_ratio`.
    pub fn bounce(&self) -> f32 {
        1.0 - self.damping_ratio
    }

    /// Design-friendly duration, which is the frequency response.
    pub fn duration(&self) -> Result<f32> {
        self.frequency_response()
    }

    /// Frequency response of this spring's stiffness.
    pub fn frequency_response(&self) -> Result<f32> {
        frequency_response_from_stiffness(self.stiffness)
    }

    /// Checks that the parameters describe a physical spring.
    ///
    /// The solver itself accepts anything; this is for input boundaries.
    pub fn validate(&self) -> Result<()> {
        if !self.damping_ratio.is_finite() || self.damping_ratio < 0.0 {
            return Err(SpringError::InvalidParameter {
                name: "damping_ratio",
                value: self.damping_ratio,
            });
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(SpringError::InvalidParameter {
                name: "stiffness",
                value: self.stiffness,
            });
        }
        Ok(())
    }

    /// Builds the closed-form response for these parameters.
    pub fn response(&self) -> ResponseFunction {
        solve(self.damping_ratio, self.stiffness)
    }

    /// Estimated time to settle from a unit displacement.
    ///
    /// `None` means the spring never settles (zero damping).
    pub fn estimated_duration(&self) -> Option<Duration> {
        estimate_settling_duration(*self, 1.0, SpringDefaults::DISPLACEMENT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_critically_damped() {
        let params = SpringParameters::default();
        assert_eq!(params.damping_ratio, 1.0);
        assert_eq!(params.stiffness, 1500.0);
        assert_eq!(params.bounce(), 0.0);
    }

    #[test]
    fn test_setters_chain() {
        let params = SpringParameters::default()
            .damping_ratio(0.25)
            .stiffness(100.0);
        assert_eq!(params, SpringParameters::new(0.25, 100.0));
    }

    #[test]
    fn test_design_round_trip() {
        let params = SpringParameters::from_design(0.3, 0.8).unwrap();
        assert!((params.bounce() - 0.3).abs() < 1e-6);
        assert!((params.duration().unwrap() - 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_negative_bounce_is_overdamped() {
        let params = SpringParameters::from_design(-0.5, 1.0).unwrap();
        assert_eq!(params.damping_ratio, 1.5);
    }

    #[test]
    fn test_design_rejects_out_of_range_bounce() {
        assert_eq!(
            SpringParameters::from_design(1.5, 1.0),
            Err(SpringError::InvalidParameter {
                name: "bounce",
                value: 1.5
            })
        );
        assert!(matches!(
            SpringParameters::from_design(0.0, 0.0),
            Err(SpringError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_validate() {
        assert!(SpringParameters::new(0.0, 1.0).validate().is_ok());
        assert!(SpringParameters::new(-0.1, 1.0).validate().is_err());
        assert!(SpringParameters::new(0.5, 0.0).validate().is_err());
        assert!(SpringParameters::new(0.5, f32::NAN).validate().is_err());
    }

    #[test]
    fn test_undamped_never_settles() {
        assert_eq!(SpringParameters::new(0.0, 100.0).estimated_duration(), None);
        assert!(SpringParameters::new(0.5, 100.0)
            .estimated_duration()
            .is_some());
    }
}
