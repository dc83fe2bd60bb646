//! Closed-form solution of the damped spring.
//!
//! Solves `x'' + 2ζω x' + ω² x = 0` for a spring released from rest one unit
//! below its target. The solution is built once per parameter set and then
//! evaluated analytically at any time, which is what animation curves and
//! response graphs need.

use tracing::debug;

use crate::{
    Result,
    frequency::{angular_frequency, frequency_response_from_stiffness, natural_frequency_from_stiffness},
};

const START: f32 = 0.0;
const TARGET: f32 = 1.0;
const INITIAL_VELOCITY: f32 = 0.0;

/// The three solution families of a damped spring, with their coefficients.
///
/// `c` is the decay rate `ω·ζ` and `a` the damped angular frequency
/// magnitude. `coeff_a`/`coeff_b` weigh the two homogeneous solutions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DampingRegime {
    /// `ζ < 1`: `1 + e^(-ct)(A cos(at) + B sin(at))`.
    Underdamped {
        /// Decay rate.
        c: f32,
        /// Damped oscillation frequency.
        a: f32,
        /// Cosine weight.
        coeff_a: f32,
        /// Sine weight.
        coeff_b: f32,
    },
    /// `ζ == 1` exactly: `1 + e^(-ct)(A + Bt)`.
    CriticallyDamped {
        /// Decay rate.
        c: f32,
        /// Constant weight.
        coeff_a: f32,
        /// Linear weight.
        coeff_b: f32,
    },
    /// `ζ > 1`: `1 + e^(-ct)(A cosh(at) + B sinh(at)) / a`.
    Overdamped {
        /// Decay rate.
        c: f32,
        /// Hyperbolic rate.
        a: f32,
        /// Hyperbolic cosine weight.
        coeff_a: f32,
        /// Hyperbolic sine weight.
        coeff_b: f32,
    },
}

impl DampingRegime {
    /// Selects the regime for `damping_ratio` and computes its coefficients.
    ///
    /// Critical damping is matched by exact float equality, so ratios a hair
    /// away from 1 fall into the neighbouring regimes.
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        let w = natural_frequency_from_stiffness(stiffness);
        let z = damping_ratio;
        let s = START - TARGET;
        let c = w * z;
        let a = angular_frequency(w, z);

        if z < 1.0 {
            Self::Underdamped {
                c,
                a,
                coeff_a: s,
                coeff_b: (INITIAL_VELOCITY + c * s) / a,
            }
        } else if z == 1.0 {
            Self::CriticallyDamped {
                c,
                coeff_a: s,
                coeff_b: INITIAL_VELOCITY + c * s,
            }
        } else {
            Self::Overdamped {
                c,
                a,
                coeff_a: a * s,
                coeff_b: INITIAL_VELOCITY + c * s,
            }
        }
    }

    /// Decay rate `c = ω·ζ` shared by all regimes.
    pub fn decay_rate(&self) -> f32 {
        match *self {
            Self::Underdamped { c, .. }
            | Self::CriticallyDamped { c, .. }
            | Self::Overdamped { c, .. } => c,
        }
    }

    fn slope(&self, t: f32) -> f32 {
        match *self {
            Self::Underdamped {
                c,
                a,
                coeff_a,
                coeff_b,
            } => {
                (-c * t).exp()
                    * ((a * coeff_b - c * coeff_a) * (a * t).cos()
                        - (c * coeff_b + a * coeff_a) * (a * t).sin())
            }
            Self::CriticallyDamped {
                c,
                coeff_a,
                coeff_b,
            } => (-c * t).exp() * (coeff_b - c * (coeff_a + coeff_b * t)),
            Self::Overdamped {
                c,
                a,
                coeff_a,
                coeff_b,
            } => {
                let slow = -(c - a) * 0.5 * (coeff_a + coeff_b) * (-(c - a) * t).exp();
                let fast = -(c + a) * 0.5 * (coeff_a - coeff_b) * (-(c + a) * t).exp();
                (slow + fast) / a
            }
        }
    }

    fn evaluate(&self, t: f32) -> f32 {
        match *self {
            Self::Underdamped {
                c,
                a,
                coeff_a,
                coeff_b,
            } => TARGET + (-c * t).exp() * (coeff_a * (a * t).cos() + coeff_b * (a * t).sin()),
            Self::CriticallyDamped {
                c,
                coeff_a,
                coeff_b,
            } => TARGET + (-c * t).exp() * (coeff_a + coeff_b * t),
            Self::Overdamped {
                c,
                a,
                coeff_a,
                coeff_b,
            } => {
                // e^(-ct)(A cosh(at) + B sinh(at)) split into its two decaying
                // exponentials; cosh alone overflows f32 long before e^(-ct)
                // reaches zero.
                let slow = 0.5 * (coeff_a + coeff_b) * (-(c - a) * t).exp();
                let fast = 0.5 * (coeff_a - coeff_b) * (-(c + a) * t).exp();
                TARGET + (slow + fast) / a
            }
        }
    }
}

/// Normalized position of a spring over time.
///
/// Stateless: evaluating the same `t` twice gives the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseFunction {
    damping_ratio: f32,
    stiffness: f32,
    regime: DampingRegime,
}

impl ResponseFunction {
    /// Normalized position at `t` seconds: `0.0` at release, `1.0` settled.
    pub fn value(&self, t: f32) -> f32 {
        self.regime.evaluate(t)
    }

    /// Position relative to the target: `-1.0` at release, `0.0` settled.
    pub fn displacement(&self, t: f32) -> f32 {
        self.value(t) - TARGET
    }

    /// Rate of change of [`Self::value`] at `t`, in units per second.
    pub fn velocity(&self, t: f32) -> f32 {
        self.regime.slope(t)
    }

    /// The solution family chosen for this spring.
    pub fn regime(&self) -> DampingRegime {
        self.regime
    }

    /// Damping ratio this response was built from.
    pub fn damping_ratio(&self) -> f32 {
        self.damping_ratio
    }

    /// Stiffness this response was built from.
    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    /// Peak normalized value; see [`maximum_overshoot`].
    pub fn maximum_overshoot(&self) -> Result<f32> {
        maximum_overshoot(self.stiffness, self.damping_ratio, |t| self.value(t))
    }
}

/// Builds the closed-form response for a spring released from rest.
#[tracing::instrument(level = "trace")]
pub fn solve(damping_ratio: f32, stiffness: f32) -> ResponseFunction {
    let regime = DampingRegime::new(damping_ratio, stiffness);
    debug!(?regime, "solved spring response");
    ResponseFunction {
        damping_ratio,
        stiffness,
        regime,
    }
}

/// Peak normalized value reached by `response`.
///
/// An undamped spring swings to `2.0`; critically and overdamped springs
/// never pass the target, so `1.0`. Otherwise `response` is evaluated at the
/// first peak, `frequency_response / (2·√(1 − ζ²))`.
///
/// # Errors
///
/// [`crate::SpringError::DivisionByZero`] when an underdamped spring has zero
/// stiffness.
pub fn maximum_overshoot<F>(stiffness: f32, damping_ratio: f32, response: F) -> Result<f32>
where
    F: Fn(f32) -> f32,
{
    if damping_ratio == 0.0 {
        return Ok(2.0);
    }
    if damping_ratio >= 1.0 {
        return Ok(1.0);
    }
    let frequency_response = frequency_response_from_stiffness(stiffness)?;
    let t = frequency_response / (2.0 * (1.0 - damping_ratio * damping_ratio).sqrt());
    Ok(response(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_selection() {
        assert!(matches!(
            DampingRegime::new(0.5, 100.0),
            DampingRegime::Underdamped { .. }
        ));
        assert!(matches!(
            DampingRegime::new(1.0, 100.0),
            DampingRegime::CriticallyDamped { .. }
        ));
        assert!(matches!(
            DampingRegime::new(1.5, 100.0),
            DampingRegime::Overdamped { .. }
        ));
    }

    #[test]
    fn test_critical_damping_uses_exact_equality() {
        let below = 1.0 - f32::EPSILON;
        let above = 1.0 + f32::EPSILON;
        assert!(matches!(
            DampingRegime::new(below, 100.0),
            DampingRegime::Underdamped { .. }
        ));
        assert!(matches!(
            DampingRegime::new(above, 100.0),
            DampingRegime::Overdamped { .. }
        ));
    }

    #[test]
    fn test_underdamped_coefficients() {
        let DampingRegime::Underdamped {
            c,
            a,
            coeff_a,
            coeff_b,
        } = DampingRegime::new(0.5, 100.0)
        else {
            panic!("expected underdamped regime");
        };
        assert!((c - 5.0).abs() < 1e-5);
        assert!((a - 8.660_254).abs() < 1e-4);
        assert_eq!(coeff_a, -1.0);
        assert!((coeff_b + 0.577_350).abs() < 1e-4);
    }

    #[test]
    fn test_critical_coefficients() {
        assert_eq!(
            DampingRegime::new(1.0, 100.0),
            DampingRegime::CriticallyDamped {
                c: 10.0,
                coeff_a: -1.0,
                coeff_b: -10.0,
            }
        );
    }

    #[test]
    fn test_overdamped_coefficients() {
        let DampingRegime::Overdamped {
            c,
            a,
            coeff_a,
            coeff_b,
        } = DampingRegime::new(2.0, 100.0)
        else {
            panic!("expected overdamped regime");
        };
        assert_eq!(c, 20.0);
        assert!((a - 10.0 * 3.0_f32.sqrt()).abs() < 1e-4);
        assert_eq!(coeff_a, -a);
        assert_eq!(coeff_b, -20.0);
    }

    #[test]
    fn test_response_is_restartable() {
        let response = solve(0.3, 250.0);
        let first = response.value(0.42);
        let _ = response.value(3.0);
        assert_eq!(response.value(0.42), first);
    }

    #[test]
    fn test_undamped_oscillates_between_zero_and_two() {
        let response = solve(0.0, 100.0);
        // Half a period of ω = 10.
        let half_period = std::f32::consts::PI / 10.0;
        assert!((response.value(half_period) - 2.0).abs() < 1e-4);
        assert!(response.value(2.0 * half_period).abs() < 1e-4);
    }

    #[test]
    fn test_overshoot_shortcuts() {
        let never = |_: f32| -> f32 { panic!("response must not be evaluated") };
        assert_eq!(maximum_overshoot(100.0, 0.0, never), Ok(2.0));
        assert_eq!(maximum_overshoot(100.0, 1.0, never), Ok(1.0));
        assert_eq!(maximum_overshoot(100.0, 1.5, never), Ok(1.0));
    }

    #[test]
    fn test_overshoot_matches_analytic_peak() {
        let response = solve(0.5, 100.0);
        let peak = response.maximum_overshoot().unwrap();
        // 1 + e^(-ζπ/√(1-ζ²))
        let expected = 1.0 + (-0.5 * std::f32::consts::PI / 0.75_f32.sqrt()).exp();
        assert!((peak - expected).abs() < 1e-4);
    }

    #[test]
    fn test_overshoot_with_zero_stiffness_fails() {
        assert!(maximum_overshoot(0.0, 0.5, |t| t).is_err());
    }
}
