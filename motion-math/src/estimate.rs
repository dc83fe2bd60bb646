//! Settling time estimation.
//!
//! Underdamped springs are bounded by their exponential envelope, which gives
//! the estimate directly. Critically and overdamped springs approach the
//! target monotonically, so the crossing of the threshold is found with
//! Newton's method seeded at the envelope time.

use std::time::Duration;

use tracing::{trace, warn};

use crate::{
    params::SpringParameters,
    solver::{DampingRegime, ResponseFunction},
};

const MAX_ITERATIONS: usize = 1000;
const TIME_TOLERANCE: f32 = 1e-5;

/// Time after which a spring released from rest stays within `delta` of its
/// target.
///
/// `initial_displacement` is the distance from the target at release, in the
/// same units as `delta`. Returns `None` if the spring never settles, which
/// happens without damping, with zero stiffness or with negative damping, and
/// for a `delta` that is not positive.
pub fn estimate_settling_duration(
    params: SpringParameters,
    initial_displacement: f32,
    delta: f32,
) -> Option<Duration> {
    let response = params.response();
    let decay_rate = response.regime().decay_rate();
    if decay_rate.is_nan() || decay_rate <= 0.0 {
        return None;
    }
    if delta.is_nan() || delta <= 0.0 {
        return None;
    }

    let displacement = initial_displacement.abs();
    if displacement <= delta {
        return Some(Duration::ZERO);
    }
    // Threshold on the normalized response, where the full step is 1.
    let epsilon = delta / displacement;

    let seconds = match response.regime() {
        DampingRegime::Underdamped {
            c,
            coeff_a,
            coeff_b,
            ..
        } => (coeff_a.hypot(coeff_b) / epsilon).ln() / c,
        DampingRegime::CriticallyDamped { c, .. } | DampingRegime::Overdamped { c, .. } => {
            newton_crossing(&response, 1.0 - epsilon, -epsilon.ln() / c)
        }
    };

    if seconds.is_nan() {
        return None;
    }
    Duration::try_from_secs_f32(seconds.max(0.0)).ok()
}

/// Solves `response.value(t) == level` for a monotonic response.
fn newton_crossing(response: &ResponseFunction, level: f32, seed: f32) -> f32 {
    let mut t = seed;
    for iteration in 0..MAX_ITERATIONS {
        let error = response.value(t) - level;
        let slope = response.velocity(t);
        if slope.is_nan() || slope <= 0.0 || !error.is_finite() {
            warn!(iteration, t, slope, "settling estimate stalled");
            return t;
        }
        let next = (t - error / slope).max(0.0);
        trace!(iteration, t, next, error, "newton step");
        if (next - t).abs() <= TIME_TOLERANCE * next.max(1.0) {
            return next;
        }
        t = next;
    }
    warn!(t, "settling estimate did not converge");
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(params: SpringParameters, displacement: f32, delta: f32) -> f32 {
        estimate_settling_duration(params, displacement, delta)
            .unwrap()
            .as_secs_f32()
    }

    #[test]
    fn test_undamped_is_infinite() {
        assert_eq!(
            estimate_settling_duration(SpringParameters::new(0.0, 100.0), 1.0, 0.01),
            None
        );
        assert_eq!(
            estimate_settling_duration(SpringParameters::new(0.5, 0.0), 1.0, 0.01),
            None
        );
    }

    #[test]
    fn test_already_settled() {
        assert_eq!(
            estimate_settling_duration(SpringParameters::new(0.5, 100.0), 0.005, 0.01),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_non_positive_threshold_never_settles() {
        let params = SpringParameters::new(0.5, 100.0);
        assert_eq!(estimate_settling_duration(params, 1.0, -0.01), None);
        assert_eq!(estimate_settling_duration(params, 1.0, 0.0), None);
        assert_eq!(estimate_settling_duration(params, 1.0, f32::NAN), None);
        assert_eq!(estimate_settling_duration(params, f32::NAN, 0.01), None);
    }

    #[test]
    fn test_underdamped_envelope() {
        let t = seconds(SpringParameters::new(0.5, 100.0), 1.0, 0.01);
        // ln(√(1 + 1/3) / 0.01) / 5
        let expected = ((1.0_f32 + 1.0 / 3.0).sqrt() / 0.01).ln() / 5.0;
        assert!((t - expected).abs() < 1e-3);
    }

    #[test]
    fn test_critical_crossing_hits_threshold() {
        let params = SpringParameters::new(1.0, 100.0);
        let t = seconds(params, 1.0, 0.01);
        let error = 1.0 - params.response().value(t);
        assert!((error - 0.01).abs() < 1e-4, "error was {error}");
    }

    #[test]
    fn test_overdamped_settles_slower_than_critical() {
        let critical = seconds(SpringParameters::new(1.0, 100.0), 1.0, 0.01);
        let overdamped = seconds(SpringParameters::new(2.0, 100.0), 1.0, 0.01);
        assert!(overdamped > critical);

        let error = 1.0 - SpringParameters::new(2.0, 100.0).response().value(overdamped);
        assert!((error - 0.01).abs() < 1e-4, "error was {error}");
    }

    #[test]
    fn test_larger_displacement_takes_longer() {
        let params = SpringParameters::new(1.0, 160.0);
        let unit = seconds(params, 1.0, 0.01);
        let large = seconds(params, 100.0, 1.0);
        assert!((unit - large).abs() < 1e-3);
        assert!(seconds(params, 100.0, 0.01) > unit);
    }
}
