//! Conversions between stiffness, natural frequency and frequency response.
//!
//! Frequency response is a duration-like reparameterization of stiffness:
//! `stiffness = (2π / frequency_response)²`. It is what the design-friendly
//! "duration" control of a spring edits.

use std::f32::consts::TAU;

use crate::{Result, SpringError};

/// Natural frequency `ω = √stiffness`.
///
/// Returns `0.0` for zero stiffness.
pub fn natural_frequency_from_stiffness(stiffness: f32) -> f32 {
    stiffness.sqrt()
}

/// Natural frequency `ω = 2π / frequency_response`.
///
/// # Errors
///
/// Returns [`SpringError::DivisionByZero`] when `frequency_response` is zero.
pub fn natural_frequency_from_frequency_response(frequency_response: f32) -> Result<f32> {
    if frequency_response == 0.0 {
        return Err(SpringError::DivisionByZero {
            quantity: "frequency response",
        });
    }
    Ok(TAU / frequency_response)
}

/// Stiffness for a given frequency response, `(2π / frequency_response)²`.
///
/// # Errors
///
/// Returns [`SpringError::DivisionByZero`] when `frequency_response` is zero.
pub fn stiffness_from_frequency_response(frequency_response: f32) -> Result<f32> {
    natural_frequency_from_frequency_response(frequency_response).map(|w| w * w)
}

/// Frequency response for a given stiffness, `2π / √stiffness`.
///
/// # Errors
///
/// Returns [`SpringError::DivisionByZero`] when `stiffness` is zero, since the
/// natural frequency is then zero.
pub fn frequency_response_from_stiffness(stiffness: f32) -> Result<f32> {
    let natural_frequency = natural_frequency_from_stiffness(stiffness);
    if natural_frequency == 0.0 {
        return Err(SpringError::DivisionByZero {
            quantity: "stiffness",
        });
    }
    Ok(TAU / natural_frequency)
}

/// Damped angular frequency magnitude, `ω·√|1 − ζ²|`.
///
/// The absolute value folds the underdamped oscillation frequency and the
/// overdamped hyperbolic rate into one magnitude. Callers pick the
/// trigonometric or hyperbolic form from `damping_ratio` themselves.
pub fn angular_frequency(natural_frequency: f32, damping_ratio: f32) -> f32 {
    natural_frequency * (1.0 - damping_ratio * damping_ratio).abs().sqrt()
}
