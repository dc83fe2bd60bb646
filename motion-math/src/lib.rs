//! Spring motion math for physics-based UI animation.
//!
//! # Usage
//!
//! Build a closed-form response once and evaluate it as often as needed.
//!
//! ```
//! use motion_math::{SpringParameters, solve};
//!
//! let params = SpringParameters::default().damping_ratio(0.5).stiffness(100.0);
//! let response = solve(params.damping_ratio, params.stiffness);
//!
//! assert_eq!(response.value(0.0), 0.0);
//! assert!(response.maximum_overshoot().unwrap() > 1.0);
//! ```
//!
//! Designers usually think in bounce and duration rather than damping ratio
//! and stiffness; [`SpringParameters::from_design`] converts between the two.
//!
//! ```
//! use motion_math::SpringParameters;
//!
//! let params = SpringParameters::from_design(0.25, 0.5).unwrap();
//! assert!((params.damping_ratio - 0.75).abs() < 1e-6);
//! assert!((params.duration().unwrap() - 0.5).abs() < 1e-4);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod error;

pub mod estimate;
pub mod fling;
pub mod frequency;
pub mod graph;
pub mod numeric;
pub mod params;
pub mod solver;
pub mod stepper;

pub use error::{Result, SpringError};
pub use estimate::estimate_settling_duration;
pub use frequency::{
    angular_frequency, frequency_response_from_stiffness,
    natural_frequency_from_frequency_response, natural_frequency_from_stiffness,
    stiffness_from_frequency_response,
};
pub use params::{SpringDefaults, SpringParameters};
pub use solver::{DampingRegime, ResponseFunction, maximum_overshoot, solve};
