use thiserror::Error;

/// Errors produced by spring math conversions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpringError {
    /// A conversion divided by a zero frequency response or stiffness.
    #[error("division by zero: {quantity} must not be zero")]
    DivisionByZero {
        /// The quantity that was zero.
        quantity: &'static str,
    },
    /// A parameter was outside the physically meaningful range.
    ///
    /// The core solver accepts any input; this is only reported by explicit
    /// validation and by the designer-facing helpers.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, SpringError>;
