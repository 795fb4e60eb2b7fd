use thiserror::Error;

use crate::axis::{Axis, Bound};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalibrationError {
    #[error("{axis}-axis {bound} '{input}' is not a number")]
    InvalidNumber {
        axis: Axis,
        bound: Bound,
        input: String,
    },

    #[error("{axis}-axis {bound} must be a finite number")]
    NonFiniteBound { axis: Axis, bound: Bound },

    #[error("{axis}-axis {bound} must be positive on a logarithmic axis, got {value}")]
    NonPositiveLogBound { axis: Axis, bound: Bound, value: f64 },

    #[error("{axis}-axis min and max are both {value}, the range is empty")]
    EmptyRange { axis: Axis, value: f64 },

    #[error("calibration needs all four axis points, only {recorded} recorded")]
    IncompleteCalibration { recorded: usize },

    #[error("calibration is not set")]
    NotReady,

    #[error("point at pixel ({x}, {y}) does not map to a finite plot value")]
    NonFiniteResult { x: f64, y: f64 },
}
