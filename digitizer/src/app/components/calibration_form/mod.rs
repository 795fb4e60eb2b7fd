mod logic;
mod ui;

/// Input fields for the plot values at the calibration markers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CalibrationForm {
    x_min: String,
    x_max: String,
    y_min: String,
    y_max: String,
    x_log: bool,
    y_log: bool,
}
