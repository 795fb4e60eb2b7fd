use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CalibrationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Which end of an axis range a user input belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min => write!(f, "min"),
            Bound::Max => write!(f, "max"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisScale {
    #[default]
    Linear,
    Logarithmic,
}

impl AxisScale {
    pub fn from_log_flag(is_logarithmic: bool) -> Self {
        if is_logarithmic {
            Self::Logarithmic
        } else {
            Self::Linear
        }
    }

    pub fn is_logarithmic(&self) -> bool {
        *self == Self::Logarithmic
    }
}

/// Plot values at the two calibration points of one axis.
///
/// `min` is the value at the start marker and `max` the value at the end
/// marker. A reversed range (`min > max`) is allowed, it describes a
/// descending axis. An `AxisRange` can only be built through [`AxisRange::new`]
/// or [`AxisRange::parse`], so a logarithmic range always has positive bounds.
/// Deserializing goes through the same checks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAxisRange")]
pub struct AxisRange {
    axis: Axis,
    min: f64,
    max: f64,
    scale: AxisScale,
}

#[derive(Deserialize)]
struct RawAxisRange {
    axis: Axis,
    min: f64,
    max: f64,
    scale: AxisScale,
}

impl TryFrom<RawAxisRange> for AxisRange {
    type Error = CalibrationError;

    fn try_from(raw: RawAxisRange) -> Result<Self, Self::Error> {
        Self::new(raw.axis, raw.min, raw.max, raw.scale)
    }
}

impl AxisRange {
    pub fn new(axis: Axis, min: f64, max: f64, scale: AxisScale) -> Result<Self, CalibrationError> {
        for (bound, value) in [(Bound::Min, min), (Bound::Max, max)] {
            if !value.is_finite() {
                return Err(CalibrationError::NonFiniteBound { axis, bound });
            }
            if scale.is_logarithmic() && value <= 0.0 {
                return Err(CalibrationError::NonPositiveLogBound { axis, bound, value });
            }
        }
        if min == max {
            return Err(CalibrationError::EmptyRange { axis, value: min });
        }
        Ok(Self {
            axis,
            min,
            max,
            scale,
        })
    }

    /// Build a range from the raw text of the bound input fields.
    pub fn parse(
        axis: Axis,
        min: &str,
        max: &str,
        scale: AxisScale,
    ) -> Result<Self, CalibrationError> {
        let min = parse_bound(axis, Bound::Min, min)?;
        let max = parse_bound(axis, Bound::Max, max)?;
        Self::new(axis, min, max, scale)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn scale(&self) -> AxisScale {
        self.scale
    }

    /// Plot value at the relative position `t` between the two calibration
    /// points (`t = 0` is the start marker, `t = 1` the end marker).
    ///
    /// `t` is not clamped, values outside of `[0, 1]` extrapolate. On a
    /// logarithmic axis the interpolation is linear in log10 space.
    pub fn value_at(&self, t: f64) -> f64 {
        match self.scale {
            AxisScale::Linear => (self.max - self.min).mul_add(t, self.min),
            AxisScale::Logarithmic => {
                let log_min = self.min.log10();
                let log_max = self.max.log10();
                10f64.powf((log_max - log_min).mul_add(t, log_min))
            }
        }
    }
}

fn parse_bound(axis: Axis, bound: Bound, input: &str) -> Result<f64, CalibrationError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| CalibrationError::InvalidNumber {
            axis,
            bound,
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_linear_value_at_midpoint() {
        let range = AxisRange::new(Axis::X, 0.0, 10.0, AxisScale::Linear).unwrap();
        assert_eq!(range.value_at(0.5), 5.0);
        assert_eq!(range.value_at(0.0), 0.0);
        assert_eq!(range.value_at(1.0), 10.0);
    }

    #[test]
    fn test_log_value_at_midpoint() {
        let range = AxisRange::new(Axis::X, 1.0, 1000.0, AxisScale::Logarithmic).unwrap();
        let value = range.value_at(0.5);
        assert!((value - 10f64.powf(1.5)).abs() < EPS, "got {value}");
        assert!((value - 31.6228).abs() < 1e-4);
    }

    #[test]
    fn test_value_at_extrapolates() {
        let range = AxisRange::new(Axis::Y, 0.0, 10.0, AxisScale::Linear).unwrap();
        assert_eq!(range.value_at(1.5), 15.0);
        assert_eq!(range.value_at(-0.5), -5.0);

        let range = AxisRange::new(Axis::Y, 1.0, 100.0, AxisScale::Logarithmic).unwrap();
        assert!((range.value_at(1.5) - 1000.0).abs() < 1e-6);
        assert!((range.value_at(-0.5) - 0.1).abs() < EPS);
    }

    #[test]
    fn test_reversed_range_is_accepted() {
        let range = AxisRange::new(Axis::X, 10.0, 0.0, AxisScale::Linear).unwrap();
        assert_eq!(range.value_at(0.25), 7.5);
    }

    #[test]
    fn test_parse_trims_input() {
        let range = AxisRange::parse(Axis::X, " 1e-3 ", "2.5\n", AxisScale::Linear).unwrap();
        assert_eq!(range.min(), 1e-3);
        assert_eq!(range.max(), 2.5);
        assert_eq!(range.scale(), AxisScale::Linear);
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = AxisRange::parse(Axis::Y, "0", "ten", AxisScale::Linear).unwrap_err();
        assert_eq!(
            err,
            CalibrationError::InvalidNumber {
                axis: Axis::Y,
                bound: Bound::Max,
                input: "ten".to_string(),
            }
        );

        let err = AxisRange::parse(Axis::X, "", "1", AxisScale::Linear).unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::InvalidNumber {
                bound: Bound::Min,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        let err = AxisRange::parse(Axis::X, "NaN", "1", AxisScale::Linear).unwrap_err();
        assert_eq!(
            err,
            CalibrationError::NonFiniteBound {
                axis: Axis::X,
                bound: Bound::Min
            }
        );
        let err = AxisRange::parse(Axis::X, "0", "inf", AxisScale::Linear).unwrap_err();
        assert_eq!(
            err,
            CalibrationError::NonFiniteBound {
                axis: Axis::X,
                bound: Bound::Max
            }
        );
    }

    #[test]
    fn test_log_scale_needs_positive_bounds() {
        let err = AxisRange::new(Axis::X, 0.0, 100.0, AxisScale::Logarithmic).unwrap_err();
        assert_eq!(
            err,
            CalibrationError::NonPositiveLogBound {
                axis: Axis::X,
                bound: Bound::Min,
                value: 0.0
            }
        );
        let err = AxisRange::new(Axis::Y, 1.0, -5.0, AxisScale::Logarithmic).unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::NonPositiveLogBound {
                axis: Axis::Y,
                bound: Bound::Max,
                ..
            }
        ));
        // The same bounds are fine on a linear axis.
        assert!(AxisRange::new(Axis::X, 0.0, 100.0, AxisScale::Linear).is_ok());
    }

    #[test]
    fn test_empty_range_is_rejected() {
        let err = AxisRange::new(Axis::Y, 3.0, 3.0, AxisScale::Linear).unwrap_err();
        assert_eq!(
            err,
            CalibrationError::EmptyRange {
                axis: Axis::Y,
                value: 3.0
            }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AxisRange::parse(Axis::X, "abc", "1", AxisScale::Linear).unwrap_err();
        assert_eq!(err.to_string(), "x-axis min 'abc' is not a number");
        let err = AxisRange::new(Axis::Y, -1.0, 1.0, AxisScale::Logarithmic).unwrap_err();
        assert_eq!(
            err.to_string(),
            "y-axis min must be positive on a logarithmic axis, got -1"
        );
    }

    #[test]
    fn test_deserialize_validates_bounds() {
        let err = serde_json::from_str::<AxisRange>(
            r#"{"axis":"X","min":0.0,"max":10.0,"scale":"Logarithmic"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("must be positive"), "{err}");

        let err = serde_json::from_str::<AxisRange>(
            r#"{"axis":"Y","min":3.0,"max":3.0,"scale":"Linear"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("the range is empty"), "{err}");

        let range: AxisRange = serde_json::from_str(
            r#"{"axis":"Y","min":1.0,"max":100.0,"scale":"Logarithmic"}"#,
        )
        .unwrap();
        assert_eq!(
            range,
            AxisRange::new(Axis::Y, 1.0, 100.0, AxisScale::Logarithmic).unwrap()
        );
    }
}
