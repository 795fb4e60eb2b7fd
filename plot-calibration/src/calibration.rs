//! The calibration state machine and the pixel to plot transform.
//!
//! Calibration points are recorded in the fixed order x-start, x-end,
//! y-start, y-end. Once all four are known, the axis ranges can be set and
//! the calibration becomes ready:
//!
//! ```text
//! Unset -> Collecting(1..=3) -> AwaitingRanges -> Ready
//!   ^                                               |
//!   +------------------- reset ---------------------+
//! ```

use crate::axis::{Axis, AxisRange};
use crate::point::{PixelPoint, PlotPoint};
use crate::CalibrationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalibrationSlot {
    XStart,
    XEnd,
    YStart,
    YEnd,
}

impl CalibrationSlot {
    /// All slots in recording order.
    pub const ALL: [CalibrationSlot; 4] = [
        CalibrationSlot::XStart,
        CalibrationSlot::XEnd,
        CalibrationSlot::YStart,
        CalibrationSlot::YEnd,
    ];

    pub fn index(&self) -> usize {
        match self {
            CalibrationSlot::XStart => 0,
            CalibrationSlot::XEnd => 1,
            CalibrationSlot::YStart => 2,
            CalibrationSlot::YEnd => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn axis(&self) -> Axis {
        match self {
            CalibrationSlot::XStart | CalibrationSlot::XEnd => Axis::X,
            CalibrationSlot::YStart | CalibrationSlot::YEnd => Axis::Y,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalibrationSlot::XStart => "X-axis start",
            CalibrationSlot::XEnd => "X-axis end",
            CalibrationSlot::YStart => "Y-axis start",
            CalibrationSlot::YEnd => "Y-axis end",
        }
    }
}

/// The four pixel positions marking the ends of both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationPoints {
    pub x_start: PixelPoint,
    pub x_end: PixelPoint,
    pub y_start: PixelPoint,
    pub y_end: PixelPoint,
}

impl CalibrationPoints {
    fn from_recorded(recorded: &[PixelPoint]) -> Option<Self> {
        match recorded {
            [x_start, x_end, y_start, y_end] => Some(Self {
                x_start: *x_start,
                x_end: *x_end,
                y_start: *y_start,
                y_end: *y_end,
            }),
            _ => None,
        }
    }

    pub fn get(&self, slot: CalibrationSlot) -> PixelPoint {
        match slot {
            CalibrationSlot::XStart => self.x_start,
            CalibrationSlot::XEnd => self.x_end,
            CalibrationSlot::YStart => self.y_start,
            CalibrationSlot::YEnd => self.y_end,
        }
    }

    /// Pixel distance between the two markers of the x-axis.
    pub fn x_span(&self) -> f64 {
        self.x_end.x - self.x_start.x
    }

    /// Pixel distance between the two markers of the y-axis.
    ///
    /// Pixel rows grow downward while plot values grow upward, hence start
    /// minus end.
    pub fn y_span(&self) -> f64 {
        self.y_start.y - self.y_end.y
    }

    /// Axes whose two markers share the same pixel coordinate.
    pub fn degenerate_axes(&self) -> Vec<Axis> {
        let mut axes = Vec::new();
        if self.x_span() == 0.0 {
            axes.push(Axis::X);
        }
        if self.y_span() == 0.0 {
            axes.push(Axis::Y);
        }
        axes
    }
}

/// A complete calibration: four pixel markers and the plot ranges they stand
/// for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    pub points: CalibrationPoints,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

impl Calibration {
    /// Convert a pixel position into plot coordinates.
    ///
    /// Each axis is handled independently. Positions outside of the markers
    /// extrapolate. If both markers of an axis are at the same pixel, the
    /// result for that axis is not finite.
    pub fn pixel_to_plot(&self, pixel: PixelPoint) -> PlotPoint {
        let tx = (pixel.x - self.points.x_start.x) / self.points.x_span();
        let ty = (self.points.y_start.y - pixel.y) / self.points.y_span();
        PlotPoint::new(self.x_range.value_at(tx), self.y_range.value_at(ty))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CalibrationState {
    #[default]
    Unset,
    /// Between one and three points are recorded.
    Collecting(Vec<PixelPoint>),
    /// All points are recorded, the axis ranges are missing.
    AwaitingRanges(CalibrationPoints),
    Ready(Calibration),
}

/// Drives the calibration state machine.
#[derive(Clone, Debug, Default)]
pub struct Calibrator {
    state: CalibrationState,
}

impl Calibrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalibrationState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, CalibrationState::Ready(_))
    }

    pub fn calibration(&self) -> Option<&Calibration> {
        match &self.state {
            CalibrationState::Ready(calibration) => Some(calibration),
            _ => None,
        }
    }

    /// The slot the next recorded point goes to, `None` once all four points
    /// are known.
    pub fn next_slot(&self) -> Option<CalibrationSlot> {
        match &self.state {
            CalibrationState::Unset => Some(CalibrationSlot::XStart),
            CalibrationState::Collecting(recorded) => CalibrationSlot::from_index(recorded.len()),
            CalibrationState::AwaitingRanges(_) | CalibrationState::Ready(_) => None,
        }
    }

    /// Recorded points together with their slots, in recording order.
    pub fn recorded_points(&self) -> Vec<(CalibrationSlot, PixelPoint)> {
        let points = match &self.state {
            CalibrationState::Unset => return Vec::new(),
            CalibrationState::Collecting(recorded) => {
                return CalibrationSlot::ALL
                    .into_iter()
                    .zip(recorded.iter().copied())
                    .collect();
            }
            CalibrationState::AwaitingRanges(points) => points,
            CalibrationState::Ready(calibration) => &calibration.points,
        };
        CalibrationSlot::ALL
            .into_iter()
            .map(|slot| (slot, points.get(slot)))
            .collect()
    }

    /// Store `pixel` in the next free slot and return that slot.
    ///
    /// Once all four points are known, further points are dropped and `None`
    /// is returned until the calibrator is reset.
    pub fn record_calibration_point(&mut self, pixel: PixelPoint) -> Option<CalibrationSlot> {
        let state = std::mem::take(&mut self.state);
        let (state, slot) = match state {
            CalibrationState::Unset => (
                CalibrationState::Collecting(vec![pixel]),
                Some(CalibrationSlot::XStart),
            ),
            CalibrationState::Collecting(mut recorded) => {
                let slot = CalibrationSlot::from_index(recorded.len());
                recorded.push(pixel);
                match CalibrationPoints::from_recorded(&recorded) {
                    Some(points) => (CalibrationState::AwaitingRanges(points), slot),
                    None => (CalibrationState::Collecting(recorded), slot),
                }
            }
            other @ (CalibrationState::AwaitingRanges(_) | CalibrationState::Ready(_)) => {
                (other, None)
            }
        };
        self.state = state;

        match slot {
            Some(slot) => log::debug!(
                "recorded calibration point {} at ({}, {})",
                slot.label(),
                pixel.x,
                pixel.y
            ),
            None => log::warn!(
                "all calibration points are recorded, ignoring point at ({}, {})",
                pixel.x,
                pixel.y
            ),
        }
        slot
    }

    /// Set the plot ranges of both axes, making the calibration ready.
    ///
    /// Calling this again on a ready calibration replaces the ranges and
    /// keeps the pixel markers.
    pub fn set_axis_ranges(
        &mut self,
        x_range: AxisRange,
        y_range: AxisRange,
    ) -> Result<(), CalibrationError> {
        let points = match &self.state {
            CalibrationState::Unset => {
                return Err(CalibrationError::IncompleteCalibration { recorded: 0 })
            }
            CalibrationState::Collecting(recorded) => {
                return Err(CalibrationError::IncompleteCalibration {
                    recorded: recorded.len(),
                })
            }
            CalibrationState::AwaitingRanges(points) => *points,
            CalibrationState::Ready(calibration) => calibration.points,
        };

        for axis in points.degenerate_axes() {
            log::warn!(
                "both {}-axis calibration points are at the same pixel, points cannot be converted on this axis",
                axis
            );
        }

        self.state = CalibrationState::Ready(Calibration {
            points,
            x_range,
            y_range,
        });
        log::info!(
            "calibration set: x {:?} [{}, {}], y {:?} [{}, {}]",
            x_range.scale(),
            x_range.min(),
            x_range.max(),
            y_range.scale(),
            y_range.min(),
            y_range.max()
        );
        Ok(())
    }

    pub fn pixel_to_plot(&self, pixel: PixelPoint) -> Result<PlotPoint, CalibrationError> {
        self.calibration()
            .map(|calibration| calibration.pixel_to_plot(pixel))
            .ok_or(CalibrationError::NotReady)
    }

    /// Forget all markers and ranges.
    pub fn reset(&mut self) {
        log::debug!("resetting calibration");
        self.state = CalibrationState::Unset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisScale;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn range(axis: Axis, min: f64, max: f64, scale: AxisScale) -> AxisRange {
        AxisRange::new(axis, min, max, scale).unwrap()
    }

    /// Calibrator with x markers at pixel x = 0 and 100 and y markers at
    /// pixel y = 100 (bottom) and 0 (top).
    fn collected() -> Calibrator {
        let mut calibrator = Calibrator::new();
        calibrator.record_calibration_point(PixelPoint::new(0.0, 100.0));
        calibrator.record_calibration_point(PixelPoint::new(100.0, 100.0));
        calibrator.record_calibration_point(PixelPoint::new(0.0, 100.0));
        calibrator.record_calibration_point(PixelPoint::new(0.0, 0.0));
        calibrator
    }

    fn ready(x_scale: AxisScale, x_max: f64) -> Calibrator {
        let mut calibrator = collected();
        let x_min = if x_scale.is_logarithmic() { 1.0 } else { 0.0 };
        calibrator
            .set_axis_ranges(
                range(Axis::X, x_min, x_max, x_scale),
                range(Axis::Y, 0.0, 10.0, AxisScale::Linear),
            )
            .unwrap();
        calibrator
    }

    #[test]
    fn test_slots_are_filled_in_order() {
        init();
        let mut calibrator = Calibrator::new();
        assert_eq!(calibrator.state(), &CalibrationState::Unset);
        assert_eq!(calibrator.next_slot(), Some(CalibrationSlot::XStart));

        let slots: Vec<_> = (0..4)
            .map(|i| calibrator.record_calibration_point(PixelPoint::new(i as f64, 0.0)))
            .collect();
        assert_eq!(
            slots,
            CalibrationSlot::ALL.map(Some).to_vec(),
            "slots must be assigned round-robin in fixed order"
        );
        assert_eq!(calibrator.next_slot(), None);
        match calibrator.state() {
            CalibrationState::AwaitingRanges(points) => {
                assert_eq!(points.x_start, PixelPoint::new(0.0, 0.0));
                assert_eq!(points.y_end, PixelPoint::new(3.0, 0.0));
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_collecting_state_tracks_progress() {
        init();
        let mut calibrator = Calibrator::new();
        calibrator.record_calibration_point(PixelPoint::new(1.0, 2.0));
        calibrator.record_calibration_point(PixelPoint::new(3.0, 4.0));
        assert_eq!(
            calibrator.state(),
            &CalibrationState::Collecting(vec![PixelPoint::new(1.0, 2.0), PixelPoint::new(3.0, 4.0)])
        );
        assert_eq!(calibrator.next_slot(), Some(CalibrationSlot::YStart));
        assert_eq!(
            calibrator.recorded_points(),
            vec![
                (CalibrationSlot::XStart, PixelPoint::new(1.0, 2.0)),
                (CalibrationSlot::XEnd, PixelPoint::new(3.0, 4.0)),
            ]
        );
    }

    #[test]
    fn test_extra_points_are_ignored() {
        init();
        let mut calibrator = collected();
        let before = calibrator.state().clone();
        assert_eq!(calibrator.record_calibration_point(PixelPoint::new(5.0, 5.0)), None);
        assert_eq!(calibrator.state(), &before);

        let mut calibrator = ready(AxisScale::Linear, 10.0);
        assert_eq!(calibrator.record_calibration_point(PixelPoint::new(5.0, 5.0)), None);
        assert!(calibrator.is_ready());
    }

    #[test]
    fn test_ranges_need_all_points() {
        init();
        let x = range(Axis::X, 0.0, 1.0, AxisScale::Linear);
        let y = range(Axis::Y, 0.0, 1.0, AxisScale::Linear);

        let mut calibrator = Calibrator::new();
        assert_eq!(
            calibrator.set_axis_ranges(x, y),
            Err(CalibrationError::IncompleteCalibration { recorded: 0 })
        );
        for _ in 0..3 {
            calibrator.record_calibration_point(PixelPoint::new(1.0, 1.0));
        }
        assert_eq!(
            calibrator.set_axis_ranges(x, y),
            Err(CalibrationError::IncompleteCalibration { recorded: 3 })
        );
        assert!(!calibrator.is_ready());
    }

    #[test]
    fn test_transform_before_ready_fails() {
        init();
        let calibrator = collected();
        assert_eq!(
            calibrator.pixel_to_plot(PixelPoint::new(1.0, 1.0)),
            Err(CalibrationError::NotReady)
        );
    }

    #[test]
    fn test_linear_x() {
        init();
        let calibrator = ready(AxisScale::Linear, 10.0);
        let plot = calibrator.pixel_to_plot(PixelPoint::new(50.0, 50.0)).unwrap();
        assert_eq!(plot.x, 5.0);
    }

    #[test]
    fn test_log_x() {
        init();
        let calibrator = ready(AxisScale::Logarithmic, 1000.0);
        let plot = calibrator.pixel_to_plot(PixelPoint::new(50.0, 50.0)).unwrap();
        assert!((plot.x - 10f64.powf(1.5)).abs() < 1e-9);
        assert!((plot.x - 31.6228).abs() < 1e-4);
    }

    #[test]
    fn test_y_axis_is_inverted() {
        init();
        let calibrator = ready(AxisScale::Linear, 10.0);
        let bottom = calibrator.pixel_to_plot(PixelPoint::new(0.0, 100.0)).unwrap();
        let top = calibrator.pixel_to_plot(PixelPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(bottom.y, 0.0);
        assert_eq!(top.y, 10.0);
    }

    #[test]
    fn test_extrapolation_is_not_clamped() {
        init();
        let calibrator = ready(AxisScale::Linear, 10.0);
        let plot = calibrator.pixel_to_plot(PixelPoint::new(150.0, 150.0)).unwrap();
        assert_eq!(plot.x, 15.0);
        assert_eq!(plot.y, -5.0);
        let plot = calibrator.pixel_to_plot(PixelPoint::new(-20.0, -50.0)).unwrap();
        assert_eq!(plot.x, -2.0);
        assert_eq!(plot.y, 15.0);
    }

    #[test]
    fn test_degenerate_span_is_not_finite() {
        init();
        let mut calibrator = Calibrator::new();
        // Both x markers at the same pixel.
        calibrator.record_calibration_point(PixelPoint::new(40.0, 100.0));
        calibrator.record_calibration_point(PixelPoint::new(40.0, 100.0));
        calibrator.record_calibration_point(PixelPoint::new(0.0, 100.0));
        calibrator.record_calibration_point(PixelPoint::new(0.0, 0.0));
        calibrator
            .set_axis_ranges(
                range(Axis::X, 0.0, 10.0, AxisScale::Linear),
                range(Axis::Y, 0.0, 10.0, AxisScale::Linear),
            )
            .unwrap();

        for px in [0.0, 40.0, 75.0] {
            let plot = calibrator.pixel_to_plot(PixelPoint::new(px, 50.0)).unwrap();
            assert!(!plot.x.is_finite(), "x = {} for pixel {}", plot.x, px);
            assert_eq!(plot.y, 5.0);
        }
    }

    #[test]
    fn test_recalibration_replaces_ranges() {
        init();
        let mut calibrator = ready(AxisScale::Linear, 10.0);
        calibrator
            .set_axis_ranges(
                range(Axis::X, 0.0, 100.0, AxisScale::Linear),
                range(Axis::Y, 0.0, 1.0, AxisScale::Linear),
            )
            .unwrap();
        let plot = calibrator.pixel_to_plot(PixelPoint::new(50.0, 0.0)).unwrap();
        assert_eq!(plot, PlotPoint::new(50.0, 1.0));
    }

    #[test]
    fn test_reset() {
        init();
        let mut calibrator = ready(AxisScale::Linear, 10.0);
        calibrator.reset();
        assert_eq!(calibrator.state(), &CalibrationState::Unset);
        assert!(calibrator.recorded_points().is_empty());
        assert_eq!(
            calibrator.record_calibration_point(PixelPoint::new(1.0, 1.0)),
            Some(CalibrationSlot::XStart)
        );
    }

    #[test]
    fn test_slot_helpers() {
        assert_eq!(CalibrationSlot::XEnd.next(), Some(CalibrationSlot::YStart));
        assert_eq!(CalibrationSlot::YEnd.next(), None);
        assert_eq!(CalibrationSlot::YStart.axis(), Axis::Y);
        assert_eq!(CalibrationSlot::from_index(4), None);
    }
}
