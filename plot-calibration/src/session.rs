use crate::axis::AxisRange;
use crate::calibration::{CalibrationSlot, Calibrator};
use crate::point::{DigitizedPoint, PixelPoint, PlotPoint, TableRow};
use crate::CalibrationError;

/// What a click on the image did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// The click became the calibration point of `slot`.
    CalibrationPoint(CalibrationSlot),
    /// The click was converted and appended to the point history. `index` is
    /// 1-based, as shown in the table.
    Digitized { index: usize, point: PlotPoint },
    /// All calibration points are recorded but the axis ranges are not set
    /// yet, so the click is dropped.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Calibration(CalibrationSlot),
    DataPoint,
}

/// Something the image surface should draw, in image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub at: PixelPoint,
}

/// Everything a digitizing session knows: the loaded image, the calibration
/// and the digitized points.
#[derive(Clone, Debug, Default)]
pub struct DigitizerSession {
    image_size: Option<[usize; 2]>,
    calibrator: Calibrator,
    points: Vec<DigitizedPoint>,
    /// Index into `points` from which on data markers are drawn. Points
    /// collected on a previous image stay in the history without a marker.
    first_marked_point: usize,
}

impl DigitizerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly loaded image. The calibration belongs to the old
    /// image and is reset, the point history is kept.
    pub fn load_image(&mut self, width: usize, height: usize) {
        log::info!("loaded image with {}x{} pixels", width, height);
        self.image_size = Some([width, height]);
        self.calibrator.reset();
        self.first_marked_point = self.points.len();
    }

    pub fn image_size(&self) -> Option<[usize; 2]> {
        self.image_size
    }

    pub fn calibrator(&self) -> &Calibrator {
        &self.calibrator
    }

    pub fn is_ready(&self) -> bool {
        self.calibrator.is_ready()
    }

    /// Handle a click on the image at `pixel`.
    ///
    /// Until the calibration is ready, clicks record calibration points.
    /// Afterwards they are digitized. A click that does not convert to a
    /// finite plot value (both markers of an axis at the same pixel) is
    /// rejected and not stored.
    pub fn click(&mut self, pixel: PixelPoint) -> Result<ClickOutcome, CalibrationError> {
        if !self.calibrator.is_ready() {
            return Ok(match self.calibrator.record_calibration_point(pixel) {
                Some(slot) => ClickOutcome::CalibrationPoint(slot),
                None => ClickOutcome::Ignored,
            });
        }

        let plot = self.calibrator.pixel_to_plot(pixel)?;
        if !plot.is_finite() {
            return Err(CalibrationError::NonFiniteResult {
                x: pixel.x,
                y: pixel.y,
            });
        }
        self.points.push(DigitizedPoint { pixel, plot });
        let index = self.points.len();
        log::debug!("digitized point {}: ({}, {})", index, plot.x, plot.y);
        Ok(ClickOutcome::Digitized { index, point: plot })
    }

    pub fn set_axis_ranges(
        &mut self,
        x_range: AxisRange,
        y_range: AxisRange,
    ) -> Result<(), CalibrationError> {
        self.calibrator.set_axis_ranges(x_range, y_range)
    }

    /// Start the calibration over, keeping the digitized points.
    pub fn reset_calibration(&mut self) {
        self.calibrator.reset();
    }

    /// Drop the image, the calibration and all digitized points.
    pub fn clear_all(&mut self) {
        log::info!("clearing session");
        self.image_size = None;
        self.calibrator.reset();
        self.points.clear();
        self.first_marked_point = 0;
    }

    pub fn points(&self) -> &[DigitizedPoint] {
        &self.points
    }

    /// The point history as table rows, numbered from 1.
    pub fn rows(&self) -> Vec<TableRow> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, point)| TableRow {
                index: i + 1,
                x: point.plot.x,
                y: point.plot.y,
            })
            .collect()
    }

    /// Markers to draw on the current image: the recorded calibration points
    /// followed by the points digitized on this image.
    pub fn markers(&self) -> Vec<Marker> {
        let calibration = self
            .calibrator
            .recorded_points()
            .into_iter()
            .map(|(slot, at)| Marker {
                kind: MarkerKind::Calibration(slot),
                at,
            });
        let data = self.points[self.first_marked_point..]
            .iter()
            .map(|point| Marker {
                kind: MarkerKind::DataPoint,
                at: point.pixel,
            });
        calibration.chain(data).collect()
    }
}
