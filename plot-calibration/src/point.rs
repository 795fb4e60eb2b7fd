use serde::Serialize;

/// A position in image pixel space: origin at the top-left corner, `y` grows
/// downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position in the coordinate system of the digitized plot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A clicked point, converted once and never changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DigitizedPoint {
    /// Where the point was clicked, kept to redraw its marker.
    pub pixel: PixelPoint,
    pub plot: PlotPoint,
}

/// One line of the points table and of the exported document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TableRow {
    /// 1-based position in the point history.
    #[serde(rename = "Point")]
    pub index: usize,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}
