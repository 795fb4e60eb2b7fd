#![warn(clippy::all, rust_2018_idioms)]

//! Calibration of a plot image and conversion of clicked pixels into plot
//! coordinates.
//!
//! Four markers are placed on the image (start and end of the x-axis, start
//! and end of the y-axis) and the plot values at those markers are entered.
//! Both axes can be linear or logarithmic.
//!
//! ```
//! use plot_calibration::{Axis, AxisRange, AxisScale, ClickOutcome, DigitizerSession, PixelPoint};
//!
//! let mut session = DigitizerSession::new();
//! session.load_image(200, 100);
//! for (x, y) in [(0.0, 100.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)] {
//!     session.click(PixelPoint::new(x, y)).unwrap();
//! }
//! session
//!     .set_axis_ranges(
//!         AxisRange::parse(Axis::X, "0", "10", AxisScale::Linear).unwrap(),
//!         AxisRange::parse(Axis::Y, "1", "1000", AxisScale::Logarithmic).unwrap(),
//!     )
//!     .unwrap();
//!
//! match session.click(PixelPoint::new(50.0, 100.0)).unwrap() {
//!     ClickOutcome::Digitized { index, point } => {
//!         assert_eq!(index, 1);
//!         assert_eq!(point.x, 5.0);
//!         assert!((point.y - 1.0).abs() < 1e-12);
//!     }
//!     other => panic!("unexpected outcome {:?}", other),
//! }
//! ```

mod axis;
mod calibration;
mod error;
mod point;
mod session;

pub use axis::{Axis, AxisRange, AxisScale, Bound};
pub use calibration::{
    Calibration, CalibrationPoints, CalibrationSlot, CalibrationState, Calibrator,
};
pub use error::CalibrationError;
pub use point::{DigitizedPoint, PixelPoint, PlotPoint, TableRow};
pub use session::{ClickOutcome, DigitizerSession, Marker, MarkerKind};
