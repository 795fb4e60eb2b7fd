mod calibration_form;
mod canvas;
mod points_table;
mod preview;

pub use calibration_form::CalibrationForm;
pub use canvas::{decode_image, Canvas, CanvasResponse};
pub use points_table::PointsTable;
pub use preview::Preview;
